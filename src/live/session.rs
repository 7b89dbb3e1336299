use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use super::action::{Action, Effect};
use super::clock::{ClockTicker, TimeSource};
use super::effects::RemoteEffects;
use super::lifecycle;
use super::reducer::reduce;
use super::state::SessionState;
use super::validation::EventDraft;
use crate::data_provider::MatchAuthority;
use crate::error::{ApiError, LiveError, LiveResult};
use crate::types::{EventId, MatchEvent, MatchId, MatchResult, Score};

/// A live viewing session over one match
///
/// The session is the exclusive owner of the working copy of the match and
/// its event log. It is responsible for:
/// - Dispatching actions through the reducer
/// - Executing remote effects and feeding their confirmations back
/// - Running the clock ticker while the match is in progress
///
/// Operations take `&mut self`, so they are applied strictly in submission
/// order and never overlap.
pub struct LiveSession {
    state: SessionState,
    effects: RemoteEffects,
    time: Arc<dyn TimeSource>,
    tick_period: Duration,
    ticker: Option<ClockTicker>,

    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl LiveSession {
    /// Load match, events and rosters and open a session.
    ///
    /// Fails without creating anything if any of the fetches fails.
    pub async fn load(
        authority: Arc<dyn MatchAuthority>,
        time: Arc<dyn TimeSource>,
        match_id: MatchId,
        tick_period: Duration,
    ) -> LiveResult<Self> {
        let effects = RemoteEffects::new(authority);
        let snapshot = effects.load_snapshot(match_id).await?;
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut session = Self {
            state: SessionState::new(snapshot),
            effects,
            time,
            tick_period,
            ticker: None,
            action_tx,
            action_rx,
        };
        let now = session.time.now();
        session.dispatch(Action::Tick(now));
        if session.state.clock_minute.is_some() {
            session.start_clock();
        }
        info!(
            "SESSION: opened match {} ({})",
            session.state.game.id, session.state.game.status
        );
        Ok(session)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn clock_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| t.is_running())
    }

    /// Result matching the current score, for a finish
    pub fn result_from_score(&self, notes: Option<String>) -> MatchResult {
        lifecycle::result_from_score(&self.state.game, self.state.score, notes)
    }

    pub async fn start(&mut self) -> LiveResult<()> {
        self.run(Action::Start).await
    }

    /// Record an event. A draft without a minute takes the clock value now.
    pub async fn add_event(&mut self, draft: EventDraft) -> LiveResult<MatchEvent> {
        let now = self.time.now();
        self.dispatch(Action::Tick(now));
        self.run(Action::AddEvent(draft)).await?;
        self.state
            .last_recorded
            .and_then(|id| self.state.events.get(id))
            .cloned()
            .ok_or_else(|| ApiError::MalformedReply("created event was not logged".to_string()).into())
    }

    pub async fn delete_event(&mut self, event_id: EventId) -> LiveResult<()> {
        self.run(Action::DeleteEvent(event_id)).await
    }

    /// Register the result, then finish the match
    pub async fn finish(&mut self, result: MatchResult) -> LiveResult<()> {
        self.run(Action::Finish(result)).await
    }

    pub async fn cancel(&mut self) -> LiveResult<()> {
        self.run(Action::Cancel).await
    }

    /// Replace the working copy with the authority's current one
    pub async fn refresh(&mut self) -> LiveResult<()> {
        let action = self.effects.reload(self.state.game.id).await;
        self.run(action).await
    }

    /// Wait for the next queued action (clock ticks) and apply it.
    ///
    /// Returns false once the action channel is closed.
    pub async fn next_action(&mut self) -> bool {
        match self.action_rx.recv().await {
            Some(action) => {
                let effect = self.dispatch(action);
                self.execute_local(effect);
                true
            }
            None => false,
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            let effect = self.dispatch(action);
            self.execute_local(effect);
            count += 1;
        }
        count
    }

    /// End the session, stopping the clock
    pub fn close(mut self) {
        self.stop_clock();
        info!("SESSION: closed match {}", self.state.game.id);
    }

    /// Run the reducer on one action
    ///
    /// Uses mem::take to avoid cloning the state.
    fn dispatch(&mut self, action: Action) -> Effect {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        effect
    }

    /// Dispatch an action and follow every effect until the chain settles.
    ///
    /// Remote calls are awaited in order; their confirmations are dispatched
    /// before anything else is looked at.
    async fn run(&mut self, action: Action) -> LiveResult<()> {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            match self.dispatch(action) {
                Effect::Remote(call) => {
                    let confirmation = self.effects.execute(call).await;
                    queue.push_back(confirmation);
                }
                Effect::Rejected(error) => return Err(error),
                other => self.execute_local(other),
            }
        }
        Ok(())
    }

    /// Execute effects that need no remote call
    fn execute_local(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::StartClock => self.start_clock(),
            Effect::StopClock => self.stop_clock(),
            Effect::Remote(call) => {
                debug!("EFFECT: dropping remote call outside an operation: {:?}", call)
            }
            Effect::Rejected(error) => debug!("EFFECT: {}", error),
        }
    }

    fn start_clock(&mut self) {
        if self.clock_running() {
            return;
        }
        self.ticker = Some(ClockTicker::spawn(
            self.time.clone(),
            self.tick_period,
            self.action_tx.clone(),
        ));
    }

    fn stop_clock(&mut self) {
        // Dropping the ticker aborts its task
        self.ticker = None;
    }
}
