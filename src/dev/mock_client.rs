/// In-memory match authority for development and testing
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

use super::ManualClock;
use crate::data_provider::MatchAuthority;
use crate::error::ApiError;
use crate::fixtures;
use crate::live::clock::TimeSource;
use crate::types::{
    EventId, Match, MatchEvent, MatchId, MatchResult, MatchStatus, NewEvent, RosterEntry, TeamId,
};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// First id handed out to events created through the mock
const FIRST_EVENT_ID: EventId = 1000;

#[derive(Default)]
struct Store {
    matches: HashMap<MatchId, Match>,
    events: Vec<MatchEvent>,
    rosters: HashMap<TeamId, Vec<RosterEntry>>,
    results: HashMap<MatchId, MatchResult>,
    next_event_id: EventId,
}

/// Mock authority that keeps matches and events in memory instead of
/// calling the real server.
///
/// It enforces the same rules as the server (404 for unknown ids, 409 for
/// illegal transitions) and records every call so tests can check which
/// requests went out and in what order.
pub struct MockAuthority {
    key: String,
    time: Arc<dyn TimeSource>,
    store: Mutex<Store>,
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, VecDeque<ApiError>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn not_found(what: &str) -> ApiError {
    ApiError::Rejected {
        status: 404,
        message: Some(format!("{} not found", what)),
    }
}

fn conflict(message: String) -> ApiError {
    ApiError::Rejected {
        status: 409,
        message: Some(message),
    }
}

impl MockAuthority {
    /// Create an empty mock authority
    pub fn new(time: Arc<dyn TimeSource>) -> Self {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        info!("Creating MockAuthority #{} for development mode", instance);
        Self {
            key: format!("mock://{}", instance),
            time,
            store: Mutex::new(Store {
                next_event_id: FIRST_EVENT_ID,
                ..Default::default()
            }),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Mock seeded with the fixture matches, with a manual clock at kickoff
    pub fn with_fixtures() -> Self {
        Self::with_fixtures_and_clock(Arc::new(ManualClock::new(fixtures::kickoff())))
    }

    /// Mock seeded with the fixture matches and rosters
    pub fn with_fixtures_and_clock(time: Arc<dyn TimeSource>) -> Self {
        let mock = Self::new(time);
        mock.insert_match(fixtures::scheduled_match());
        mock.insert_match(fixtures::in_progress_match(fixtures::kickoff()));
        mock.insert_roster(fixtures::HOME_TEAM_ID, fixtures::home_roster());
        mock.insert_roster(fixtures::AWAY_TEAM_ID, fixtures::away_roster());
        for event in fixtures::sample_events() {
            mock.insert_event(event);
        }
        mock
    }

    pub fn insert_match(&self, game: Match) {
        lock(&self.store).matches.insert(game.id, game);
    }

    pub fn insert_roster(&self, team_id: TeamId, roster: Vec<RosterEntry>) {
        lock(&self.store).rosters.insert(team_id, roster);
    }

    /// Store an event directly, as if another operator had recorded it
    pub fn insert_event(&self, event: MatchEvent) {
        let mut store = lock(&self.store);
        store.next_event_id = store.next_event_id.max(event.id + 1);
        store.events.push(event);
    }

    /// Make the next call to `operation` fail with `error`
    pub fn fail_next(&self, operation: &'static str, error: ApiError) {
        lock(&self.failures)
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Operation names in the order they were called
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        lock(&self.calls).iter().filter(|c| *c == operation).count()
    }

    pub fn registered_result(&self, match_id: MatchId) -> Option<MatchResult> {
        lock(&self.store).results.get(&match_id).cloned()
    }

    pub fn stored_match(&self, match_id: MatchId) -> Option<Match> {
        lock(&self.store).matches.get(&match_id).cloned()
    }

    /// Log the call and hand out any injected failure
    fn begin(&self, operation: &'static str) -> Result<(), ApiError> {
        lock(&self.calls).push(operation.to_string());
        let injected = lock(&self.failures)
            .get_mut(operation)
            .and_then(|queue| queue.pop_front());
        match injected {
            Some(error) => {
                info!("MockAuthority: failing {} with {}", operation, error);
                Err(error)
            }
            None => Ok(()),
        }
    }

    /// Apply a status transition allowed only from `from`
    fn transition(
        &self,
        match_id: MatchId,
        from: MatchStatus,
        to: MatchStatus,
    ) -> Result<Match, ApiError> {
        let now = self.time.now();
        let mut store = lock(&self.store);
        let game = store
            .matches
            .get_mut(&match_id)
            .ok_or_else(|| not_found("Match"))?;
        if game.status != from {
            return Err(conflict(format!("Match is {}", game.status)));
        }
        game.status = to;
        if to == MatchStatus::InProgress {
            game.started_at = Some(now);
        }
        Ok(game.clone())
    }
}

#[async_trait]
impl MatchAuthority for MockAuthority {
    fn instance_key(&self) -> String {
        self.key.clone()
    }

    async fn get_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.begin("get_match")?;
        info!("MockAuthority: Returning match {}", match_id);
        lock(&self.store)
            .matches
            .get(&match_id)
            .cloned()
            .ok_or_else(|| not_found("Match"))
    }

    async fn events(&self, match_id: MatchId) -> Result<Vec<MatchEvent>, ApiError> {
        self.begin("events")?;
        let store = lock(&self.store);
        if !store.matches.contains_key(&match_id) {
            return Err(not_found("Match"));
        }
        let events: Vec<MatchEvent> = store
            .events
            .iter()
            .filter(|e| e.match_id == match_id)
            .cloned()
            .collect();
        info!("MockAuthority: Returning {} events for match {}", events.len(), match_id);
        Ok(events)
    }

    async fn roster(&self, team_id: TeamId) -> Result<Vec<RosterEntry>, ApiError> {
        self.begin("roster")?;
        info!("MockAuthority: Returning roster for team {}", team_id);
        lock(&self.store)
            .rosters
            .get(&team_id)
            .cloned()
            .ok_or_else(|| not_found("Team"))
    }

    async fn start_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.begin("start_match")?;
        info!("MockAuthority: Starting match {}", match_id);
        self.transition(match_id, MatchStatus::Scheduled, MatchStatus::InProgress)
    }

    async fn register_result(&self, result: &MatchResult) -> Result<MatchResult, ApiError> {
        self.begin("register_result")?;
        info!(
            "MockAuthority: Registering {}-{} for match {}",
            result.home_score, result.away_score, result.match_id
        );
        let mut store = lock(&self.store);
        let status = store
            .matches
            .get(&result.match_id)
            .map(|m| m.status)
            .ok_or_else(|| not_found("Match"))?;
        if status != MatchStatus::InProgress {
            return Err(conflict(format!("Match is {}", status)));
        }
        store.results.insert(result.match_id, result.clone());
        Ok(result.clone())
    }

    async fn finish_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.begin("finish_match")?;
        info!("MockAuthority: Finishing match {}", match_id);
        if !lock(&self.store).results.contains_key(&match_id) {
            return Err(conflict("Register a result before finishing the match".to_string()));
        }
        self.transition(match_id, MatchStatus::InProgress, MatchStatus::Finished)
    }

    async fn cancel_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.begin("cancel_match")?;
        info!("MockAuthority: Cancelling match {}", match_id);
        self.transition(match_id, MatchStatus::Scheduled, MatchStatus::Cancelled)
    }

    async fn create_event(&self, event: &NewEvent) -> Result<MatchEvent, ApiError> {
        self.begin("create_event")?;
        let mut store = lock(&self.store);
        let status = store
            .matches
            .get(&event.match_id)
            .map(|m| m.status)
            .ok_or_else(|| not_found("Match"))?;
        if status.is_terminal() {
            return Err(conflict(format!("Match is {}", status)));
        }
        let id = store.next_event_id;
        store.next_event_id += 1;
        let created = event.clone().persisted(id);
        info!("MockAuthority: Created event {} for match {}", id, event.match_id);
        store.events.push(created.clone());
        Ok(created)
    }

    async fn delete_event(&self, event_id: EventId) -> Result<(), ApiError> {
        self.begin("delete_event")?;
        let mut store = lock(&self.store);
        let position = store
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or_else(|| not_found("Event"))?;
        store.events.remove(position);
        info!("MockAuthority: Deleted event {}", event_id);
        Ok(())
    }
}
