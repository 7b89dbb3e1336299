use super::action::{Operation, Snapshot};
use super::event_log::EventLog;
use super::score::{self, DisciplineSummary};
use super::validation::Rosters;
use crate::types::{EventId, Match, MatchResult, Score};

/// Message shown to the operator after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
}

/// Root session state - single source of truth for one live match
///
/// `score` and `discipline` are projections of `events`; they are
/// recomputed by [`SessionState::recompute`] after every change to the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Working copy of the match
    pub game: Match,
    pub events: EventLog,
    pub rosters: Rosters,

    /// Derived
    pub score: Score,
    pub discipline: DisciplineSummary,

    /// Displayed clock minute; None while the clock is idle
    pub clock_minute: Option<u32>,

    /// Remote operation awaiting confirmation
    pub in_flight: Option<Operation>,

    /// Result confirmed by the authority but not yet followed by a finish
    pub registered_result: Option<MatchResult>,

    /// Event id of the latest confirmed creation
    pub last_recorded: Option<EventId>,

    /// Result frozen at finish time
    pub final_result: Option<MatchResult>,

    pub notification: Option<Notification>,
}

impl SessionState {
    pub fn new(snapshot: Snapshot) -> Self {
        let mut state = Self::default();
        state.apply_snapshot(snapshot);
        state
    }

    /// Replace the working copy with a fresh one from the authority
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.game = snapshot.game;
        self.events = EventLog::new(snapshot.events);
        self.rosters = snapshot.rosters;
        if !self.game.status.is_terminal() {
            self.final_result = None;
        }
        self.recompute();
    }

    /// Rebuild every projection of the event log
    pub fn recompute(&mut self) {
        let home = self.game.home_team.id;
        let away = self.game.away_team.id;
        self.score = score::score(&self.events, home, away);
        self.discipline = score::discipline(&self.events, home, away);
    }

    /// Score to display: the frozen result once finished, otherwise the live tally
    pub fn display_score(&self) -> Score {
        match &self.final_result {
            Some(result) => Score::new(result.home_score, result.away_score),
            None => self.score,
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            is_error: false,
        });
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            is_error: true,
        });
    }

    /// Player name from either roster, falling back to the id
    pub fn player_label(&self, player_id: i64) -> String {
        match self.rosters.player(player_id) {
            Some(entry) => match entry.shirt_number {
                Some(number) => format!("#{} {}", number, entry.name),
                None => entry.name.clone(),
            },
            None => format!("Player {}", player_id),
        }
    }
}
