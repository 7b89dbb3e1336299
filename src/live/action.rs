use chrono::{DateTime, Utc};

use super::validation::{EventDraft, Rosters};
use crate::error::{ApiError, LiveError};
use crate::types::{EventId, Match, MatchEvent, MatchId, MatchResult, NewEvent};

/// Everything fetched to open or refresh a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub game: Match,
    pub events: Vec<MatchEvent>,
    pub rosters: Rosters,
}

/// Session actions
///
/// All state changes in a session happen through actions. They come from:
/// - The operator (intents, validated before anything goes on the wire)
/// - Remote effects (confirmations or failures from the authority)
/// - The clock ticker
#[derive(Debug, Clone)]
pub enum Action {
    // Operator intents
    Start,
    AddEvent(EventDraft),
    DeleteEvent(EventId),
    Finish(MatchResult),
    Cancel,

    // Remote confirmations
    MatchStarted(Result<Match, ApiError>),
    EventCreated(Result<MatchEvent, ApiError>),
    EventDeleted(EventId, Result<(), ApiError>),
    ResultRegistered(Result<MatchResult, ApiError>),
    MatchFinished(Result<Match, ApiError>),
    MatchCancelled(Result<Match, ApiError>),
    SnapshotLoaded(Result<Box<Snapshot>, ApiError>),

    // Clock
    Tick(DateTime<Utc>),

    ClearNotification,
}

impl Action {
    /// Operator intents need the remote authority; everything else is local
    pub fn is_intent(&self) -> bool {
        matches!(
            self,
            Self::Start | Self::AddEvent(_) | Self::DeleteEvent(_) | Self::Finish(_) | Self::Cancel
        )
    }
}

/// Remote operation awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    AddEvent,
    DeleteEvent(EventId),
    Finish,
    Cancel,
}

/// A call to the remote authority, described as data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    StartMatch(MatchId),
    CreateEvent(NewEvent),
    DeleteEvent(EventId),
    RegisterResult(MatchResult),
    FinishMatch(MatchId),
    CancelMatch(MatchId),
}

/// Side effects returned by the reducer and executed by the session
#[derive(Debug)]
pub enum Effect {
    None,
    Remote(RemoteCall),
    StartClock,
    StopClock,
    /// The action was refused; nothing was sent or changed
    Rejected(LiveError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;

    #[test]
    fn test_intents_are_operator_actions() {
        assert!(Action::Start.is_intent());
        assert!(Action::Cancel.is_intent());
        assert!(Action::DeleteEvent(3).is_intent());
        assert!(Action::AddEvent(EventDraft::new(1, 11, EventType::Goal)).is_intent());
    }

    #[test]
    fn test_confirmations_and_ticks_are_not_intents() {
        assert!(!Action::Tick(Utc::now()).is_intent());
        assert!(!Action::EventDeleted(3, Ok(())).is_intent());
        assert!(!Action::ClearNotification.is_intent());
        assert!(!Action::MatchStarted(Err(ApiError::Transport("down".to_string()))).is_intent());
    }
}
