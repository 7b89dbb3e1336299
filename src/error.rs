use thiserror::Error;

use crate::types::{EventId, MatchStatus, PlayerId, TeamId};

/// Fallback shown to the operator when the authority gives no reason
pub const GENERIC_REMOTE_FAILURE: &str = "The match server could not complete the request";

/// Failures talking to the remote match authority
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request rejected ({status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The authority confirmed the call but its reply breaks an invariant
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

impl ApiError {
    /// Message for the operator: the remote-supplied reason if any
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_REMOTE_FAILURE.to_string(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 409, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Operator mistakes caught before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cannot {action} a match that is {status}")]
    IllegalTransition {
        action: &'static str,
        status: MatchStatus,
    },

    #[error("Team {0} does not play in this match; pick the home or away team")]
    TeamNotInMatch(TeamId),

    #[error("Player {player_id} is not on the roster of {team_name}")]
    PlayerNotOnRoster { player_id: PlayerId, team_name: String },

    #[error("Player {player_id} has not been validated for {team_name}; validate the player before recording events")]
    PlayerNotValidated { player_id: PlayerId, team_name: String },

    #[error("Unknown event type '{0}'; use GOAL, PENALTY, OWN_GOAL, YELLOW_CARD, RED_CARD or SUBSTITUTION")]
    UnknownEventType(String),

    #[error("Missing {0}; choose one before saving the event")]
    MissingField(&'static str),

    #[error("Minute {minute} is out of range (0-{max})")]
    MinuteOutOfRange { minute: u32, max: u32 },

    #[error("Event {0} is not part of this match")]
    UnknownEvent(EventId),

    #[error("Winner does not match the score {home_score}-{away_score}; the winner must be the team with more goals, or none on a tie")]
    WinnerMismatch { home_score: u32, away_score: u32 },

    #[error("Another change is still being saved; wait for it to finish")]
    OperationInFlight,
}

/// Errors surfaced by a live session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", .0.user_message())]
    Remote(#[from] ApiError),

    /// One of the initial fetches failed; no session is created
    #[error("Failed to load {what}: {source}")]
    Load {
        what: &'static str,
        #[source]
        source: ApiError,
    },
}

impl LiveError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LiveError::Validation(_))
    }
}

pub type LiveResult<T> = Result<T, LiveError>;
