//! Match lifecycle: `SCHEDULED -> IN_PROGRESS -> FINISHED`, `SCHEDULED -> CANCELLED`.
//!
//! Every check here runs before a remote call is issued. Replies from the
//! authority are checked with [`confirm_reply`] before they are applied.

use crate::error::{ApiError, ValidationError};
use crate::types::{Match, MatchResult, MatchStatus, Score, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    Finish,
    Cancel,
}

impl Transition {
    pub fn verb(&self) -> &'static str {
        match self {
            Transition::Start => "start",
            Transition::Finish => "finish",
            Transition::Cancel => "cancel",
        }
    }

    /// The only status a transition may leave from
    pub fn source(&self) -> MatchStatus {
        match self {
            Transition::Start | Transition::Cancel => MatchStatus::Scheduled,
            Transition::Finish => MatchStatus::InProgress,
        }
    }

    pub fn target(&self) -> MatchStatus {
        match self {
            Transition::Start => MatchStatus::InProgress,
            Transition::Finish => MatchStatus::Finished,
            Transition::Cancel => MatchStatus::Cancelled,
        }
    }
}

pub fn check_transition(transition: Transition, status: MatchStatus) -> Result<(), ValidationError> {
    if status == transition.source() {
        Ok(())
    } else {
        Err(ValidationError::IllegalTransition {
            action: transition.verb(),
            status,
        })
    }
}

/// Events may be recorded before kick-off and during play
pub fn check_add_event(status: MatchStatus) -> Result<(), ValidationError> {
    match status {
        MatchStatus::Scheduled | MatchStatus::InProgress => Ok(()),
        _ => Err(ValidationError::IllegalTransition {
            action: "record events for",
            status,
        }),
    }
}

/// Events may only be deleted while the match is being played
pub fn check_delete_event(status: MatchStatus) -> Result<(), ValidationError> {
    match status {
        MatchStatus::InProgress => Ok(()),
        _ => Err(ValidationError::IllegalTransition {
            action: "delete events from",
            status,
        }),
    }
}

/// Team with strictly more goals, None on a tie
pub fn winner_of(game: &Match, home_score: u32, away_score: u32) -> Option<TeamId> {
    match home_score.cmp(&away_score) {
        std::cmp::Ordering::Greater => Some(game.home_team.id),
        std::cmp::Ordering::Less => Some(game.away_team.id),
        std::cmp::Ordering::Equal => None,
    }
}

/// Result matching a score, with the winner filled in
pub fn result_from_score(game: &Match, score: Score, notes: Option<String>) -> MatchResult {
    MatchResult {
        match_id: game.id,
        home_score: score.home,
        away_score: score.away,
        winner_id: winner_of(game, score.home, score.away),
        notes,
    }
}

/// The winner must be the side with more goals, or absent on a tie
pub fn validate_result(game: &Match, result: &MatchResult) -> Result<(), ValidationError> {
    if result.winner_id != winner_of(game, result.home_score, result.away_score) {
        return Err(ValidationError::WinnerMismatch {
            home_score: result.home_score,
            away_score: result.away_score,
        });
    }
    Ok(())
}

/// Check that a confirmed transition reply has the shape the lifecycle requires
pub fn confirm_reply(transition: Transition, game: &Match, reply: &Match) -> Result<(), ApiError> {
    if reply.id != game.id {
        return Err(ApiError::MalformedReply(format!(
            "expected match {}, got match {}",
            game.id, reply.id
        )));
    }
    if reply.status != transition.target() {
        return Err(ApiError::MalformedReply(format!(
            "expected status {} after {}, got {}",
            transition.target(),
            transition.verb(),
            reply.status
        )));
    }
    if transition == Transition::Start && reply.started_at.is_none() {
        return Err(ApiError::MalformedReply(
            "started match has no start time".to_string(),
        ));
    }
    Ok(())
}
