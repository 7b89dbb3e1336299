/// Trait for the remote match authority, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{EventId, Match, MatchEvent, MatchId, MatchResult, NewEvent, RosterEntry, TeamId};

/// The long-lived owner of matches and their events.
///
/// Implemented by the real HTTP [`Client`](crate::client::Client) and by
/// [`MockAuthority`](crate::dev::mock_client::MockAuthority).
#[async_trait]
pub trait MatchAuthority: Send + Sync {
    /// Stable identity of the backend, used to key shared caches
    fn instance_key(&self) -> String;

    /// Get a match with its teams and status
    async fn get_match(&self, match_id: MatchId) -> Result<Match, ApiError>;

    /// Get all persisted events of a match
    async fn events(&self, match_id: MatchId) -> Result<Vec<MatchEvent>, ApiError>;

    /// Get the roster of a team
    async fn roster(&self, team_id: TeamId) -> Result<Vec<RosterEntry>, ApiError>;

    /// Move a SCHEDULED match to IN_PROGRESS; the reply carries the authoritative start time
    async fn start_match(&self, match_id: MatchId) -> Result<Match, ApiError>;

    /// Record the final result of a match
    async fn register_result(&self, result: &MatchResult) -> Result<MatchResult, ApiError>;

    /// Move an IN_PROGRESS match to FINISHED
    async fn finish_match(&self, match_id: MatchId) -> Result<Match, ApiError>;

    /// Move a SCHEDULED match to CANCELLED
    async fn cancel_match(&self, match_id: MatchId) -> Result<Match, ApiError>;

    /// Persist a new event; the authority assigns its id
    async fn create_event(&self, event: &NewEvent) -> Result<MatchEvent, ApiError>;

    /// Delete a persisted event
    async fn delete_event(&self, event_id: EventId) -> Result<(), ApiError>;
}
