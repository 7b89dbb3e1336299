use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::debug;

use super::action::{Action, RemoteCall, Snapshot};
use super::validation::Rosters;
use crate::cache::fetch_roster_cached;
use crate::data_provider::MatchAuthority;
use crate::error::{ApiError, LiveError};
use crate::types::MatchId;

/// Effect handler for calls to the remote authority
///
/// Each remote call becomes a future resolving to the confirmation action
/// that carries its outcome back into the reducer.
pub struct RemoteEffects {
    authority: Arc<dyn MatchAuthority>,
}

impl RemoteEffects {
    pub fn new(authority: Arc<dyn MatchAuthority>) -> Self {
        Self { authority }
    }

    /// Turn a remote call into a future producing its confirmation action
    pub fn execute(&self, call: RemoteCall) -> BoxFuture<'static, Action> {
        let authority = self.authority.clone();
        Box::pin(async move {
            debug!("EFFECT: executing {:?}", call);
            match call {
                RemoteCall::StartMatch(match_id) => {
                    Action::MatchStarted(authority.start_match(match_id).await)
                }
                RemoteCall::CreateEvent(new_event) => {
                    Action::EventCreated(authority.create_event(&new_event).await)
                }
                RemoteCall::DeleteEvent(event_id) => {
                    Action::EventDeleted(event_id, authority.delete_event(event_id).await)
                }
                RemoteCall::RegisterResult(result) => {
                    Action::ResultRegistered(authority.register_result(&result).await)
                }
                RemoteCall::FinishMatch(match_id) => {
                    Action::MatchFinished(authority.finish_match(match_id).await)
                }
                RemoteCall::CancelMatch(match_id) => {
                    Action::MatchCancelled(authority.cancel_match(match_id).await)
                }
            }
        })
    }

    /// Fetch match, events and both rosters as one unit.
    ///
    /// Any failing fetch fails the whole load; no partial snapshot is returned.
    pub async fn load_snapshot(&self, match_id: MatchId) -> Result<Snapshot, LiveError> {
        let authority = self.authority.as_ref();

        let (game, events) = futures::try_join!(
            async {
                authority
                    .get_match(match_id)
                    .await
                    .map_err(|source| LiveError::Load { what: "match", source })
            },
            async {
                authority
                    .events(match_id)
                    .await
                    .map_err(|source| LiveError::Load { what: "events", source })
            },
        )?;

        let (home, away) = futures::try_join!(
            async {
                fetch_roster_cached(authority, game.home_team.id)
                    .await
                    .map_err(|source| LiveError::Load { what: "home roster", source })
            },
            async {
                fetch_roster_cached(authority, game.away_team.id)
                    .await
                    .map_err(|source| LiveError::Load { what: "away roster", source })
            },
        )?;

        debug!(
            "DATA: loaded match {} ({}) with {} events",
            game.id,
            game.status,
            events.len()
        );
        Ok(Snapshot {
            game,
            events,
            rosters: Rosters::new(home, away),
        })
    }

    /// Refetch the working copy, as an action for the reducer
    pub async fn reload(&self, match_id: MatchId) -> Action {
        let result = self
            .load_snapshot(match_id)
            .await
            .map(Box::new)
            .map_err(|e| match e {
                LiveError::Load { source, .. } => source,
                LiveError::Remote(source) => source,
                LiveError::Validation(v) => ApiError::MalformedReply(v.to_string()),
            });
        Action::SnapshotLoaded(result)
    }
}
