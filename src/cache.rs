use crate::data_provider::MatchAuthority;
use crate::error::ApiError;
use crate::types::{RosterEntry, TeamId};
use cached::proc_macro::cached;

pub use cached::Cached;

/// Rosters are validated ahead of match day and change rarely during one
const ROSTER_LIFESPAN_SECS: u64 = 300;

#[cfg(test)]
pub async fn roster_cache_entries() -> usize {
    ROSTER_CACHE.lock().await.cache_size()
}

#[cached(
    name = "ROSTER_CACHE",
    type = "cached::TimedSizedCache<(String, TeamId), Vec<RosterEntry>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(64, ROSTER_LIFESPAN_SECS) }",
    convert = r#"{ (authority.instance_key(), team_id) }"#,
    result = true
)]
pub async fn fetch_roster_cached(
    authority: &dyn MatchAuthority,
    team_id: TeamId,
) -> Result<Vec<RosterEntry>, ApiError> {
    authority.roster(team_id).await
}
