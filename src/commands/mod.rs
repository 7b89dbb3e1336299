pub mod event;
pub mod lifecycle;
pub mod scoreboard_format;
pub mod show;
pub mod watch;

use anyhow::{bail, Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::data_provider::MatchAuthority;
use crate::live::clock::TimeSource;
use crate::live::{LiveSession, SessionState};
use crate::types::{Match, MatchId, TeamId};

/// What every command needs to open a session
#[derive(Clone)]
pub struct CommandContext {
    pub authority: Arc<dyn MatchAuthority>,
    pub time: Arc<dyn TimeSource>,
    pub config: Config,
}

impl CommandContext {
    pub fn new(
        authority: Arc<dyn MatchAuthority>,
        time: Arc<dyn TimeSource>,
        config: Config,
    ) -> Self {
        Self {
            authority,
            time,
            config,
        }
    }

    /// Load a match into a new session
    pub async fn open_session(&self, match_id: MatchId) -> Result<LiveSession> {
        LiveSession::load(
            self.authority.clone(),
            self.time.clone(),
            match_id,
            self.config.tick_period(),
        )
        .await
        .with_context(|| format!("Failed to open match {}", match_id))
    }

    /// Print the scoreboard followed by the latest notification
    pub fn print_state(&self, state: &SessionState) {
        print!(
            "{}",
            scoreboard_format::format_scoreboard(
                state,
                &self.config.display,
                &self.config.time_format
            )
        );
        if let Some(message) = scoreboard_format::format_notification(state) {
            println!("{}", message);
        }
    }
}

/// Resolve a team argument: `home`, `away`, or a team id playing in the match
pub fn parse_team(game: &Match, text: &str) -> Result<TeamId> {
    let team_id = match text.trim().to_lowercase().as_str() {
        "home" => game.home_team.id,
        "away" => game.away_team.id,
        other => other
            .parse::<TeamId>()
            .with_context(|| format!("Invalid team '{}'. Use home, away or a team id", text))?,
    };
    if game.side_of(team_id).is_none() {
        bail!(
            "Team {} does not play in match {} ({} vs {})",
            team_id,
            game.id,
            game.home_team.name,
            game.away_team.name
        );
    }
    Ok(team_id)
}
