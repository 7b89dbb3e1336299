use anyhow::{bail, Context, Result};

use super::{parse_team, CommandContext};
use crate::live::lifecycle::winner_of;
use crate::live::LiveSession;
use crate::types::{MatchId, MatchResult};

/// Operator input for `finish`. Scores default to the tally of the event log.
#[derive(Debug, Clone, Default)]
pub struct FinishArgs {
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// `home`, `away`, a team id, or `none` for a draw
    pub winner: Option<String>,
    pub notes: Option<String>,
}

/// Build the result to register from the operator's input and the session
pub fn build_result(session: &LiveSession, args: &FinishArgs) -> Result<MatchResult> {
    let game = &session.state().game;
    let (home_score, away_score) = match (args.home_score, args.away_score) {
        (Some(home), Some(away)) => (home, away),
        (None, None) => {
            let score = session.score();
            (score.home, score.away)
        }
        _ => bail!("Give both --home and --away, or neither to use the recorded score"),
    };

    let winner_id = match args.winner.as_deref() {
        None => winner_of(game, home_score, away_score),
        Some(w) if w.eq_ignore_ascii_case("none") => None,
        Some(w) => Some(parse_team(game, w)?),
    };

    Ok(MatchResult {
        match_id: game.id,
        home_score,
        away_score,
        winner_id,
        notes: args.notes.clone().filter(|n| !n.trim().is_empty()),
    })
}

pub async fn start(ctx: &CommandContext, match_id: MatchId) -> Result<()> {
    let mut session = ctx.open_session(match_id).await?;
    session
        .start()
        .await
        .with_context(|| format!("Failed to start match {}", match_id))?;
    ctx.print_state(session.state());
    session.close();
    Ok(())
}

pub async fn finish(ctx: &CommandContext, match_id: MatchId, args: FinishArgs) -> Result<()> {
    let mut session = ctx.open_session(match_id).await?;
    let result = build_result(&session, &args)?;
    session
        .finish(result)
        .await
        .with_context(|| format!("Failed to finish match {}", match_id))?;
    ctx.print_state(session.state());
    session.close();
    Ok(())
}

pub async fn cancel(ctx: &CommandContext, match_id: MatchId) -> Result<()> {
    let mut session = ctx.open_session(match_id).await?;
    session
        .cancel()
        .await
        .with_context(|| format!("Failed to cancel match {}", match_id))?;
    ctx.print_state(session.state());
    session.close();
    Ok(())
}
