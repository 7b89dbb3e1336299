use anyhow::Result;

use super::CommandContext;
use crate::types::MatchId;

/// Print the current scoreboard of a match
pub async fn run(ctx: &CommandContext, match_id: MatchId) -> Result<()> {
    let session = ctx.open_session(match_id).await?;
    ctx.print_state(session.state());
    session.close();
    Ok(())
}
