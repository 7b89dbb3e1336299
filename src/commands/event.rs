use anyhow::{Context, Result};

use super::{parse_team, CommandContext};
use crate::live::validation::{parse_event_type, EventDraft};
use crate::types::{EventId, MatchId, PlayerId};

/// Operator input for `event`
#[derive(Debug, Clone)]
pub struct EventArgs {
    /// `home`, `away` or a team id
    pub team: String,
    pub player: PlayerId,
    /// Wire name of the event type, e.g. `GOAL`
    pub event_type: String,
    /// Defaults to the match clock
    pub minute: Option<u32>,
    pub description: Option<String>,
}

pub async fn add(ctx: &CommandContext, match_id: MatchId, args: EventArgs) -> Result<()> {
    let mut session = ctx.open_session(match_id).await?;

    let team_id = parse_team(&session.state().game, &args.team)?;
    let event_type = parse_event_type(&args.event_type)?;
    let draft = EventDraft {
        team_id: Some(team_id),
        player_id: Some(args.player),
        event_type: Some(event_type),
        minute: args.minute,
        description: args.description,
    };

    let event = session
        .add_event(draft)
        .await
        .with_context(|| format!("Failed to record {} for match {}", event_type, match_id))?;
    tracing::info!("Recorded event {} for match {}", event.id, match_id);

    ctx.print_state(session.state());
    session.close();
    Ok(())
}

pub async fn delete(ctx: &CommandContext, match_id: MatchId, event_id: EventId) -> Result<()> {
    let mut session = ctx.open_session(match_id).await?;
    session
        .delete_event(event_id)
        .await
        .with_context(|| format!("Failed to delete event {} from match {}", event_id, match_id))?;
    ctx.print_state(session.state());
    session.close();
    Ok(())
}
