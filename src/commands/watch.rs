use anyhow::Result;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::CommandContext;
use crate::types::MatchId;

/// What woke the watch loop
enum Wake {
    Tick,
    Refresh,
    Quit,
}

/// Keep a session open, redrawing when the clock minute or the match changes.
///
/// Stops on Ctrl-C or once the match reaches a terminal status.
pub async fn run(ctx: &CommandContext, match_id: MatchId) -> Result<()> {
    let mut session = ctx.open_session(match_id).await?;
    ctx.print_state(session.state());

    let mut refresh = tokio::time::interval(ctx.config.refresh_period());
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick is immediate and the session was just loaded
    refresh.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        if session.state().game.status.is_terminal() {
            info!("WATCH: match {} is {}, stopping", match_id, session.state().game.status);
            break;
        }

        let minute_before = session.state().clock_minute;
        let wake = tokio::select! {
            alive = session.next_action() => if alive { Wake::Tick } else { Wake::Quit },
            _ = refresh.tick() => Wake::Refresh,
            _ = &mut ctrl_c => Wake::Quit,
        };

        match wake {
            Wake::Tick => {
                session.process_actions();
                if session.state().clock_minute != minute_before {
                    ctx.print_state(session.state());
                }
            }
            Wake::Refresh => {
                let before = session.state().clone();
                // A failed refresh keeps the working copy and sets a notification
                if let Err(e) = session.refresh().await {
                    debug!("WATCH: refresh failed: {}", e);
                }
                if *session.state() != before {
                    ctx.print_state(session.state());
                }
            }
            Wake::Quit => break,
        }
    }

    session.close();
    Ok(())
}
