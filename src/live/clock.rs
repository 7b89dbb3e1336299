//! Match clock: the elapsed minute derived from the authoritative start instant.
//!
//! The minute is pure derived state. [`ClockTicker`] is the only periodically
//! scheduled activity in a session; it pushes [`Action::Tick`] into the
//! session's action channel and stops when dropped.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::action::Action;
use crate::types::{Match, MatchStatus};

/// Upper bound of the displayed clock
pub const MAX_MATCH_MINUTE: u32 = 90;

/// Default tick cadence
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Source of "now", injectable so tests can control time
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Whole minutes between `started_at` and `now`, clamped to `[0, MAX_MATCH_MINUTE]`
pub fn elapsed_minutes(started_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let seconds = (now - started_at).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds / 60).min(MAX_MATCH_MINUTE as i64) as u32
}

/// Clock value for a match, or None when the clock is idle
pub fn clock_minute(game: &Match, now: DateTime<Utc>) -> Option<u32> {
    if game.status != MatchStatus::InProgress {
        return None;
    }
    game.started_at.map(|started_at| elapsed_minutes(started_at, now))
}

/// Periodic tick task. Dropping it aborts the task and releases its timer.
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Spawn a ticker sending `Action::Tick` every `period`; the first tick fires immediately
    pub fn spawn(
        time: Arc<dyn TimeSource>,
        period: Duration,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        debug!("CLOCK: starting ticker every {:?}", period);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if action_tx.send(Action::Tick(time.now())).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        debug!("CLOCK: stopping ticker");
        self.handle.abort();
    }
}
