//! Live match tracking: event log, score, clock, lifecycle and the session
//! runtime that reconciles them with the remote authority.

pub mod action;
pub mod clock;
pub mod effects;
pub mod event_log;
pub mod lifecycle;
pub mod reducer;
pub mod score;
pub mod session;
pub mod state;
pub mod validation;

pub use action::{Action, Effect, Snapshot};
pub use session::LiveSession;
pub use state::SessionState;
