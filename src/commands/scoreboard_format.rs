use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

use crate::config::DisplayConfig;
use crate::formatting::{format_header, framed};
use crate::live::score::Cards;
use crate::live::SessionState;
use crate::types::{MatchEvent, MatchStatus, Side};

// Layout Constants
/// Inner width of the scoreboard frame
const BOARD_WIDTH: usize = 56;

/// Width of the team name columns on the score line
const TEAM_COL_WIDTH: usize = 22;

/// Width of the event type column in the timeline
const TYPE_COL_WIDTH: usize = 12;

/// Clock text for the match: the live minute, or the lifecycle stage when idle
pub fn clock_label(state: &SessionState) -> String {
    match (state.game.status, state.clock_minute) {
        (MatchStatus::InProgress, Some(minute)) => format!("{}'", minute),
        (MatchStatus::InProgress, None) => "Live".to_string(),
        (MatchStatus::Scheduled, _) => "Not started".to_string(),
        (MatchStatus::Finished, _) => "Full time".to_string(),
        (MatchStatus::Cancelled, _) => "Cancelled".to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Kick-off time in local time; an invalid format string falls back to `%H:%M`
fn kickoff_text(started_at: DateTime<Utc>, time_format: &str) -> String {
    let valid = !StrftimeItems::new(time_format).any(|item| matches!(item, Item::Error));
    let format = if valid { time_format } else { "%H:%M" };
    started_at.with_timezone(&Local).format(format).to_string()
}

fn score_line(state: &SessionState) -> String {
    let score = state.display_score();
    format!(
        "{:<tw$} {:>2} - {:<2} {:>tw$}",
        truncate(&state.game.home_team.name, TEAM_COL_WIDTH),
        score.home,
        score.away,
        truncate(&state.game.away_team.name, TEAM_COL_WIDTH),
        tw = TEAM_COL_WIDTH
    )
}

/// One timeline row, e.g. ` 12' GOAL         Engineering #9 Ana Torres [1]`
pub fn event_line(state: &SessionState, event: &MatchEvent) -> String {
    let team = match state.game.side_of(event.team_id) {
        Some(side) => state.game.team(side).name.clone(),
        None => format!("Team {}", event.team_id),
    };
    let line = format!(
        "{:>3}' {:<tw$} {} {} [{}]",
        event.minute,
        event.event_type.as_str(),
        team,
        state.player_label(event.player_id),
        event.id,
        tw = TYPE_COL_WIDTH
    );
    truncate(&line, BOARD_WIDTH)
}

fn cards_text(cards: &Cards) -> String {
    format!("{}Y {}R", cards.yellow, cards.red)
}

fn discipline_line(state: &SessionState) -> String {
    format!(
        "Cards: {} {}, {} {}",
        state.game.team(Side::Home).name,
        cards_text(&state.discipline.home),
        state.game.team(Side::Away).name,
        cards_text(&state.discipline.away)
    )
}

/// Render the scoreboard, timeline and discipline summary of a session.
///
/// `time_format` is a chrono format string for the kick-off time.
pub fn format_scoreboard(state: &SessionState, display: &DisplayConfig, time_format: &str) -> String {
    let title = format!(
        "{} vs {} (match {})",
        state.game.home_team.name, state.game.away_team.name, state.game.id
    );
    let mut output = format_header(&title, true, display);

    let mut lines = vec![
        format!("{:<44}{:>12}", state.game.status.as_str(), clock_label(state)),
        score_line(state),
    ];
    if let Some(started_at) = state.game.started_at {
        let kickoff = kickoff_text(started_at, time_format);
        lines.push(truncate(&format!("Kick-off {}", kickoff), BOARD_WIDTH));
    }
    lines.push("-".to_string());

    let timeline = state.events.timeline();
    if timeline.is_empty() {
        lines.push("No events recorded".to_string());
    } else {
        lines.extend(timeline.into_iter().map(|e| event_line(state, e)));
    }

    lines.push("-".to_string());
    lines.push(truncate(&discipline_line(state), BOARD_WIDTH));

    if let Some(notes) = state.final_result.as_ref().and_then(|r| r.notes.as_deref()) {
        lines.push(truncate(&format!("Notes: {}", notes), BOARD_WIDTH));
    }

    output.push_str(&framed(&lines, BOARD_WIDTH, display));
    output
}

/// The latest notification, prefixed so errors stand out
pub fn format_notification(state: &SessionState) -> Option<String> {
    state.notification.as_ref().map(|n| {
        if n.is_error {
            format!("! {}", n.message)
        } else {
            n.message.clone()
        }
    })
}
