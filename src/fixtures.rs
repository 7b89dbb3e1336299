/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - ensuring tests have predictable data
/// 2. Development mock mode - running the CLI against an in-memory authority
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The fixtures describe two university teams and two matches: one scheduled
/// and one already in progress with a handful of events.
use chrono::{DateTime, TimeZone, Utc};

use crate::live::action::Snapshot;
use crate::live::validation::Rosters;
use crate::types::{
    EventId, EventType, Match, MatchEvent, MatchId, MatchStatus, PlayerId, RosterEntry, Score,
    Team, TeamId,
};

/// Scheduled match with an empty event log
pub const MATCH_ID: MatchId = 100;
/// Match in progress since [`kickoff`]
pub const LIVE_MATCH_ID: MatchId = 101;

pub const HOME_TEAM_ID: TeamId = 1;
pub const AWAY_TEAM_ID: TeamId = 2;

pub const HOME_FORWARD: PlayerId = 11;
pub const HOME_DEFENDER: PlayerId = 12;
/// On the home roster but not yet validated
pub const HOME_UNVALIDATED: PlayerId = 13;
pub const AWAY_FORWARD: PlayerId = 21;
pub const AWAY_DEFENDER: PlayerId = 22;

/// Start instant of the live fixture match
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn home_team() -> Team {
    Team {
        id: HOME_TEAM_ID,
        name: "Engineering".to_string(),
    }
}

pub fn away_team() -> Team {
    Team {
        id: AWAY_TEAM_ID,
        name: "Medicine".to_string(),
    }
}

pub fn scheduled_match() -> Match {
    Match {
        id: MATCH_ID,
        home_team: home_team(),
        away_team: away_team(),
        status: MatchStatus::Scheduled,
        started_at: None,
    }
}

pub fn in_progress_match(started_at: DateTime<Utc>) -> Match {
    Match {
        id: LIVE_MATCH_ID,
        home_team: home_team(),
        away_team: away_team(),
        status: MatchStatus::InProgress,
        started_at: Some(started_at),
    }
}

fn player(player_id: PlayerId, name: &str, shirt_number: u32, validated: bool) -> RosterEntry {
    RosterEntry {
        player_id,
        name: name.to_string(),
        shirt_number: Some(shirt_number),
        validated,
    }
}

pub fn home_roster() -> Vec<RosterEntry> {
    vec![
        player(HOME_FORWARD, "Ana Torres", 9, true),
        player(HOME_DEFENDER, "Bruno Silva", 4, true),
        player(HOME_UNVALIDATED, "Carla Mendes", 17, false),
    ]
}

pub fn away_roster() -> Vec<RosterEntry> {
    vec![
        player(AWAY_FORWARD, "Diego Ramos", 10, true),
        player(AWAY_DEFENDER, "Elena Costa", 5, true),
    ]
}

pub fn rosters() -> Rosters {
    Rosters::new(home_roster(), away_roster())
}

/// An event of the live fixture match
pub fn event(
    id: EventId,
    team_id: TeamId,
    player_id: PlayerId,
    event_type: EventType,
    minute: u32,
) -> MatchEvent {
    MatchEvent {
        id,
        match_id: LIVE_MATCH_ID,
        team_id,
        player_id,
        event_type,
        minute,
        description: None,
    }
}

/// Event log of the live match. The away own goal counts for the home side.
pub fn sample_events() -> Vec<MatchEvent> {
    vec![
        event(1, HOME_TEAM_ID, HOME_FORWARD, EventType::Goal, 12),
        event(2, AWAY_TEAM_ID, AWAY_DEFENDER, EventType::YellowCard, 20),
        event(3, AWAY_TEAM_ID, AWAY_DEFENDER, EventType::OwnGoal, 31),
        event(4, AWAY_TEAM_ID, AWAY_FORWARD, EventType::Penalty, 44),
        event(5, HOME_TEAM_ID, HOME_DEFENDER, EventType::Substitution, 60),
    ]
}

/// Score of [`sample_events`]
pub fn sample_score() -> Score {
    Score::new(2, 1)
}

pub fn scheduled_snapshot() -> Snapshot {
    Snapshot {
        game: scheduled_match(),
        events: Vec::new(),
        rosters: rosters(),
    }
}

pub fn live_snapshot() -> Snapshot {
    Snapshot {
        game: in_progress_match(kickoff()),
        events: sample_events(),
        rosters: rosters(),
    }
}
