/// Shared types used across the application
///
/// This module contains the wire model exchanged with the remote match
/// authority. Field names are camelCase and enum values are the exact
/// upper-case strings the authority sends, so every type round-trips
/// through serde unchanged.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type MatchId = i64;
pub type TeamId = i64;
pub type PlayerId = i64;
pub type EventId = i64;

/// Scheduling state of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::InProgress => "IN_PROGRESS",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Cancelled => "CANCELLED",
        }
    }

    /// FINISHED and CANCELLED accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Cancelled)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of in-game event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Goal,
    Penalty,
    OwnGoal,
    YellowCard,
    RedCard,
    Substitution,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Goal,
        EventType::Penalty,
        EventType::OwnGoal,
        EventType::YellowCard,
        EventType::RedCard,
        EventType::Substitution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Goal => "GOAL",
            EventType::Penalty => "PENALTY",
            EventType::OwnGoal => "OWN_GOAL",
            EventType::YellowCard => "YELLOW_CARD",
            EventType::RedCard => "RED_CARD",
            EventType::Substitution => "SUBSTITUTION",
        }
    }

    /// GOAL, PENALTY and OWN_GOAL change the score
    pub fn is_goal_bearing(&self) -> bool {
        matches!(self, EventType::Goal | EventType::Penalty | EventType::OwnGoal)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name an event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventType(pub String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event type '{}'", self.0)
    }
}

impl std::error::Error for UnknownEventType {}

impl FromStr for EventType {
    type Err = UnknownEventType;

    /// Parsing is case-sensitive, matching the wire values exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub home_team: Team,
    pub away_team: Team,
    pub status: MatchStatus,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}

/// Which side of a match a team plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Match {
    /// Side played by `team_id`, or None if the team is not in this match
    pub fn side_of(&self, team_id: TeamId) -> Option<Side> {
        if team_id == self.home_team.id {
            Some(Side::Home)
        } else if team_id == self.away_team.id {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }
}

/// A persisted in-game event. Corrections are delete + recreate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub id: EventId,
    pub match_id: MatchId,
    pub team_id: TeamId,
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub minute: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of a create-event call; the authority assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub match_id: MatchId,
    pub team_id: TeamId,
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub minute: u32,
    pub description: Option<String>,
}

impl NewEvent {
    /// Attach the id assigned by the authority
    pub fn persisted(self, id: EventId) -> MatchEvent {
        MatchEvent {
            id,
            match_id: self.match_id,
            team_id: self.team_id,
            player_id: self.player_id,
            event_type: self.event_type,
            minute: self.minute,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub shirt_number: Option<u32>,
    /// Only validated players may be credited with events
    #[serde(default)]
    pub validated: bool,
}

/// Final result registered with the authority before a match is finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_id: MatchId,
    pub home_score: u32,
    pub away_score: u32,
    pub winner_id: Option<TeamId>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Two-team score. Always derived from the event log, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_values() {
        let json = serde_json::to_string(&EventType::OwnGoal).unwrap();
        assert_eq!(json, "\"OWN_GOAL\"");
        let parsed: EventType = serde_json::from_str("\"YELLOW_CARD\"").unwrap();
        assert_eq!(parsed, EventType::YellowCard);
    }

    #[test]
    fn test_event_type_serde_matches_as_str() {
        for t in EventType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_event_type_from_str_is_case_sensitive() {
        assert_eq!("PENALTY".parse::<EventType>(), Ok(EventType::Penalty));
        assert!("penalty".parse::<EventType>().is_err());
        assert!("Goal".parse::<EventType>().is_err());
        assert!("FOUL".parse::<EventType>().is_err());
    }

    #[test]
    fn test_status_wire_values() {
        let json = serde_json::to_string(&MatchStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        assert!(serde_json::from_str::<MatchStatus>("\"in_progress\"").is_err());
    }

    #[test]
    fn test_match_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "homeTeam": {"id": 1, "name": "Engineering"},
            "awayTeam": {"id": 2, "name": "Medicine"},
            "status": "IN_PROGRESS",
            "startedAt": "2026-10-16T15:00:00Z"
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.status, MatchStatus::InProgress);
        assert!(m.started_at.is_some());
        assert_eq!(m.side_of(2), Some(Side::Away));
        assert_eq!(m.side_of(3), None);
    }

    #[test]
    fn test_match_event_uses_type_key() {
        let json = r#"{"id": 3, "matchId": 7, "teamId": 1, "playerId": 11, "type": "GOAL", "minute": 12}"#;
        let e: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.event_type, EventType::Goal);
        assert_eq!(e.description, None);
        let back = serde_json::to_value(&e).unwrap();
        assert_eq!(back["type"], "GOAL");
        assert_eq!(back["playerId"], 11);
    }

    #[test]
    fn test_goal_bearing_types() {
        assert!(EventType::Goal.is_goal_bearing());
        assert!(EventType::OwnGoal.is_goal_bearing());
        assert!(!EventType::YellowCard.is_goal_bearing());
        assert!(!EventType::Substitution.is_goal_bearing());
    }
}
