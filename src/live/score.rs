//! Score aggregation.
//!
//! The score is a pure projection of the event log and is recomputed in full
//! after every change. Nothing ever adjusts a score in place.

use crate::types::{EventType, MatchEvent, Score, TeamId};

/// Tally of goal-bearing events.
///
/// GOAL and PENALTY credit the acting team. OWN_GOAL credits the opponent
/// of the acting team. Events from a team outside the match count for nobody.
pub fn score<'a, I>(events: I, home_team_id: TeamId, away_team_id: TeamId) -> Score
where
    I: IntoIterator<Item = &'a MatchEvent>,
{
    let mut score = Score::default();
    for event in events {
        if !event.event_type.is_goal_bearing() {
            continue;
        }
        let credits_home = match (event.event_type, event.team_id) {
            (EventType::OwnGoal, team) if team == home_team_id => false,
            (EventType::OwnGoal, team) if team == away_team_id => true,
            (_, team) if team == home_team_id => true,
            (_, team) if team == away_team_id => false,
            _ => continue,
        };
        if credits_home {
            score.home += 1;
        } else {
            score.away += 1;
        }
    }
    score
}

/// Cards shown to one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cards {
    pub yellow: u32,
    pub red: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisciplineSummary {
    pub home: Cards,
    pub away: Cards,
}

/// Card counts per team, derived the same way as the score
pub fn discipline<'a, I>(events: I, home_team_id: TeamId, away_team_id: TeamId) -> DisciplineSummary
where
    I: IntoIterator<Item = &'a MatchEvent>,
{
    let mut summary = DisciplineSummary::default();
    for event in events {
        let cards = if event.team_id == home_team_id {
            &mut summary.home
        } else if event.team_id == away_team_id {
            &mut summary.away
        } else {
            continue;
        };
        match event.event_type {
            EventType::YellowCard => cards.yellow += 1,
            EventType::RedCard => cards.red += 1,
            _ => {}
        }
    }
    summary
}
