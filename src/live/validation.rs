use crate::error::ValidationError;
use crate::types::{EventType, Match, NewEvent, PlayerId, RosterEntry, Side, TeamId};

/// Largest minute accepted when entered by hand (regulation plus extra time)
pub const MAX_EVENT_MINUTE: u32 = 130;

/// Rosters of both teams for the current match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rosters {
    pub home: Vec<RosterEntry>,
    pub away: Vec<RosterEntry>,
}

impl Rosters {
    pub fn new(home: Vec<RosterEntry>, away: Vec<RosterEntry>) -> Self {
        Self { home, away }
    }

    pub fn for_side(&self, side: Side) -> &[RosterEntry] {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn find(&self, side: Side, player_id: PlayerId) -> Option<&RosterEntry> {
        self.for_side(side).iter().find(|p| p.player_id == player_id)
    }

    /// Look a player up in either roster
    pub fn player(&self, player_id: PlayerId) -> Option<&RosterEntry> {
        self.home
            .iter()
            .chain(self.away.iter())
            .find(|p| p.player_id == player_id)
    }
}

/// An event as entered by the operator, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub team_id: Option<TeamId>,
    pub player_id: Option<PlayerId>,
    pub event_type: Option<EventType>,
    /// None takes the live clock value at submission
    pub minute: Option<u32>,
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(team_id: TeamId, player_id: PlayerId, event_type: EventType) -> Self {
        Self {
            team_id: Some(team_id),
            player_id: Some(player_id),
            event_type: Some(event_type),
            ..Default::default()
        }
    }

    pub fn at_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parse an operator-entered event type, exactly as spelled on the wire
pub fn parse_event_type(text: &str) -> Result<EventType, ValidationError> {
    text.parse::<EventType>()
        .map_err(|_| ValidationError::UnknownEventType(text.to_string()))
}

/// Check a draft against the match and rosters and build the create-event body.
///
/// `clock_minute` is the clock value at submission; it is copied into the
/// event when no minute was entered.
pub fn validate_event(
    game: &Match,
    rosters: &Rosters,
    draft: &EventDraft,
    clock_minute: Option<u32>,
) -> Result<NewEvent, ValidationError> {
    let team_id = draft.team_id.ok_or(ValidationError::MissingField("team"))?;
    let side = game
        .side_of(team_id)
        .ok_or(ValidationError::TeamNotInMatch(team_id))?;
    let team_name = &game.team(side).name;

    let player_id = draft.player_id.ok_or(ValidationError::MissingField("player"))?;
    let entry = rosters
        .find(side, player_id)
        .ok_or_else(|| ValidationError::PlayerNotOnRoster {
            player_id,
            team_name: team_name.clone(),
        })?;
    if !entry.validated {
        return Err(ValidationError::PlayerNotValidated {
            player_id,
            team_name: team_name.clone(),
        });
    }

    let event_type = draft
        .event_type
        .ok_or(ValidationError::MissingField("event type"))?;

    let minute = match draft.minute {
        Some(minute) if minute > MAX_EVENT_MINUTE => {
            return Err(ValidationError::MinuteOutOfRange {
                minute,
                max: MAX_EVENT_MINUTE,
            })
        }
        Some(minute) => minute,
        None => clock_minute.unwrap_or(0),
    };

    let description = draft
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(NewEvent {
        match_id: game.id,
        team_id,
        player_id,
        event_type,
        minute,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, AWAY_FORWARD, AWAY_TEAM_ID, HOME_FORWARD, HOME_TEAM_ID, HOME_UNVALIDATED};

    fn setup() -> (Match, Rosters) {
        (
            fixtures::in_progress_match(fixtures::kickoff()),
            fixtures::rosters(),
        )
    }

    #[test]
    fn test_valid_draft_builds_new_event() {
        let (game, rosters) = setup();
        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal)
            .at_minute(10)
            .with_description("  header from a corner ");
        let event = validate_event(&game, &rosters, &draft, Some(44)).unwrap();
        assert_eq!(event.match_id, game.id);
        assert_eq!(event.minute, 10);
        assert_eq!(event.description.as_deref(), Some("header from a corner"));
    }

    #[test]
    fn test_minute_defaults_to_clock_snapshot() {
        let (game, rosters) = setup();
        let draft = EventDraft::new(AWAY_TEAM_ID, AWAY_FORWARD, EventType::YellowCard);
        assert_eq!(validate_event(&game, &rosters, &draft, Some(37)).unwrap().minute, 37);
        assert_eq!(validate_event(&game, &rosters, &draft, None).unwrap().minute, 0);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let (game, rosters) = setup();
        let err = validate_event(&game, &rosters, &EventDraft::default(), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("team"));

        let draft = EventDraft {
            team_id: Some(HOME_TEAM_ID),
            ..Default::default()
        };
        assert_eq!(
            validate_event(&game, &rosters, &draft, None).unwrap_err(),
            ValidationError::MissingField("player")
        );

        let draft = EventDraft {
            team_id: Some(HOME_TEAM_ID),
            player_id: Some(HOME_FORWARD),
            ..Default::default()
        };
        assert_eq!(
            validate_event(&game, &rosters, &draft, None).unwrap_err(),
            ValidationError::MissingField("event type")
        );
    }

    #[test]
    fn test_team_must_play_in_match() {
        let (game, rosters) = setup();
        let draft = EventDraft::new(77, HOME_FORWARD, EventType::Goal);
        assert_eq!(
            validate_event(&game, &rosters, &draft, None).unwrap_err(),
            ValidationError::TeamNotInMatch(77)
        );
    }

    #[test]
    fn test_player_must_be_on_that_teams_roster() {
        let (game, rosters) = setup();
        // An away player credited to the home team
        let draft = EventDraft::new(HOME_TEAM_ID, AWAY_FORWARD, EventType::Goal);
        assert!(matches!(
            validate_event(&game, &rosters, &draft, None),
            Err(ValidationError::PlayerNotOnRoster { player_id, .. }) if player_id == AWAY_FORWARD
        ));
    }

    #[test]
    fn test_player_must_be_validated() {
        let (game, rosters) = setup();
        let draft = EventDraft::new(HOME_TEAM_ID, HOME_UNVALIDATED, EventType::Goal);
        assert!(matches!(
            validate_event(&game, &rosters, &draft, None),
            Err(ValidationError::PlayerNotValidated { .. })
        ));
    }

    #[test]
    fn test_minute_range() {
        let (game, rosters) = setup();
        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal).at_minute(131);
        assert_eq!(
            validate_event(&game, &rosters, &draft, None).unwrap_err(),
            ValidationError::MinuteOutOfRange { minute: 131, max: MAX_EVENT_MINUTE }
        );
        let stoppage = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal).at_minute(93);
        assert_eq!(validate_event(&game, &rosters, &stoppage, None).unwrap().minute, 93);
    }

    #[test]
    fn test_parse_event_type() {
        assert_eq!(parse_event_type("OWN_GOAL"), Ok(EventType::OwnGoal));
        assert_eq!(
            parse_event_type("own_goal"),
            Err(ValidationError::UnknownEventType("own_goal".to_string()))
        );
    }

    #[test]
    fn test_roster_lookup_across_sides() {
        let rosters = fixtures::rosters();
        assert!(rosters.player(HOME_FORWARD).is_some());
        assert!(rosters.player(AWAY_FORWARD).is_some());
        assert!(rosters.find(Side::Home, AWAY_FORWARD).is_none());
    }
}
