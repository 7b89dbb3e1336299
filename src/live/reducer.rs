use tracing::{debug, info, warn};

use super::action::{Action, Effect, Operation, RemoteCall, Snapshot};
use super::clock;
use super::lifecycle::{self, Transition};
use super::state::SessionState;
use super::validation::{validate_event, EventDraft};
use crate::error::{ApiError, LiveError, ValidationError};
use crate::types::{EventId, Match, MatchEvent, MatchResult, MatchStatus};

/// Pure session reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect to execute. No I/O happens here: remote calls are returned as
/// `Effect::Remote` and their outcome comes back as a confirmation action.
///
/// Local state is only mutated by confirmations. An intent either becomes a
/// remote call or is rejected without touching the working copy.
pub fn reduce(state: SessionState, action: Action) -> (SessionState, Effect) {
    if action.is_intent() {
        if let Some(pending) = state.in_flight {
            debug!("ACTION: {:?} refused, {:?} still in flight", action, pending);
            return reject(state, ValidationError::OperationInFlight.into());
        }
    }

    match action {
        Action::Start => handle_start(state),
        Action::AddEvent(draft) => handle_add_event(state, draft),
        Action::DeleteEvent(event_id) => handle_delete_event(state, event_id),
        Action::Finish(result) => handle_finish(state, result),
        Action::Cancel => handle_cancel(state),

        Action::MatchStarted(result) => handle_match_started(state, result),
        Action::EventCreated(result) => handle_event_created(state, result),
        Action::EventDeleted(event_id, result) => handle_event_deleted(state, event_id, result),
        Action::ResultRegistered(result) => handle_result_registered(state, result),
        Action::MatchFinished(result) => handle_match_finished(state, result),
        Action::MatchCancelled(result) => handle_match_cancelled(state, result),
        Action::SnapshotLoaded(result) => handle_snapshot_loaded(state, result),

        Action::Tick(now) => {
            let mut new_state = state;
            new_state.clock_minute = clock::clock_minute(&new_state.game, now);
            (new_state, Effect::None)
        }

        Action::ClearNotification => {
            let mut new_state = state;
            new_state.notification = None;
            (new_state, Effect::None)
        }
    }
}

/// Refuse an action, leaving everything but the notification untouched
fn reject(state: SessionState, error: LiveError) -> (SessionState, Effect) {
    warn!("ACTION: rejected: {}", error);
    let mut new_state = state;
    new_state.set_error_message(error.to_string());
    (new_state, Effect::Rejected(error))
}

/// A remote call failed: the operation is over and nothing is applied
fn remote_failure(state: SessionState, error: ApiError) -> (SessionState, Effect) {
    let mut new_state = state;
    new_state.in_flight = None;
    reject(new_state, LiveError::Remote(error))
}

fn request(state: SessionState, operation: Operation, call: RemoteCall) -> (SessionState, Effect) {
    debug!("ACTION: {:?} -> remote {:?}", operation, call);
    let mut new_state = state;
    new_state.in_flight = Some(operation);
    (new_state, Effect::Remote(call))
}

fn handle_start(state: SessionState) -> (SessionState, Effect) {
    if let Err(e) = lifecycle::check_transition(Transition::Start, state.game.status) {
        return reject(state, e.into());
    }
    let match_id = state.game.id;
    request(state, Operation::Start, RemoteCall::StartMatch(match_id))
}

fn handle_match_started(
    state: SessionState,
    result: Result<Match, ApiError>,
) -> (SessionState, Effect) {
    let checked = result.and_then(|reply| {
        lifecycle::confirm_reply(Transition::Start, &state.game, &reply).map(|_| reply)
    });
    let reply = match checked {
        Ok(reply) => reply,
        Err(e) => return remote_failure(state, e),
    };

    info!("LIFECYCLE: match {} started at {:?}", reply.id, reply.started_at);
    let mut new_state = state;
    new_state.game = reply;
    new_state.in_flight = None;
    // Corrected by the ticker's first tick
    new_state.clock_minute = Some(0);
    new_state.set_status_message("Match started");
    (new_state, Effect::StartClock)
}

fn handle_add_event(state: SessionState, draft: EventDraft) -> (SessionState, Effect) {
    if let Err(e) = lifecycle::check_add_event(state.game.status) {
        return reject(state, e.into());
    }
    match validate_event(&state.game, &state.rosters, &draft, state.clock_minute) {
        Ok(new_event) => {
            let mut new_state = state;
            new_state.last_recorded = None;
            request(new_state, Operation::AddEvent, RemoteCall::CreateEvent(new_event))
        }
        Err(e) => reject(state, e.into()),
    }
}

fn handle_event_created(
    state: SessionState,
    result: Result<MatchEvent, ApiError>,
) -> (SessionState, Effect) {
    let event = match result {
        Ok(event) if event.match_id != state.game.id => {
            return remote_failure(
                state,
                ApiError::MalformedReply(format!(
                    "event {} belongs to match {}",
                    event.id, event.match_id
                )),
            )
        }
        Ok(event) if state.events.contains(event.id) => {
            return remote_failure(
                state,
                ApiError::MalformedReply(format!("event {} is already logged", event.id)),
            )
        }
        Ok(event) => event,
        Err(e) => return remote_failure(state, e),
    };

    debug!("EVENT_LOG: appending {} {} at {}'", event.id, event.event_type, event.minute);
    let mut new_state = state;
    let message = format!("Recorded {} at {}'", event.event_type, event.minute);
    new_state.last_recorded = Some(event.id);
    new_state.events.append(event);
    new_state.recompute();
    new_state.in_flight = None;
    new_state.set_status_message(message);
    (new_state, Effect::None)
}

fn handle_delete_event(state: SessionState, event_id: EventId) -> (SessionState, Effect) {
    if let Err(e) = lifecycle::check_delete_event(state.game.status) {
        return reject(state, e.into());
    }
    if !state.events.contains(event_id) {
        return reject(state, ValidationError::UnknownEvent(event_id).into());
    }
    request(state, Operation::DeleteEvent(event_id), RemoteCall::DeleteEvent(event_id))
}

fn handle_event_deleted(
    state: SessionState,
    event_id: EventId,
    result: Result<(), ApiError>,
) -> (SessionState, Effect) {
    if let Err(e) = result {
        return remote_failure(state, e);
    }

    debug!("EVENT_LOG: removing {}", event_id);
    let mut new_state = state;
    new_state.events.remove(event_id);
    new_state.recompute();
    new_state.in_flight = None;
    new_state.set_status_message(format!("Deleted event {}", event_id));
    (new_state, Effect::None)
}

/// Finish always registers the result first and only then flips the status.
/// A result already confirmed by an earlier, interrupted finish is not sent again.
fn handle_finish(state: SessionState, result: MatchResult) -> (SessionState, Effect) {
    if let Err(e) = lifecycle::check_transition(Transition::Finish, state.game.status) {
        return reject(state, e.into());
    }
    let result = MatchResult {
        match_id: state.game.id,
        ..result
    };
    if let Err(e) = lifecycle::validate_result(&state.game, &result) {
        return reject(state, e.into());
    }

    if state.registered_result.as_ref() == Some(&result) {
        debug!("LIFECYCLE: result already registered, finishing match {}", result.match_id);
        let match_id = state.game.id;
        return request(state, Operation::Finish, RemoteCall::FinishMatch(match_id));
    }
    request(state, Operation::Finish, RemoteCall::RegisterResult(result))
}

fn handle_result_registered(
    state: SessionState,
    result: Result<MatchResult, ApiError>,
) -> (SessionState, Effect) {
    let registered = match result {
        Ok(registered) => registered,
        Err(e) => return remote_failure(state, e),
    };

    info!(
        "LIFECYCLE: result {}-{} registered for match {}",
        registered.home_score, registered.away_score, registered.match_id
    );
    let mut new_state = state;
    new_state.registered_result = Some(registered);
    new_state.in_flight = Some(Operation::Finish);
    let match_id = new_state.game.id;
    (new_state, Effect::Remote(RemoteCall::FinishMatch(match_id)))
}

fn handle_match_finished(
    state: SessionState,
    result: Result<Match, ApiError>,
) -> (SessionState, Effect) {
    let checked = result.and_then(|reply| {
        lifecycle::confirm_reply(Transition::Finish, &state.game, &reply).map(|_| reply)
    });
    let mut reply = match checked {
        Ok(reply) => reply,
        Err(e) => return remote_failure(state, e),
    };
    if reply.started_at.is_none() {
        reply.started_at = state.game.started_at;
    }

    info!("LIFECYCLE: match {} finished", reply.id);
    let mut new_state = state;
    new_state.game = reply;
    new_state.final_result = new_state.registered_result.take();
    new_state.clock_minute = None;
    new_state.in_flight = None;
    new_state.set_status_message("Match finished");
    (new_state, Effect::StopClock)
}

fn handle_cancel(state: SessionState) -> (SessionState, Effect) {
    if let Err(e) = lifecycle::check_transition(Transition::Cancel, state.game.status) {
        return reject(state, e.into());
    }
    let match_id = state.game.id;
    request(state, Operation::Cancel, RemoteCall::CancelMatch(match_id))
}

fn handle_match_cancelled(
    state: SessionState,
    result: Result<Match, ApiError>,
) -> (SessionState, Effect) {
    let checked = result.and_then(|reply| {
        lifecycle::confirm_reply(Transition::Cancel, &state.game, &reply).map(|_| reply)
    });
    let reply = match checked {
        Ok(reply) => reply,
        Err(e) => return remote_failure(state, e),
    };

    info!("LIFECYCLE: match {} cancelled", reply.id);
    let mut new_state = state;
    new_state.game = reply;
    new_state.in_flight = None;
    new_state.set_status_message("Match cancelled");
    (new_state, Effect::None)
}

fn handle_snapshot_loaded(
    state: SessionState,
    result: Result<Box<Snapshot>, ApiError>,
) -> (SessionState, Effect) {
    let snapshot = match result {
        Ok(snapshot) => *snapshot,
        Err(e) => {
            let error = LiveError::Remote(e);
            let mut new_state = state;
            new_state.set_error_message(format!("Failed to refresh: {}", error));
            return (new_state, Effect::Rejected(error));
        }
    };

    debug!(
        "DATA: refreshed match {} with {} events",
        snapshot.game.id,
        snapshot.events.len()
    );
    let mut new_state = state;
    new_state.apply_snapshot(snapshot);
    if new_state.game.status == MatchStatus::InProgress {
        (new_state, Effect::StartClock)
    } else {
        new_state.clock_minute = None;
        new_state.registered_result = None;
        (new_state, Effect::StopClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, AWAY_FORWARD, AWAY_TEAM_ID, HOME_FORWARD, HOME_TEAM_ID};
    use crate::types::{EventType, Score};
    use chrono::Duration;

    fn scheduled() -> SessionState {
        SessionState::new(fixtures::scheduled_snapshot())
    }

    fn live() -> SessionState {
        SessionState::new(fixtures::live_snapshot())
    }

    fn started_reply(state: &SessionState) -> Match {
        let mut reply = state.game.clone();
        reply.status = MatchStatus::InProgress;
        reply.started_at = Some(fixtures::kickoff());
        reply
    }

    #[test]
    fn test_start_requests_remote_call_without_mutation() {
        let state = scheduled();
        let (new_state, effect) = reduce(state.clone(), Action::Start);

        assert_eq!(new_state.game, state.game);
        assert_eq!(new_state.in_flight, Some(Operation::Start));
        assert!(matches!(effect, Effect::Remote(RemoteCall::StartMatch(id)) if id == state.game.id));
    }

    #[test]
    fn test_start_confirmation_applies_authority_start_time() {
        let (state, _) = reduce(scheduled(), Action::Start);
        let reply = started_reply(&state);
        let (state, effect) = reduce(state, Action::MatchStarted(Ok(reply)));

        assert_eq!(state.game.status, MatchStatus::InProgress);
        assert_eq!(state.game.started_at, Some(fixtures::kickoff()));
        assert!(state.in_flight.is_none());
        assert!(matches!(effect, Effect::StartClock));
    }

    #[test]
    fn test_start_from_non_scheduled_is_rejected() {
        let state = live();
        let (new_state, effect) = reduce(state.clone(), Action::Start);

        assert!(matches!(effect, Effect::Rejected(LiveError::Validation(_))));
        assert_eq!(new_state.game, state.game);
        assert!(new_state.in_flight.is_none());
        assert!(new_state.notification.unwrap().is_error);
    }

    #[test]
    fn test_failed_start_keeps_prior_state() {
        let (state, _) = reduce(scheduled(), Action::Start);
        let (state, effect) = reduce(
            state,
            Action::MatchStarted(Err(ApiError::Transport("timeout".to_string()))),
        );

        assert_eq!(state.game.status, MatchStatus::Scheduled);
        assert!(state.game.started_at.is_none());
        assert!(state.in_flight.is_none());
        assert!(matches!(effect, Effect::Rejected(LiveError::Remote(_))));
    }

    #[test]
    fn test_start_reply_without_start_time_is_refused() {
        let (state, _) = reduce(scheduled(), Action::Start);
        let mut reply = started_reply(&state);
        reply.started_at = None;
        let (state, effect) = reduce(state, Action::MatchStarted(Ok(reply)));

        assert_eq!(state.game.status, MatchStatus::Scheduled);
        assert!(matches!(effect, Effect::Rejected(LiveError::Remote(ApiError::MalformedReply(_)))));
    }

    #[test]
    fn test_add_event_uses_clock_snapshot() {
        let state = live();
        let (state, _) = reduce(state, Action::Tick(fixtures::kickoff() + Duration::seconds(23 * 60 + 5)));
        assert_eq!(state.clock_minute, Some(23));

        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal);
        let (state, effect) = reduce(state, Action::AddEvent(draft));

        match effect {
            Effect::Remote(RemoteCall::CreateEvent(new_event)) => assert_eq!(new_event.minute, 23),
            other => panic!("Expected CreateEvent, got {:?}", other),
        }
        // Nothing is appended before confirmation
        assert_eq!(state.events.len(), fixtures::sample_events().len());
    }

    #[test]
    fn test_event_confirmation_appends_and_rescores() {
        let state = live();
        let before = state.score;
        let draft = EventDraft::new(AWAY_TEAM_ID, AWAY_FORWARD, EventType::Penalty).at_minute(50);
        let (state, effect) = reduce(state, Action::AddEvent(draft));
        let new_event = match effect {
            Effect::Remote(RemoteCall::CreateEvent(e)) => e,
            other => panic!("Expected CreateEvent, got {:?}", other),
        };

        let (state, _) = reduce(state, Action::EventCreated(Ok(new_event.persisted(900))));
        assert!(state.events.contains(900));
        assert_eq!(state.last_recorded, Some(900));
        assert_eq!(state.score, Score::new(before.home, before.away + 1));
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_confirmation_reusing_a_logged_id_is_refused() {
        let state = live();
        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal).at_minute(80);
        let (pending, effect) = reduce(state.clone(), Action::AddEvent(draft));
        let new_event = match effect {
            Effect::Remote(RemoteCall::CreateEvent(e)) => e,
            other => panic!("Expected CreateEvent, got {:?}", other),
        };

        let (after, effect) = reduce(pending, Action::EventCreated(Ok(new_event.persisted(1))));
        assert!(matches!(effect, Effect::Rejected(LiveError::Remote(ApiError::MalformedReply(_)))));
        assert_eq!(after.events, state.events);
        assert_eq!(after.score, state.score);
        assert_eq!(after.last_recorded, None);
        assert!(after.in_flight.is_none());
        assert!(after.notification.unwrap().is_error);
    }

    #[test]
    fn test_failed_event_creation_changes_nothing() {
        let state = live();
        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal).at_minute(5);
        let (pending, _) = reduce(state.clone(), Action::AddEvent(draft));
        let (after, effect) = reduce(
            pending,
            Action::EventCreated(Err(ApiError::Rejected { status: 500, message: None })),
        );

        assert_eq!(after.events, state.events);
        assert_eq!(after.score, state.score);
        assert!(matches!(effect, Effect::Rejected(_)));
    }

    #[test]
    fn test_invalid_draft_is_rejected_locally() {
        let state = live();
        let draft = EventDraft::new(HOME_TEAM_ID, AWAY_FORWARD, EventType::Goal);
        let (state, effect) = reduce(state, Action::AddEvent(draft));

        assert!(matches!(
            effect,
            Effect::Rejected(LiveError::Validation(ValidationError::PlayerNotOnRoster { .. }))
        ));
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_second_intent_while_in_flight_is_refused() {
        let state = live();
        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal).at_minute(5);
        let (state, _) = reduce(state, Action::AddEvent(draft.clone()));
        let (state, effect) = reduce(state, Action::AddEvent(draft));

        assert!(matches!(
            effect,
            Effect::Rejected(LiveError::Validation(ValidationError::OperationInFlight))
        ));
        assert_eq!(state.in_flight, Some(Operation::AddEvent));
    }

    #[test]
    fn test_delete_unknown_event_is_rejected() {
        let (_, effect) = reduce(live(), Action::DeleteEvent(424242));
        assert!(matches!(
            effect,
            Effect::Rejected(LiveError::Validation(ValidationError::UnknownEvent(424242)))
        ));
    }

    #[test]
    fn test_delete_confirmation_removes_and_rescores() {
        let state = live();
        let own_goal = state
            .events
            .iter()
            .find(|e| e.event_type == EventType::OwnGoal)
            .cloned()
            .unwrap();
        let (state, _) = reduce(state, Action::DeleteEvent(own_goal.id));
        let (state, _) = reduce(state, Action::EventDeleted(own_goal.id, Ok(())));

        assert!(!state.events.contains(own_goal.id));
        let expected = crate::live::score::score(&state.events, HOME_TEAM_ID, AWAY_TEAM_ID);
        assert_eq!(state.score, expected);
    }

    #[test]
    fn test_delete_requires_in_progress() {
        let mut state = scheduled();
        state.events.append(fixtures::event(1, HOME_TEAM_ID, HOME_FORWARD, EventType::Goal, 0));
        let (state, effect) = reduce(state, Action::DeleteEvent(1));
        assert!(matches!(effect, Effect::Rejected(_)));
        assert!(state.events.contains(1));
    }

    #[test]
    fn test_finish_registers_result_before_finishing() {
        let state = live();
        let result = lifecycle::result_from_score(&state.game, state.score, None);
        let (state, effect) = reduce(state, Action::Finish(result.clone()));
        assert!(matches!(&effect, Effect::Remote(RemoteCall::RegisterResult(r)) if *r == result));

        let (state, effect) = reduce(state, Action::ResultRegistered(Ok(result.clone())));
        assert!(matches!(effect, Effect::Remote(RemoteCall::FinishMatch(_))));
        assert_eq!(state.game.status, MatchStatus::InProgress);
        assert_eq!(state.in_flight, Some(Operation::Finish));

        let mut reply = state.game.clone();
        reply.status = MatchStatus::Finished;
        let (state, effect) = reduce(state, Action::MatchFinished(Ok(reply)));
        assert_eq!(state.game.status, MatchStatus::Finished);
        assert_eq!(state.final_result, Some(result));
        assert_eq!(state.clock_minute, None);
        assert!(matches!(effect, Effect::StopClock));
    }

    #[test]
    fn test_finish_reply_without_start_time_keeps_known_one() {
        let state = live();
        let started_at = state.game.started_at;
        assert!(started_at.is_some());
        let result = lifecycle::result_from_score(&state.game, state.score, None);
        let (state, _) = reduce(state, Action::Finish(result.clone()));
        let (state, _) = reduce(state, Action::ResultRegistered(Ok(result)));

        let mut reply = state.game.clone();
        reply.status = MatchStatus::Finished;
        reply.started_at = None;
        let (state, _) = reduce(state, Action::MatchFinished(Ok(reply)));
        assert_eq!(state.game.status, MatchStatus::Finished);
        assert_eq!(state.game.started_at, started_at);
    }

    #[test]
    fn test_failed_registration_never_finishes() {
        let state = live();
        let result = lifecycle::result_from_score(&state.game, state.score, None);
        let (state, _) = reduce(state, Action::Finish(result));
        let (state, effect) = reduce(
            state,
            Action::ResultRegistered(Err(ApiError::Transport("reset".to_string()))),
        );

        assert!(matches!(effect, Effect::Rejected(_)));
        assert_eq!(state.game.status, MatchStatus::InProgress);
        assert!(state.registered_result.is_none());
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_retry_after_failed_finish_skips_registration() {
        let state = live();
        let result = lifecycle::result_from_score(&state.game, state.score, None);
        let (state, _) = reduce(state, Action::Finish(result.clone()));
        let (state, _) = reduce(state, Action::ResultRegistered(Ok(result.clone())));
        let (state, _) = reduce(
            state,
            Action::MatchFinished(Err(ApiError::Rejected { status: 503, message: None })),
        );
        assert_eq!(state.game.status, MatchStatus::InProgress);
        assert_eq!(state.registered_result, Some(result.clone()));

        let (_, effect) = reduce(state, Action::Finish(result));
        assert!(matches!(effect, Effect::Remote(RemoteCall::FinishMatch(_))));
    }

    #[test]
    fn test_finish_with_wrong_winner_is_rejected() {
        let state = live();
        let mut result = lifecycle::result_from_score(&state.game, Score::new(3, 0), None);
        result.winner_id = Some(AWAY_TEAM_ID);
        let (state, effect) = reduce(state, Action::Finish(result));
        assert!(matches!(
            effect,
            Effect::Rejected(LiveError::Validation(ValidationError::WinnerMismatch { .. }))
        ));
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_finish_from_scheduled_is_rejected() {
        let state = scheduled();
        let result = lifecycle::result_from_score(&state.game, Score::default(), None);
        let (state, effect) = reduce(state, Action::Finish(result));
        assert!(matches!(effect, Effect::Rejected(LiveError::Validation(_))));
        assert_eq!(state.game.status, MatchStatus::Scheduled);
    }

    #[test]
    fn test_cancel_flow() {
        let (state, effect) = reduce(scheduled(), Action::Cancel);
        assert!(matches!(effect, Effect::Remote(RemoteCall::CancelMatch(_))));
        let mut reply = state.game.clone();
        reply.status = MatchStatus::Cancelled;
        let (state, _) = reduce(state, Action::MatchCancelled(Ok(reply)));
        assert_eq!(state.game.status, MatchStatus::Cancelled);

        let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal);
        let (_, effect) = reduce(state, Action::AddEvent(draft));
        assert!(matches!(effect, Effect::Rejected(_)));
    }

    #[test]
    fn test_tick_is_ignored_while_idle() {
        let (state, _) = reduce(scheduled(), Action::Tick(fixtures::kickoff() + Duration::minutes(10)));
        assert_eq!(state.clock_minute, None);
    }

    #[test]
    fn test_tick_clamps_at_ninety() {
        let (state, _) = reduce(live(), Action::Tick(fixtures::kickoff() + Duration::hours(4)));
        assert_eq!(state.clock_minute, Some(90));
    }

    #[test]
    fn test_snapshot_replaces_working_copy() {
        let state = scheduled();
        let (state, effect) = reduce(
            state,
            Action::SnapshotLoaded(Ok(Box::new(fixtures::live_snapshot()))),
        );
        assert_eq!(state.game.status, MatchStatus::InProgress);
        assert_eq!(state.score, fixtures::sample_score());
        assert!(matches!(effect, Effect::StartClock));
    }

    #[test]
    fn test_snapshot_of_finished_match_stops_clock() {
        let state = live();
        let result = lifecycle::result_from_score(&state.game, state.score, None);
        let (state, _) = reduce(state, Action::Finish(result.clone()));
        let (state, _) = reduce(state, Action::ResultRegistered(Ok(result)));
        let (state, _) = reduce(
            state,
            Action::MatchFinished(Err(ApiError::Transport("timeout".to_string()))),
        );
        let (state, _) = reduce(state, Action::Tick(fixtures::kickoff() + Duration::minutes(70)));
        assert_eq!(state.clock_minute, Some(70));
        assert!(state.registered_result.is_some());

        let mut snapshot = fixtures::live_snapshot();
        snapshot.game.status = MatchStatus::Finished;
        let (state, effect) = reduce(state, Action::SnapshotLoaded(Ok(Box::new(snapshot))));
        assert_eq!(state.game.status, MatchStatus::Finished);
        assert!(matches!(effect, Effect::StopClock));
        assert_eq!(state.clock_minute, None);
        assert_eq!(state.registered_result, None);
    }

    #[test]
    fn test_failed_snapshot_keeps_working_copy() {
        let state = live();
        let (after, effect) = reduce(
            state.clone(),
            Action::SnapshotLoaded(Err(ApiError::Transport("offline".to_string()))),
        );
        assert_eq!(after.events, state.events);
        assert_eq!(after.game, state.game);
        assert!(matches!(effect, Effect::Rejected(_)));
    }

    #[test]
    fn test_clear_notification() {
        let (state, _) = reduce(live(), Action::Start);
        assert!(state.notification.is_some());
        let (state, _) = reduce(state, Action::ClearNotification);
        assert!(state.notification.is_none());
    }
}
