use criterion::{black_box, criterion_group, criterion_main, Criterion};
use livematch::fixtures::{self, AWAY_FORWARD, AWAY_TEAM_ID, HOME_FORWARD, HOME_TEAM_ID};
use livematch::live::reducer::reduce;
use livematch::live::score::{discipline, score};
use livematch::live::validation::EventDraft;
use livematch::live::{Action, SessionState};
use livematch::types::{EventType, MatchEvent};

/// Build a long event log: a full match with several events per minute
fn create_sample_events(count: usize) -> Vec<MatchEvent> {
    let types = [
        EventType::Goal,
        EventType::YellowCard,
        EventType::OwnGoal,
        EventType::Substitution,
        EventType::Penalty,
        EventType::RedCard,
    ];
    (0..count)
        .map(|i| {
            let (team, player) = if i % 2 == 0 {
                (HOME_TEAM_ID, HOME_FORWARD)
            } else {
                (AWAY_TEAM_ID, AWAY_FORWARD)
            };
            fixtures::event(i as i64 + 1, team, player, types[i % types.len()], (i % 91) as u32)
        })
        .collect()
}

fn live_state(events: Vec<MatchEvent>) -> SessionState {
    let mut snapshot = fixtures::live_snapshot();
    snapshot.events = events;
    SessionState::new(snapshot)
}

/// Benchmark score aggregation over logs of different sizes
fn bench_score_aggregation(c: &mut Criterion) {
    let short = create_sample_events(20);
    let long = create_sample_events(2_000);

    let mut group = c.benchmark_group("score");

    group.bench_function("score_20_events", |b| {
        b.iter(|| score(black_box(&short), HOME_TEAM_ID, AWAY_TEAM_ID))
    });

    group.bench_function("score_2000_events", |b| {
        b.iter(|| score(black_box(&long), HOME_TEAM_ID, AWAY_TEAM_ID))
    });

    group.bench_function("discipline_2000_events", |b| {
        b.iter(|| discipline(black_box(&long), HOME_TEAM_ID, AWAY_TEAM_ID))
    });

    group.finish();
}

/// Benchmark reducer action dispatch
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = live_state(create_sample_events(200));
    let now = fixtures::kickoff() + chrono::Duration::minutes(37);

    let mut group = c.benchmark_group("reducer");

    group.bench_function("tick", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(state.clone()), black_box(Action::Tick(now)));
            new_state
        })
    });

    group.bench_function("add_event_intent", |b| {
        b.iter(|| {
            let draft = EventDraft::new(HOME_TEAM_ID, HOME_FORWARD, EventType::Goal);
            let (new_state, _effect) = reduce(black_box(state.clone()), black_box(Action::AddEvent(draft)));
            new_state
        })
    });

    let confirmed = fixtures::event(9_999, AWAY_TEAM_ID, AWAY_FORWARD, EventType::Goal, 80);
    group.bench_function("event_confirmation_rescore", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::EventCreated(Ok(confirmed.clone()))),
            );
            new_state
        })
    });

    group.finish();
}

/// Benchmark state cloning (to measure overhead)
fn bench_state_operations(c: &mut Criterion) {
    let state = live_state(create_sample_events(200));

    let mut group = c.benchmark_group("state_operations");

    group.bench_function("clone_full_state", |b| b.iter(|| black_box(state.clone())));

    group.bench_function("timeline_200_events", |b| {
        b.iter(|| black_box(state.events.timeline().len()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_score_aggregation,
    bench_reducer_dispatch,
    bench_state_operations
);
criterion_main!(benches);
