use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use swish::timer::Ticker;
use swish::types::{Difficulty, FocusArea};
use swish::{AppState, Catalog, Event, Phase, PlanParams};
use tokio::sync::mpsc::unbounded_channel;

fn intermediate_all_around() -> AppState {
    AppState::new(
        Catalog::sample(),
        PlanParams {
            difficulty: Difficulty::Intermediate,
            focus_area: FocusArea::AllAround,
            ..PlanParams::default()
        },
    )
}

#[test]
fn first_exercise_duration_moves_to_second() {
    let mut state = intermediate_all_around();
    state.generate(&mut StdRng::seed_from_u64(10)).unwrap();
    state.start_selected().unwrap();

    let generation = state.player.generation();
    let first = state.player.session().unwrap().current_exercise().unwrap().duration;
    for _ in 0..first {
        assert!(state.tick(generation).is_empty());
    }

    let session = state.player.session().unwrap();
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.elapsed(), 0);
    assert!(session.is_running());
}

#[test]
fn whole_plan_plays_out_to_one_completion() {
    let mut state = intermediate_all_around();
    state.generate(&mut StdRng::seed_from_u64(10)).unwrap();
    state.start_selected().unwrap();

    let generation = state.player.generation();
    let total = state.selected().unwrap().duration;

    let mut events = Vec::new();
    for _ in 0..total + 50 {
        events.extend(state.tick(generation));
    }

    assert_eq!(events, vec![Event::WorkoutComplete]);
    let session = state.player.session().unwrap();
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.current_index(), 3);
    assert_eq!(session.elapsed(), session.current_exercise().unwrap().duration);
    assert!(!session.is_running());
}

#[tokio::test(start_paused = true)]
async fn switching_plans_drops_ticks_from_the_old_timer() {
    let mut state = intermediate_all_around();
    let mut rng = StdRng::seed_from_u64(1);
    state.generate(&mut rng).unwrap();
    state.generate(&mut rng).unwrap();

    let (tx, mut rx) = unbounded_channel();
    let mut ticker = Ticker::new(Duration::from_secs(1), tx);

    let first = state.plans()[0].clone();
    state.start(first);
    ticker.restart(state.player.generation());
    tokio::time::sleep(Duration::from_millis(3500)).await;

    // Switch without draining: three old ticks are still queued.
    let second = state.plans()[1].clone();
    state.start(second.clone());
    ticker.restart(state.player.generation());
    tokio::time::sleep(Duration::from_millis(2500)).await;
    ticker.cancel();

    while let Ok(tick) = rx.try_recv() {
        state.tick(tick.generation);
    }

    let session = state.player.session().unwrap();
    assert_eq!(session.plan().id, second.id);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.elapsed(), 2);
}

#[tokio::test(start_paused = true)]
async fn paused_session_ignores_live_ticks() {
    let mut state = intermediate_all_around();
    state.generate(&mut StdRng::seed_from_u64(6)).unwrap();
    state.start_selected().unwrap();

    let (tx, mut rx) = unbounded_channel();
    let mut ticker = Ticker::new(Duration::from_secs(1), tx);
    ticker.restart(state.player.generation());

    state.toggle_run();
    tokio::time::sleep(Duration::from_millis(5500)).await;
    ticker.cancel();

    while let Ok(tick) = rx.try_recv() {
        state.tick(tick.generation);
    }

    let session = state.player.session().unwrap();
    assert_eq!(session.elapsed(), 0);
    assert!(!session.is_running());
    assert_eq!(session.phase(), Phase::Active);
}
