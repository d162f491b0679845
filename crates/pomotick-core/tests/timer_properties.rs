//! Property and scenario tests for the timer engine.

use pomotick_core::{format_duration, Event, PhaseList, TimerEngine, TimerError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Start,
    Stop,
    Tick,
    Switch(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        1 => Just(Op::Stop),
        8 => Just(Op::Tick),
        1 => (0usize..6).prop_map(Op::Switch),
    ]
}

fn apply(engine: &mut TimerEngine, op: &Op) {
    match op {
        Op::Start => {
            engine.start();
        }
        Op::Stop => {
            engine.stop();
        }
        Op::Tick => {
            engine.tick();
        }
        Op::Switch(i) => {
            let _ = engine.switch_phase(*i);
        }
    }
}

fn short_phases() -> PhaseList {
    // One-minute phases keep the break boundary reachable in short runs.
    PhaseList::from_durations(1, 1, 2).unwrap()
}

proptest! {
    #[test]
    fn tick_adds_one_only_while_running(ops in prop::collection::vec(op(), 0..300)) {
        let mut engine = TimerEngine::new(short_phases());
        for op in &ops {
            let before = engine.elapsed_secs();
            let running = engine.is_running();
            apply(&mut engine, op);
            if let Op::Tick = op {
                let expected = if running { before + 1 } else { before };
                prop_assert_eq!(engine.elapsed_secs(), expected);
            }
        }
    }

    #[test]
    fn on_break_iff_elapsed_reaches_total(ops in prop::collection::vec(op(), 0..300)) {
        let mut engine = TimerEngine::new(short_phases());
        for op in &ops {
            apply(&mut engine, op);
            let total = engine.active_phase().duration_min * 60;
            prop_assert_eq!(engine.is_on_break(), engine.elapsed_secs() >= total);
            prop_assert_eq!(engine.remaining_secs(), total.saturating_sub(engine.elapsed_secs()));
            prop_assert!(engine.active_phase_index() < engine.phases().len());
        }
    }

    #[test]
    fn valid_switch_always_resets(ops in prop::collection::vec(op(), 0..200), target in 0usize..3) {
        let mut engine = TimerEngine::new(short_phases());
        for op in &ops {
            apply(&mut engine, op);
        }
        engine.switch_phase(target).unwrap();
        prop_assert_eq!(engine.active_phase_index(), target);
        prop_assert_eq!(engine.elapsed_secs(), 0);
        prop_assert!(engine.is_running());
        prop_assert!(!engine.is_on_break());
    }

    #[test]
    fn invalid_switch_changes_nothing(ops in prop::collection::vec(op(), 0..200), target in 3usize..10_000) {
        let mut engine = TimerEngine::new(short_phases());
        for op in &ops {
            apply(&mut engine, op);
        }
        let before = engine.clone();
        let is_out_of_range = matches!(
            engine.switch_phase(target),
            Err(TimerError::OutOfRange { len: 3, .. })
        );
        prop_assert!(is_out_of_range);
        prop_assert_eq!(engine, before);
    }

    #[test]
    fn format_duration_parts_round_trip(secs in 0u64..1_000_000) {
        let text = format_duration(secs);
        let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[1] < 60 && parts[2] < 60);
        prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
        prop_assert!(text.split(':').all(|p| p.len() >= 2));
    }
}

#[test]
fn format_duration_examples() {
    assert_eq!(format_duration(0), "00:00:00");
    assert_eq!(format_duration(65), "00:01:05");
    assert_eq!(format_duration(3661), "01:01:01");
}

#[test]
fn focus_phase_ends_after_1500_ticks() {
    let mut engine = TimerEngine::new(PhaseList::standard());
    engine.start();
    for _ in 0..1500 {
        engine.tick();
    }
    assert!(engine.is_on_break());
    assert_eq!(engine.remaining_secs(), 0);
}

#[test]
fn short_break_scenario() {
    let mut engine = TimerEngine::new(PhaseList::standard());
    engine.switch_phase(1).unwrap();
    for _ in 0..299 {
        engine.tick();
    }
    assert_eq!(engine.remaining_secs(), 1);
    assert!(!engine.is_on_break());

    let event = engine.tick();
    assert!(matches!(event, Some(Event::BreakReached { phase_index: 1, .. })));
    assert_eq!(engine.remaining_secs(), 0);
    assert!(engine.is_on_break());
}

#[test]
fn stopped_timer_ignores_ticks() {
    let mut engine = TimerEngine::new(PhaseList::standard());
    engine.start();
    engine.tick();
    engine.stop();
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.elapsed_secs(), 1);
}

#[test]
fn switch_to_phase_five_is_out_of_range() {
    let mut engine = TimerEngine::new(PhaseList::standard());
    let before = engine.clone();
    assert_eq!(
        engine.switch_phase(5),
        Err(TimerError::OutOfRange { index: 5, len: 3 })
    );
    assert_eq!(engine, before);
}

#[test]
fn progress_goes_negative_past_the_boundary() {
    let mut engine = TimerEngine::new(PhaseList::standard());
    engine.switch_phase(1).unwrap();
    for _ in 0..600 {
        engine.tick();
    }
    assert_eq!(engine.progress_fraction(), -1.0);
    assert_eq!(engine.remaining_secs(), 0);
}
