//! Property tests for the timer state machine.

use proptest::prelude::*;

use pomodoro_core::task::TaskLedger;
use pomodoro_core::{Mode, Settings, TimerEngine};

#[derive(Debug, Clone)]
enum Op {
    Start,
    Pause,
    Reset,
    Switch(Mode),
    Ticks(u16),
    Apply(u32, u32, u32),
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Work),
        Just(Mode::ShortBreak),
        Just(Mode::LongBreak)
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        Just(Op::Pause),
        Just(Op::Reset),
        arb_mode().prop_map(Op::Switch),
        (1u16..400).prop_map(Op::Ticks),
        (0u32..4, 0u32..4, 0u32..4).prop_map(|(w, s, l)| Op::Apply(w, s, l)),
    ]
}

fn apply(engine: &mut TimerEngine, op: &Op) {
    match op {
        Op::Start => {
            engine.start();
        }
        Op::Pause => {
            engine.pause();
        }
        Op::Reset => {
            engine.reset();
        }
        Op::Switch(mode) => {
            engine.switch_mode(*mode);
        }
        Op::Ticks(n) => {
            for _ in 0..*n {
                engine.tick();
            }
        }
        Op::Apply(w, s, l) => {
            engine.apply_settings(Settings::new(*w, *s, *l));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn reset_never_changes_mode_or_cycles(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut engine = TimerEngine::new(Settings::new(1, 1, 2));
        for op in &ops {
            apply(&mut engine, op);
        }
        let before = engine.state();
        engine.reset();
        prop_assert_eq!(engine.mode(), before.mode);
        prop_assert_eq!(engine.completed_work_cycles(), before.completed_work_cycles);
        prop_assert!(!engine.is_running());
        prop_assert_eq!(engine.remaining_secs(), engine.total_secs());
    }

    #[test]
    fn switch_mode_always_pauses(ops in prop::collection::vec(arb_op(), 0..40), target in arb_mode()) {
        let mut engine = TimerEngine::new(Settings::new(1, 1, 1));
        for op in &ops {
            apply(&mut engine, op);
        }
        engine.switch_mode(target);
        prop_assert!(!engine.is_running());
        prop_assert_eq!(engine.mode(), target);
        prop_assert_eq!(engine.remaining_secs(), engine.total_secs());
    }

    #[test]
    fn remaining_never_exceeds_duration_nor_hits_zero(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut engine = TimerEngine::new(Settings::new(1, 2, 3));
        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(engine.remaining_secs() >= 1);
            prop_assert!(engine.remaining_secs() <= engine.total_secs());
        }
    }

    #[test]
    fn cycles_only_grow_on_work_completion(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut engine = TimerEngine::new(Settings::new(1, 1, 1));
        for op in &ops {
            let before = engine.state();
            apply(&mut engine, op);
            let after = engine.state();
            prop_assert!(after.completed_work_cycles >= before.completed_work_cycles);
        }
    }

    #[test]
    fn blank_names_never_add_tasks(name in "[ \t\n]{0,8}") {
        let mut ledger = TaskLedger::new();
        prop_assert!(ledger.add_task(&name).is_none());
        prop_assert!(ledger.is_empty());
    }
}
