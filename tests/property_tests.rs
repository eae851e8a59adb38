//! Property-based tests for the undo/redo history.
//!
//! These tests use proptest to drive the engine with random sequences of
//! switches, undos and redos and check the history invariants after every
//! step.

mod common;

use common::*;
use proptest::prelude::*;
use shiftledger::engine::BoundedStack;
use shiftledger::model::{ScheduledShift, ShiftType};

#[derive(Clone, Debug)]
enum Action {
    Switch { shift: usize, to: usize },
    Undo,
    Redo,
}

prop_compose! {
    fn arbitrary_action()(variant in 0..4u8, shift in 0..3usize, to in 0..3usize) -> Action {
        match variant {
            0 | 1 => Action::Switch { shift, to },
            2 => Action::Undo,
            _ => Action::Redo,
        }
    }
}

fn catalog() -> [ShiftType; 3] {
    [morning(), evening(), night()]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

/// Re-read the type the store holds so the next switch sees the live value.
async fn refresh(engine: &TestEngine, shift: &ScheduledShift) -> ScheduledShift {
    let stored = engine
        .event_store()
        .inner
        .event(&shift.event_identifier)
        .await
        .unwrap();
    ScheduledShift::new(shift.event_identifier.clone(), shift.date, stored.shift_type)
}

async fn stored_titles(engine: &TestEngine, shifts: &[ScheduledShift]) -> Vec<String> {
    let mut titles = Vec::with_capacity(shifts.len());
    for shift in shifts {
        titles.push(stored_title(engine, shift).await);
    }
    titles
}

proptest! {
    #[test]
    fn bounded_stack_keeps_newest(items in prop::collection::vec(any::<u16>(), 0..80), cap in 1..20usize) {
        let mut stack = BoundedStack::new(cap);
        for item in &items {
            stack.push(*item);
            prop_assert!(stack.len() <= cap);
        }

        let kept = items.len().min(cap);
        prop_assert_eq!(stack.to_vec(), items[items.len() - kept..].to_vec());
    }

    #[test]
    fn history_invariants_hold_for_any_sequence(
        actions in prop::collection::vec(arbitrary_action(), 1..40),
        capacity in 1..6usize,
    ) {
        runtime().block_on(async {
            let engine = engine(capacity);
            let catalog = catalog();
            let mut shifts = Vec::new();
            for offset in 1..=3 {
                shifts.push(schedule(&engine, day_offset(offset), &catalog[0]).await);
            }

            let mut expected_undo = 0usize;
            let mut expected_redo = 0usize;
            let mut last_audit = 0usize;

            for action in actions {
                match action {
                    Action::Switch { shift, to } => {
                        let current = refresh(&engine, &shifts[shift]).await;
                        let result = engine.switch_shift(&current, &catalog[to], None).await;
                        if current.shift_type_id() == Some(catalog[to].id) {
                            prop_assert!(result.is_err());
                        } else {
                            prop_assert!(result.is_ok());
                            expected_undo = (expected_undo + 1).min(capacity);
                            expected_redo = 0;
                        }
                    }
                    Action::Undo => {
                        let result = engine.undo().await;
                        prop_assert_eq!(result.is_ok(), expected_undo > 0);
                        if result.is_ok() {
                            expected_undo -= 1;
                            expected_redo += 1;
                        }
                    }
                    Action::Redo => {
                        let result = engine.redo().await;
                        prop_assert_eq!(result.is_ok(), expected_redo > 0);
                        if result.is_ok() {
                            expected_redo -= 1;
                            expected_undo += 1;
                        }
                    }
                }

                let status = engine.status();
                prop_assert_eq!(status.undo_depth, expected_undo);
                prop_assert_eq!(status.redo_depth, expected_redo);
                prop_assert!(status.undo_depth <= capacity);
                prop_assert!(status.redo_depth <= capacity);

                let audit = audit_len(&engine).await;
                prop_assert!(audit >= last_audit);
                last_audit = audit;
            }
            Ok(())
        })?;
    }

    #[test]
    fn undo_all_then_redo_all_restores_the_store(
        targets in prop::collection::vec((0..3usize, 1..3usize), 1..12),
    ) {
        runtime().block_on(async {
            let engine = engine(50);
            let catalog = catalog();
            let mut shifts = Vec::new();
            for offset in 1..=3 {
                shifts.push(schedule(&engine, day_offset(offset), &catalog[0]).await);
            }

            // Stepping by 1 or 2 modulo 3 never lands on the current type
            let mut position = [0usize; 3];
            for (shift, step) in &targets {
                let current = refresh(&engine, &shifts[*shift]).await;
                position[*shift] = (position[*shift] + step) % 3;
                engine
                    .switch_shift(&current, &catalog[position[*shift]], None)
                    .await
                    .unwrap();
            }

            let before = stored_titles(&engine, &shifts).await;
            let (undo_before, _) = engine.stacks().await;

            for _ in 0..targets.len() {
                engine.undo().await.unwrap();
            }
            prop_assert!(!engine.can_undo());
            prop_assert_eq!(engine.status().redo_depth, targets.len());
            prop_assert_eq!(
                stored_titles(&engine, &shifts).await,
                vec!["Morning".to_string(); 3]
            );

            for _ in 0..targets.len() {
                engine.redo().await.unwrap();
            }
            prop_assert!(!engine.can_redo());
            prop_assert_eq!(stored_titles(&engine, &shifts).await, before);
            prop_assert_eq!(engine.stacks().await.0, undo_before);
            prop_assert_eq!(audit_len(&engine).await, targets.len() * 3);
            Ok(())
        })?;
    }
}
