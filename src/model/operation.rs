//! Reversible switch records kept on the undo and redo stacks.

use super::snapshot::ShiftSnapshot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which way an operation is being replayed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Restore `old_snapshot`.
    Backward,
    /// Reapply `new_snapshot`.
    Forward,
}

/// Undo/redo stack element for one successful switch.
///
/// Holds snapshots rather than live shift types so replay never depends
/// on the catalog. `change_log_entry_id` points back at the `switched`
/// entry that created the operation; it is a plain id, not ownership.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShiftSwitchOperation {
    pub id: Uuid,
    pub event_identifier: String,
    pub scheduled_date: NaiveDate,
    pub old_snapshot: ShiftSnapshot,
    pub new_snapshot: ShiftSnapshot,
    pub change_log_entry_id: Uuid,
    pub reason: Option<String>,
}

impl ShiftSwitchOperation {
    /// Snapshot the store currently reflects and the one to apply, for the
    /// given direction.
    pub fn endpoints(&self, direction: Direction) -> (&ShiftSnapshot, &ShiftSnapshot) {
        match direction {
            Direction::Backward => (&self.new_snapshot, &self.old_snapshot),
            Direction::Forward => (&self.old_snapshot, &self.new_snapshot),
        }
    }

    /// Label for undo/redo menu items, e.g. `Switch 2026-11-02: Morning -> Evening`.
    pub fn describe(&self) -> String {
        format!(
            "Switch {}: {} -> {}",
            self.scheduled_date,
            self.old_snapshot.title(),
            self.new_snapshot.title()
        )
    }
}
