//! Data model shared by the engine, the stores and the checkpoint format.
//!
//! Live catalog records (`ShiftType`) are mutable; everything that ends up
//! in history (`ShiftSnapshot`, `ChangeLogEntry`, `ShiftSwitchOperation`)
//! is a value copy that is never edited after construction.

mod change_log;
mod operation;
mod scheduled;
mod shift_type;
mod snapshot;

pub use change_log::{ChangeLogEntry, ChangeType, UserIdentity};
pub use operation::{Direction, ShiftSwitchOperation};
pub use scheduled::ScheduledShift;
pub use shift_type::{Location, ShiftDuration, ShiftType};
pub use snapshot::{LocationSnapshot, ShiftSnapshot};
