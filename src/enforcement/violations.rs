//! Switch precondition violations.

use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a switch request is rejected before the event store is touched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SwitchViolation {
    #[error("Shift already has the requested type")]
    SameShiftType,

    #[error("Cannot switch a shift dated {date} (today is {today})")]
    PastDate { date: NaiveDate, today: NaiveDate },

    #[error("Current shift type is unresolved; the switch could not be undone")]
    UnresolvedShiftType,

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
