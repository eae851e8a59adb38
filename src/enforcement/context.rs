//! Context provided to switch checks.

use crate::model::{ScheduledShift, ShiftType};
use chrono::NaiveDate;

/// Everything a switch check may look at.
#[derive(Clone, Debug)]
pub struct SwitchContext<'a> {
    pub shift: &'a ScheduledShift,
    pub new_type: &'a ShiftType,
    pub reason: Option<&'a str>,
    pub today: NaiveDate,
}

impl SwitchContext<'_> {
    /// Days between today and the shift; negative for past shifts (pure).
    pub fn days_until(&self) -> i64 {
        self.shift.date.signed_duration_since(self.today).num_days()
    }
}
