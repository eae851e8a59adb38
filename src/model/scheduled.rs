//! Shifts as they sit on the calendar.

use super::shift_type::ShiftType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shift placed on a day of the calendar.
///
/// `event_identifier` is the durable handle into the external event store;
/// `shift_type` is a convenience binding that goes stale (`None`) once the
/// catalog entry it pointed to is deleted.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub id: Uuid,
    pub event_identifier: String,
    pub date: NaiveDate,
    pub shift_type: Option<ShiftType>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_sick: bool,
}

impl ScheduledShift {
    pub fn new(event_identifier: impl Into<String>, date: NaiveDate, shift_type: ShiftType) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_identifier: event_identifier.into(),
            date,
            shift_type: Some(shift_type),
            notes: None,
            is_sick: false,
        }
    }

    pub fn shift_type_id(&self) -> Option<Uuid> {
        self.shift_type.as_ref().map(|t| t.id)
    }
}
