//! Live shift-type records as held by the type catalog.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a shift of a given type lasts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShiftDuration {
    AllDay,
    Scheduled { start: NaiveTime, end: NaiveTime },
}

impl ShiftDuration {
    /// Short label such as `All day` or `08:00-16:00`.
    pub fn label(&self) -> String {
        match self {
            Self::AllDay => "All day".to_string(),
            Self::Scheduled { start, end } => {
                format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
            }
        }
    }

    /// Overnight shifts end on the following day.
    pub fn crosses_midnight(&self) -> bool {
        matches!(self, Self::Scheduled { start, end } if end <= start)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A shift type owned by the external catalog.
///
/// Catalog entries are mutable and may be edited or deleted after shifts
/// referencing them were scheduled, which is why history never stores a
/// `ShiftType` directly; see [`crate::model::ShiftSnapshot`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShiftType {
    pub id: Uuid,
    pub symbol: String,
    pub title: String,
    pub description: String,
    pub duration: ShiftDuration,
    pub location: Option<Location>,
}

impl ShiftType {
    /// Create a shift type with a fresh identity and no location.
    pub fn new(
        symbol: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: ShiftDuration,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            title: title.into(),
            description: description.into(),
            duration,
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}
