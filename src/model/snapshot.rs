//! Immutable point-in-time copies of shift types.

use super::shift_type::{Location, ShiftDuration, ShiftType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Location fields captured alongside a shift type.
///
/// `id` is absent only in snapshots written before location identity was
/// captured; such locations are rebuilt with a fresh id.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LocationSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
}

impl From<&Location> for LocationSnapshot {
    fn from(location: &Location) -> Self {
        Self {
            id: Some(location.id),
            name: location.name.clone(),
            address: location.address.clone(),
        }
    }
}

/// Full value copy of a [`ShiftType`] at capture time.
///
/// Fields are private and there are no setters: once captured, a snapshot
/// never changes, so later edits or deletions of the live catalog entry
/// cannot rewrite history or break undo/redo.
///
/// # Example
///
/// ```rust
/// use shiftledger::model::{ShiftDuration, ShiftSnapshot, ShiftType};
///
/// let mut morning = ShiftType::new("M", "Morning", "Early shift", ShiftDuration::AllDay);
/// let snapshot = ShiftSnapshot::capture(&morning);
///
/// morning.title = "Renamed".to_string();
/// assert_eq!(snapshot.title(), "Morning");
/// assert_eq!(snapshot.shift_type_id(), morning.id);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShiftSnapshot {
    shift_type_id: Uuid,
    symbol: String,
    duration: ShiftDuration,
    title: String,
    description: String,
    location: Option<LocationSnapshot>,
}

impl ShiftSnapshot {
    pub fn capture(shift_type: &ShiftType) -> Self {
        Self {
            shift_type_id: shift_type.id,
            symbol: shift_type.symbol.clone(),
            duration: shift_type.duration,
            title: shift_type.title.clone(),
            description: shift_type.description.clone(),
            location: shift_type.location.as_ref().map(LocationSnapshot::from),
        }
    }

    /// Rebuild a shift type carrying the captured identity and fields.
    pub fn to_shift_type(&self) -> ShiftType {
        ShiftType {
            id: self.shift_type_id,
            symbol: self.symbol.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            duration: self.duration,
            location: self.location.as_ref().map(|loc| Location {
                id: loc.id.unwrap_or_else(Uuid::new_v4),
                name: loc.name.clone(),
                address: loc.address.clone(),
            }),
        }
    }

    pub fn shift_type_id(&self) -> Uuid {
        self.shift_type_id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn duration(&self) -> ShiftDuration {
        self.duration
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<&LocationSnapshot> {
        self.location.as_ref()
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.name.as_str())
    }

    pub fn location_address(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.address.as_str())
    }

    /// `symbol title` label used in audit summaries.
    pub fn label(&self) -> String {
        format!("{} {}", self.symbol, self.title)
    }
}
