//! Audit trail records.

use super::snapshot::ShiftSnapshot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of mutation an audit entry describes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeType {
    Created,
    Switched,
    Deleted,
    MarkedAsSick,
    UnmarkedAsSick,
    Undo,
    Redo,
}

impl ChangeType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Switched => "switched",
            Self::Deleted => "deleted",
            Self::MarkedAsSick => "markedAsSick",
            Self::UnmarkedAsSick => "unmarkedAsSick",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Who performed a mutation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub display_name: String,
}

impl UserIdentity {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self::new("local", "Local User")
    }
}

/// One append-only audit record.
///
/// Entries are built once through [`ChangeLogEntry::new`] and the `with_*`
/// methods, then handed to the audit log. There is no way to change an
/// entry after it is built.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    user_id: String,
    user_display_name: String,
    change_type: ChangeType,
    scheduled_shift_date: NaiveDate,
    old_shift_snapshot: Option<ShiftSnapshot>,
    new_shift_snapshot: Option<ShiftSnapshot>,
    reason: Option<String>,
}

impl ChangeLogEntry {
    pub fn new(
        change_type: ChangeType,
        scheduled_shift_date: NaiveDate,
        user: &UserIdentity,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            user_id: user.user_id.clone(),
            user_display_name: user.display_name.clone(),
            change_type,
            scheduled_shift_date,
            old_shift_snapshot: None,
            new_shift_snapshot: None,
            reason: None,
        }
    }

    pub fn with_old(mut self, snapshot: Option<ShiftSnapshot>) -> Self {
        self.old_shift_snapshot = snapshot;
        self
    }

    pub fn with_new(mut self, snapshot: Option<ShiftSnapshot>) -> Self {
        self.new_shift_snapshot = snapshot;
        self
    }

    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_display_name(&self) -> &str {
        &self.user_display_name
    }

    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }

    pub fn scheduled_shift_date(&self) -> NaiveDate {
        self.scheduled_shift_date
    }

    pub fn old_shift_snapshot(&self) -> Option<&ShiftSnapshot> {
        self.old_shift_snapshot.as_ref()
    }

    pub fn new_shift_snapshot(&self) -> Option<&ShiftSnapshot> {
        self.new_shift_snapshot.as_ref()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Human-readable one-line description.
    ///
    /// ```rust
    /// use chrono::{NaiveDate, Utc};
    /// use shiftledger::model::{ChangeLogEntry, ChangeType, ShiftDuration, ShiftSnapshot, ShiftType, UserIdentity};
    ///
    /// let morning = ShiftType::new("M", "Morning", "", ShiftDuration::AllDay);
    /// let evening = ShiftType::new("E", "Evening", "", ShiftDuration::AllDay);
    /// let date = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
    ///
    /// let entry = ChangeLogEntry::new(ChangeType::Switched, date, &UserIdentity::new("u1", "Sam"), Utc::now())
    ///     .with_old(Some(ShiftSnapshot::capture(&morning)))
    ///     .with_new(Some(ShiftSnapshot::capture(&evening)))
    ///     .with_reason(Some("coverage".to_string()));
    ///
    /// assert_eq!(entry.summary(), "Sam switched 2026-11-02: M Morning -> E Evening (coverage)");
    /// ```
    pub fn summary(&self) -> String {
        let label = |s: Option<&ShiftSnapshot>| s.map(ShiftSnapshot::label);
        let change = match (
            label(self.old_shift_snapshot()),
            label(self.new_shift_snapshot()),
        ) {
            (Some(old), Some(new)) => format!("{old} -> {new}"),
            (Some(old), None) => old,
            (None, Some(new)) => new,
            (None, None) => "no shift".to_string(),
        };
        let mut line = format!(
            "{} {} {}: {}",
            self.user_display_name, self.change_type, self.scheduled_shift_date, change
        );
        if let Some(reason) = &self.reason {
            line.push_str(&format!(" ({reason})"));
        }
        line
    }
}
