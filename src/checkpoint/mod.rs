//! Checkpoint and restore of the undo/redo stacks.
//!
//! Both stacks are written as one versioned checkpoint so a crash can
//! never leave undo and redo out of step with each other. Checkpoints
//! can be encoded as JSON (readable) or bincode (compact); decoding
//! detects which one it was given.

use crate::model::ShiftSwitchOperation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use uuid::Uuid;

pub mod error;
mod store;

pub use error::PersistenceError;
pub use store::{atomic_write, FileStackStore, MemoryStackStore, StackStore};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Encoding used when writing checkpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointFormat {
    #[default]
    Json,
    Binary,
}

/// Serializable copy of both stacks, bottom of each stack first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Stack capacity in force when written
    pub capacity: usize,

    pub undo: Vec<ShiftSwitchOperation>,

    pub redo: Vec<ShiftSwitchOperation>,
}

impl StackCheckpoint {
    pub fn new(
        undo: Vec<ShiftSwitchOperation>,
        redo: Vec<ShiftSwitchOperation>,
        capacity: usize,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp,
            capacity,
            undo,
            redo,
        }
    }

    pub fn encode(&self, format: CheckpointFormat) -> Result<Vec<u8>, PersistenceError> {
        match format {
            CheckpointFormat::Json => serde_json::to_vec_pretty(self)
                .map_err(|e| PersistenceError::SerializationFailed(e.to_string())),
            CheckpointFormat::Binary => bincode::serialize(self)
                .map_err(|e| PersistenceError::SerializationFailed(e.to_string())),
        }
    }

    /// Decode and validate a checkpoint written in either format.
    pub fn decode(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let checkpoint: Self = if looks_like_json(bytes) {
            serde_json::from_slice(bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?
        } else {
            bincode::deserialize(bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?
        };
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    fn validate(&self) -> Result<(), PersistenceError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        // An operation lives on exactly one stack, exactly once
        let mut seen = HashSet::new();
        for op in self.undo.iter().chain(&self.redo) {
            if !seen.insert(op.id) {
                return Err(PersistenceError::ValidationFailed(format!(
                    "operation {} appears more than once",
                    op.id
                )));
            }
        }
        Ok(())
    }
}

fn looks_like_json(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{')
}

/// Saves and restores both stacks through a [`StackStore`].
///
/// Encoding happens on the calling task; the store's blocking read or
/// write runs on tokio's blocking pool.
#[derive(Clone)]
pub struct StackPersistence {
    store: Arc<dyn StackStore>,
    format: CheckpointFormat,
}

impl StackPersistence {
    pub fn new(store: Box<dyn StackStore>, format: CheckpointFormat) -> Self {
        Self {
            store: Arc::from(store),
            format,
        }
    }

    pub fn format(&self) -> CheckpointFormat {
        self.format
    }

    /// Write both stacks as one checkpoint.
    pub async fn save_stacks(
        &self,
        undo: &[ShiftSwitchOperation],
        redo: &[ShiftSwitchOperation],
        capacity: usize,
        timestamp: DateTime<Utc>,
    ) -> Result<(), PersistenceError> {
        let checkpoint = StackCheckpoint::new(undo.to_vec(), redo.to_vec(), capacity, timestamp);
        let bytes = checkpoint.encode(self.format)?;

        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.write(&bytes))
            .await
            .map_err(|e| PersistenceError::Io(io::Error::other(e)))?
    }

    /// Last checkpoint written, `None` on first run.
    pub async fn load_checkpoint(&self) -> Result<Option<StackCheckpoint>, PersistenceError> {
        let store = Arc::clone(&self.store);
        let bytes = tokio::task::spawn_blocking(move || store.read())
            .await
            .map_err(|e| PersistenceError::Io(io::Error::other(e)))??;

        bytes.map(|b| StackCheckpoint::decode(&b)).transpose()
    }

    /// Both stacks, bottom first. A missing checkpoint yields two empty
    /// stacks; a corrupt one is an error.
    pub async fn load_stacks(
        &self,
    ) -> Result<(Vec<ShiftSwitchOperation>, Vec<ShiftSwitchOperation>), PersistenceError> {
        Ok(self
            .load_checkpoint()
            .await?
            .map(|c| (c.undo, c.redo))
            .unwrap_or_default())
    }
}

impl std::fmt::Debug for StackPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackPersistence")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShiftDuration, ShiftSnapshot, ShiftType};
    use chrono::NaiveDate;

    fn operation(title: &str) -> ShiftSwitchOperation {
        let old = ShiftType::new("M", "Morning", "", ShiftDuration::AllDay);
        let new = ShiftType::new("X", title, "", ShiftDuration::AllDay);
        ShiftSwitchOperation {
            id: Uuid::new_v4(),
            event_identifier: "evt-1".to_string(),
            scheduled_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            old_snapshot: ShiftSnapshot::capture(&old),
            new_snapshot: ShiftSnapshot::capture(&new),
            change_log_entry_id: Uuid::new_v4(),
            reason: Some("coverage".to_string()),
        }
    }

    #[test]
    fn json_and_binary_both_decode() {
        let checkpoint =
            StackCheckpoint::new(vec![operation("A")], vec![operation("B")], 50, Utc::now());

        for format in [CheckpointFormat::Json, CheckpointFormat::Binary] {
            let bytes = checkpoint.encode(format).unwrap();
            assert_eq!(StackCheckpoint::decode(&bytes).unwrap(), checkpoint);
        }
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = StackCheckpoint::new(vec![], vec![], 50, Utc::now());
        checkpoint.version = 99;
        let bytes = checkpoint.encode(CheckpointFormat::Json).unwrap();

        assert!(matches!(
            StackCheckpoint::decode(&bytes),
            Err(PersistenceError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn duplicated_operation_fails_validation() {
        let op = operation("A");
        let checkpoint = StackCheckpoint::new(vec![op.clone()], vec![op], 50, Utc::now());
        let bytes = checkpoint.encode(CheckpointFormat::Binary).unwrap();

        assert!(matches!(
            StackCheckpoint::decode(&bytes),
            Err(PersistenceError::ValidationFailed(_))
        ));
    }

    #[tokio::test]
    async fn absent_checkpoint_loads_empty_stacks() {
        let persistence =
            StackPersistence::new(Box::new(MemoryStackStore::new()), CheckpointFormat::Json);
        let (undo, redo) = persistence.load_stacks().await.unwrap();
        assert!(undo.is_empty());
        assert!(redo.is_empty());
    }

    #[tokio::test]
    async fn corrupt_checkpoint_is_an_error_not_empty() {
        let store = Arc::new(MemoryStackStore::new());
        store.set_raw(b"{ this is not a checkpoint".to_vec());
        let persistence = StackPersistence::new(Box::new(store.clone()), CheckpointFormat::Json);

        assert!(matches!(
            persistence.load_stacks().await,
            Err(PersistenceError::DeserializationFailed(_))
        ));

        store.set_raw(vec![0xff, 0x00, 0x13]);
        assert!(persistence.load_stacks().await.is_err());
    }

    #[tokio::test]
    async fn save_then_load_preserves_order() {
        let persistence =
            StackPersistence::new(Box::new(MemoryStackStore::new()), CheckpointFormat::Binary);
        let undo = vec![operation("A"), operation("B")];
        let redo = vec![operation("C")];

        persistence
            .save_stacks(&undo, &redo, 50, Utc::now())
            .await
            .unwrap();
        let (loaded_undo, loaded_redo) = persistence.load_stacks().await.unwrap();

        assert_eq!(loaded_undo, undo);
        assert_eq!(loaded_redo, redo);
    }
}
