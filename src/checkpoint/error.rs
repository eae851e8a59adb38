//! Stack persistence error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring undo/redo stacks.
///
/// A missing checkpoint is not an error; see
/// [`StackPersistence::load_stacks`](crate::checkpoint::StackPersistence::load_stacks).
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Stored bytes could not be decoded; the checkpoint is corrupt
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint decoded but its contents are inconsistent
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),

    #[error("Checkpoint I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
