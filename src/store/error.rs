//! Store error types.

use thiserror::Error;

/// Failures reported by an event store adapter.
///
/// The engine never retries; `is_transient` is a hint for the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Transient event store failure: {0}")]
    Transient(String),

    #[error("Event store rejected the request: {0}")]
    Permanent(String),

    #[error("Event '{0}' not found")]
    NotFound(String),
}

impl StoreError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Failures reported by an audit log.
#[derive(Debug, Error)]
pub enum AuditLogError {
    #[error("Audit log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audit entry serialization failed: {0}")]
    Serialization(String),

    #[error("Audit log is corrupt at line {line}: {message}")]
    Corrupt { line: usize, message: String },
}
