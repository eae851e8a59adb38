//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building a [`ShiftEngine`](crate::engine::ShiftEngine).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Event store not specified. Call .event_store(store) before .build()")]
    MissingEventStore,

    #[error("Audit log not specified. Call .audit_log(log) before .build()")]
    MissingAuditLog,

    #[error("Stack capacity must be at least 1")]
    ZeroCapacity,

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
