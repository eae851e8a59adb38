//! Engine error types.

use crate::checkpoint::PersistenceError;
use crate::core::MutationPhase;
use crate::enforcement::SwitchViolation;
use crate::store::{AuditLogError, StoreError};
use thiserror::Error;
use uuid::Uuid;

/// Typed failure of an engine entry point.
///
/// None of these are fatal. Whatever the variant, the undo and redo stacks
/// are exactly as they were before the failed call.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Same-type, past-date or otherwise rejected switch; user-correctable
    #[error("Invalid switch: {}", join_violations(.0))]
    InvalidSwitch(Vec<SwitchViolation>),

    #[error("No operation to undo")]
    NoOperationToUndo,

    #[error("No operation to redo")]
    NoOperationToRedo,

    /// Adapter failure, passed through verbatim; never retried here
    #[error("Event store failed during {phase}: {source}")]
    ExternalStore {
        phase: MutationPhase,
        source: StoreError,
    },

    /// The event store was mutated but the audit entry could not be
    /// written. `compensated` says whether the store was put back.
    #[error("Audit log append failed (event store compensated: {compensated}): {source}")]
    AuditLog {
        source: AuditLogError,
        compensated: bool,
    },

    #[error("Shift is already {}", sick_label(.is_sick))]
    SickStatusUnchanged { is_sick: bool },

    #[error("Audit entry {0} is not a deletion that can be restored")]
    NotRestorable(Uuid),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("No stack store configured")]
    PersistenceNotConfigured,

    /// The task running the call panicked or its runtime shut down
    #[error("Engine task did not complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl EngineError {
    /// Empty-stack guards are normal boundary conditions, not faults.
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, Self::NoOperationToUndo | Self::NoOperationToRedo)
    }
}

fn sick_label(is_sick: &bool) -> &'static str {
    if *is_sick {
        "marked as sick"
    } else {
        "not marked as sick"
    }
}

fn join_violations(violations: &[SwitchViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
