//! Per-call session bookkeeping and caller-facing status.

use crate::core::{MutationPhase, PhaseTrail, PhaseTransition};
use crate::model::ChangeType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the most recent engine call progressed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionTrace {
    /// Mutation the call attempted
    pub kind: ChangeType,
    pub started_at: DateTime<Utc>,
    pub trail: PhaseTrail,
}

impl SessionTrace {
    pub fn succeeded(&self) -> bool {
        self.trail.current() == MutationPhase::StackCommitted
    }

    /// Phase the call was in when it failed.
    pub fn failed_at(&self) -> Option<MutationPhase> {
        self.trail.failed_at()
    }
}

/// Snapshot of the engine for a presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_depth: usize,
    pub redo_depth: usize,
    /// Last stack flush failed; the durable copy is behind memory
    pub persistence_dirty: bool,
}

/// Phase tracker for one in-flight call.
pub(crate) struct Session {
    kind: ChangeType,
    started_at: DateTime<Utc>,
    trail: PhaseTrail,
}

impl Session {
    pub(crate) fn start(kind: ChangeType, now: DateTime<Utc>) -> Self {
        Self {
            kind,
            started_at: now,
            trail: PhaseTrail::new(),
        }
    }

    pub(crate) fn phase(&self) -> MutationPhase {
        self.trail.current()
    }

    pub(crate) fn advance(&mut self, to: MutationPhase, now: DateTime<Utc>) {
        let from = self.trail.current();
        debug_assert!(from.can_advance_to(to), "illegal phase change {from} -> {to}");
        tracing::debug!(kind = %self.kind, %from, %to, "Mutation phase");
        self.trail = self.trail.record(PhaseTransition {
            from,
            to,
            timestamp: now,
        });
    }

    pub(crate) fn into_trace(self) -> SessionTrace {
        SessionTrace {
            kind: self.kind,
            started_at: self.started_at,
            trail: self.trail,
        }
    }
}
