//! Phases of a single shift-mutation session.
//!
//! Every engine call walks the same short path through these phases. The
//! phase reached when a call stops tells the caller where it failed and,
//! more importantly, what did *not* happen yet.

use serde::{Deserialize, Serialize};

/// Position of a mutation session in its lifecycle.
///
/// The happy path is
/// `Idle -> Validating -> MutatingExternalStore -> Logging -> StackCommitted`.
/// Any phase except `StackCommitted` may move to `Failed`.
///
/// # Example
///
/// ```rust
/// use shiftledger::core::MutationPhase;
///
/// assert!(MutationPhase::Idle.can_advance_to(MutationPhase::Validating));
/// assert!(!MutationPhase::Idle.can_advance_to(MutationPhase::Logging));
/// assert!(MutationPhase::StackCommitted.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum MutationPhase {
    Idle,
    Validating,
    MutatingExternalStore,
    Logging,
    StackCommitted,
    Failed,
}

impl MutationPhase {
    /// Name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::MutatingExternalStore => "MutatingExternalStore",
            Self::Logging => "Logging",
            Self::StackCommitted => "StackCommitted",
            Self::Failed => "Failed",
        }
    }

    /// Terminal phases end a session.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::StackCommitted | Self::Failed)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Whether `next` is a legal successor of this phase (pure).
    pub fn can_advance_to(&self, next: MutationPhase) -> bool {
        use MutationPhase::*;
        match (self, next) {
            (Idle, Validating)
            | (Validating, MutatingExternalStore)
            | (MutatingExternalStore, Logging)
            | (Logging, StackCommitted) => true,
            (from, Failed) => !from.is_final(),
            _ => false,
        }
    }
}

impl std::fmt::Display for MutationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
