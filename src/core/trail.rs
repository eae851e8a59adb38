//! Phase trail of a mutation session.
//!
//! Provides immutable tracking of the phases a session moved through,
//! following the same record-returns-a-new-value style as the rest of
//! the pure core.

use super::phase::MutationPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: MutationPhase,
    /// The phase being entered
    pub to: MutationPhase,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, immutable list of phase changes.
///
/// `record` returns a new trail with the transition appended.
///
/// # Example
///
/// ```rust
/// use shiftledger::core::{MutationPhase, PhaseTrail, PhaseTransition};
/// use chrono::Utc;
///
/// let trail = PhaseTrail::new().record(PhaseTransition {
///     from: MutationPhase::Idle,
///     to: MutationPhase::Validating,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(trail.current(), MutationPhase::Validating);
/// assert_eq!(trail.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTrail {
    transitions: Vec<PhaseTransition>,
}

impl PhaseTrail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new trail.
    ///
    /// This does not mutate the existing trail.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phase the session is currently in. An empty trail is `Idle`.
    pub fn current(&self) -> MutationPhase {
        self.transitions
            .last()
            .map(|t| t.to)
            .unwrap_or(MutationPhase::Idle)
    }

    /// Phase the session was in when it moved to `Failed`, if it failed.
    pub fn failed_at(&self) -> Option<MutationPhase> {
        self.transitions
            .iter()
            .find(|t| t.to == MutationPhase::Failed)
            .map(|t| t.from)
    }

    /// Phases traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<MutationPhase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: MutationPhase, to: MutationPhase) -> PhaseTransition {
        PhaseTransition {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_trail_is_idle() {
        let trail = PhaseTrail::new();
        assert_eq!(trail.current(), MutationPhase::Idle);
        assert!(trail.get_path().is_empty());
        assert!(trail.duration().is_none());
        assert!(trail.failed_at().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let trail = PhaseTrail::new();
        let next = trail.record(step(MutationPhase::Idle, MutationPhase::Validating));

        assert_eq!(trail.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
    }

    #[test]
    fn failed_at_reports_the_phase_that_failed() {
        let trail = PhaseTrail::new()
            .record(step(MutationPhase::Idle, MutationPhase::Validating))
            .record(step(
                MutationPhase::Validating,
                MutationPhase::MutatingExternalStore,
            ))
            .record(step(MutationPhase::MutatingExternalStore, MutationPhase::Failed));

        assert_eq!(trail.current(), MutationPhase::Failed);
        assert_eq!(
            trail.failed_at(),
            Some(MutationPhase::MutatingExternalStore)
        );
        assert_eq!(
            trail.get_path(),
            vec![
                MutationPhase::Idle,
                MutationPhase::Validating,
                MutationPhase::MutatingExternalStore,
                MutationPhase::Failed,
            ]
        );
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let trail = PhaseTrail::new().record(step(MutationPhase::Idle, MutationPhase::Validating));
        assert_eq!(trail.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn trail_serializes_correctly() {
        let trail = PhaseTrail::new().record(step(MutationPhase::Idle, MutationPhase::Validating));
        let json = serde_json::to_string(&trail).unwrap();
        let back: PhaseTrail = serde_json::from_str(&json).unwrap();
        assert_eq!(trail, back);
    }
}
