//! Pure core of the mutation engine.
//!
//! This module contains the side-effect free pieces every engine call is
//! described by:
//! - Mutation phases and their legal successors
//! - Immutable phase trails
//!
//! Nothing here touches a store; the engine in [`crate::engine`] is the
//! imperative shell around it.

mod phase;
mod trail;

pub use phase::MutationPhase;
pub use trail::{PhaseTrail, PhaseTransition};
