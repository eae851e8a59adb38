//! Imperative shell around the pure core.
//!
//! [`ShiftEngine`] performs the effectful work: event store calls, audit
//! appends, stack bookkeeping and checkpoint flushes, one call at a time.

mod clock;
#[allow(clippy::module_inception)]
mod engine;
mod error;
mod session;
mod stack;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::ShiftEngine;
pub use error::EngineError;
pub use session::{EngineStatus, SessionTrace};
pub use stack::BoundedStack;
