//! Builder API for assembling a [`ShiftEngine`](crate::engine::ShiftEngine).
//!
//! Stores, clock, switch rules and persistence are injected here; the
//! engine itself holds no global state.
//!
//! # Example
//!
//! ```
//! use shiftledger::builder::EngineBuilder;
//! use shiftledger::checkpoint::MemoryStackStore;
//! use shiftledger::store::{InMemoryAuditLog, InMemoryEventStore};
//!
//! let engine = EngineBuilder::new()
//!     .event_store(InMemoryEventStore::new())
//!     .audit_log(InMemoryAuditLog::new())
//!     .stack_store(MemoryStackStore::new())
//!     .capacity(20)
//!     .build()
//!     .unwrap();
//!
//! assert!(!engine.can_undo());
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{EngineConfig, DEFAULT_CAPACITY};
pub use engine::EngineBuilder;
pub use error::BuildError;
