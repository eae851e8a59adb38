//! Shiftledger: switch and remove scheduled shifts with an audit trail
//! and bounded, persistent undo/redo.
//!
//! Shiftledger follows a "pure core, imperative shell" layout. Snapshots,
//! phases and switch rules are plain values and pure functions; the
//! [`engine::ShiftEngine`] is the shell that talks to the outside world
//! through narrow store traits.
//!
//! # Core Concepts
//!
//! - **Snapshot**: immutable copy of a shift type, so history survives
//!   catalog edits and deletions
//! - **Audit entry**: append-only [`model::ChangeLogEntry`] per mutation
//! - **Undo/redo**: two bounded LIFO stacks of switch operations, persisted
//!   together as one checkpoint
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use shiftledger::builder::EngineBuilder;
//! use shiftledger::model::{ShiftDuration, ShiftType};
//! use shiftledger::store::{AuditLog, InMemoryAuditLog, InMemoryEventStore};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let engine = EngineBuilder::new()
//!     .event_store(InMemoryEventStore::new())
//!     .audit_log(InMemoryAuditLog::new())
//!     .build()
//!     .unwrap();
//!
//! let morning = ShiftType::new("M", "Morning", "06:00 start", ShiftDuration::AllDay);
//! let evening = ShiftType::new("E", "Evening", "14:00 start", ShiftDuration::AllDay);
//! let tomorrow = (Utc::now() + Duration::days(2)).date_naive();
//!
//! let (shift, _) = engine.create_shift(tomorrow, &morning, None).await.unwrap();
//! engine.switch_shift(&shift, &evening, Some("coverage")).await.unwrap();
//! assert!(engine.can_undo());
//!
//! engine.undo().await.unwrap();
//! assert!(engine.can_redo());
//! assert_eq!(engine.audit_log().fetch_all().await.unwrap().len(), 3);
//! # });
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod enforcement;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use builder::{EngineBuilder, EngineConfig};
pub use engine::{EngineError, ShiftEngine};
pub use model::{ChangeLogEntry, ChangeType, ScheduledShift, ShiftSnapshot, ShiftType};
