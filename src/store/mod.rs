//! Narrow boundaries to the external stores the engine mutates.
//!
//! The engine depends only on the [`EventStore`] and [`AuditLog`] traits.
//! The adapters here cover in-process use and simple file-backed logs;
//! calendar or database backends implement the same traits elsewhere.

mod audit;
mod error;
mod event;

pub use audit::{AuditLog, InMemoryAuditLog, JsonlAuditLog, RetentionPolicy};
pub use error::{AuditLogError, StoreError};
pub use event::{EventStore, InMemoryEventStore, StoredEvent};
