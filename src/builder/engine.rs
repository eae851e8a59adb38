//! Builder for constructing shift engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::checkpoint::{StackPersistence, StackStore};
use crate::engine::{Clock, ShiftEngine, SystemClock};
use crate::enforcement::SwitchRules;
use crate::model::UserIdentity;
use crate::store::{AuditLog, EventStore};
use std::sync::Arc;

/// Builder for [`ShiftEngine`] with a fluent API.
///
/// The event store and audit log are required; everything else has a
/// default (system clock, default switch rules, no persistence).
pub struct EngineBuilder<E: EventStore, L: AuditLog> {
    events: Option<E>,
    audit: Option<L>,
    clock: Option<Arc<dyn Clock>>,
    rules: Option<SwitchRules>,
    stack_store: Option<Box<dyn StackStore>>,
    config: EngineConfig,
}

impl<E: EventStore, L: AuditLog> EngineBuilder<E, L> {
    pub fn new() -> Self {
        Self {
            events: None,
            audit: None,
            clock: None,
            rules: None,
            stack_store: None,
            config: EngineConfig::default(),
        }
    }

    /// Set the event store (required).
    pub fn event_store(mut self, events: E) -> Self {
        self.events = Some(events);
        self
    }

    /// Set the audit log (required).
    pub fn audit_log(mut self, audit: L) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn rules(mut self, rules: SwitchRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Persist the stacks after every committed call.
    pub fn stack_store(mut self, store: impl StackStore + 'static) -> Self {
        self.stack_store = Some(Box::new(store));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn identity(mut self, identity: UserIdentity) -> Self {
        self.config.identity = identity;
        self
    }

    /// Build the engine with empty stacks.
    ///
    /// Call [`ShiftEngine::restore_from_persistence`] afterwards to pick up
    /// history saved by a previous run.
    pub fn build(self) -> Result<ShiftEngine<E, L>, BuildError> {
        let events = self.events.ok_or(BuildError::MissingEventStore)?;
        let audit = self.audit.ok_or(BuildError::MissingAuditLog)?;
        self.config.validate()?;

        let persistence = self
            .stack_store
            .map(|store| StackPersistence::new(store, self.config.checkpoint_format));

        Ok(ShiftEngine::new(
            events,
            audit,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.rules.unwrap_or_default(),
            self.config.identity,
            persistence,
            self.config.capacity,
        ))
    }
}

impl<E: EventStore, L: AuditLog> Default for EngineBuilder<E, L> {
    fn default() -> Self {
        Self::new()
    }
}
