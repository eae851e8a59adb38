//! The shift mutation transaction engine.

use crate::checkpoint::StackPersistence;
use crate::core::MutationPhase;
use crate::engine::clock::Clock;
use crate::engine::error::EngineError;
use crate::engine::session::{EngineStatus, Session, SessionTrace};
use crate::engine::stack::BoundedStack;
use crate::enforcement::{SwitchContext, SwitchRules, SwitchViolation};
use crate::model::{
    ChangeLogEntry, ChangeType, Direction, ScheduledShift, ShiftSnapshot, ShiftSwitchOperation,
    ShiftType, UserIdentity,
};
use crate::store::{AuditLog, EventStore};
use chrono::NaiveDate;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Mutable state guarded by the engine's single lock.
#[derive(Debug)]
struct EngineState {
    undo: BoundedStack<ShiftSwitchOperation>,
    redo: BoundedStack<ShiftSwitchOperation>,
    last_session: Option<SessionTrace>,
}

/// Orchestrates switch, delete, undo and redo against an event store and
/// an audit log, and owns the undo/redo history.
///
/// Every mutating call runs on its own tokio task and holds one
/// `tokio::sync::Mutex` for its whole duration, including the awaited
/// store calls, so calls are served one at a time in arrival order. There
/// is no timeout: a stalled store call holds up every later call until it
/// resolves.
///
/// Dropping the future returned by a mutating call does not cancel it.
/// Once issued, the call runs to completion and its outcome is still
/// recorded in the store, the audit log and the stacks; only the result
/// is discarded. Calls must be made from within a tokio runtime.
///
/// Stacks only change after both the store mutation and the audit append
/// succeed. A failed call leaves them as they were.
pub struct ShiftEngine<E: EventStore, L: AuditLog> {
    core: Arc<EngineCore<E, L>>,
}

/// Shared engine state; each detached call works on a clone of the `Arc`.
struct EngineCore<E: EventStore, L: AuditLog> {
    events: E,
    audit: L,
    clock: Arc<dyn Clock>,
    rules: SwitchRules,
    identity: UserIdentity,
    persistence: Option<StackPersistence>,
    state: Mutex<EngineState>,
    // Mirrors of the stack depths, readable without the lock
    undo_depth: AtomicUsize,
    redo_depth: AtomicUsize,
    persistence_dirty: AtomicBool,
}

impl<E: EventStore, L: AuditLog> ShiftEngine<E, L> {
    pub(crate) fn new(
        events: E,
        audit: L,
        clock: Arc<dyn Clock>,
        rules: SwitchRules,
        identity: UserIdentity,
        persistence: Option<StackPersistence>,
        capacity: usize,
    ) -> Self {
        let core = EngineCore {
            events,
            audit,
            clock,
            rules,
            identity,
            persistence,
            state: Mutex::new(EngineState {
                undo: BoundedStack::new(capacity),
                redo: BoundedStack::new(capacity),
                last_session: None,
            }),
            undo_depth: AtomicUsize::new(0),
            redo_depth: AtomicUsize::new(0),
            persistence_dirty: AtomicBool::new(false),
        };
        Self {
            core: Arc::new(core),
        }
    }

    pub fn event_store(&self) -> &E {
        &self.core.events
    }

    pub fn audit_log(&self) -> &L {
        &self.core.audit
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.core.identity
    }

    /// Lock-free; reflects the last committed call.
    pub fn can_undo(&self) -> bool {
        self.core.undo_depth.load(Ordering::Acquire) > 0
    }

    /// Lock-free; reflects the last committed call.
    pub fn can_redo(&self) -> bool {
        self.core.redo_depth.load(Ordering::Acquire) > 0
    }

    pub fn status(&self) -> EngineStatus {
        self.core.status()
    }

    /// Label for an "Undo ..." menu item.
    pub async fn undo_description(&self) -> Option<String> {
        self.core.state.lock().await.undo.peek().map(ShiftSwitchOperation::describe)
    }

    /// Label for a "Redo ..." menu item.
    pub async fn redo_description(&self) -> Option<String> {
        self.core.state.lock().await.redo.peek().map(ShiftSwitchOperation::describe)
    }

    /// Copies of both stacks, bottom first.
    pub async fn stacks(&self) -> (Vec<ShiftSwitchOperation>, Vec<ShiftSwitchOperation>) {
        let state = self.core.state.lock().await;
        (state.undo.to_vec(), state.redo.to_vec())
    }

    /// Trace of the most recent call, successful or not.
    pub async fn last_session(&self) -> Option<SessionTrace> {
        self.core.state.lock().await.last_session.clone()
    }
}

impl<E: EventStore + 'static, L: AuditLog + 'static> ShiftEngine<E, L> {
    /// Reassign `shift` to `new_type`.
    ///
    /// Order: validate, update the event, append a `switched` entry, push
    /// the operation onto the undo stack (evicting the oldest when full),
    /// clear the redo stack.
    pub async fn switch_shift(
        &self,
        shift: &ScheduledShift,
        new_type: &ShiftType,
        reason: Option<&str>,
    ) -> Result<ChangeLogEntry, EngineError> {
        let (shift, new_type) = (shift.clone(), new_type.clone());
        let reason = reason.map(str::to_string);
        self.detach(move |core| async move {
            core.switch_shift(&shift, &new_type, reason.as_deref()).await
        })
        .await
    }

    /// Delete `shift` from the event store and log a `deleted` entry.
    ///
    /// Deletion is not undoable through the switch stacks; see
    /// [`restore_deleted_shift`](Self::restore_deleted_shift). Switch
    /// operations on the deleted event are dropped from both stacks since
    /// they can no longer be replayed.
    pub async fn delete_shift(&self, shift: &ScheduledShift) -> Result<ChangeLogEntry, EngineError> {
        let shift = shift.clone();
        self.detach(move |core| async move { core.delete_shift(&shift).await })
            .await
    }

    /// Schedule a new shift and log a `created` entry.
    pub async fn create_shift(
        &self,
        date: NaiveDate,
        shift_type: &ShiftType,
        notes: Option<&str>,
    ) -> Result<(ScheduledShift, ChangeLogEntry), EngineError> {
        let shift_type = shift_type.clone();
        let notes = notes.map(str::to_string);
        self.detach(move |core| async move {
            core.create_shift(date, &shift_type, notes.as_deref()).await
        })
        .await
    }

    /// Re-create a shift removed by [`delete_shift`](Self::delete_shift)
    /// from the prior type captured in its `deleted` entry.
    pub async fn restore_deleted_shift(
        &self,
        deleted: &ChangeLogEntry,
        notes: Option<&str>,
    ) -> Result<(ScheduledShift, ChangeLogEntry), EngineError> {
        let deleted = deleted.clone();
        let notes = notes.map(str::to_string);
        self.detach(move |core| async move {
            core.restore_deleted_shift(&deleted, notes.as_deref()).await
        })
        .await
    }

    /// Flag the shift as taken sick and log `markedAsSick`.
    pub async fn mark_as_sick(
        &self,
        shift: &ScheduledShift,
        reason: Option<&str>,
    ) -> Result<ChangeLogEntry, EngineError> {
        let shift = shift.clone();
        let reason = reason.map(str::to_string);
        self.detach(move |core| async move {
            core.set_sick(&shift, true, reason.as_deref()).await
        })
        .await
    }

    /// Clear the sick flag and log `unmarkedAsSick`.
    pub async fn unmark_as_sick(&self, shift: &ScheduledShift) -> Result<ChangeLogEntry, EngineError> {
        let shift = shift.clone();
        self.detach(move |core| async move { core.set_sick(&shift, false, None).await })
            .await
    }

    /// Revert the most recent switch.
    ///
    /// The logged `undo` entry runs the opposite way to the original
    /// `switched` entry: its old snapshot is the type being undone and its
    /// new snapshot the type restored.
    pub async fn undo(&self) -> Result<ChangeLogEntry, EngineError> {
        self.detach(|core| async move { core.undo().await }).await
    }

    /// Reapply the most recently undone switch.
    pub async fn redo(&self) -> Result<ChangeLogEntry, EngineError> {
        self.detach(|core| async move { core.redo().await }).await
    }

    /// Replace the in-memory stacks with the persisted ones.
    ///
    /// A missing checkpoint restores empty stacks. A corrupt one is an
    /// error and leaves the current stacks in place.
    pub async fn restore_from_persistence(&self) -> Result<EngineStatus, EngineError> {
        self.detach(|core| async move { core.restore_from_persistence().await })
            .await
    }

    /// Write both stacks now, reporting any failure.
    pub async fn flush(&self) -> Result<(), EngineError> {
        self.detach(|core| async move { core.flush().await }).await
    }

    /// Run `call` on its own task so the caller dropping its future cannot
    /// stop it between the store mutation and the audit append.
    async fn detach<T, F, Fut>(&self, call: F) -> Result<T, EngineError>
    where
        F: FnOnce(Arc<EngineCore<E, L>>) -> Fut,
        Fut: Future<Output = Result<T, EngineError>> + Send + 'static,
        T: Send + 'static,
    {
        tokio::spawn(call(Arc::clone(&self.core))).await?
    }
}

impl<E: EventStore, L: AuditLog> EngineCore<E, L> {
    fn status(&self) -> EngineStatus {
        let undo_depth = self.undo_depth.load(Ordering::Acquire);
        let redo_depth = self.redo_depth.load(Ordering::Acquire);
        EngineStatus {
            can_undo: undo_depth > 0,
            can_redo: redo_depth > 0,
            undo_depth,
            redo_depth,
            persistence_dirty: self.persistence_dirty.load(Ordering::Acquire),
        }
    }

    async fn switch_shift(
        &self,
        shift: &ScheduledShift,
        new_type: &ShiftType,
        reason: Option<&str>,
    ) -> Result<ChangeLogEntry, EngineError> {
        let mut state = self.state.lock().await;
        let mut session = Session::start(ChangeType::Switched, self.clock.now());

        session.advance(MutationPhase::Validating, self.clock.now());
        let context = SwitchContext {
            shift,
            new_type,
            reason,
            today: self.clock.today(),
        };
        if let Err(violations) = self.rules.check(&context) {
            return Err(self.abort(&mut state, session, EngineError::InvalidSwitch(violations)));
        }
        let Some(old_type) = shift.shift_type.as_ref() else {
            let err = EngineError::InvalidSwitch(vec![SwitchViolation::UnresolvedShiftType]);
            return Err(self.abort(&mut state, session, err));
        };

        session.advance(MutationPhase::MutatingExternalStore, self.clock.now());
        if let Err(source) = self
            .events
            .update_event(&shift.event_identifier, new_type)
            .await
        {
            tracing::warn!(event_id = %shift.event_identifier, error = %source, "Switch rejected by event store");
            return Err(self.abort(&mut state, session, store_failure(MutationPhase::MutatingExternalStore, source)));
        }

        session.advance(MutationPhase::Logging, self.clock.now());
        let old_snapshot = ShiftSnapshot::capture(old_type);
        let new_snapshot = ShiftSnapshot::capture(new_type);
        let entry = self
            .entry(ChangeType::Switched, shift.date)
            .with_old(Some(old_snapshot.clone()))
            .with_new(Some(new_snapshot.clone()))
            .with_reason(reason.map(str::to_string));
        if let Err(source) = self.audit.append(&entry).await {
            let compensated = self.revert_type(&shift.event_identifier, old_type).await;
            let err = EngineError::AuditLog { source, compensated };
            return Err(self.abort(&mut state, session, err));
        }

        let operation = ShiftSwitchOperation {
            id: Uuid::new_v4(),
            event_identifier: shift.event_identifier.clone(),
            scheduled_date: shift.date,
            old_snapshot,
            new_snapshot,
            change_log_entry_id: entry.id(),
            reason: reason.map(str::to_string),
        };
        if let Some(evicted) = state.undo.push(operation) {
            tracing::debug!(operation_id = %evicted.id, "Undo history full, dropped oldest switch");
        }
        state.redo.clear();

        self.commit(&mut state, session, &entry).await;
        Ok(entry)
    }

    async fn delete_shift(&self, shift: &ScheduledShift) -> Result<ChangeLogEntry, EngineError> {
        let mut state = self.state.lock().await;
        let mut session = Session::start(ChangeType::Deleted, self.clock.now());
        session.advance(MutationPhase::Validating, self.clock.now());

        session.advance(MutationPhase::MutatingExternalStore, self.clock.now());
        if let Err(source) = self.events.delete_event(&shift.event_identifier).await {
            tracing::warn!(event_id = %shift.event_identifier, error = %source, "Delete rejected by event store");
            return Err(self.abort(&mut state, session, store_failure(MutationPhase::MutatingExternalStore, source)));
        }

        session.advance(MutationPhase::Logging, self.clock.now());
        let entry = self
            .entry(ChangeType::Deleted, shift.date)
            .with_old(shift.shift_type.as_ref().map(ShiftSnapshot::capture))
            .with_new(None);
        if let Err(source) = self.audit.append(&entry).await {
            // The event is gone and re-creating it would mint a new identifier
            tracing::warn!(event_id = %shift.event_identifier, "Deleted event has no audit entry");
            let err = EngineError::AuditLog {
                source,
                compensated: false,
            };
            return Err(self.abort(&mut state, session, err));
        }

        let live = |op: &ShiftSwitchOperation| op.event_identifier != shift.event_identifier;
        let dropped = state.undo.retain(live) + state.redo.retain(live);
        if dropped > 0 {
            tracing::info!(event_id = %shift.event_identifier, dropped, "Dropped history for deleted shift");
        }

        self.commit(&mut state, session, &entry).await;
        Ok(entry)
    }

    async fn create_shift(
        &self,
        date: NaiveDate,
        shift_type: &ShiftType,
        notes: Option<&str>,
    ) -> Result<(ScheduledShift, ChangeLogEntry), EngineError> {
        let mut state = self.state.lock().await;
        let session = Session::start(ChangeType::Created, self.clock.now());
        let entry = self.entry(ChangeType::Created, date);
        self.create_locked(&mut state, session, date, shift_type, notes, entry)
            .await
    }

    async fn restore_deleted_shift(
        &self,
        deleted: &ChangeLogEntry,
        notes: Option<&str>,
    ) -> Result<(ScheduledShift, ChangeLogEntry), EngineError> {
        let mut state = self.state.lock().await;
        let mut session = Session::start(ChangeType::Created, self.clock.now());
        session.advance(MutationPhase::Validating, self.clock.now());

        let snapshot = match (deleted.change_type(), deleted.old_shift_snapshot()) {
            (ChangeType::Deleted, Some(snapshot)) => snapshot,
            _ => {
                let err = EngineError::NotRestorable(deleted.id());
                return Err(self.abort(&mut state, session, err));
            }
        };
        let shift_type = snapshot.to_shift_type();
        let entry = self
            .entry(ChangeType::Created, deleted.scheduled_shift_date())
            .with_reason(Some(format!("Restored deleted shift (entry {})", deleted.id())));

        self.create_locked(
            &mut state,
            session,
            deleted.scheduled_shift_date(),
            &shift_type,
            notes,
            entry,
        )
        .await
    }

    async fn undo(&self) -> Result<ChangeLogEntry, EngineError> {
        let mut state = self.state.lock().await;
        let mut session = Session::start(ChangeType::Undo, self.clock.now());
        session.advance(MutationPhase::Validating, self.clock.now());

        // Peek: the operation leaves the undo stack only once replay succeeds
        let Some(operation) = state.undo.peek().cloned() else {
            return Err(self.abort(&mut state, session, EngineError::NoOperationToUndo));
        };
        let entry = match self
            .replay(&mut session, &operation, Direction::Backward)
            .await
        {
            Ok(entry) => entry,
            Err(err) => return Err(self.abort(&mut state, session, err)),
        };

        state.undo.pop();
        state.redo.push(operation);
        self.commit(&mut state, session, &entry).await;
        Ok(entry)
    }

    async fn redo(&self) -> Result<ChangeLogEntry, EngineError> {
        let mut state = self.state.lock().await;
        let mut session = Session::start(ChangeType::Redo, self.clock.now());
        session.advance(MutationPhase::Validating, self.clock.now());

        let Some(operation) = state.redo.peek().cloned() else {
            return Err(self.abort(&mut state, session, EngineError::NoOperationToRedo));
        };
        let entry = match self
            .replay(&mut session, &operation, Direction::Forward)
            .await
        {
            Ok(entry) => entry,
            Err(err) => return Err(self.abort(&mut state, session, err)),
        };

        state.redo.pop();
        if let Some(evicted) = state.undo.push(operation) {
            tracing::debug!(operation_id = %evicted.id, "Undo history full, dropped oldest switch");
        }
        self.commit(&mut state, session, &entry).await;
        Ok(entry)
    }

    async fn restore_from_persistence(&self) -> Result<EngineStatus, EngineError> {
        let mut state = self.state.lock().await;
        let persistence = self
            .persistence
            .as_ref()
            .ok_or(EngineError::PersistenceNotConfigured)?;

        let (undo, redo) = persistence.load_stacks().await?;
        let capacity = state.undo.capacity();
        let (undo, dropped_undo) = BoundedStack::from_vec(undo, capacity);
        let (redo, dropped_redo) = BoundedStack::from_vec(redo, capacity);
        if dropped_undo + dropped_redo > 0 {
            tracing::warn!(
                capacity,
                dropped_undo,
                dropped_redo,
                "Persisted history exceeds capacity, dropped oldest operations"
            );
        }
        state.undo = undo;
        state.redo = redo;
        self.sync_depths(&state);
        self.persistence_dirty.store(false, Ordering::Release);

        tracing::info!(
            undo_depth = state.undo.len(),
            redo_depth = state.redo.len(),
            "Restored undo/redo history"
        );
        Ok(self.status())
    }

    async fn flush(&self) -> Result<(), EngineError> {
        let state = self.state.lock().await;
        let persistence = self
            .persistence
            .as_ref()
            .ok_or(EngineError::PersistenceNotConfigured)?;
        self.save(persistence, &state).await?;
        Ok(())
    }

    async fn set_sick(
        &self,
        shift: &ScheduledShift,
        sick: bool,
        reason: Option<&str>,
    ) -> Result<ChangeLogEntry, EngineError> {
        let change_type = if sick {
            ChangeType::MarkedAsSick
        } else {
            ChangeType::UnmarkedAsSick
        };
        let mut state = self.state.lock().await;
        let mut session = Session::start(change_type, self.clock.now());

        session.advance(MutationPhase::Validating, self.clock.now());
        if shift.is_sick == sick {
            let err = EngineError::SickStatusUnchanged { is_sick: sick };
            return Err(self.abort(&mut state, session, err));
        }

        session.advance(MutationPhase::MutatingExternalStore, self.clock.now());
        if let Err(source) = self.events.set_sick(&shift.event_identifier, sick).await {
            return Err(self.abort(&mut state, session, store_failure(MutationPhase::MutatingExternalStore, source)));
        }

        session.advance(MutationPhase::Logging, self.clock.now());
        let entry = self
            .entry(change_type, shift.date)
            .with_old(shift.shift_type.as_ref().map(ShiftSnapshot::capture))
            .with_reason(reason.map(str::to_string));
        if let Err(source) = self.audit.append(&entry).await {
            let compensated = self
                .events
                .set_sick(&shift.event_identifier, !sick)
                .await
                .is_ok();
            let err = EngineError::AuditLog { source, compensated };
            return Err(self.abort(&mut state, session, err));
        }

        self.commit(&mut state, session, &entry).await;
        Ok(entry)
    }

    async fn create_locked(
        &self,
        state: &mut EngineState,
        mut session: Session,
        date: NaiveDate,
        shift_type: &ShiftType,
        notes: Option<&str>,
        entry: ChangeLogEntry,
    ) -> Result<(ScheduledShift, ChangeLogEntry), EngineError> {
        if session.phase() == MutationPhase::Idle {
            session.advance(MutationPhase::Validating, self.clock.now());
        }

        session.advance(MutationPhase::MutatingExternalStore, self.clock.now());
        let event_id = match self.events.create_event(date, shift_type, notes).await {
            Ok(id) => id,
            Err(source) => {
                return Err(self.abort(state, session, store_failure(MutationPhase::MutatingExternalStore, source)));
            }
        };

        session.advance(MutationPhase::Logging, self.clock.now());
        let entry = entry.with_new(Some(ShiftSnapshot::capture(shift_type)));
        if let Err(source) = self.audit.append(&entry).await {
            let compensated = self.events.delete_event(&event_id).await.is_ok();
            let err = EngineError::AuditLog { source, compensated };
            return Err(self.abort(state, session, err));
        }

        let mut shift = ScheduledShift::new(event_id, date, shift_type.clone());
        shift.notes = notes.map(str::to_string);

        self.commit(state, session, &entry).await;
        Ok((shift, entry))
    }

    /// Apply one side of `operation` to the store and log it. Touches no stack.
    async fn replay(
        &self,
        session: &mut Session,
        operation: &ShiftSwitchOperation,
        direction: Direction,
    ) -> Result<ChangeLogEntry, EngineError> {
        let (current, target) = operation.endpoints(direction);
        let change_type = match direction {
            Direction::Backward => ChangeType::Undo,
            Direction::Forward => ChangeType::Redo,
        };

        session.advance(MutationPhase::MutatingExternalStore, self.clock.now());
        self.events
            .update_event(&operation.event_identifier, &target.to_shift_type())
            .await
            .map_err(|source| {
                tracing::warn!(
                    event_id = %operation.event_identifier,
                    error = %source,
                    %change_type,
                    "Replay rejected by event store, history left unchanged"
                );
                store_failure(MutationPhase::MutatingExternalStore, source)
            })?;

        session.advance(MutationPhase::Logging, self.clock.now());
        let entry = self
            .entry(change_type, operation.scheduled_date)
            .with_old(Some(current.clone()))
            .with_new(Some(target.clone()))
            .with_reason(operation.reason.clone());
        if let Err(source) = self.audit.append(&entry).await {
            let compensated = self
                .revert_type(&operation.event_identifier, &current.to_shift_type())
                .await;
            return Err(EngineError::AuditLog { source, compensated });
        }
        Ok(entry)
    }

    /// Best-effort compensation after a failed audit append.
    async fn revert_type(&self, event_id: &str, shift_type: &ShiftType) -> bool {
        match self.events.update_event(event_id, shift_type).await {
            Ok(()) => {
                tracing::warn!(event_id, "Audit append failed, event store reverted");
                true
            }
            Err(error) => {
                tracing::warn!(event_id, %error, "Audit append failed and event store could not be reverted");
                false
            }
        }
    }

    fn entry(&self, change_type: ChangeType, date: NaiveDate) -> ChangeLogEntry {
        ChangeLogEntry::new(change_type, date, &self.identity, self.clock.now())
    }

    fn abort(&self, state: &mut EngineState, mut session: Session, err: EngineError) -> EngineError {
        let failed_in = session.phase();
        session.advance(MutationPhase::Failed, self.clock.now());
        if !err.is_empty_stack() {
            tracing::debug!(phase = %failed_in, error = %err, "Mutation failed");
        }
        state.last_session = Some(session.into_trace());
        err
    }

    async fn commit(&self, state: &mut EngineState, mut session: Session, entry: &ChangeLogEntry) {
        session.advance(MutationPhase::StackCommitted, self.clock.now());
        state.last_session = Some(session.into_trace());
        self.sync_depths(state);

        if let Some(persistence) = &self.persistence {
            if let Err(error) = self.save(persistence, state).await {
                tracing::warn!(%error, "Failed to persist undo/redo history");
            }
        }

        tracing::info!(
            entry_id = %entry.id(),
            change_type = %entry.change_type(),
            date = %entry.scheduled_shift_date(),
            undo_depth = state.undo.len(),
            redo_depth = state.redo.len(),
            "Shift mutation committed"
        );
    }

    async fn save(
        &self,
        persistence: &StackPersistence,
        state: &EngineState,
    ) -> Result<(), crate::checkpoint::PersistenceError> {
        let result = persistence
            .save_stacks(
                &state.undo.to_vec(),
                &state.redo.to_vec(),
                state.undo.capacity(),
                self.clock.now(),
            )
            .await;
        self.persistence_dirty
            .store(result.is_err(), Ordering::Release);
        result
    }

    fn sync_depths(&self, state: &EngineState) {
        self.undo_depth.store(state.undo.len(), Ordering::Release);
        self.redo_depth.store(state.redo.len(), Ordering::Release);
    }
}

fn store_failure(phase: MutationPhase, source: crate::store::StoreError) -> EngineError {
    EngineError::ExternalStore { phase, source }
}

impl<E: EventStore, L: AuditLog> std::fmt::Debug for ShiftEngine<E, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShiftEngine")
            .field("identity", &self.core.identity)
            .field("status", &self.core.status())
            .finish_non_exhaustive()
    }
}
