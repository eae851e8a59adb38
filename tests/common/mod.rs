//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use shiftledger::builder::EngineBuilder;
use shiftledger::checkpoint::StackStore;
use shiftledger::engine::{FixedClock, ShiftEngine};
use shiftledger::model::{
    ChangeLogEntry, Location, ScheduledShift, ShiftDuration, ShiftType, UserIdentity,
};
use shiftledger::store::{
    AuditLog, AuditLogError, EventStore, InMemoryAuditLog, InMemoryEventStore, StoreError,
};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

pub type TestEngine = ShiftEngine<FlakyEventStore, FlakyAuditLog>;

/// Event store that fails a configurable number of upcoming mutations.
#[derive(Default)]
pub struct FlakyEventStore {
    pub inner: InMemoryEventStore,
    failures: AtomicUsize,
}

impl FlakyEventStore {
    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    fn should_fail(&self) -> bool {
        self.failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn outage() -> StoreError {
        StoreError::Transient("simulated outage".to_string())
    }
}

impl EventStore for FlakyEventStore {
    async fn create_event(
        &self,
        date: NaiveDate,
        shift_type: &ShiftType,
        notes: Option<&str>,
    ) -> Result<String, StoreError> {
        if self.should_fail() {
            return Err(Self::outage());
        }
        self.inner.create_event(date, shift_type, notes).await
    }

    async fn update_event(&self, event_id: &str, shift_type: &ShiftType) -> Result<(), StoreError> {
        if self.should_fail() {
            return Err(Self::outage());
        }
        self.inner.update_event(event_id, shift_type).await
    }

    async fn delete_event(&self, event_id: &str) -> Result<(), StoreError> {
        if self.should_fail() {
            return Err(Self::outage());
        }
        self.inner.delete_event(event_id).await
    }

    async fn set_sick(&self, event_id: &str, sick: bool) -> Result<(), StoreError> {
        if self.should_fail() {
            return Err(Self::outage());
        }
        self.inner.set_sick(event_id, sick).await
    }
}

/// Audit log that fails, or stalls, upcoming appends on request.
#[derive(Default)]
pub struct FlakyAuditLog {
    pub inner: InMemoryAuditLog,
    failures: AtomicUsize,
    delay_ms: AtomicU64,
}

impl FlakyAuditLog {
    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    /// Sleep this long inside every append until reset to zero.
    pub fn delay_appends(&self, delay: std::time::Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }
}

impl AuditLog for FlakyAuditLog {
    async fn append(&self, entry: &ChangeLogEntry) -> Result<(), AuditLogError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }
        let fail = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(AuditLogError::Io(std::io::Error::other("disk full")));
        }
        self.inner.append(entry).await
    }

    async fn fetch_all(&self) -> Result<Vec<ChangeLogEntry>, AuditLogError> {
        self.inner.fetch_all().await
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, AuditLogError> {
        self.inner.delete_older_than(cutoff).await
    }
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

pub fn day_offset(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub fn morning() -> ShiftType {
    ShiftType::new(
        "M",
        "Morning",
        "Early shift",
        ShiftDuration::Scheduled {
            start: chrono::NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            end: chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        },
    )
    .with_location(Location::new("Ward 3", "1 Hospital Rd"))
}

pub fn evening() -> ShiftType {
    ShiftType::new(
        "E",
        "Evening",
        "Late shift",
        ShiftDuration::Scheduled {
            start: chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end: chrono::NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        },
    )
}

pub fn night() -> ShiftType {
    ShiftType::new("N", "Night", "Overnight", ShiftDuration::AllDay)
}

pub fn engine(capacity: usize) -> TestEngine {
    builder(capacity).build().unwrap()
}

pub fn engine_with_store(capacity: usize, store: impl StackStore + 'static) -> TestEngine {
    builder(capacity).stack_store(store).build().unwrap()
}

fn builder(capacity: usize) -> EngineBuilder<FlakyEventStore, FlakyAuditLog> {
    EngineBuilder::new()
        .event_store(FlakyEventStore::default())
        .audit_log(FlakyAuditLog::default())
        .clock(Arc::new(FixedClock::new(now())))
        .identity(UserIdentity::new("u-42", "Alex"))
        .capacity(capacity)
}

/// Put a shift straight into the event store, bypassing the engine so no
/// audit entry is written.
pub async fn schedule(engine: &TestEngine, date: NaiveDate, shift_type: &ShiftType) -> ScheduledShift {
    let event_id = engine
        .event_store()
        .inner
        .create_event(date, shift_type, None)
        .await
        .unwrap();
    ScheduledShift::new(event_id, date, shift_type.clone())
}

/// Title of the type the event store currently holds for `shift`.
pub async fn stored_title(engine: &TestEngine, shift: &ScheduledShift) -> String {
    engine
        .event_store()
        .inner
        .event(&shift.event_identifier)
        .await
        .unwrap()
        .shift_type
        .title
}

pub async fn audit_len(engine: &TestEngine) -> usize {
    engine.audit_log().inner.len().await
}
