//! Event store boundary and an in-memory adapter.

use crate::model::ShiftType;
use crate::store::error::StoreError;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Calendar-like service holding the authoritative shift events.
///
/// Each call is all-or-nothing. Failures are returned verbatim to the
/// engine, which does not retry them.
pub trait EventStore: Send + Sync {
    /// Create an event and return its external identifier.
    fn create_event(
        &self,
        date: NaiveDate,
        shift_type: &ShiftType,
        notes: Option<&str>,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    fn update_event(
        &self,
        event_id: &str,
        shift_type: &ShiftType,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn delete_event(&self, event_id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Flag or unflag the event's shift as taken sick.
    fn set_sick(
        &self,
        event_id: &str,
        sick: bool,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Event as held by [`InMemoryEventStore`].
#[derive(Clone, PartialEq, Debug)]
pub struct StoredEvent {
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub notes: Option<String>,
    pub is_sick: bool,
}

/// Event store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: Mutex<HashMap<String, StoredEvent>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn event(&self, event_id: &str) -> Option<StoredEvent> {
        self.events.lock().await.get(event_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }
}

impl EventStore for InMemoryEventStore {
    async fn create_event(
        &self,
        date: NaiveDate,
        shift_type: &ShiftType,
        notes: Option<&str>,
    ) -> Result<String, StoreError> {
        let event_id = Uuid::new_v4().to_string();
        let event = StoredEvent {
            date,
            shift_type: shift_type.clone(),
            notes: notes.map(str::to_string),
            is_sick: false,
        };
        self.events.lock().await.insert(event_id.clone(), event);
        Ok(event_id)
    }

    async fn update_event(&self, event_id: &str, shift_type: &ShiftType) -> Result<(), StoreError> {
        let mut events = self.events.lock().await;
        let event = events
            .get_mut(event_id)
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))?;
        event.shift_type = shift_type.clone();
        Ok(())
    }

    async fn delete_event(&self, event_id: &str) -> Result<(), StoreError> {
        self.events
            .lock()
            .await
            .remove(event_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))
    }

    async fn set_sick(&self, event_id: &str, sick: bool) -> Result<(), StoreError> {
        let mut events = self.events.lock().await;
        let event = events
            .get_mut(event_id)
            .ok_or_else(|| StoreError::NotFound(event_id.to_string()))?;
        event.is_sick = sick;
        Ok(())
    }
}
