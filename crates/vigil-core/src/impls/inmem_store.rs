//! InMemoryTaskStore - in-process implementation of the TaskStore port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{TaskKey, TaskRecord, TaskStatus, VigilError};
use crate::observability::StoreCounts;
use crate::ports::{Clock, SystemClock, TaskStore};

/// In-memory task store.
///
/// Design:
/// - `HashMap<TaskKey, TaskRecord>` behind a single async Mutex; `put` and
///   `update` are each one critical section, which gives the per-key
///   atomicity the orchestrator relies on.
/// - No await happens while the lock is held.
/// - The read methods (`record`, `counts_by_status`) are deliberately NOT on
///   the `TaskStore` port: they are the out-of-band surface for external
///   consumers, operators, and tests.
pub struct InMemoryTaskStore<C = SystemClock> {
    records: Mutex<HashMap<TaskKey, TaskRecord>>,
    clock: C,
}

impl InMemoryTaskStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryTaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryTaskStore<C> {
    /// Build with an explicit clock (tests pin record timestamps this way).
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Out-of-band read: snapshot of one record, if present.
    pub async fn record(&self, key: &TaskKey) -> Option<TaskRecord> {
        let records = self.records.lock().await;
        records.get(key).cloned()
    }

    /// Out-of-band read: counts by status.
    pub async fn counts_by_status(&self) -> StoreCounts {
        let records = self.records.lock().await;
        let mut counts = StoreCounts::default();
        for record in records.values() {
            match record.status {
                TaskStatus::Started => counts.started += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }
}

#[async_trait]
impl<C: Clock> TaskStore for InMemoryTaskStore<C> {
    async fn put(&self, key: TaskKey, status: TaskStatus) -> Result<(), VigilError> {
        let mut records = self.records.lock().await;

        if records.contains_key(&key) {
            return Err(VigilError::DuplicateKey(key));
        }

        tracing::debug!(key = %key, status = ?status, "put record");
        let record = TaskRecord::new(key.clone(), status, self.clock.now());
        records.insert(key, record);
        Ok(())
    }

    async fn update(&self, key: &TaskKey, status: TaskStatus) -> Result<(), VigilError> {
        let mut records = self.records.lock().await;

        let Some(record) = records.get_mut(key) else {
            return Err(VigilError::KeyNotFound(key.clone()));
        };

        tracing::debug!(key = %key, status = ?status, "update record");
        record.set_status(status, self.clock.now());
        Ok(())
    }
}
