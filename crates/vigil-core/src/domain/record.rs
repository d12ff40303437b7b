//! Task record: one row per task instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::key::TaskKey;

/// Persisted status of a task.
///
/// Serialized as SCREAMING_SNAKE_CASE to match the stored schema:
/// STARTED / DONE. There are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Started,
    Done,
}

impl TaskStatus {
    /// Is this the final status (no further mutation expected)?
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

/// Metadata + status for one task instance.
///
/// Design:
/// - Created exactly once, in `Started`, by the log-start step.
/// - Mutated at most once, to `Done`, by the log-end step.
/// - Never deleted here; retention is a store-administration concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub key: TaskKey,
    pub status: TaskStatus,

    /// Timestamps for observability.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// A fresh record in the given status.
    pub fn new(key: TaskKey, status: TaskStatus, now: DateTime<Utc>) -> Self {
        Self {
            key,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a status mutation.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}
