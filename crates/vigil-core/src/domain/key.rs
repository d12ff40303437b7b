//! Task keys: the `(task_id, timestamp)` pair addressing one record.
//!
//! The timestamp is numeric on the wire but the store keys on a string
//! encoding. Instead of formatting at each call site (and risking two call
//! sites that disagree), the encoding is canonicalized here, once, when the
//! key is built. Both the insert and the update then carry the exact same
//! byte sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::VigilError;

/// Caller-supplied task identifier.
///
/// Not globally unique on its own; only the full [`TaskKey`] is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Build a task id, rejecting the empty string.
    pub fn new(s: impl Into<String>) -> Result<Self, VigilError> {
        let s = s.into();
        if s.is_empty() {
            return Err(VigilError::InvalidInput(
                "task id must be a non-empty string".to_string(),
            ));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Canonical string form of the caller's numeric timestamp.
///
/// Built exactly once per instance; every store operation that addresses the
/// record reuses this value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimestampKey(String);

impl TimestampKey {
    /// Canonicalize a unix timestamp to its decimal string encoding.
    pub fn from_unix(timestamp: i64) -> Self {
        Self(timestamp.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimestampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique key of one task record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskKey {
    task_id: TaskId,
    timestamp: TimestampKey,
}

impl TaskKey {
    pub fn new(task_id: TaskId, timestamp: TimestampKey) -> Self {
        Self { task_id, timestamp }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn timestamp(&self) -> &TimestampKey {
        &self.timestamp
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.task_id, self.timestamp)
    }
}
