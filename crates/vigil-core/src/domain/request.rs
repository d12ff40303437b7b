//! Start request: the invocation boundary shape.

use serde::{Deserialize, Serialize};

use super::errors::VigilError;
use super::key::{TaskId, TaskKey, TimestampKey};

/// A request to start tracking one task.
///
/// Field names follow the wire form: `{"taskId": "...", "timestamp": N}`.
/// The timestamp is numeric here and canonicalized into its string key form
/// exactly once, in [`StartRequest::into_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub task_id: String,
    pub timestamp: i64,
}

impl StartRequest {
    pub fn new(task_id: impl Into<String>, timestamp: i64) -> Self {
        Self {
            task_id: task_id.into(),
            timestamp,
        }
    }

    /// Validate the request and canonicalize it into a store key.
    pub fn into_key(self) -> Result<TaskKey, VigilError> {
        let task_id = TaskId::new(self.task_id)?;
        Ok(TaskKey::new(task_id, TimestampKey::from_unix(self.timestamp)))
    }
}
