//! Outcome model: how one orchestrator instance ends.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::VigilError;

/// The three steps an instance performs, in this order and no other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Write the STARTED record.
    LogStart,
    /// Suspend for the configured duration.
    Wait,
    /// Mark the record DONE.
    LogEnd,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::LogStart => "log_start",
            Step::Wait => "wait",
            Step::LogEnd => "log_end",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of one instance. There are exactly two.
///
/// A failed instance names the step that failed; if log-end was the failing
/// step, the record is left in STARTED for good. Nothing here retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceOutcome {
    Completed,
    Failed { step: Step, error: VigilError },
}

impl InstanceOutcome {
    pub fn failed(step: Step, error: VigilError) -> Self {
        Self::Failed { step, error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InstanceOutcome::Completed)
    }
}
