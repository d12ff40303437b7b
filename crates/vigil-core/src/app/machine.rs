//! The per-instance state machine: a fixed linear pipeline.
//!
//! State transitions:
//! - Init -> Started   (perform log-start)
//! - Started -> Waiting  (perform the wait)
//! - Waiting -> Completed  (perform log-end)
//!
//! No branches, no loops, no conditional transitions. `advance` is the only
//! transition function, so an out-of-order run (say, log-end before the
//! wait) is not expressible: the runner can only perform the step `advance`
//! hands it next.

use serde::{Deserialize, Serialize};

use crate::domain::Step;

/// Phase of one orchestrator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstancePhase {
    /// Accepted, nothing performed yet.
    Init,

    /// The STARTED record exists.
    Started,

    /// Suspended for the configured duration.
    Waiting,

    /// The record is DONE. Terminal.
    Completed,
}

impl InstancePhase {
    /// The single allowed transition out of this phase: the step to perform
    /// and the phase it enters. `None` once terminal.
    pub fn advance(self) -> Option<(Step, InstancePhase)> {
        match self {
            InstancePhase::Init => Some((Step::LogStart, InstancePhase::Started)),
            InstancePhase::Started => Some((Step::Wait, InstancePhase::Waiting)),
            InstancePhase::Waiting => Some((Step::LogEnd, InstancePhase::Completed)),
            InstancePhase::Completed => None,
        }
    }

    /// Is this a terminal phase (no further transitions)?
    pub fn is_terminal(self) -> bool {
        matches!(self, InstancePhase::Completed)
    }
}
