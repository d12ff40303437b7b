//! Status views over the store.

use serde::{Deserialize, Serialize};

/// Counts of records by status.
///
/// Out-of-band read surface for operators and tests; not part of the
/// TaskStore port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub started: usize,
    pub done: usize,
}

impl StoreCounts {
    pub fn total(&self) -> usize {
        self.started + self.done
    }
}
