//! Configuration: explicit, immutable deployment parameters.
//!
//! Components receive their configuration as a value at construction; there
//! is no ambient global to consult. For a given deployment these values never
//! change.

use std::time::Duration;

use crate::domain::VigilError;

/// Default duration of the wait step.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(30);

/// Default addressable name of the orchestrator.
pub const DEFAULT_NAME: &str = "tasks";

/// Parameters of one orchestrator deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Addressable identifier of the orchestrator, communicated to the
    /// trigger's host environment.
    pub name: String,

    /// Fixed duration of the wait step. Pure time-based suspension; the real
    /// work is assumed to finish within this window or be tracked elsewhere.
    pub wait: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            wait: DEFAULT_WAIT,
        }
    }
}

impl OrchestratorConfig {
    /// Environment-style loading:
    /// - `VIGIL_ORCHESTRATOR`: orchestrator name (default: `tasks`)
    /// - `VIGIL_WAIT_SECS`: wait duration in seconds (default: 30)
    ///
    /// Unset variables fall back to defaults; a present-but-unparsable wait
    /// is `InvalidInput`.
    pub fn from_env() -> Result<Self, VigilError> {
        Self::from_vars(
            std::env::var("VIGIL_ORCHESTRATOR").ok(),
            std::env::var("VIGIL_WAIT_SECS").ok(),
        )
    }

    fn from_vars(name: Option<String>, wait_secs: Option<String>) -> Result<Self, VigilError> {
        let mut config = Self::default();

        if let Some(name) = name {
            config.name = name;
        }
        if let Some(raw) = wait_secs {
            let secs: u64 = raw.parse().map_err(|_| {
                VigilError::InvalidInput(format!("VIGIL_WAIT_SECS must be an integer, got {raw:?}"))
            })?;
            config.wait = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
