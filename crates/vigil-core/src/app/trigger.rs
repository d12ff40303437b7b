//! Trigger - the invocation entry point.
//!
//! Flow: validate the request, check the start-instance grant, hand the key
//! to the orchestrator, return the handle. The trigger never waits for the
//! instance to finish and has no way to read, cancel, or modify it.

use std::sync::Arc;

use crate::domain::{InstanceHandle, StartRequest, VigilError};
use crate::grants::{CapabilityTable, Component, Operation};

use super::orchestrator::Orchestrator;

pub struct Trigger {
    orchestrator: Arc<Orchestrator>,
    grants: Arc<CapabilityTable>,
}

impl Trigger {
    pub fn new(orchestrator: Arc<Orchestrator>, grants: Arc<CapabilityTable>) -> Self {
        Self {
            orchestrator,
            grants,
        }
    }

    /// Validate and start one instance; returns immediately with the handle.
    ///
    /// The caller only ever sees `InvalidInput` or `PermissionDenied` here.
    /// Anything that goes wrong later is visible only through the persisted
    /// record and the event sink.
    pub fn start(&self, request: StartRequest) -> Result<InstanceHandle, VigilError> {
        let key = request.into_key()?;
        self.grants
            .check(Component::Trigger, Operation::StartInstance)?;

        let handle = self.orchestrator.start(key.clone());
        tracing::info!(
            orchestrator = self.orchestrator.name(),
            key = %key,
            handle = %handle,
            "start request accepted"
        );
        Ok(handle)
    }

    /// Wire-form entry: raw JSON `{"taskId": "...", "timestamp": N}`.
    pub fn start_json(&self, body: &str) -> Result<InstanceHandle, VigilError> {
        let request: StartRequest = serde_json::from_str(body)
            .map_err(|e| VigilError::InvalidInput(format!("malformed start request: {e}")))?;
        self.start(request)
    }
}
