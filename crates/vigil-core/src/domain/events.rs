//! Domain events emitted over an instance's lifecycle.
//!
//! Events are a one-way signal: there is no return channel and no completion
//! callback. Consumers that need the final status read the store out-of-band.

use super::errors::VigilError;
use super::ids::InstanceId;
use super::key::TaskKey;
use super::outcome::Step;

/// What happened, to which instance, for which key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceEvent {
    /// The instance was accepted for execution (the fire-and-forget point).
    Accepted { instance: InstanceId, key: TaskKey },

    /// log-start wrote the STARTED record.
    StartLogged { instance: InstanceId, key: TaskKey },

    /// log-end marked the record DONE; the instance completed normally.
    EndLogged { instance: InstanceId, key: TaskKey },

    /// A step failed and the instance terminated without completing.
    /// If the step was log-end, the record stays STARTED indefinitely.
    StepFailed {
        instance: InstanceId,
        key: TaskKey,
        step: Step,
        error: VigilError,
    },
}

impl InstanceEvent {
    pub fn instance(&self) -> InstanceId {
        match self {
            InstanceEvent::Accepted { instance, .. }
            | InstanceEvent::StartLogged { instance, .. }
            | InstanceEvent::EndLogged { instance, .. }
            | InstanceEvent::StepFailed { instance, .. } => *instance,
        }
    }

    pub fn key(&self) -> &TaskKey {
        match self {
            InstanceEvent::Accepted { key, .. }
            | InstanceEvent::StartLogged { key, .. }
            | InstanceEvent::EndLogged { key, .. }
            | InstanceEvent::StepFailed { key, .. } => key,
        }
    }
}
