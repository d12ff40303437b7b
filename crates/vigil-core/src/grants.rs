//! Capability grants: static, directional permissions between components.
//!
//! The table is a first-class, immutable value injected into the trigger and
//! the orchestrator at construction, never ambient state. It is consulted at
//! the boundary of every cross-component call; a missing grant aborts the
//! call with `PermissionDenied` and no side effect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::VigilError;

/// The calling side of a grant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Component {
    Trigger,
    Orchestrator,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Trigger => "trigger",
            Component::Orchestrator => "orchestrator",
        })
    }
}

/// The operation a grant allows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Operation {
    /// Begin a new orchestrator instance.
    StartInstance,
    /// Create a task record.
    PutRecord,
    /// Mutate an existing task record.
    UpdateRecord,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::StartInstance => "start-instance",
            Operation::PutRecord => "put-record",
            Operation::UpdateRecord => "update-record",
        })
    }
}

/// Immutable set of `(component, operation)` grants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityTable {
    grants: BTreeSet<(Component, Operation)>,
}

impl CapabilityTable {
    /// A table with no grants at all. Every check fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style: add one grant.
    pub fn grant(mut self, component: Component, operation: Operation) -> Self {
        self.grants.insert((component, operation));
        self
    }

    /// The standard least-privilege wiring:
    /// - trigger may start orchestrator instances, nothing else;
    /// - orchestrator may create and update store records, no read, no delete.
    pub fn standard() -> Self {
        Self::empty()
            .grant(Component::Trigger, Operation::StartInstance)
            .grant(Component::Orchestrator, Operation::PutRecord)
            .grant(Component::Orchestrator, Operation::UpdateRecord)
    }

    pub fn allows(&self, component: Component, operation: Operation) -> bool {
        self.grants.contains(&(component, operation))
    }

    /// Check a grant or abort the call.
    pub fn check(&self, component: Component, operation: Operation) -> Result<(), VigilError> {
        if self.allows(component, operation) {
            return Ok(());
        }
        Err(VigilError::PermissionDenied {
            component,
            operation,
        })
    }
}
