//! Error taxonomy.
//!
//! None of these are recovered inside the core: each one terminates the
//! enclosing step, and therefore the enclosing instance. The trigger's caller
//! only ever observes `InvalidInput` / `PermissionDenied` synchronously;
//! everything else surfaces through the persisted record and the event sink.

use thiserror::Error;

use super::key::TaskKey;
use crate::grants::{Component, Operation};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VigilError {
    /// Malformed request at the trigger boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Capability check failed; the call was aborted with no side effect.
    #[error("{component} is not granted {operation}")]
    PermissionDenied {
        component: Component,
        operation: Operation,
    },

    /// log-start targeted a key that already exists. Fresh keys are the
    /// caller's responsibility, so this is a caller error, not a store error.
    #[error("record already exists for key={0}")]
    DuplicateKey(TaskKey),

    /// log-end targeted a key with no record. Updates never insert.
    #[error("no record for key={0}")]
    KeyNotFound(TaskKey),

    /// Transient backend failure.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}
