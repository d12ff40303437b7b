//! TaskStore port - durable keyed storage for task status records.
//!
//! Design principles:
//! - Write-only surface: `put` (create) and `update` (mutate). There are no
//!   read or delete operations; external consumers read records out-of-band.
//! - Per-key atomicity is the store's job; callers do no extra locking.
//! - Durability: once `put`/`update` returns `Ok`, the record is visible to
//!   any subsequent read of the same key.
//!
//! The in-memory implementation (`impls::inmem_store`) is the v1 backend;
//! this trait is the seam for swapping a real database in later.

use async_trait::async_trait;

use crate::domain::{TaskKey, TaskStatus, VigilError};

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a new record with the given status.
    ///
    /// Fails with `DuplicateKey` if a record with this key already exists;
    /// nothing is mutated in that case. Fresh keys per instance are the
    /// caller's responsibility.
    async fn put(&self, key: TaskKey, status: TaskStatus) -> Result<(), VigilError>;

    /// Mutate the status of exactly one existing record.
    ///
    /// An update, never an insert: fails with `KeyNotFound` when no record
    /// matches the key.
    async fn update(&self, key: &TaskKey, status: TaskStatus) -> Result<(), VigilError>;
}
