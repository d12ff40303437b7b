//! vigil-core
//!
//! Core building blocks for vigil, a tracker for the lifecycle of
//! asynchronously executed, long-running tasks. A task is recorded the
//! instant it starts, the system suspends while the task's work proceeds,
//! and the task is marked complete once the wait elapses.
//!
//! # Module layout
//! - **domain**: domain model (keys, records, requests, events, outcomes, errors)
//! - **ports**: abstraction layer (TaskStore, Clock, IdGenerator, EventSink)
//! - **impls**: implementations (InMemoryTaskStore for development and tests)
//! - **app**: application logic (state machine, orchestrator, trigger)
//! - **config**: explicit, immutable deployment parameters
//! - **grants**: capability table checked at component boundaries
//! - **observability**: status views over the store

pub mod app;
pub mod config;
pub mod domain;
pub mod grants;
pub mod impls;
pub mod observability;
pub mod ports;
