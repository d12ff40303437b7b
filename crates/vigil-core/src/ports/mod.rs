//! Ports - abstraction layer.
//!
//! Each trait here is a seam to something outside the core: the durable
//! store, wall-clock time, id generation, event delivery. Implementations
//! live in `impls` (development/test) or in downstream crates (production
//! backends).

pub mod clock;
pub mod event_sink;
pub mod id_generator;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{EventSink, NoopEventSink};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::task_store::TaskStore;
