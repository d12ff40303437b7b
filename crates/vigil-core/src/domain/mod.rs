//! Domain model (keys, records, requests, events, outcomes, errors).

pub mod errors;
pub mod events;
pub mod ids;
pub mod key;
pub mod outcome;
pub mod record;
pub mod request;

pub use self::errors::VigilError;
pub use self::events::InstanceEvent;
pub use self::ids::{InstanceHandle, InstanceId};
pub use self::key::{TaskId, TaskKey, TimestampKey};
pub use self::outcome::{InstanceOutcome, Step};
pub use self::record::{TaskRecord, TaskStatus};
pub use self::request::StartRequest;
