//! App - application logic.
//!
//! - **machine**: the per-instance state machine (fixed linear pipeline)
//! - **orchestrator**: runs instances against the TaskStore
//! - **trigger**: the invocation entry point (validate, check grant, start)

pub mod machine;
pub mod orchestrator;
pub mod trigger;

pub use self::machine::InstancePhase;
pub use self::orchestrator::Orchestrator;
pub use self::trigger::Trigger;
