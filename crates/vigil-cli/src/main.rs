//! vigil demo: drive one task through its full lifecycle.
//!
//! Reads the task id from argv (default "task-demo"), stamps the current
//! unix time, starts one orchestrator instance, then polls the store
//! out-of-band until the record reaches DONE.
//!
//! The default wait is 30 seconds; set VIGIL_WAIT_SECS to something small
//! for a quick run:
//!
//!     VIGIL_WAIT_SECS=2 cargo run -p vigil-cli -- task-42

use std::sync::Arc;
use tokio::time::{Duration, sleep};

use vigil_core::app::{Orchestrator, Trigger};
use vigil_core::config::OrchestratorConfig;
use vigil_core::domain::{StartRequest, TaskId, TaskKey, TaskStatus, TimestampKey};
use vigil_core::grants::CapabilityTable;
use vigil_core::impls::InMemoryTaskStore;
use vigil_core::ports::{Clock, NoopEventSink, SystemClock, TaskStore, UlidGenerator};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // (A) Configuration and wiring: store, grants, orchestrator, trigger.
    let config = OrchestratorConfig::from_env().expect("valid VIGIL_* environment");
    let wait = config.wait;

    let store = Arc::new(InMemoryTaskStore::new());
    let grants = Arc::new(CapabilityTable::standard());
    let orchestrator = Arc::new(Orchestrator::new(
        config,
        store.clone() as Arc<dyn TaskStore>,
        grants.clone(),
        Arc::new(NoopEventSink),
        Arc::new(UlidGenerator::new(SystemClock)),
    ));
    let trigger = Trigger::new(orchestrator, grants);

    // (B) The entry point supplies the task id; the timestamp is stamped
    // here, at start time.
    let task_id = std::env::args().nth(1).unwrap_or_else(|| "task-demo".to_string());
    let timestamp = SystemClock.now().timestamp();

    let request = StartRequest::new(&task_id, timestamp);
    tracing::info!(
        request = %serde_json::to_string(&request).expect("serialize request"),
        "starting instance"
    );

    let handle = trigger.start(request).expect("start instance");
    println!("started {handle} for {task_id}@{timestamp} (wait: {wait:?})");

    // (C) Poll the store out-of-band until the record reaches DONE.
    let key = TaskKey::new(
        TaskId::new(&task_id).expect("validated above"),
        TimestampKey::from_unix(timestamp),
    );
    loop {
        let record = store.record(&key).await;
        if let Some(record) = record
            && record.status == TaskStatus::Done
        {
            println!(
                "final status: {:?} (created {}, updated {})",
                record.status, record.created_at, record.updated_at
            );
            break;
        }
        sleep(Duration::from_millis(500)).await;
    }

    println!("counts: {:?}", store.counts_by_status().await);
}
