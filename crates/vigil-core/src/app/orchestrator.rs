//! Orchestrator - runs one instance per task through the state machine.

use std::sync::Arc;
use std::time::Duration;

use crate::config::OrchestratorConfig;
use crate::domain::{
    InstanceEvent, InstanceHandle, InstanceId, InstanceOutcome, Step, TaskKey, TaskStatus,
    VigilError,
};
use crate::grants::{CapabilityTable, Component, Operation};
use crate::ports::{EventSink, IdGenerator, TaskStore};

use super::machine::InstancePhase;

/// Starts and runs orchestrator instances.
///
/// Each accepted key becomes one independent tokio task driving the linear
/// pipeline log-start -> wait -> log-end. Instances share nothing but the
/// store, and all store access goes through its atomic put/update, so no
/// cross-instance coordination exists here at all.
pub struct Orchestrator {
    name: String,
    wait: Duration,
    store: Arc<dyn TaskStore>,
    grants: Arc<CapabilityTable>,
    events: Arc<dyn EventSink>,
    ids: Arc<dyn IdGenerator>,
}

impl Orchestrator {
    pub fn new(
        config: OrchestratorConfig,
        store: Arc<dyn TaskStore>,
        grants: Arc<CapabilityTable>,
        events: Arc<dyn EventSink>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            name: config.name,
            wait: config.wait,
            store,
            grants,
            events,
            ids,
        }
    }

    /// Addressable identifier of this orchestrator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed duration of the wait step.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Accept a new instance and run it in the background.
    ///
    /// Returns as soon as the instance is spawned; the caller never waits
    /// for completion. The terminal outcome surfaces only through the store
    /// record and the event sink.
    pub fn start(&self, key: TaskKey) -> InstanceHandle {
        let instance = self.ids.generate_instance_id();
        let runner = InstanceRunner {
            instance,
            key,
            wait: self.wait,
            store: Arc::clone(&self.store),
            grants: Arc::clone(&self.grants),
            events: Arc::clone(&self.events),
        };

        tokio::spawn(async move {
            runner.run().await;
        });

        InstanceHandle::for_instance(instance)
    }
}

/// One running instance: everything `run` needs, owned.
struct InstanceRunner {
    instance: InstanceId,
    key: TaskKey,
    wait: Duration,
    store: Arc<dyn TaskStore>,
    grants: Arc<CapabilityTable>,
    events: Arc<dyn EventSink>,
}

impl InstanceRunner {
    /// Drive the state machine to a terminal outcome.
    ///
    /// The first failing step terminates the instance; log-end is never
    /// attempted after a failed log-start, and a record left in STARTED by a
    /// failed log-end stays that way (no retry, no compensation).
    async fn run(self) -> InstanceOutcome {
        tracing::info!(instance = %self.instance, key = %self.key, "instance accepted");
        self.events
            .emit(InstanceEvent::Accepted {
                instance: self.instance,
                key: self.key.clone(),
            })
            .await;

        let mut phase = InstancePhase::Init;
        while let Some((step, next)) = phase.advance() {
            if let Err(error) = self.perform(step).await {
                tracing::warn!(
                    instance = %self.instance,
                    key = %self.key,
                    step = %step,
                    error = %error,
                    "step failed, instance terminating"
                );
                self.events
                    .emit(InstanceEvent::StepFailed {
                        instance: self.instance,
                        key: self.key.clone(),
                        step,
                        error: error.clone(),
                    })
                    .await;
                return InstanceOutcome::failed(step, error);
            }
            phase = next;
        }

        tracing::info!(instance = %self.instance, key = %self.key, "instance completed");
        InstanceOutcome::Completed
    }

    async fn perform(&self, step: Step) -> Result<(), VigilError> {
        match step {
            Step::LogStart => {
                self.grants
                    .check(Component::Orchestrator, Operation::PutRecord)?;
                self.store
                    .put(self.key.clone(), TaskStatus::Started)
                    .await?;
                self.events
                    .emit(InstanceEvent::StartLogged {
                        instance: self.instance,
                        key: self.key.clone(),
                    })
                    .await;
                Ok(())
            }

            Step::Wait => {
                // Pure time-based suspension. No lock is held across this
                // await, and resumption continues at log-end; log-start is
                // never replayed.
                tokio::time::sleep(self.wait).await;
                Ok(())
            }

            Step::LogEnd => {
                self.grants
                    .check(Component::Orchestrator, Operation::UpdateRecord)?;
                self.store.update(&self.key, TaskStatus::Done).await?;
                self.events
                    .emit(InstanceEvent::EndLogged {
                        instance: self.instance,
                        key: self.key.clone(),
                    })
                    .await;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Mutex;
    use ulid::Ulid;

    use super::*;
    use crate::domain::{TaskId, TimestampKey};
    use crate::impls::InMemoryTaskStore;
    use crate::ports::NoopEventSink;

    const WAIT: Duration = Duration::from_secs(30);

    fn key(task_id: &str, unix: i64) -> TaskKey {
        TaskKey::new(TaskId::new(task_id).unwrap(), TimestampKey::from_unix(unix))
    }

    fn runner(
        key: TaskKey,
        store: Arc<dyn TaskStore>,
        grants: CapabilityTable,
        events: Arc<dyn EventSink>,
    ) -> InstanceRunner {
        InstanceRunner {
            instance: InstanceId::from_ulid(Ulid::new()),
            key,
            wait: WAIT,
            store,
            grants: Arc::new(grants),
            events,
        }
    }

    /// Sink that remembers everything it saw.
    #[derive(Default)]
    struct RecordingEventSink {
        events: Mutex<Vec<InstanceEvent>>,
    }

    impl RecordingEventSink {
        async fn seen(&self) -> Vec<InstanceEvent> {
            self.events.lock().await.clone()
        }
    }

    #[async_trait]
    impl EventSink for RecordingEventSink {
        async fn emit(&self, event: InstanceEvent) {
            self.events.lock().await.push(event);
        }
    }

    /// Store whose backend is down for every operation.
    struct UnavailableStore;

    #[async_trait]
    impl TaskStore for UnavailableStore {
        async fn put(&self, _key: TaskKey, _status: TaskStatus) -> Result<(), VigilError> {
            Err(VigilError::StoreUnavailable("backend offline".to_string()))
        }

        async fn update(&self, _key: &TaskKey, _status: TaskStatus) -> Result<(), VigilError> {
            Err(VigilError::StoreUnavailable("backend offline".to_string()))
        }
    }

    /// Store where records vanish between put and update.
    struct VanishingStore {
        inner: InMemoryTaskStore,
    }

    #[async_trait]
    impl TaskStore for VanishingStore {
        async fn put(&self, key: TaskKey, status: TaskStatus) -> Result<(), VigilError> {
            self.inner.put(key, status).await
        }

        async fn update(&self, key: &TaskKey, _status: TaskStatus) -> Result<(), VigilError> {
            Err(VigilError::KeyNotFound(key.clone()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn successful_run_ends_with_the_record_done() {
        let store = Arc::new(InMemoryTaskStore::new());
        let k = key("task-42", 1700000000);

        let outcome = runner(
            k.clone(),
            store.clone(),
            CapabilityTable::standard(),
            Arc::new(NoopEventSink),
        )
        .run()
        .await;

        assert_eq!(outcome, InstanceOutcome::Completed);
        assert_eq!(store.record(&k).await.unwrap().status, TaskStatus::Done);
        assert_eq!(store.counts_by_status().await.total(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn the_wait_separates_log_start_from_log_end() {
        let store = Arc::new(InMemoryTaskStore::new());
        let started_at = tokio::time::Instant::now();

        runner(
            key("task-42", 1700000000),
            store.clone(),
            CapabilityTable::standard(),
            Arc::new(NoopEventSink),
        )
        .run()
        .await;

        assert!(started_at.elapsed() >= WAIT);
    }

    #[tokio::test(start_paused = true)]
    async fn events_arrive_in_lifecycle_order() {
        let store = Arc::new(InMemoryTaskStore::new());
        let sink = Arc::new(RecordingEventSink::default());
        let k = key("task-42", 1700000000);

        runner(
            k.clone(),
            store,
            CapabilityTable::standard(),
            sink.clone(),
        )
        .run()
        .await;

        let seen = sink.seen().await;
        assert_eq!(seen.len(), 3);
        assert!(matches!(seen[0], InstanceEvent::Accepted { .. }));
        assert!(matches!(seen[1], InstanceEvent::StartLogged { .. }));
        assert!(matches!(seen[2], InstanceEvent::EndLogged { .. }));
        assert!(seen.iter().all(|e| e.key() == &k));
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_key_fails_log_start_and_skips_the_rest() {
        let store = Arc::new(InMemoryTaskStore::new());
        let k = key("task-42", 1700000000);

        // The key is already taken.
        store.put(k.clone(), TaskStatus::Started).await.unwrap();
        let existing = store.record(&k).await.unwrap();

        let started_at = tokio::time::Instant::now();
        let outcome = runner(
            k.clone(),
            store.clone(),
            CapabilityTable::standard(),
            Arc::new(NoopEventSink),
        )
        .run()
        .await;

        assert_eq!(
            outcome,
            InstanceOutcome::failed(Step::LogStart, VigilError::DuplicateKey(k.clone()))
        );
        // No wait was performed and the existing record was not touched.
        assert!(started_at.elapsed() < WAIT);
        assert_eq!(store.record(&k).await.unwrap(), existing);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_record_at_log_end_fails_the_instance() {
        let store = Arc::new(VanishingStore {
            inner: InMemoryTaskStore::new(),
        });
        let sink = Arc::new(RecordingEventSink::default());
        let k = key("task-42", 1700000000);

        let outcome = runner(k.clone(), store, CapabilityTable::standard(), sink.clone())
            .run()
            .await;

        assert_eq!(
            outcome,
            InstanceOutcome::failed(Step::LogEnd, VigilError::KeyNotFound(k))
        );

        let seen = sink.seen().await;
        assert!(matches!(
            seen.last(),
            Some(InstanceEvent::StepFailed {
                step: Step::LogEnd,
                ..
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_store_fails_log_start() {
        let outcome = runner(
            key("task-42", 1700000000),
            Arc::new(UnavailableStore),
            CapabilityTable::standard(),
            Arc::new(NoopEventSink),
        )
        .run()
        .await;

        assert_eq!(
            outcome,
            InstanceOutcome::failed(
                Step::LogStart,
                VigilError::StoreUnavailable("backend offline".to_string())
            )
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ungranted_orchestrator_never_reaches_the_store() {
        let store = Arc::new(InMemoryTaskStore::new());
        let k = key("task-42", 1700000000);

        let outcome = runner(
            k.clone(),
            store.clone(),
            CapabilityTable::empty(),
            Arc::new(NoopEventSink),
        )
        .run()
        .await;

        assert_eq!(
            outcome,
            InstanceOutcome::failed(
                Step::LogStart,
                VigilError::PermissionDenied {
                    component: Component::Orchestrator,
                    operation: Operation::PutRecord,
                }
            )
        );
        // Aborted with no side effect.
        assert!(store.record(&k).await.is_none());
    }

    fn orchestrator(store: Arc<dyn TaskStore>) -> Orchestrator {
        let config = OrchestratorConfig {
            wait: WAIT,
            ..OrchestratorConfig::default()
        };
        Orchestrator::new(
            config,
            store,
            Arc::new(CapabilityTable::standard()),
            Arc::new(NoopEventSink),
            Arc::new(crate::ports::UlidGenerator::new(crate::ports::SystemClock)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_fire_and_forget() {
        let store = Arc::new(InMemoryTaskStore::new());
        let orch = orchestrator(store.clone());
        let k = key("task-42", 1700000000);

        let handle = orch.start(k.clone());
        assert!(handle.as_str().starts_with("instance-"));

        // The spawned instance has logged its start but is still waiting.
        tokio::task::yield_now().await;
        assert_eq!(store.record(&k).await.unwrap().status, TaskStatus::Started);

        // Once the wait elapses it finishes on its own.
        tokio::time::sleep(WAIT + Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(store.record(&k).await.unwrap().status, TaskStatus::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_instances_with_distinct_keys_do_not_interfere() {
        let store = Arc::new(InMemoryTaskStore::new());
        let orch = orchestrator(store.clone());
        let k1 = key("task-a", 1700000000);
        let k2 = key("task-b", 1700000001);

        orch.start(k1.clone());
        orch.start(k2.clone());

        tokio::time::sleep(WAIT + Duration::from_secs(1)).await;
        tokio::task::yield_now().await;

        assert_eq!(store.record(&k1).await.unwrap().status, TaskStatus::Done);
        assert_eq!(store.record(&k2).await.unwrap().status, TaskStatus::Done);
        assert_eq!(store.counts_by_status().await.done, 2);
    }
}
