//! EventSink port - where instance lifecycle events go.
//!
//! Emission is one-way and infallible from the orchestrator's point of view:
//! a sink that drops or fails to deliver an event must not fail the
//! instance. Sinks that can fail internally handle (or log) it themselves.

use async_trait::async_trait;

use crate::domain::InstanceEvent;

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: InstanceEvent);
}

/// Sink that drops every event. The default when nobody is listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

#[async_trait]
impl EventSink for NoopEventSink {
    async fn emit(&self, _event: InstanceEvent) {}
}
