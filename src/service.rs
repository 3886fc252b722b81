//! Host service bus seam.
//!
//! Commands leave this crate through [`ServiceBus::call`] and nothing ever
//! comes back: no result, no acknowledgement, no retry. Failure handling
//! belongs to the backend and the host's own notification surface.

use serde_json::Value;

/// Service domain every PlantRun command is issued under.
pub const SERVICE_DOMAIN: &str = "plantrun";

/// Service names within the `plantrun` domain.
pub const SERVICE_ADD_PHASE: &str = "add_phase";
pub const SERVICE_ADD_NOTE: &str = "add_note";
pub const SERVICE_END_RUN: &str = "end_run";

/// Host-provided service invocation. Fire and forget.
pub trait ServiceBus {
    fn call(&mut self, domain: &str, service: &str, payload: Value);
}

/// A recorded service call. Used by tests and by the demo front-end to show
/// what was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub payload: Value,
}

/// In-memory bus that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingBus {
    calls: Vec<ServiceCall>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[ServiceCall] {
        &self.calls
    }

    pub fn last(&self) -> Option<&ServiceCall> {
        self.calls.last()
    }
}

impl ServiceBus for RecordingBus {
    fn call(&mut self, domain: &str, service: &str, payload: Value) {
        self.calls.push(ServiceCall {
            domain: domain.to_string(),
            service: service.to_string(),
            payload,
        });
    }
}
