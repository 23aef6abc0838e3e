//! Scripted estimation service for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reelquote_types::ServiceError;
use tokio::sync::Notify;

use crate::{EstimationService, GenerationRequest};

pub(crate) const EXPLAINER_JSON: &str = r#"{"estimatedCostRange":"$500-$750","timelineEstimate":"1 week","breakdown":[{"item":"Animation","cost":"$400"}],"assumptions":"Single revision round"}"#;

/// Replays queued responses and records every request.
#[derive(Debug, Default)]
pub(crate) struct ScriptedService {
    responses: Mutex<VecDeque<Result<String, ServiceError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    calls: AtomicUsize,
    gate: Option<Notify>,
}

impl ScriptedService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Holds every call until [`ScriptedService::release`] is called.
    pub(crate) fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub(crate) fn respond(self, response: Result<String, ServiceError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn respond_json(self, json: &str) -> Self {
        self.respond(Ok(json.to_string()))
    }

    pub(crate) fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EstimationService for ScriptedService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ServiceError::EmptyResponse))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
