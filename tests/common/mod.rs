//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use palaver::error::PalaverError;
use palaver::gateway::CompletionGateway;
use palaver::provider::{CompletionProvider, CompletionRequest, CompletionResponse};

pub const TEST_SYSTEM_PROMPT: &str = "You are a test assistant.";
pub const TEST_MODEL: &str = "test-model";

/// A provider that records every request and replays queued outcomes.
///
/// Once the queue is drained it answers with `"Mock response"`.
#[derive(Default)]
pub struct CaptureProvider {
    outcomes: Mutex<VecDeque<Result<CompletionResponse, PalaverError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl CaptureProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a text response.
    pub fn queue_response(&self, text: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(CompletionResponse::text(text)));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: PalaverError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for CaptureProvider {
    fn provider_name(&self) -> &str {
        "capture"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, PalaverError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CompletionResponse::text("Mock response")))
    }
}

/// A gateway wired to `provider` with the test model and prompt.
pub fn gateway_for(provider: Arc<CaptureProvider>) -> CompletionGateway {
    CompletionGateway::builder()
        .provider(provider)
        .model(TEST_MODEL)
        .system_prompt(TEST_SYSTEM_PROMPT)
        .build()
}
