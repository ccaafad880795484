//! Completion provider trait and implementations.

pub mod http;
pub mod openai;

use async_trait::async_trait;

use crate::error::PalaverError;
use crate::types::{FinishReason, Turn, Usage};

/// A request sent to a completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Turn>,
}

/// Response from a provider: the first choice's text plus metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
    pub finish_reason: Option<FinishReason>,
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// A plain text response with no metadata.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
            usage: None,
        }
    }
}

/// Core trait implemented by all completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// Run a single, non-streaming completion.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, PalaverError>;
}
