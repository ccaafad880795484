//! OpenAI Chat Completions API provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PalaverError;
use crate::types::{FinishReason, Role, Turn, Usage};

use super::http::{bearer_headers, status_to_error};
use super::{CompletionProvider, CompletionRequest, CompletionResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiChatProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiChatProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body<'a>(&self, request: &'a CompletionRequest) -> OpenAiChatRequest<'a> {
        OpenAiChatRequest {
            model: &request.model,
            messages: request.messages.iter().map(message_to_openai).collect(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiChatProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, PalaverError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "OpenAI chat completion"
        );

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let raw = resp.text().await?;
        let data: OpenAiChatResponse = serde_json::from_str(&raw)?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or(PalaverError::EmptyResponse)?;

        let finish_reason = choice.finish_reason.as_deref().and_then(parse_finish_reason);
        let usage = data.usage.map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(
            finish_reason = ?finish_reason,
            total_tokens = usage.map(|u| u.total_tokens),
            "OpenAI chat completion finished"
        );

        Ok(CompletionResponse {
            text: choice.message.content.unwrap_or_default(),
            finish_reason,
            usage,
        })
    }
}

fn parse_finish_reason(s: &str) -> Option<FinishReason> {
    s.parse().ok()
}

fn message_to_openai(turn: &Turn) -> OpenAiMessageOut<'_> {
    let role = match turn.role() {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    OpenAiMessageOut {
        role,
        content: turn.content(),
    }
}

// OpenAI API wire types (internal)

#[derive(Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessageOut<'a>>,
}

#[derive(Serialize)]
struct OpenAiMessageOut<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

// Some compatible servers omit individual counters.
#[derive(Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}
