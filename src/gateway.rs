//! Prompt assembly and the single completion call per user turn.

use std::fmt;
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, warn};

use crate::error::Result;
use crate::persona::Persona;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::types::Turn;

/// Label prepended to a failure's detail when it is returned as a reply.
pub const FAILURE_PREFIX: &str = "Oops! Something went wrong: ";

/// Stateless front door to a completion provider.
///
/// Every call sends `[system, ..prior_turns, user]` and returns the first
/// choice's text. Failures never escape [`respond`](Self::respond); they come
/// back as a readable reply instead.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use palaver::gateway::CompletionGateway;
/// # use palaver::provider::{http, openai::OpenAiChatProvider};
/// # async fn example() -> palaver::error::Result<()> {
/// let provider = OpenAiChatProvider::new(http::build_client()?, "sk-...", None);
/// let gateway = CompletionGateway::builder()
///     .provider(Arc::new(provider))
///     .model("gpt-4o-mini")
///     .build();
/// let reply = gateway.respond("Hello", &[]).await;
/// # Ok(())
/// # }
/// ```
#[derive(Builder)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
    #[builder(into)]
    model: String,
    #[builder(into, default = Persona::default().system_prompt().to_string())]
    system_prompt: String,
}

impl fmt::Debug for CompletionGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionGateway")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

impl CompletionGateway {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Assemble the outbound message list without touching `prior_turns`.
    pub fn build_messages(&self, user_input: &str, prior_turns: &[Turn]) -> Vec<Turn> {
        let mut messages = Vec::with_capacity(prior_turns.len() + 2);
        messages.push(Turn::system(self.system_prompt.as_str()));
        messages.extend_from_slice(prior_turns);
        messages.push(Turn::user(user_input));
        messages
    }

    /// Make the completion call and surface the typed error on failure.
    pub async fn try_respond(&self, user_input: &str, prior_turns: &[Turn]) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(user_input, prior_turns),
        };
        debug!(
            provider = self.provider.provider_name(),
            model = %self.model,
            messages = request.messages.len(),
            "gateway: calling provider"
        );
        let response = self.provider.complete(&request).await?;
        Ok(response.text)
    }

    /// Make the completion call, folding any failure into the reply text.
    pub async fn respond(&self, user_input: &str, prior_turns: &[Turn]) -> String {
        match self.try_respond(user_input, prior_turns).await {
            Ok(text) => text,
            Err(e) => {
                warn!(category = %e.category(), error = %e, "completion failed");
                format!("{FAILURE_PREFIX}{e}")
            }
        }
    }
}
