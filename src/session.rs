//! A single interactive chat session.

use crate::conversation::Conversation;
use crate::gateway::CompletionGateway;
use crate::types::Turn;

/// Owns one conversation and drives the submit → respond → append cycle.
#[derive(Debug)]
pub struct ChatSession<'g> {
    gateway: &'g CompletionGateway,
    conversation: Conversation,
}

impl<'g> ChatSession<'g> {
    pub fn new(gateway: &'g CompletionGateway) -> Self {
        Self {
            gateway,
            conversation: Conversation::new(),
        }
    }

    /// Send `user_input` and record the exchange.
    ///
    /// The user turn is appended after the call returns, so the request never
    /// carries it twice. A failed call still yields an assistant turn.
    pub async fn submit(&mut self, user_input: &str) -> &Turn {
        let reply = self
            .gateway
            .respond(user_input, self.conversation.all())
            .await;
        self.conversation.append(Turn::user(user_input));
        self.conversation.push(Turn::assistant(reply))
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn into_conversation(self) -> Conversation {
        self.conversation
    }
}
