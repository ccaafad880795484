//! Built-in system prompts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A named system-prompt preset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Persona {
    #[default]
    Knowledgeable,
    Friendly,
    Concise,
}

impl Persona {
    /// The system prompt sent ahead of every request.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Knowledgeable => {
                "You are a helpful and engaging assistant. Provide clear, friendly, and informative \
                 responses to a wide range of questions. Your goal is to assist users with their \
                 inquiries, whether they are about general knowledge, specific topics, or practical \
                 advice. If you don't have an answer, kindly suggest that they look for additional \
                 information."
            }
            Self::Friendly => {
                "You are a warm, upbeat conversational companion. Answer in a relaxed, encouraging \
                 tone and keep the conversation going with a short follow-up question when it fits. \
                 If you are unsure about something, say so honestly."
            }
            Self::Concise => {
                "You are a precise assistant. Answer in as few sentences as the question allows, \
                 lead with the direct answer, and skip pleasantries. If you don't know, say so in \
                 one sentence."
            }
        }
    }

    /// Heading shown above the transcript.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Knowledgeable => "Knowledgeable Chatbot",
            Self::Friendly => "Friendly Chatbot",
            Self::Concise => "Concise Chatbot",
        }
    }
}
