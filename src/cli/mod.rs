//! CLI entry point for palaver.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ChatConfig;
use crate::error::Result;
use crate::persona::Persona;
use crate::types::{Role, Turn};

/// Placeholder shown before each line of input.
pub const INPUT_PROMPT: &str = "Write your message";

/// Terminal chat with an OpenAI-compatible model
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about = "Terminal chat with an OpenAI-compatible model")]
pub struct Cli {
    /// Model identifier (defaults to MODEL_NAME)
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt preset (knowledgeable, friendly, concise)
    #[arg(short, long)]
    pub persona: Option<Persona>,

    /// Free-form system prompt; overrides the persona
    #[arg(short, long)]
    pub system: Option<String>,

    /// Endpoint base URL (defaults to OPENAI_BASE_URL or api.openai.com)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Load variables from this dotenv file instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Send a single message, print the reply and exit
    pub prompt: Option<String>,
}

impl Cli {
    /// Resolve configuration: environment first, then flag overrides.
    pub fn load_config(&self) -> Result<ChatConfig> {
        let mut config = match &self.env_file {
            Some(path) => ChatConfig::from_env_file(path)?,
            None => ChatConfig::from_env(),
        };
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(persona) = self.persona {
            config = config.with_persona(persona);
        }
        if let Some(system) = &self.system {
            config = config.with_system_prompt(system);
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        Ok(config)
    }
}

/// Parse a line of input as a session command.
///
/// Messages are forwarded untouched. A leading `//` escapes a command, so
/// `//exit` sends the literal text `/exit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Message(&'a str),
    History,
    Exit,
    Empty,
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "" => Self::Empty,
            "/exit" | "/quit" => Self::Exit,
            "/history" => Self::History,
            _ if trimmed.starts_with("//") => Self::Message(&trimmed[1..]),
            _ => Self::Message(line),
        }
    }
}

/// Render a turn as a labelled block.
pub fn render_turn(turn: &Turn) -> String {
    let label = match turn.role() {
        Role::System => "system",
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    format!("[{label}] {}", turn.content())
}
