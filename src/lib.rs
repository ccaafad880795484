//! palaver — conversational chat over OpenAI-compatible completion endpoints.
//!
//! A [`session::ChatSession`] owns the running [`conversation::Conversation`]
//! and hands it to a [`gateway::CompletionGateway`] on every user turn. The
//! gateway prepends a system prompt, calls the provider once, and returns the
//! first choice's text (or a readable failure message).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use palaver::prelude::*;
//! use palaver::provider::{http, openai::OpenAiChatProvider};
//!
//! # async fn example() -> palaver::error::Result<()> {
//! let config = ChatConfig::from_env();
//! let provider = OpenAiChatProvider::new(http::build_client()?, config.api_key(), None);
//! let gateway = CompletionGateway::builder()
//!     .provider(Arc::new(provider))
//!     .model(config.model())
//!     .system_prompt(config.system_prompt())
//!     .build();
//!
//! let mut session = ChatSession::new(&gateway);
//! let reply = session.submit("Hello!").await;
//! println!("{}", reply.content());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod conversation;
pub mod error;
pub mod gateway;
pub mod persona;
pub mod prelude;
pub mod provider;
pub mod session;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
