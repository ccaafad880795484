//! Convenience re-exports for common use.

pub use crate::config::ChatConfig;
pub use crate::conversation::Conversation;
pub use crate::error::{PalaverError, Result};
pub use crate::gateway::CompletionGateway;
pub use crate::persona::Persona;
pub use crate::provider::{CompletionProvider, CompletionRequest, CompletionResponse};
pub use crate::session::ChatSession;
pub use crate::types::{Role, Turn};
