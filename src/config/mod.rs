//! Configuration (layered: code > env > `.env` file).

use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::error::{PalaverError, Result};
use crate::persona::Persona;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPEN_AI_KEY";
/// Fallback credential variable used by most OpenAI tooling.
pub const FALLBACK_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "MODEL_NAME";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const PERSONA_VAR: &str = "PALAVER_PERSONA";

/// Process-wide settings, read once at startup.
///
/// Missing credentials or model are not validated here; they surface as a
/// provider failure on the first call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChatConfig {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    persona: Persona,
    system_prompt: Option<String>,
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("persona", &self.persona)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load a specific dotenv file, then read the process environment.
    ///
    /// Variables already set in the environment win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| {
            PalaverError::Configuration(format!("cannot load {}: {e}", path.display()))
        })?;
        Ok(Self::from_vars(|name| std::env::var(name).ok()))
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let persona = match lookup(PERSONA_VAR) {
            Some(name) => name.parse().unwrap_or_else(|_| {
                warn!(persona = %name, "unknown persona, using default");
                Persona::default()
            }),
            None => Persona::default(),
        };

        Self {
            api_key: lookup(API_KEY_VAR).or_else(|| lookup(FALLBACK_API_KEY_VAR)),
            model: lookup(MODEL_VAR),
            base_url: lookup(BASE_URL_VAR),
            persona,
            system_prompt: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    /// Override the persona's prompt with free-form text.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// The credential, or an empty string when none was configured.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The model identifier, or an empty string when none was configured.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or_default()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// The effective system prompt: explicit override, else the persona's.
    pub fn system_prompt(&self) -> &str {
        self.system_prompt
            .as_deref()
            .unwrap_or_else(|| self.persona.system_prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn reads_key_and_model() {
        let config = ChatConfig::from_vars(lookup(&[
            (API_KEY_VAR, "sk-primary"),
            (MODEL_VAR, "gpt-4o-mini"),
        ]));
        assert_eq!(config.api_key(), "sk-primary");
        assert_eq!(config.model(), "gpt-4o-mini");
        assert_eq!(config.base_url(), None);
        assert_eq!(config.persona(), Persona::Knowledgeable);
    }

    #[test]
    fn primary_key_wins_over_fallback() {
        let config = ChatConfig::from_vars(lookup(&[
            (API_KEY_VAR, "sk-primary"),
            (FALLBACK_API_KEY_VAR, "sk-fallback"),
        ]));
        assert_eq!(config.api_key(), "sk-primary");

        let config = ChatConfig::from_vars(lookup(&[(FALLBACK_API_KEY_VAR, "sk-fallback")]));
        assert_eq!(config.api_key(), "sk-fallback");
    }

    #[test]
    fn missing_values_are_not_validated() {
        let config = ChatConfig::from_vars(lookup(&[]));
        assert!(!config.has_api_key());
        assert_eq!(config.api_key(), "");
        assert_eq!(config.model(), "");
    }

    #[test]
    fn unknown_persona_falls_back_to_default() {
        let config = ChatConfig::from_vars(lookup(&[(PERSONA_VAR, "pirate")]));
        assert_eq!(config.persona(), Persona::default());

        let config = ChatConfig::from_vars(lookup(&[(PERSONA_VAR, "concise")]));
        assert_eq!(config.persona(), Persona::Concise);
        assert_eq!(config.system_prompt(), Persona::Concise.system_prompt());
    }

    #[test]
    fn explicit_overrides_apply() {
        let config = ChatConfig::new()
            .with_api_key("sk-code")
            .with_model("m")
            .with_base_url("http://localhost:1234/v1")
            .with_persona(Persona::Friendly)
            .with_system_prompt("Talk like a sommelier.");
        assert_eq!(config.api_key(), "sk-code");
        assert_eq!(config.base_url(), Some("http://localhost:1234/v1"));
        assert_eq!(config.persona(), Persona::Friendly);
        assert_eq!(config.system_prompt(), "Talk like a sommelier.");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ChatConfig::new().with_api_key("sk-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
