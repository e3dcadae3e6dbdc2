//! Configuration types for the conversation practice system.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV_VAR: &str = "TANDEM_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    /// Remote reply generator settings.
    pub llm: LlmConfig,
    /// Conversation session settings.
    pub conversation: ConversationConfig,
}

/// Remote reply generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API.
    pub api_url: String,
    /// Model identifier to request.
    pub api_model: String,
    /// API key. Prefer setting [`API_KEY_ENV_VAR`] instead of storing the
    /// key in the config file.
    pub api_key: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
    /// Maximum tokens to generate per reply.
    pub max_tokens: usize,
    /// Per-request HTTP timeout in seconds. This is a transport concern;
    /// the shaper itself imposes no timeout.
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_owned(),
            api_model: "gpt-4o-mini".to_owned(),
            api_key: String::new(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 512,
            request_timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Returns the API key, preferring [`API_KEY_ENV_VAR`] over the config
    /// field. Empty when neither is set.
    pub fn resolved_api_key(&self) -> String {
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.api_key.clone(),
        }
    }
}

/// Conversation session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Maximum history turns rendered into a continuation prompt.
    /// 0 disables trimming.
    pub max_history_turns: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_history_turns: 20,
        }
    }
}

impl PracticeConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::PracticeError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot
    /// be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PracticeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/tandem/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("tandem").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("tandem")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/tandem-config/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PracticeConfig::default();
        assert!(!config.llm.api_url.is_empty());
        assert!(!config.llm.api_model.is_empty());
        assert!(config.llm.temperature >= 0.0);
        assert!(config.llm.top_p >= 0.0 && config.llm.top_p <= 1.0);
        assert!(config.llm.max_tokens > 0);
        assert!(config.llm.request_timeout_secs > 0);
        assert!(config.conversation.max_history_turns > 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = PracticeConfig::default();
        config.llm.api_model = "llama3:8b".to_owned();
        config.conversation.max_history_turns = 8;
        config.save_to_file(&path).unwrap();

        let loaded = PracticeConfig::from_file(&path).unwrap();
        assert_eq!(loaded.llm.api_model, "llama3:8b");
        assert_eq!(loaded.conversation.max_history_turns, 8);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: PracticeConfig = toml::from_str(
            r#"
[llm]
api_url = "http://localhost:11434"
"#,
        )
        .unwrap();
        assert_eq!(config.llm.api_url, "http://localhost:11434");
        // Unspecified fields take defaults.
        assert_eq!(config.llm.max_tokens, 512);
        assert_eq!(config.conversation.max_history_turns, 20);
    }

    #[test]
    fn config_key_used_when_env_unset() {
        let config = LlmConfig {
            api_key: "sk-from-config".to_owned(),
            ..Default::default()
        };
        // The env override is only consulted when the variable is set and
        // non-empty; tests do not set it.
        if std::env::var(API_KEY_ENV_VAR).is_err() {
            assert_eq!(config.resolved_api_key(), "sk-from-config");
        }
    }

    #[test]
    fn default_path_is_under_tandem() {
        let path = PracticeConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tandem"));
        assert!(path_str.ends_with("config.toml"));
    }
}
