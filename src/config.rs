//! Client configuration.
//!
//! Configuration is an explicit object handed to the builder rather than
//! process-global state, so multiple differently-configured clients can
//! coexist in one process (and in one test binary).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::{Error, Result};

/// Which strategy backs `send_chat_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
    /// Placeholder backend: always fails after a fixed delay.
    #[default]
    Stub,
    /// Delegates to a hosted chat-completion API.
    Provider,
}

impl FromStr for ChatMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stub" => Ok(ChatMode::Stub),
            "provider" => Ok(ChatMode::Provider),
            other => Err(Error::configuration(format!(
                "unknown chat mode '{other}' (expected 'stub' or 'provider')"
            ))),
        }
    }
}

/// Settings for [`AnalysisClient`](crate::AnalysisClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis service. Defaults to a placeholder host.
    pub base_url: String,
    /// Base URL of the model provider used in [`ChatMode::Provider`].
    pub provider_base_url: String,
    /// Provider API key. Required only in provider mode.
    pub api_key: Option<String>,
    /// Provider model name.
    pub model: String,
    /// Client-level request timeout. Individual calls may shorten it via
    /// [`CallOptions`](crate::CallOptions).
    pub timeout: Duration,
    pub chat_mode: ChatMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.example.com".to_string(),
            provider_base_url: "https://api.openai.com".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(30),
            chat_mode: ChatMode::Stub,
        }
    }
}

impl ClientConfig {
    /// Defaults layered with environment overrides:
    /// `ARGLENS_BASE_URL`, `ARGLENS_PROVIDER_BASE_URL`, `OPENAI_API_KEY`,
    /// `ARGLENS_MODEL`, `ARGLENS_TIMEOUT_SECS`, `ARGLENS_CHAT_MODE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("ARGLENS_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(url) = env::var("ARGLENS_PROVIDER_BASE_URL") {
            config.provider_base_url = url;
        }
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(model) = env::var("ARGLENS_MODEL") {
            config.model = model;
        }
        if let Some(secs) = env::var("ARGLENS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(mode) = env::var("ARGLENS_CHAT_MODE")
            .ok()
            .and_then(|s| s.parse::<ChatMode>().ok())
        {
            config.chat_mode = mode;
        }
        config
    }
}
