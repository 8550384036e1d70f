//! The analysis client and its builder.

use serde::Serialize;
use url::Url;

use crate::chat::{ChatBackend, OpenAiChatBackend, StubChatBackend};
use crate::config::{ChatMode, ClientConfig};
use crate::transport::{CallOptions, HttpTransport};
use crate::types::{AnalysisResult, ChatResponse, Fallacy, ValidationResult};
use crate::{Error, Result};

const ANALYZE_PATH: &str = "/api/analyze";
const VALIDATE_PATH: &str = "/api/validate";
const FALLACIES_PATH: &str = "/api/fallacies";

/// Request body shared by the three REST operations.
#[derive(Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

/// Façade over the argument-analysis service.
///
/// One method per remote capability; each performs a single stateless
/// request/response exchange. Operations share no mutable state and may be
/// issued concurrently. Empty input is not rejected here; callers are
/// expected to validate presentation-side.
pub struct AnalysisClient {
    transport: HttpTransport,
    chat: Box<dyn ChatBackend>,
}

impl AnalysisClient {
    pub fn builder() -> AnalysisClientBuilder {
        AnalysisClientBuilder::new()
    }

    /// Build a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| Error::configuration(format!("invalid base URL '{}': {e}", config.base_url)))?;

        let chat: Box<dyn ChatBackend> = match config.chat_mode {
            ChatMode::Stub => Box::new(StubChatBackend::new()),
            ChatMode::Provider => Box::new(OpenAiChatBackend::new(&config)?),
        };
        let transport = HttpTransport::new(config.base_url, config.timeout)?;
        Ok(Self { transport, chat })
    }

    /// Full analysis of an argumentative text: main claim, supporting
    /// arguments, structure, and strength.
    pub async fn analyze(&self, text: &str, opts: &CallOptions) -> Result<AnalysisResult> {
        self.transport
            .post_json(ANALYZE_PATH, &TextRequest { text }, opts)
            .await
    }

    /// Logical-validity check of a single argument.
    pub async fn validate(&self, text: &str, opts: &CallOptions) -> Result<ValidationResult> {
        self.transport
            .post_json(VALIDATE_PATH, &TextRequest { text }, opts)
            .await
    }

    /// Detected fallacies, in the order the service reports them.
    /// An empty response body `[]` is a success, not a failure.
    pub async fn detect_fallacies(&self, text: &str, opts: &CallOptions) -> Result<Vec<Fallacy>> {
        self.transport
            .post_json(FALLACIES_PATH, &TextRequest { text }, opts)
            .await
    }

    /// Send one chat message through the configured backend.
    pub async fn send_chat_message(&self, message: &str, opts: &CallOptions) -> Result<ChatResponse> {
        self.chat.send(message, opts).await
    }
}

/// Builder for [`AnalysisClient`].
pub struct AnalysisClientBuilder {
    config: ClientConfig,
}

impl AnalysisClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Seed the builder from an existing configuration
    /// (for example [`ClientConfig::from_env`]).
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn provider_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.provider_base_url = url.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn chat_mode(mut self, mode: ChatMode) -> Self {
        self.config.chat_mode = mode;
        self
    }

    pub fn build(self) -> Result<AnalysisClient> {
        AnalysisClient::from_config(self.config)
    }
}

impl Default for AnalysisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
