use thiserror::Error;

/// Unified error type for the analysis client.
///
/// Every failure is logged at the point of occurrence and propagated to the
/// caller unchanged. The client never retries and never swallows an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure before a response was obtained.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was received but its status indicates failure.
    #[error("API error: {status}")]
    Api { status: u16 },

    /// The model-provider call failed or returned a malformed response.
    /// Display is the bare message so it can be shown to callers verbatim.
    #[error("{message}")]
    Provider { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The per-call cancellation token fired before the exchange completed.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    pub fn provider(message: impl Into<String>) -> Self {
        Error::Provider {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
