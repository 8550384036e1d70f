//! # arglens
//!
//! Async client for a remote argument-analysis service. Four typed
//! operations, each a single outbound exchange with no retries, caching,
//! or streaming:
//!
//! - [`AnalysisClient::analyze`] — main claim, supporting arguments,
//!   structure, and strength of an argumentative text
//! - [`AnalysisClient::validate`] — logical-validity check
//! - [`AnalysisClient::detect_fallacies`] — ordered list of detected fallacies
//! - [`AnalysisClient::send_chat_message`] — chat exchange via a configurable
//!   backend (placeholder stub or a hosted chat-completion provider)
//!
//! Failures are logged with `tracing` where they occur and propagated to the
//! caller unchanged; shaping them for display is the caller's concern (see
//! [`adapter`]).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use arglens::{AnalysisClient, CallOptions};
//!
//! #[tokio::main]
//! async fn main() -> arglens::Result<()> {
//!     let client = AnalysisClient::builder()
//!         .base_url("https://analysis.example.net")
//!         .build()?;
//!
//!     let result = client
//!         .analyze("We should adopt the plan because it works.", &CallOptions::default())
//!         .await?;
//!     println!("main claim: {}", result.main_claim);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod chat;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub mod error;
pub use error::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

// Re-export main types for convenience
pub use adapter::{error_message, to_validation_result};
pub use chat::{ChatBackend, OpenAiChatBackend, StubChatBackend};
pub use client::{AnalysisClient, AnalysisClientBuilder};
pub use config::{ChatMode, ClientConfig};
pub use transport::CallOptions;
pub use types::{AnalysisResult, ChatResponse, Fallacy, ValidationResult};
