//! Chat backends.
//!
//! `send_chat_message` is a single operation behind a capability trait with
//! two interchangeable strategies, selected by [`ChatMode`](crate::ChatMode):
//! a deliberately non-functional stub and a provider-backed implementation.

mod openai;
mod stub;

pub use openai::OpenAiChatBackend;
pub use stub::StubChatBackend;

use async_trait::async_trait;

use crate::{CallOptions, ChatResponse, Result};

/// One outbound chat exchange. Implementations are stateless per call.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, message: &str, opts: &CallOptions) -> Result<ChatResponse>;
}
