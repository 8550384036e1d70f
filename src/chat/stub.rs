use std::time::Duration;

use async_trait::async_trait;

use super::ChatBackend;
use crate::{CallOptions, ChatResponse, Error, Result};

const UNAVAILABLE_MESSAGE: &str = "Chat service is currently unavailable. Please try again later.";
const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Placeholder backend: waits a fixed delay, then always fails.
///
/// Honors the full [`CallOptions`] contract like the other backends: a
/// per-call deadline shorter than the fixed delay cuts the wait short, and
/// the cancellation token aborts it.
pub struct StubChatBackend {
    delay: Duration,
}

impl StubChatBackend {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

impl Default for StubChatBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for StubChatBackend {
    async fn send(&self, _message: &str, opts: &CallOptions) -> Result<ChatResponse> {
        let wait = async {
            let delay = tokio::time::sleep(self.delay);
            match opts.timeout {
                Some(deadline) => tokio::time::timeout(deadline, delay).await.map_err(|_| {
                    let err = Error::provider("chat request timed out");
                    tracing::error!(error = %err, "chat request failed");
                    err
                }),
                None => {
                    delay.await;
                    Ok(())
                }
            }
        };
        match &opts.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(Error::Cancelled),
                outcome = wait => outcome?,
            },
            None => wait.await?,
        }

        let err = Error::provider(UNAVAILABLE_MESSAGE);
        tracing::error!(error = %err, "chat request failed");
        Err(err)
    }
}
