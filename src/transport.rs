//! HTTP transport for the REST endpoints of the analysis service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Per-call knobs shared by every operation.
///
/// The default is "use the client-level timeout, not cancellable". A per-call
/// `timeout` bounds the whole exchange; `cancel` lets a caller abandon an
/// in-flight request early.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub timeout: Option<Duration>,
    pub cancel: Option<CancellationToken>,
}

impl CallOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            cancel: Some(cancel),
            ..Self::default()
        }
    }
}

pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub(crate) fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Send one JSON POST and decode the JSON response.
    ///
    /// Exactly one request is issued per call: failures are logged and
    /// propagated, never retried. A non-2xx status becomes [`Error::Api`].
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B, opts: &CallOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, "dispatching analysis request");

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body);
        if let Some(deadline) = opts.timeout {
            request = request.timeout(deadline);
        }

        let exchange = async {
            let response = request.send().await.map_err(Error::Transport)?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Api {
                    status: status.as_u16(),
                });
            }
            response.json::<T>().await.map_err(Error::Transport)
        };

        let result = match &opts.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(Error::Cancelled),
                outcome = exchange => outcome,
            },
            None => exchange.await,
        };

        if let Err(ref err) = result {
            tracing::error!(path, error = %err, "analysis request failed");
        }
        result
    }
}
