//! External collaborators of the dispatch loop: the HTTP transport that
//! issues one GET per attempt, and the sleeper that suspends between
//! attempts. Both sit behind traits so tests can substitute recording
//! doubles.

use std::time::Duration;

use async_trait::async_trait;

use crate::{AlchemyHttpError, Result};

/// One HTTP response as seen by the dispatch loop.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Status text reported alongside the code.
    pub status_text: String,
    /// Raw response body; parsed as JSON only on a 200.
    pub body: String,
}

/// Fetch-like facility issuing a single GET request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends one GET to `url` and returns the response.
    ///
    /// Network-level failures surface as [`AlchemyHttpError::Transport`] and
    /// are never retried by the caller.
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// Default transport backed by [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(AlchemyHttpError::Transport)?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let body = response.text().await.map_err(AlchemyHttpError::Transport)?;
        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Suspend-for-duration primitive used only for inter-attempt backoff.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps via `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
