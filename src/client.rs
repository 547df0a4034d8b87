use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde_json::Value;

use crate::{
    endpoint::{split_endpoint, validate_rest_endpoint, EndpointParts, ValidationOutcome},
    payload::{to_query_string, Payload},
    transport::{HttpTransport, ReqwestTransport, Sleeper, TokioSleeper},
    AlchemyHttpError, ClientOptions, Result,
};

/// HTTP client for Alchemy REST endpoints.
///
/// The configured URL is validated once at construction; the origin and
/// API-key segment derived from it are reused for every call. Cloning is
/// cheap and clones share the underlying transport.
#[derive(Clone)]
pub struct AlchemyRestClient {
    transport: Arc<dyn HttpTransport>,
    sleeper: Arc<dyn Sleeper>,
    validation: ValidationOutcome,
    parts: EndpointParts,
    options: ClientOptions,
}

impl fmt::Debug for AlchemyRestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlchemyRestClient")
            .field("origin", &self.parts.origin)
            .field("api_key", &"<redacted>")
            .field("validation", &self.validation)
            .field("options", &self.options)
            .finish()
    }
}

impl AlchemyRestClient {
    /// Creates a client for the configured endpoint URL.
    ///
    /// Construction never fails: a URL that fails validation is stored with
    /// its rejection reason and surfaces as [`AlchemyHttpError::Config`] on
    /// the first call.
    pub fn new(url: impl AsRef<str>) -> Self {
        let url = url.as_ref();
        Self {
            transport: Arc::new(ReqwestTransport::new()),
            sleeper: Arc::new(TokioSleeper),
            validation: validate_rest_endpoint(url),
            parts: split_endpoint(url),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from the `ALCHEMY_URL` environment variable.
    ///
    /// Returns an error if the variable is missing or empty.
    pub fn from_env() -> std::result::Result<Self, String> {
        let url = std::env::var("ALCHEMY_URL")
            .map_err(|_| "missing ALCHEMY_URL environment variable".to_owned())?;
        if url.trim().is_empty() {
            return Err("ALCHEMY_URL is set but empty".to_owned());
        }
        Ok(Self::new(url))
    }

    /// Applies retry options.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the HTTP transport.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replaces the sleeper used for inter-attempt backoff.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Sends one REST call, retrying while the endpoint reports rate limiting.
    ///
    /// `path` is appended directly after the API-key segment; include a
    /// leading `/` when the target route expects one. `payload` is encoded as
    /// URL query parameters.
    ///
    /// A 200 returns the parsed JSON body. A 429 is retried up to
    /// `max_retries` times, sleeping `retry_interval_ms` plus up to
    /// `retry_jitter_ms` of random jitter between attempts. Any other status
    /// fails immediately with [`AlchemyHttpError::Http`].
    ///
    /// Returns `Ok(None)` without sending anything when the configured URL
    /// yields an empty origin or API-key segment.
    pub async fn send_rest_payload(&self, path: &str, payload: &Payload) -> Result<Option<Value>> {
        if let Some(reason) = self.validation.rejection() {
            return Err(AlchemyHttpError::Config(reason.to_owned()));
        }
        if self.parts.origin.is_empty() || self.parts.api_key.is_empty() {
            return Ok(None);
        }

        let endpoint = self.endpoint_url(path, payload);
        let attempts = self.options.max_retries.saturating_add(1);
        for attempt in 0..attempts {
            let response = self.transport.get(&endpoint).await?;
            match response.status {
                200 => {
                    return serde_json::from_str(&response.body)
                        .map(Some)
                        .map_err(|err| {
                            AlchemyHttpError::Decode(format!(
                                "invalid JSON response: {err}; body: {}",
                                response.body
                            ))
                        });
                }
                429 => {
                    if attempt + 1 < attempts {
                        self.wait_before_retry().await;
                    }
                }
                status => {
                    return Err(AlchemyHttpError::Http {
                        status,
                        status_text: response.status_text,
                    });
                }
            }
        }
        Err(AlchemyHttpError::RateLimitExhausted { attempts })
    }

    fn endpoint_url(&self, path: &str, payload: &Payload) -> String {
        let base = format!("{}/{}{}", self.parts.origin, self.parts.api_key, path);
        let query = to_query_string(payload);
        if query.is_empty() {
            base
        } else {
            format!("{base}?{query}")
        }
    }

    async fn wait_before_retry(&self) {
        let jitter = (self.options.retry_jitter_ms as f64 * rand::thread_rng().gen::<f64>()) as u64;
        let delay_ms = self.options.retry_interval_ms + jitter;

        #[cfg(feature = "tracing")]
        tracing::debug!("rate limited, retrying after {} ms", delay_ms);

        self.sleeper.sleep(Duration::from_millis(delay_ms)).await;
    }
}
