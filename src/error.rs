/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum AlchemyHttpError {
    /// Endpoint URL failed validation at construction time.
    ///
    /// Surfaced on the first dispatch attempt, before any network I/O.
    #[error("invalid endpoint configuration: {0}")]
    Config(String),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-200, non-429 HTTP status. Never retried.
    #[error("{status}: {status_text}")]
    Http {
        /// HTTP status code of the failing response.
        status: u16,
        /// Status text reported alongside the code.
        status_text: String,
    },
    /// Every attempt in the retry budget came back rate limited.
    #[error("rate limited for {attempts} consecutive attempts")]
    RateLimitExhausted {
        /// Total attempts issued, i.e. `max_retries + 1`.
        attempts: usize,
    },
    /// A 200 response whose body is not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
}
