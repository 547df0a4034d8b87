/// Configures retry behavior for rate-limited requests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Fixed delay between attempts in milliseconds.
    pub retry_interval_ms: u64,
    /// Upper bound on the random addition to each delay, in milliseconds.
    pub retry_jitter_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_interval_ms: 1_000,
            retry_jitter_ms: 250,
        }
    }
}
