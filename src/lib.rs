//! `alchemy-http` is an async HTTP client for Alchemy REST endpoints.
//!
//! The crate validates the configured endpoint URL once, derives the origin
//! and API-key path segment from it, and sends GET requests through
//! [`AlchemyRestClient::send_rest_payload`] with retry behavior tuned to
//! Alchemy's rate-limiting contract: a 429 is retried after a fixed interval
//! plus bounded random jitter, any other non-200 status fails immediately.

mod client;
mod endpoint;
mod error;
mod options;
mod payload;
mod transport;

pub use client::AlchemyRestClient;
pub use endpoint::{split_endpoint, validate_rest_endpoint, EndpointParts, ValidationOutcome};
pub use error::AlchemyHttpError;
pub use options::ClientOptions;
pub use payload::{to_query_string, Payload};
pub use transport::{HttpTransport, ReqwestTransport, Sleeper, TokioSleeper, TransportResponse};

pub type Result<T> = std::result::Result<T, AlchemyHttpError>;
