// Errors surfaced by the explorer client

use crate::core::DecodeError;
use thiserror::Error;

/// Failure to complete an HTTP round trip
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Errors from [`InsightClient`](super::InsightClient)
///
/// A response that parses but fails verification is not an error; the
/// client reports it as an absent value instead.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed {endpoint} response: {source}")]
    Json {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid field {field:?} in {endpoint} response: {reason}")]
    Field {
        endpoint: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("undecodable transaction in {endpoint} response: {source}")]
    Transaction {
        endpoint: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("address {0:?} cannot be used in a request path")]
    Address(String),
}

pub type Result<T> = std::result::Result<T, InsightError>;
