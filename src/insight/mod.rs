// Verified access to an Insight-style blockchain explorer.
//
// The server names the chain tip and lists unspent outputs on trust.
// Everything else it claims (block headers, block membership,
// transactions) is re-hashed locally before it reaches the caller.

mod client;
mod config;
mod error;
mod response;
mod transport;

pub use client::{AnnotatedHeader, InsightClient};
pub use config::{InsightConfig, BASE_URL_ENV};
pub use error::{InsightError, Result, TransportError};
pub use response::{Amount, BlockResponse, RawTxResponse, StatusResponse, TxResponse, UtxoEntry};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
pub(crate) use transport::mock;
