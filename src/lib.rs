// Bitcoin transaction toolkit
// Input normalization for transaction builders, plus an explorer client
// that only returns what it can re-hash

pub mod core;
pub mod insight;
pub mod normalize;
pub mod wallet;

#[cfg(test)]
mod test_vectors;

// Re-exports for convenience
pub use core::{BlockHeader, Hash256, Script, Spendable, Transaction, TxInput, TxOutput};
pub use insight::{AnnotatedHeader, HttpTransport, InsightClient, InsightConfig, InsightError, Transport};
pub use normalize::NormalizeError;
pub use wallet::{Address, Key, Network};
