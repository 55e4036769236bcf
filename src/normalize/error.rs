// Errors raised while normalizing caller input

use crate::core::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    #[error("null data of {0} bytes exceeds the {max} byte limit", max = super::MAX_NULLDATA)]
    MaxNulldataExceeded(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid transaction: {0}")]
    InvalidTransaction(#[source] DecodeError),
}

impl From<DecodeError> for NormalizeError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Hex(err) => NormalizeError::InvalidHex(err),
            other => NormalizeError::InvalidTransaction(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
