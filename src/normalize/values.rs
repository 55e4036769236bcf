// Scalars, identifiers and raw transactions

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::core::{DecodeError, Hash256, Transaction};
use crate::normalize::{NormalizeError, Result};

/// Length of a compact recoverable signature: recovery byte + r + s
pub const SIGNATURE_LEN: usize = 65;

/// Decode a hex-encoded wire transaction
///
/// Signed and unsigned transactions are accepted alike.
pub fn parse_transaction(raw_hex: &str) -> Result<Transaction> {
    Ok(Transaction::from_hex(raw_hex)?)
}

/// Decode hex held either as text or as ASCII bytes
pub fn parse_binary(hex_data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_data.as_ref())?)
}

/// Decode a base64 compact signature
pub fn parse_signature(signature: &str) -> Result<[u8; SIGNATURE_LEN]> {
    let bytes = BASE64
        .decode(signature.trim())
        .map_err(|e| NormalizeError::InvalidInput(format!("signature is not base64: {e}")))?;
    bytes.as_slice().try_into().map_err(|_| {
        NormalizeError::InvalidInput(format!(
            "signature must be {SIGNATURE_LEN} bytes long, got {}",
            bytes.len()
        ))
    })
}

/// Coerce a loosely-typed scalar to an integer
///
/// Accepts integral numbers, floats (truncated toward zero), booleans and
/// decimal strings.
pub fn parse_integer(value: impl Into<Value>) -> Result<i64> {
    let value = value.into();
    let invalid = || NormalizeError::InvalidInput(format!("{value} is not an integer"));

    match &value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.trunc() >= i64::MIN as f64 && f.trunc() < i64::MAX as f64 => {
                    Ok(f.trunc() as i64)
                }
                _ => Err(invalid()),
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Coerce to an integer that may not be negative
pub fn parse_non_negative_integer(value: impl Into<Value>) -> Result<u64> {
    let number = parse_integer(value)?;
    u64::try_from(number)
        .map_err(|_| NormalizeError::InvalidInput(format!("integer may not be < 0, got {number}")))
}

/// Truthiness of a loosely-typed scalar
pub fn parse_flag(value: impl Into<Value>) -> bool {
    match value.into() {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Decode a display-order transaction id into wire order
///
/// `Hash256::to_hex` is the inverse.
pub fn parse_txid(display_hex: &str) -> Result<Hash256> {
    Hash256::from_hex(display_hex).map_err(|err| match err {
        DecodeError::Hex(err) => NormalizeError::InvalidHex(err),
        other => NormalizeError::InvalidInput(format!("invalid txid {display_hex:?}: {other}")),
    })
}
