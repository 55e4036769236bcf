// Conversion between decimal BTC amounts and satoshis

use thiserror::Error;

/// Satoshis per bitcoin
pub const COIN: u64 = 100_000_000;

/// Fractional digits of a satoshi-denominated BTC amount
const DECIMALS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("malformed amount {0:?}")]
    Malformed(String),

    #[error("amount {0:?} has more than 8 decimal places")]
    TooPrecise(String),

    #[error("amount {0:?} is out of range")]
    OutOfRange(String),
}

/// Convert a decimal BTC string such as `"0.00012"` to satoshis
///
/// The conversion is exact; sub-satoshi precision is an error rather than
/// being rounded away.
pub fn btc_to_satoshi(amount: &str) -> Result<u64, AmountError> {
    let text = amount.trim();
    let malformed = || AmountError::Malformed(amount.to_string());

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(malformed());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > DECIMALS {
        return Err(AmountError::TooPrecise(amount.to_string()));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| AmountError::OutOfRange(amount.to_string()))?
    };
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<width$}", width = DECIMALS)
            .parse()
            .map_err(|_| malformed())?
    };

    whole
        .checked_mul(COIN)
        .and_then(|sats| sats.checked_add(fraction))
        .ok_or_else(|| AmountError::OutOfRange(amount.to_string()))
}

/// Convert a floating point BTC amount, as some servers emit, to satoshis
pub fn btc_float_to_satoshi(amount: f64) -> Result<u64, AmountError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AmountError::OutOfRange(amount.to_string()));
    }
    let sats = (amount * COIN as f64).round();
    if sats > u64::MAX as f64 {
        return Err(AmountError::OutOfRange(amount.to_string()));
    }
    Ok(sats as u64)
}
