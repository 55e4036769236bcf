// Conversion of untyped caller input into validated protocol values.
//
// Every function either returns a fully validated value or the first
// `NormalizeError` it meets; list variants keep input order and never
// return partial results.

mod error;
mod keys;
mod tx;
mod values;

pub use error::{NormalizeError, Result};
pub use keys::{parse_address, parse_addresses, parse_key, parse_keys, parse_secret_exponents};
pub use tx::{build_null_data_tx_out, build_tx_in, build_tx_ins, build_tx_out, build_tx_outs, MAX_NULLDATA};
pub use values::{
    parse_binary, parse_flag, parse_integer, parse_non_negative_integer, parse_signature,
    parse_transaction, parse_txid, SIGNATURE_LEN,
};
