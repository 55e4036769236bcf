// Transaction inputs and outputs from loosely-typed input

use serde_json::Value;

use crate::core::{Script, TxInput, TxOutput};
use crate::normalize::{parse_address, parse_non_negative_integer, parse_binary, parse_txid};
use crate::normalize::{NormalizeError, Result};
use crate::wallet::Network;

/// Largest null-data payload relayed by standard nodes
pub const MAX_NULLDATA: usize = 40;

/// Unsigned input spending output `index` of the transaction `txid`
pub fn build_tx_in(txid: &str, index: impl Into<Value>) -> Result<TxInput> {
    let prev_tx_hash = parse_txid(txid)?;
    let index = parse_non_negative_integer(index)?;
    let prev_index = u32::try_from(index)
        .map_err(|_| NormalizeError::InvalidInput(format!("output index {index} is out of range")))?;
    Ok(TxInput::unsigned(prev_tx_hash, prev_index))
}

/// Inputs from a list of `{"txid": .., "index": ..}` objects
pub fn build_tx_ins(data: &[Value]) -> Result<Vec<TxInput>> {
    data.iter()
        .map(|entry| {
            let txid = string_field(entry, "txid")?;
            build_tx_in(txid, field(entry, "index")?.clone())
        })
        .collect()
}

/// Pay-to-pubkey-hash output sending `value` satoshis to `address`
pub fn build_tx_out(network: Network, address: &str, value: impl Into<Value>) -> Result<TxOutput> {
    let address = parse_address(network, address)?;
    let value = parse_non_negative_integer(value)?;
    let script = address.p2pkh_script_pubkey().ok_or_else(|| {
        NormalizeError::InvalidAddress(format!("{address} is not a pay-to-pubkey-hash address"))
    })?;
    Ok(TxOutput::new(value, script))
}

/// Outputs from a list of `{"address": .., "value": ..}` objects
pub fn build_tx_outs(network: Network, data: &[Value]) -> Result<Vec<TxOutput>> {
    data.iter()
        .map(|entry| {
            let address = string_field(entry, "address")?;
            build_tx_out(network, address, field(entry, "value")?.clone())
        })
        .collect()
}

/// Zero-value output publishing hex-encoded `hex_data`
pub fn build_null_data_tx_out(hex_data: impl AsRef<[u8]>) -> Result<TxOutput> {
    let data = parse_binary(hex_data)?;
    if data.len() > MAX_NULLDATA {
        return Err(NormalizeError::MaxNulldataExceeded(data.len()));
    }
    let script = Script::null_data_script_pubkey(&data)
        .ok_or(NormalizeError::MaxNulldataExceeded(data.len()))?;
    Ok(TxOutput::new(0, script))
}

fn field<'a>(entry: &'a Value, name: &str) -> Result<&'a Value> {
    entry
        .get(name)
        .ok_or_else(|| NormalizeError::InvalidInput(format!("missing field {name:?} in {entry}")))
}

fn string_field<'a>(entry: &'a Value, name: &str) -> Result<&'a str> {
    field(entry, name)?
        .as_str()
        .ok_or_else(|| NormalizeError::InvalidInput(format!("field {name:?} must be a string")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{GENESIS_ADDRESS, GENESIS_ADDRESS_HASH160, GENESIS_COINBASE_TXID};
    use crate::wallet::Address;
    use serde_json::json;

    #[test]
    fn test_build_tx_in() {
        let input = build_tx_in(GENESIS_COINBASE_TXID, 0).unwrap();
        assert_eq!(input.prev_tx_hash.to_hex(), GENESIS_COINBASE_TXID);
        assert_eq!(input.prev_index, 0);
        assert!(input.script_sig.is_empty());
        assert_eq!(input.sequence, 0xffffffff);

        assert!(matches!(
            build_tx_in(GENESIS_COINBASE_TXID, -1),
            Err(NormalizeError::InvalidInput(_))
        ));
        assert!(build_tx_in(GENESIS_COINBASE_TXID, 1u64 << 32).is_err());
    }

    #[test]
    fn test_build_tx_out_script_template() {
        let output = build_tx_out(Network::Mainnet, GENESIS_ADDRESS, 5000).unwrap();
        assert_eq!(output.value, 5000);

        let expected = format!("76a914{GENESIS_ADDRESS_HASH160}88ac");
        assert_eq!(hex::encode(&output.script_pubkey), expected);
    }

    #[test]
    fn test_build_tx_out_wrong_network() {
        assert!(matches!(
            build_tx_out(Network::Testnet, GENESIS_ADDRESS, 5000),
            Err(NormalizeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_build_tx_out_testnet() {
        let address = Address::p2pkh(Network::Testnet, [0x33; 20]).encode();
        let output = build_tx_out(Network::Testnet, &address, "10").unwrap();
        assert_eq!(output.value, 10);
        assert_eq!(Script::p2pkh_pubkey_hash(&output.script_pubkey), Some([0x33; 20]));
        assert!(build_tx_out(Network::Mainnet, &address, 10).is_err());
    }

    #[test]
    fn test_build_tx_out_rejects_script_hash_and_negative_value() {
        let p2sh = Address::p2sh(Network::Mainnet, [0x44; 20]).encode();
        assert!(matches!(
            build_tx_out(Network::Mainnet, &p2sh, 1),
            Err(NormalizeError::InvalidAddress(_))
        ));
        assert!(matches!(
            build_tx_out(Network::Mainnet, GENESIS_ADDRESS, -5),
            Err(NormalizeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_null_data_limit() {
        let max = "ab".repeat(MAX_NULLDATA);
        let output = build_null_data_tx_out(&max).unwrap();
        assert_eq!(output.value, 0);
        assert_eq!(output.script_pubkey[0], 0x6a);
        assert_eq!(output.script_pubkey[1] as usize, MAX_NULLDATA);
        assert_eq!(output.script_pubkey.len(), MAX_NULLDATA + 2);

        let over = "ab".repeat(MAX_NULLDATA + 1);
        assert!(matches!(
            build_null_data_tx_out(&over),
            Err(NormalizeError::MaxNulldataExceeded(41))
        ));
    }

    #[test]
    fn test_null_data_small_payload() {
        let output = build_null_data_tx_out(b"cafe").unwrap();
        assert_eq!(output.value, 0);
        assert_eq!(output.script_pubkey, vec![0x6a, 0x02, 0xca, 0xfe]);
    }

    #[test]
    fn test_build_lists_preserve_order_and_fail_atomically() {
        let ins = build_tx_ins(&[
            json!({"txid": GENESIS_COINBASE_TXID, "index": 2}),
            json!({"txid": GENESIS_COINBASE_TXID, "index": "0"}),
        ])
        .unwrap();
        assert_eq!(ins.iter().map(|i| i.prev_index).collect::<Vec<_>>(), vec![2, 0]);

        let outs = build_tx_outs(Network::Mainnet, &[
            json!({"address": GENESIS_ADDRESS, "value": 1}),
            json!({"address": GENESIS_ADDRESS, "value": 2}),
        ])
        .unwrap();
        assert_eq!(outs.iter().map(|o| o.value).collect::<Vec<_>>(), vec![1, 2]);

        let err = build_tx_ins(&[
            json!({"txid": GENESIS_COINBASE_TXID, "index": 0}),
            json!({"txid": GENESIS_COINBASE_TXID}),
        ]);
        assert!(matches!(err, Err(NormalizeError::InvalidInput(_))));

        let err = build_tx_outs(Network::Mainnet, &[json!({"address": 5, "value": 1})]);
        assert!(matches!(err, Err(NormalizeError::InvalidInput(_))));
    }
}
