// Transaction data structures

use crate::core::{Hash256, hash256, Serializable, DecodeError};
use std::io::{Read, Cursor};
use super::serialize::{push_varint, read_varint, push_var_bytes, read_var_bytes, read_u32_le};

/// Sequence number that disables relative locktime
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

const SEGWIT_MARKER: u8 = 0x00;
const SEGWIT_FLAG: u8 = 0x01;

/// Transaction input - references a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    /// Hash of the previous transaction (wire order)
    pub prev_tx_hash: Hash256,
    /// Index of the output in the previous transaction
    pub prev_index: u32,
    /// Signature script (scriptSig) - proves ownership
    pub script_sig: Vec<u8>,
    /// Sequence number (used for locktime, usually 0xffffffff)
    pub sequence: u32,
    /// Segregated witness stack, empty for legacy inputs
    pub witness: Vec<Vec<u8>>,
}

impl TxInput {
    /// Create a new transaction input
    pub fn new(prev_tx_hash: Hash256, prev_index: u32, script_sig: Vec<u8>) -> Self {
        Self {
            prev_tx_hash,
            prev_index,
            script_sig,
            sequence: SEQUENCE_FINAL,
            witness: Vec::new(),
        }
    }

    /// Unsigned input spending `prev_tx_hash:prev_index`
    pub fn unsigned(prev_tx_hash: Hash256, prev_index: u32) -> Self {
        Self::new(prev_tx_hash, prev_index, Vec::new())
    }

    /// Check if this is a coinbase input
    pub fn is_coinbase(&self) -> bool {
        self.prev_tx_hash == Hash256::zero() && self.prev_index == 0xffffffff
    }

    /// Serialize the input (without witness data)
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf);
        buf
    }

    fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.prev_tx_hash.as_bytes());
        buf.extend_from_slice(&self.prev_index.to_le_bytes());
        push_var_bytes(buf, &self.script_sig);
        buf.extend_from_slice(&self.sequence.to_le_bytes());
    }

    /// Deserialize the input
    pub fn deserialize(reader: &mut dyn Read) -> Result<Self, DecodeError> {
        let mut hash_bytes = [0u8; 32];
        reader.read_exact(&mut hash_bytes)?;
        let prev_tx_hash = Hash256::new(hash_bytes);

        let prev_index = read_u32_le(reader)?;
        let script_sig = read_var_bytes(reader)?;
        let sequence = read_u32_le(reader)?;

        Ok(Self {
            prev_tx_hash,
            prev_index,
            script_sig,
            sequence,
            witness: Vec::new(),
        })
    }
}

/// Transaction output - specifies amount and recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    /// Amount in satoshis (1 BTC = 100,000,000 satoshis)
    pub value: u64,
    /// Public key script (scriptPubKey) - specifies conditions for spending
    pub script_pubkey: Vec<u8>,
}

impl TxOutput {
    /// Create a new transaction output
    pub fn new(value: u64, script_pubkey: Vec<u8>) -> Self {
        Self {
            value,
            script_pubkey,
        }
    }

    /// Serialize the output
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.value.to_le_bytes());
        push_var_bytes(&mut buf, &self.script_pubkey);
        buf
    }

    /// Deserialize the output
    pub fn deserialize(reader: &mut dyn Read) -> Result<Self, DecodeError> {
        let mut value_bytes = [0u8; 8];
        reader.read_exact(&mut value_bytes)?;
        let value = u64::from_le_bytes(value_bytes);

        let script_pubkey = read_var_bytes(reader)?;

        Ok(Self {
            value,
            script_pubkey,
        })
    }
}

/// Transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction version
    pub version: u32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp when tx becomes valid)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> Self {
        Self {
            version: 1,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].is_coinbase()
    }

    /// Whether any input carries witness data
    pub fn has_witness(&self) -> bool {
        self.inputs.iter().any(|input| !input.witness.is_empty())
    }

    /// Calculate transaction ID (double SHA256 of the witness-stripped tx)
    pub fn txid(&self) -> Hash256 {
        hash256(&self.serialize_legacy())
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> u64 {
        self.outputs.iter().map(|out| out.value).sum()
    }

    /// Encoding without the segwit marker, flag and witnesses
    pub fn serialize_legacy(&self) -> Vec<u8> {
        self.encode(false)
    }

    /// Hex of the full wire encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    fn encode(&self, with_witness: bool) -> Vec<u8> {
        let mut buf = Vec::new();

        // Version
        buf.extend_from_slice(&self.version.to_le_bytes());

        if with_witness {
            buf.push(SEGWIT_MARKER);
            buf.push(SEGWIT_FLAG);
        }

        // Inputs
        push_varint(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            input.write_to(&mut buf);
        }

        // Outputs
        push_varint(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            buf.extend_from_slice(&output.serialize());
        }

        if with_witness {
            for input in &self.inputs {
                push_varint(&mut buf, input.witness.len() as u64);
                for item in &input.witness {
                    push_var_bytes(&mut buf, item);
                }
            }
        }

        // Lock time
        buf.extend_from_slice(&self.lock_time.to_le_bytes());

        buf
    }

    /// Deserialize from a reader
    ///
    /// With `allow_witness`, a zero input count followed by flag 0x01 is read
    /// as the BIP144 segwit marker; without it the legacy layout is assumed.
    pub fn from_reader(reader: &mut dyn Read, allow_witness: bool) -> Result<Self, DecodeError> {
        let version = read_u32_le(reader)?;

        let mut input_count = read_varint(reader)?;
        let mut segwit = false;
        if allow_witness && input_count == SEGWIT_MARKER as u64 {
            let mut flag = [0u8; 1];
            reader.read_exact(&mut flag)?;
            if flag[0] != SEGWIT_FLAG {
                return Err(DecodeError::WitnessFlag(flag[0]));
            }
            segwit = true;
            input_count = read_varint(reader)?;
        }

        let mut inputs = Vec::new();
        for _ in 0..input_count {
            inputs.push(TxInput::deserialize(reader)?);
        }

        let output_count = read_varint(reader)?;
        let mut outputs = Vec::new();
        for _ in 0..output_count {
            outputs.push(TxOutput::deserialize(reader)?);
        }

        if segwit {
            for input in &mut inputs {
                let items = read_varint(reader)?;
                for _ in 0..items {
                    input.witness.push(read_var_bytes(reader)?);
                }
            }
        }

        let lock_time = read_u32_le(reader)?;

        Ok(Self {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    /// Decode a hex-encoded wire transaction
    pub fn from_hex(raw: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(raw.trim())?;
        Self::deserialize(&bytes)
    }
}

impl Serializable for Transaction {
    /// Canonical wire encoding; segwit layout only when witnesses are present
    fn serialize(&self) -> Vec<u8> {
        self.encode(self.has_witness())
    }

    /// Decode either wire layout
    ///
    /// A legacy transaction without inputs begins like the segwit marker, so
    /// the extended layout is tried first and the legacy one is the fallback.
    fn deserialize(data: &[u8]) -> Result<Self, DecodeError> {
        match decode_exact(data, true) {
            Ok(tx) if tx.has_witness() || data.get(4) != Some(&SEGWIT_MARKER) => Ok(tx),
            Ok(_) => decode_exact(data, false),
            Err(extended) => decode_exact(data, false).map_err(|_| extended),
        }
    }
}

fn decode_exact(data: &[u8], allow_witness: bool) -> Result<Transaction, DecodeError> {
    let mut cursor = Cursor::new(data);
    let tx = Transaction::from_reader(&mut cursor, allow_witness)?;
    let consumed = cursor.position() as usize;
    if consumed != data.len() {
        return Err(DecodeError::TrailingBytes(data.len() - consumed));
    }
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{GENESIS_COINBASE_HEX, GENESIS_COINBASE_TXID, SEGWIT_TX_HEX, SEGWIT_TXID};

    fn sample_tx() -> Transaction {
        let input = TxInput::new(Hash256::new([7; 32]), 1, vec![1, 2, 3]);
        let output = TxOutput::new(5000000000, vec![4, 5, 6]);
        Transaction::new(vec![input], vec![output])
    }

    #[test]
    fn test_genesis_coinbase_txid() {
        let tx = Transaction::from_hex(GENESIS_COINBASE_HEX).unwrap();
        assert!(tx.is_coinbase());
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].value, 5000000000);
        assert_eq!(tx.txid().to_hex(), GENESIS_COINBASE_TXID);
        assert_eq!(tx.to_hex(), GENESIS_COINBASE_HEX);
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = sample_tx();
        let serialized = tx.serialize();
        let deserialized = Transaction::deserialize(&serialized).unwrap();
        assert_eq!(tx, deserialized);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut serialized = sample_tx().serialize();
        serialized.push(0);
        let err = Transaction::deserialize(&serialized).unwrap_err();
        assert!(matches!(err, DecodeError::TrailingBytes(1)));
    }

    #[test]
    fn test_truncated_rejected() {
        let serialized = sample_tx().serialize();
        let result = Transaction::deserialize(&serialized[..serialized.len() - 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_segwit_txid_ignores_witness() {
        let mut tx = sample_tx();
        let legacy_txid = tx.txid();

        tx.inputs[0].witness = vec![vec![0x30; 71], vec![0x02; 33]];
        assert!(tx.has_witness());
        assert_eq!(tx.txid(), legacy_txid);

        let full = tx.serialize();
        assert_eq!(&full[4..6], &[SEGWIT_MARKER, SEGWIT_FLAG]);
        assert!(full.len() > tx.serialize_legacy().len());

        let decoded = Transaction::deserialize(&full).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.txid(), legacy_txid);
    }

    #[test]
    fn test_mainnet_segwit_tx() {
        let tx = Transaction::from_hex(SEGWIT_TX_HEX).unwrap();
        assert!(tx.has_witness());
        assert_eq!(tx.version, 2);
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.inputs[0].witness.len(), 2);
        assert_eq!(tx.inputs[0].witness[1].len(), 33);
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.txid().to_hex(), SEGWIT_TXID);
        assert_eq!(tx.to_hex(), SEGWIT_TX_HEX);
    }

    #[test]
    fn test_zero_input_legacy_tx() {
        let mut p2pkh = vec![0x76, 0xa9, 0x14];
        p2pkh.extend_from_slice(&[0x11; 20]);
        p2pkh.extend_from_slice(&[0x88, 0xac]);
        let tx = Transaction::new(vec![], vec![TxOutput::new(1000, p2pkh)]);

        let raw = tx.to_hex();
        assert!(raw.starts_with("010000000001e803"));
        let decoded = Transaction::from_hex(&raw).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.txid(), tx.txid());
    }

    #[test]
    fn test_empty_legacy_tx() {
        let tx = Transaction::new(vec![], vec![]);
        assert_eq!(tx.to_hex(), "01000000000000000000");
        assert_eq!(Transaction::from_hex(&tx.to_hex()).unwrap(), tx);
    }

    #[test]
    fn test_bad_segwit_flag() {
        let mut full = sample_tx().serialize();
        // version, then marker 0x00 and an invalid flag
        full.splice(4..4, [0x00, 0x02]);
        let err = Transaction::deserialize(&full).unwrap_err();
        assert!(matches!(err, DecodeError::WitnessFlag(0x02)));
    }
}
