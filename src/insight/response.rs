// Response schemas of the Insight endpoints
//
// Identifiers arrive in display order and leave this module in wire order.

use serde::Deserialize;

use super::{InsightError, Result};
use crate::core::{btc_float_to_satoshi, btc_to_satoshi, BlockHeader, Hash256, Spendable, Transaction};

pub(crate) const STATUS: &str = "status";
pub(crate) const BLOCK: &str = "block";
pub(crate) const RAW_TX: &str = "rawtx";
pub(crate) const TX: &str = "tx";
pub(crate) const UTXO: &str = "utxo";

/// `GET /api/status?q=getLastBlockHash`
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub lastblockhash: String,
}

impl StatusResponse {
    pub fn tip(&self) -> Result<Hash256> {
        parse_hash(STATUS, "lastblockhash", &self.lastblockhash)
    }
}

/// `GET /api/block/{hash}`
#[derive(Debug, Deserialize)]
pub struct BlockResponse {
    pub version: i64,
    /// Absent for the genesis block
    #[serde(default)]
    pub previousblockhash: Option<String>,
    pub merkleroot: String,
    pub time: u32,
    /// Compact target as hex text
    pub bits: String,
    pub nonce: u32,
    pub tx: Vec<String>,
    pub height: u32,
}

impl BlockResponse {
    /// Rebuild the header from its six structural fields
    pub fn header(&self) -> Result<BlockHeader> {
        // Versions are signed on the wire; some servers print them as unsigned
        let version = u32::try_from(self.version)
            .or_else(|_| i32::try_from(self.version).map(|v| v as u32))
            .map_err(|_| field_error(BLOCK, "version", format!("{} does not fit 32 bits", self.version)))?;

        let prev_block_hash = match &self.previousblockhash {
            Some(hash) => parse_hash(BLOCK, "previousblockhash", hash)?,
            None => Hash256::zero(),
        };
        let merkle_root = parse_hash(BLOCK, "merkleroot", &self.merkleroot)?;
        let bits = u32::from_str_radix(self.bits.trim_start_matches("0x"), 16)
            .map_err(|e| field_error(BLOCK, "bits", format!("{:?}: {e}", self.bits)))?;

        Ok(BlockHeader::new(version, prev_block_hash, merkle_root, self.time, bits, self.nonce))
    }

    /// Claimed member transaction ids, in block order
    pub fn tx_ids(&self) -> Result<Vec<Hash256>> {
        self.tx.iter().map(|txid| parse_hash(BLOCK, "tx", txid)).collect()
    }
}

/// `GET /api/rawtx/{txid}`
#[derive(Debug, Deserialize)]
pub struct RawTxResponse {
    pub rawtx: String,
}

impl RawTxResponse {
    pub fn transaction(&self) -> Result<Transaction> {
        Transaction::from_hex(&self.rawtx).map_err(|source| InsightError::Transaction {
            endpoint: RAW_TX,
            source,
        })
    }
}

/// `GET /api/tx/{txid}`, reduced to the confirmation claim
#[derive(Debug, Deserialize)]
pub struct TxResponse {
    pub txid: String,
    /// Absent while the transaction is unconfirmed
    #[serde(default)]
    pub blockhash: Option<String>,
}

impl TxResponse {
    pub fn block_hash(&self) -> Result<Option<Hash256>> {
        self.blockhash
            .as_deref()
            .map(|hash| parse_hash(TX, "blockhash", hash))
            .transpose()
    }
}

/// BTC amount, which servers emit either as a string or as a JSON number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
}

/// One entry of `GET /api/addr/{address}/utxo`
#[derive(Debug, Deserialize)]
pub struct UtxoEntry {
    pub amount: Amount,
    #[serde(rename = "scriptPubKey")]
    pub script_pubkey: String,
    pub txid: String,
    pub vout: u32,
}

impl UtxoEntry {
    pub fn spendable(&self) -> Result<Spendable> {
        let value = match &self.amount {
            Amount::Text(text) => btc_to_satoshi(text),
            Amount::Number(number) => btc_float_to_satoshi(*number),
        }
        .map_err(|e| field_error(UTXO, "amount", e.to_string()))?;

        let script_pubkey = hex::decode(&self.script_pubkey)
            .map_err(|e| field_error(UTXO, "scriptPubKey", e.to_string()))?;
        let txid = parse_hash(UTXO, "txid", &self.txid)?;

        Ok(Spendable::new(value, script_pubkey, txid, self.vout))
    }
}

fn parse_hash(endpoint: &'static str, field: &'static str, display_hex: &str) -> Result<Hash256> {
    Hash256::from_hex(display_hex).map_err(|e| field_error(endpoint, field, format!("{display_hex:?}: {e}")))
}

fn field_error(endpoint: &'static str, field: &'static str, reason: String) -> InsightError {
    InsightError::Field { endpoint, field, reason }
}
