// Unspent outputs as raw material for new transactions

use crate::core::{Hash256, TxInput, TxOutput};

/// Output identifier - transaction hash + output index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    pub fn new(txid: Hash256, vout: u32) -> Self {
        Self { txid, vout }
    }
}

/// An unspent output together with the outpoint that created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spendable {
    /// Value in satoshis
    pub value: u64,
    /// Locking script of the output
    pub script_pubkey: Vec<u8>,
    /// Where the output lives
    pub outpoint: OutPoint,
}

impl Spendable {
    pub fn new(value: u64, script_pubkey: Vec<u8>, txid: Hash256, vout: u32) -> Self {
        Self {
            value,
            script_pubkey,
            outpoint: OutPoint::new(txid, vout),
        }
    }

    /// Unsigned input spending this output
    pub fn tx_in(&self) -> TxInput {
        TxInput::unsigned(self.outpoint.txid, self.outpoint.vout)
    }

    /// The output as it appears in its creating transaction
    pub fn tx_out(&self) -> TxOutput {
        TxOutput::new(self.value, self.script_pubkey.clone())
    }
}
