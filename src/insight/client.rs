// Insight explorer client that re-derives every identity it is told about

use serde::de::DeserializeOwned;

use super::response::{self, BlockResponse, RawTxResponse, StatusResponse, TxResponse, UtxoEntry};
use super::{HttpTransport, InsightConfig, InsightError, Result, Transport};
use crate::core::{merkle_root_with_mutation, BlockHeader, Hash256, Spendable, Transaction};

/// Block header plus the height the server reports for it
///
/// The header has been checked against its id; the height has not and
/// cannot be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedHeader {
    pub header: BlockHeader,
    pub height: u32,
}

/// Client for an Insight-style explorer API
///
/// The server is trusted to name the chain tip. Block headers, block
/// membership and transactions are only returned when they hash to the
/// identifiers that were asked for; otherwise the lookup yields `None`.
#[derive(Debug, Clone)]
pub struct InsightClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl InsightClient<HttpTransport> {
    /// Create a client over the blocking HTTP transport
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    pub fn from_config(config: &InsightConfig) -> Self {
        Self::new(&config.base_url)
    }
}

impl<T: Transport> InsightClient<T> {
    /// Create a client over any transport; trailing `/` are stripped
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn get_json<R: DeserializeOwned>(&self, endpoint: &'static str, path: &str) -> Result<R> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let body = self.transport.get(&url)?;
        serde_json::from_slice(&body).map_err(|source| InsightError::Json { endpoint, source })
    }

    /// Id of the block the server considers the chain tip
    ///
    /// Nothing here can be verified; this is where trust in the server starts.
    pub fn get_blockchain_tip(&self) -> Result<Hash256> {
        let status: StatusResponse = self.get_json(response::STATUS, "status?q=getLastBlockHash")?;
        status.tip()
    }

    /// Fetch a block header and the ids of the transactions in the block
    ///
    /// Returns `None` unless the header hashes to `block_id` and the listed
    /// transaction ids reduce to the header's Merkle root without repeats.
    pub fn get_block_header_with_tx_ids(
        &self,
        block_id: &Hash256,
    ) -> Result<Option<(AnnotatedHeader, Vec<Hash256>)>> {
        let block: BlockResponse = self.get_json(response::BLOCK, &format!("block/{}", block_id.to_hex()))?;
        let header = block.header()?;

        let header_hash = header.hash();
        if header_hash != *block_id {
            log::warn!("block {block_id}: server header hashes to {header_hash}");
            return Ok(None);
        }

        let tx_ids = block.tx_ids()?;
        match merkle_root_with_mutation(&tx_ids) {
            Some((_, true)) => {
                log::warn!("block {block_id}: txid list repeats hashes");
                return Ok(None);
            }
            Some((root, false)) if root == header.merkle_root => {}
            Some((root, false)) => {
                log::warn!(
                    "block {block_id}: {} listed txids reduce to {root}, header commits to {}",
                    tx_ids.len(),
                    header.merkle_root
                );
                return Ok(None);
            }
            None => {
                log::warn!("block {block_id}: server listed no transactions");
                return Ok(None);
            }
        }

        let annotated = AnnotatedHeader {
            header,
            height: block.height,
        };
        Ok(Some((annotated, tx_ids)))
    }

    pub fn get_block_header(&self, block_id: &Hash256) -> Result<Option<AnnotatedHeader>> {
        Ok(self.get_block_header_with_tx_ids(block_id)?.map(|(header, _)| header))
    }

    /// Server-reported height of a block whose header verifies
    pub fn get_block_height(&self, block_id: &Hash256) -> Result<Option<u32>> {
        Ok(self.get_block_header(block_id)?.map(|annotated| annotated.height))
    }

    /// Fetch a transaction, returning it only if it hashes to `tx_id`
    pub fn get_tx(&self, tx_id: &Hash256) -> Result<Option<Transaction>> {
        let raw: RawTxResponse = self.get_json(response::RAW_TX, &format!("rawtx/{}", tx_id.to_hex()))?;
        let tx = raw.transaction()?;

        let actual = tx.txid();
        if actual != *tx_id {
            log::warn!("tx {tx_id}: server transaction hashes to {actual}");
            return Ok(None);
        }
        Ok(Some(tx))
    }

    /// Block the server says confirmed `tx_id`, if that block provably contains it
    ///
    /// `None` covers unconfirmed transactions as well as claims whose block
    /// fails verification or does not list the transaction.
    pub fn get_tx_confirmation_block(&self, tx_id: &Hash256) -> Result<Option<Hash256>> {
        let info: TxResponse = self.get_json(response::TX, &format!("tx/{}", tx_id.to_hex()))?;
        let Some(block_id) = info.block_hash()? else {
            return Ok(None);
        };

        let Some((_, tx_ids)) = self.get_block_header_with_tx_ids(&block_id)? else {
            return Ok(None);
        };
        if !tx_ids.contains(tx_id) {
            log::warn!("tx {tx_id}: claimed block {block_id} does not contain it");
            return Ok(None);
        }
        Ok(Some(block_id))
    }

    /// Unspent outputs the server reports for `address`
    ///
    /// Unlike headers and transactions, this list is not self-certifying and
    /// is taken on trust.
    pub fn get_spendables_for_address(&self, address: &str) -> Result<Vec<Spendable>> {
        if address.is_empty() || !address.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InsightError::Address(address.to_string()));
        }
        let entries: Vec<UtxoEntry> = self.get_json(response::UTXO, &format!("addr/{address}/utxo"))?;
        entries.iter().map(UtxoEntry::spendable).collect()
    }

    pub fn get_spendables_for_addresses<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Vec<Spendable>> {
        let mut spendables = Vec::new();
        for address in addresses {
            spendables.extend(self.get_spendables_for_address(address.as_ref())?);
        }
        Ok(spendables)
    }

    /// Broadcast a transaction, returning the server's response body
    ///
    /// Single attempt; a failure is logged with the transaction id and
    /// returned unchanged.
    pub fn send_tx(&self, tx: &Transaction) -> Result<Vec<u8>> {
        let url = self.url("tx/send");
        let raw = tx.to_hex();
        log::debug!("POST {url}");
        self.transport
            .post_form(&url, &[("rawtx", raw.as_str())])
            .map_err(|err| {
                log::error!("problem in send_tx {}: {err}", tx.txid());
                InsightError::from(err)
            })
    }
}
