// Base58Check addresses

use crate::core::{hash160, Script};
use crate::wallet::Network;
use std::fmt;
use thiserror::Error;

/// Payload length of a version byte plus hash160
const ADDRESS_PAYLOAD_LEN: usize = 21;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid base58check encoding: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("invalid address payload length: {0}")]
    Length(usize),

    #[error("version byte {version:#04x} is not a {network} address")]
    Version { version: u8, network: Network },
}

/// What the address hash commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    PubkeyHash,
    ScriptHash,
}

/// Bitcoin address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    network: Network,
    kind: AddressKind,
    hash: [u8; 20],
}

impl Address {
    /// Create a pay-to-pubkey-hash address
    pub fn p2pkh(network: Network, pubkey_hash: [u8; 20]) -> Self {
        Self { network, kind: AddressKind::PubkeyHash, hash: pubkey_hash }
    }

    /// Create a pay-to-script-hash address
    pub fn p2sh(network: Network, script_hash: [u8; 20]) -> Self {
        Self { network, kind: AddressKind::ScriptHash, hash: script_hash }
    }

    /// Create address from a serialized public key
    pub fn from_pubkey(network: Network, sec: &[u8]) -> Self {
        Self::p2pkh(network, hash160(sec))
    }

    /// Decode an address, accepting only the version bytes of `network`
    pub fn parse(network: Network, text: &str) -> Result<Self, AddressError> {
        let payload = bs58::decode(text).with_check(None).into_vec()?;
        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(AddressError::Length(payload.len()));
        }

        let version = payload[0];
        let kind = if version == network.pubkey_hash_prefix() {
            AddressKind::PubkeyHash
        } else if version == network.script_hash_prefix() {
            AddressKind::ScriptHash
        } else {
            return Err(AddressError::Version { version, network });
        };

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok(Self { network, kind, hash })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// The 20-byte hash the address commits to
    pub fn hash(&self) -> &[u8; 20] {
        &self.hash
    }

    /// Get pubkey hash from a pay-to-pubkey-hash address
    pub fn pubkey_hash(&self) -> Option<[u8; 20]> {
        match self.kind {
            AddressKind::PubkeyHash => Some(self.hash),
            AddressKind::ScriptHash => None,
        }
    }

    /// P2PKH locking script paying this address
    pub fn p2pkh_script_pubkey(&self) -> Option<Vec<u8>> {
        self.pubkey_hash().map(|hash| Script::p2pkh_script_pubkey(&hash))
    }

    fn version(&self) -> u8 {
        match self.kind {
            AddressKind::PubkeyHash => self.network.pubkey_hash_prefix(),
            AddressKind::ScriptHash => self.network.script_hash_prefix(),
        }
    }

    /// Base58Check encoding
    pub fn encode(&self) -> String {
        let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
        payload.push(self.version());
        payload.extend_from_slice(&self.hash);
        bs58::encode(payload).with_check().into_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
