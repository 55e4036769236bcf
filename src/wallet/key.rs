// Keys decoded from Wallet Import Format

use crate::core::hash160;
use crate::wallet::{Address, Network};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use thiserror::Error;

/// Trailing byte marking a WIF secret whose public key is compressed
const COMPRESSED_FLAG: u8 = 0x01;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid base58check encoding: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("invalid WIF payload length: {0}")]
    Length(usize),

    #[error("version byte {found:#04x} is not a {network} secret")]
    Version { found: u8, network: Network },

    #[error("invalid compression flag {0:#04x}")]
    CompressionFlag(u8),

    #[error("invalid key: {0}")]
    Secp256k1(#[from] secp256k1::Error),
}

/// Decode a WIF secret, accepting only the version byte of `network`
///
/// Returns the secret and whether its public key is used in compressed form.
pub fn decode_wif(network: Network, wif: &str) -> Result<(SecretKey, bool), KeyError> {
    let payload = bs58::decode(wif).with_check(None).into_vec()?;

    let compressed = match payload.len() {
        33 => false,
        34 => {
            let flag = payload[33];
            if flag != COMPRESSED_FLAG {
                return Err(KeyError::CompressionFlag(flag));
            }
            true
        }
        len => return Err(KeyError::Length(len)),
    };

    if payload[0] != network.wif_prefix() {
        return Err(KeyError::Version { found: payload[0], network });
    }

    let secret = SecretKey::from_slice(&payload[1..33])?;
    Ok((secret, compressed))
}

/// Encode a secret in Wallet Import Format
pub fn encode_wif(network: Network, secret: &SecretKey, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(network.wif_prefix());
    payload.extend_from_slice(&secret.secret_bytes());
    if compressed {
        payload.push(COMPRESSED_FLAG);
    }
    bs58::encode(payload).with_check().into_string()
}

/// Key pair, or a bare public key when no secret is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    network: Network,
    secret_key: Option<SecretKey>,
    public_key: PublicKey,
    compressed: bool,
}

impl Key {
    /// Create from a secret
    pub fn from_secret_key(network: Network, secret_key: SecretKey, compressed: bool) -> Self {
        let secp = Secp256k1::signing_only();
        let public_key = secret_key.public_key(&secp);
        Self {
            network,
            secret_key: Some(secret_key),
            public_key,
            compressed,
        }
    }

    /// Create a public-only key from its SEC encoding
    pub fn from_sec(network: Network, sec: &[u8]) -> Result<Self, KeyError> {
        let public_key = PublicKey::from_slice(sec)?;
        Ok(Self {
            network,
            secret_key: None,
            public_key,
            compressed: sec.len() == secp256k1::constants::PUBLIC_KEY_SIZE,
        })
    }

    /// Decode a WIF secret for `network`
    pub fn from_wif(network: Network, wif: &str) -> Result<Self, KeyError> {
        let (secret_key, compressed) = decode_wif(network, wif)?;
        Ok(Self::from_secret_key(network, secret_key, compressed))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn secret_key(&self) -> Option<&SecretKey> {
        self.secret_key.as_ref()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// WIF encoding, when a secret is known
    pub fn to_wif(&self) -> Option<String> {
        self.secret_key
            .as_ref()
            .map(|secret| encode_wif(self.network, secret, self.compressed))
    }

    /// SEC encoding of the public key in the key's compression
    pub fn sec(&self) -> Vec<u8> {
        if self.compressed {
            self.public_key.serialize().to_vec()
        } else {
            self.public_key.serialize_uncompressed().to_vec()
        }
    }

    /// Get pubkey hash
    pub fn pubkey_hash(&self) -> [u8; 20] {
        hash160(&self.sec())
    }

    /// Pay-to-pubkey-hash address of this key
    pub fn address(&self) -> Address {
        Address::p2pkh(self.network, self.pubkey_hash())
    }
}
