// Addresses and secrets checked against a network

use secp256k1::SecretKey;

use crate::normalize::{NormalizeError, Result};
use crate::wallet::{decode_wif, Address, Key, Network};

/// Validate an address against the version bytes of `network`
pub fn parse_address(network: Network, address: &str) -> Result<Address> {
    Address::parse(network, address).map_err(|err| {
        log::debug!("rejected {network} address {address:?}: {err}");
        NormalizeError::InvalidAddress(address.to_string())
    })
}

/// Validate every address, failing on the first invalid one
pub fn parse_addresses<S: AsRef<str>>(network: Network, addresses: &[S]) -> Result<Vec<Address>> {
    addresses
        .iter()
        .map(|address| parse_address(network, address.as_ref()))
        .collect()
}

/// Decode WIF secrets carrying the version byte of `network`
pub fn parse_secret_exponents<S: AsRef<str>>(network: Network, wifs: &[S]) -> Result<Vec<SecretKey>> {
    wifs.iter()
        .map(|wif| {
            decode_wif(network, wif.as_ref())
                .map(|(secret, _compressed)| secret)
                .map_err(|err| NormalizeError::InvalidWif(err.to_string()))
        })
        .collect()
}

/// Decode a WIF secret into a key pair for `network`
pub fn parse_key(network: Network, wif: &str) -> Result<Key> {
    // The secret itself never goes into the error
    Key::from_wif(network, wif).map_err(|err| NormalizeError::InvalidWif(err.to_string()))
}

pub fn parse_keys<S: AsRef<str>>(network: Network, wifs: &[S]) -> Result<Vec<Key>> {
    wifs.iter().map(|wif| parse_key(network, wif.as_ref())).collect()
}
