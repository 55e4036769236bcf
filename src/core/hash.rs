// Hashing utilities for Bitcoin

use sha2::{Sha256, Digest};
use crate::core::Hash256;

/// SHA256 double hash (Bitcoin convention)
/// hash256 = SHA256(SHA256(data))
pub fn hash256(data: &[u8]) -> Hash256 {
    let first_hash = Sha256::digest(data);
    let second_hash = Sha256::digest(first_hash);
    Hash256(second_hash.into())
}

/// RIPEMD160(SHA256(data)) - used for address generation
pub fn hash160(data: &[u8]) -> [u8; 20] {
    use ripemd::{Ripemd160, Digest as RipemdDigest};
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}
