// Block header and Merkle tree

use crate::core::{Hash256, hash256};

/// Serialized size of a block header
pub const HEADER_SIZE: usize = 80;

/// Block header - 80 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version
    pub version: u32,
    /// Hash of the previous block
    pub prev_block_hash: Hash256,
    /// Merkle root of all transactions in the block
    pub merkle_root: Hash256,
    /// Block timestamp (Unix epoch)
    pub timestamp: u32,
    /// Difficulty target (compact format)
    pub bits: u32,
    /// Nonce for proof-of-work
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: u32,
        prev_block_hash: Hash256,
        merkle_root: Hash256,
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_block_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Calculate the hash of this block header
    pub fn hash(&self) -> Hash256 {
        hash256(&self.serialize())
    }

    /// Serialize the block header (always 80 bytes)
    pub fn serialize(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.version.to_le_bytes());
        buf[4..36].copy_from_slice(self.prev_block_hash.as_bytes());
        buf[36..68].copy_from_slice(self.merkle_root.as_bytes());
        buf[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        buf[72..76].copy_from_slice(&self.bits.to_le_bytes());
        buf[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        buf
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.prev_block_hash == Hash256::zero()
    }
}

/// Calculate the Merkle root of a list of transaction ids (wire order)
///
/// Each level hashes adjacent pairs; an odd level pairs its last hash
/// with itself. Returns `None` for an empty list, which has no root.
pub fn merkle_root(txids: &[Hash256]) -> Option<Hash256> {
    merkle_root_with_mutation(txids).map(|(root, _)| root)
}

/// Merkle root plus whether the list is mutated
///
/// A level holding two identical adjacent hashes reduces exactly like the
/// level without the repeat (CVE-2012-2459), so `[a, b, c, c]` shares its
/// root with `[a, b, c]`. Such a list never matches a real block.
pub fn merkle_root_with_mutation(txids: &[Hash256]) -> Option<(Hash256, bool)> {
    let mut hashes = txids.to_vec();
    if hashes.is_empty() {
        return None;
    }

    let mut mutated = false;
    while hashes.len() > 1 {
        let mut next_level = Vec::with_capacity(hashes.len().div_ceil(2));

        for chunk in hashes.chunks(2) {
            let left = chunk[0];
            let right = match chunk {
                [_, right] => {
                    mutated |= left == *right;
                    *right
                }
                _ => left,
            };

            let mut combined = [0u8; 64];
            combined[..32].copy_from_slice(left.as_bytes());
            combined[32..].copy_from_slice(right.as_bytes());
            next_level.push(hash256(&combined));
        }

        hashes = next_level;
    }

    hashes.first().map(|root| (*root, mutated))
}
