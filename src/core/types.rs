// Basic types for Bitcoin blockchain

use crate::core::DecodeError;
use std::fmt;

/// 256-bit hash type (32 bytes)
/// Used for block hashes, transaction IDs, and Merkle roots.
///
/// The bytes are held in wire order. The hex form shown by explorers and
/// used in their URLs is the reverse (display order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Create a new Hash256 from a byte array
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a Hash256 from a slice in wire order
    pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeError> {
        let bytes: [u8; 32] = slice.try_into().map_err(|_| DecodeError::Length {
            expected: 32,
            actual: slice.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Get the hash as a byte slice
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create zero hash (used for genesis block's prev_block_hash)
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Convert to hex string (reversed for display, Bitcoin convention)
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Create from hex string (expects reversed byte order)
    pub fn from_hex(hex_str: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(hex_str)?;
        let mut hash = Self::from_slice(&bytes)?;
        hash.0.reverse(); // Bitcoin uses reversed byte order for display
        Ok(hash)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
