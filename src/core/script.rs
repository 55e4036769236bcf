// Locking script templates

/// Opcodes used by the standard output templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Push an empty byte vector
    Op0 = 0x00,
    /// Push 20 bytes (pubkey hash size)
    OpPushBytes20 = 0x14,
    /// Push with a one-byte length
    OpPushData1 = 0x4c,
    /// Push with a two-byte length
    OpPushData2 = 0x4d,
    /// Marks the output as provably unspendable
    OpReturn = 0x6a,
    /// Duplicate the top stack item
    OpDup = 0x76,
    /// Verify that the top two items are equal
    OpEqualVerify = 0x88,
    /// Hash the top stack item with HASH160
    OpHash160 = 0xa9,
    /// Check signature
    OpCheckSig = 0xac,
}

/// Largest payload a single direct push opcode can carry
const MAX_DIRECT_PUSH: usize = 75;

/// Largest script the interpreter accepts
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// Script builder for the output templates
pub struct Script;

impl Script {
    /// Create a P2PKH scriptPubKey
    /// OP_DUP OP_HASH160 <pubKeyHash> OP_EQUALVERIFY OP_CHECKSIG
    pub fn p2pkh_script_pubkey(pubkey_hash: &[u8; 20]) -> Vec<u8> {
        let mut script = Vec::with_capacity(25);
        script.push(OpCode::OpDup as u8);
        script.push(OpCode::OpHash160 as u8);
        script.push(OpCode::OpPushBytes20 as u8);
        script.extend_from_slice(pubkey_hash);
        script.push(OpCode::OpEqualVerify as u8);
        script.push(OpCode::OpCheckSig as u8);
        script
    }

    /// Create a null-data scriptPubKey
    /// OP_RETURN <data>
    ///
    /// The payload is a single minimal push. Returns `None` when the script
    /// would exceed `MAX_SCRIPT_SIZE`.
    pub fn null_data_script_pubkey(data: &[u8]) -> Option<Vec<u8>> {
        let len = data.len();
        let mut script = Vec::with_capacity(len + 4);
        script.push(OpCode::OpReturn as u8);
        match len {
            0 => script.push(OpCode::Op0 as u8),
            1..=MAX_DIRECT_PUSH => script.push(len as u8),
            _ => match u8::try_from(len) {
                Ok(len) => script.extend_from_slice(&[OpCode::OpPushData1 as u8, len]),
                Err(_) => {
                    let len = u16::try_from(len).ok()?;
                    script.push(OpCode::OpPushData2 as u8);
                    script.extend_from_slice(&len.to_le_bytes());
                }
            },
        }
        script.extend_from_slice(data);
        (script.len() <= MAX_SCRIPT_SIZE).then_some(script)
    }

    /// Extract the pubkey hash from a P2PKH scriptPubKey
    pub fn p2pkh_pubkey_hash(script_pubkey: &[u8]) -> Option<[u8; 20]> {
        match script_pubkey {
            [0x76, 0xa9, 0x14, hash @ .., 0x88, 0xac] if hash.len() == 20 => hash.try_into().ok(),
            _ => None,
        }
    }
}
