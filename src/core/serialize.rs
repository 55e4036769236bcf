// Serialization utilities for Bitcoin data structures

use std::io::{self, Read, Write};
use thiserror::Error;

/// Errors raised while decoding wire data or hex text
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("truncated data: {0}")]
    Io(#[from] io::Error),

    #[error("declared length {0} exceeds the remaining data")]
    Oversized(u64),

    #[error("{0} trailing bytes after the encoded value")]
    TrailingBytes(usize),

    #[error("unsupported segwit flag {0:#04x}")]
    WitnessFlag(u8),
}

/// Trait for serializable types
pub trait Serializable {
    fn serialize(&self) -> Vec<u8>;
    fn deserialize(data: &[u8]) -> Result<Self, DecodeError> where Self: Sized;
}

/// Write a variable-length integer (VarInt)
/// Bitcoin uses a compact format for integers
pub fn write_varint<W: Write>(writer: &mut W, value: u64) -> io::Result<()> {
    let mut buf = Vec::with_capacity(9);
    push_varint(&mut buf, value);
    writer.write_all(&buf)
}

/// Append a VarInt to an in-memory buffer
pub(crate) fn push_varint(buf: &mut Vec<u8>, value: u64) {
    match value {
        0..=0xfc => buf.push(value as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x10000..=0xffffffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Read a variable-length integer (VarInt)
pub fn read_varint<R: Read + ?Sized>(reader: &mut R) -> io::Result<u64> {
    let mut first_byte = [0u8; 1];
    reader.read_exact(&mut first_byte)?;

    match first_byte[0] {
        0..=0xfc => Ok(first_byte[0] as u64),
        0xfd => {
            let mut bytes = [0u8; 2];
            reader.read_exact(&mut bytes)?;
            Ok(u16::from_le_bytes(bytes) as u64)
        }
        0xfe => {
            let mut bytes = [0u8; 4];
            reader.read_exact(&mut bytes)?;
            Ok(u32::from_le_bytes(bytes) as u64)
        }
        0xff => {
            let mut bytes = [0u8; 8];
            reader.read_exact(&mut bytes)?;
            Ok(u64::from_le_bytes(bytes))
        }
    }
}

/// Write bytes with length prefix (VarInt length + data)
pub fn write_var_bytes<W: Write>(writer: &mut W, data: &[u8]) -> io::Result<()> {
    write_varint(writer, data.len() as u64)?;
    writer.write_all(data)?;
    Ok(())
}

/// Append length-prefixed bytes to an in-memory buffer
pub(crate) fn push_var_bytes(buf: &mut Vec<u8>, data: &[u8]) {
    push_varint(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

/// Read bytes with length prefix
///
/// The declared length comes from untrusted input, so the buffer only
/// grows as far as the reader actually has data.
pub fn read_var_bytes<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>, DecodeError> {
    let len = read_varint(reader)?;
    let mut data = Vec::new();
    reader.take(len).read_to_end(&mut data)?;
    if (data.len() as u64) != len {
        return Err(DecodeError::Oversized(len));
    }
    Ok(data)
}

pub(crate) fn read_u32_le<R: Read + ?Sized>(reader: &mut R) -> io::Result<u32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_varint_small() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 100).unwrap();
        assert_eq!(buf, vec![100]);

        let mut cursor = Cursor::new(buf);
        let value = read_varint(&mut cursor).unwrap();
        assert_eq!(value, 100);
    }

    #[test]
    fn test_varint_medium() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 1000).unwrap();
        assert_eq!(buf.len(), 3); // 0xfd + 2 bytes

        let mut cursor = Cursor::new(buf);
        let value = read_varint(&mut cursor).unwrap();
        assert_eq!(value, 1000);
    }

    #[test]
    fn test_varint_large() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 100000).unwrap();
        assert_eq!(buf.len(), 5); // 0xfe + 4 bytes

        let mut cursor = Cursor::new(buf);
        let value = read_varint(&mut cursor).unwrap();
        assert_eq!(value, 100000);
    }

    #[test]
    fn test_var_bytes() {
        let data = b"hello world";
        let mut buf = Vec::new();
        write_var_bytes(&mut buf, data).unwrap();

        let mut cursor = Cursor::new(buf);
        let decoded = read_var_bytes(&mut cursor).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_push_helpers_match_writers() {
        for value in [0, 0xfc, 0xfd, 0xffff, 0x10000, 0xffffffff, 0x100000000] {
            let mut written = Vec::new();
            write_varint(&mut written, value).unwrap();
            let mut pushed = Vec::new();
            push_varint(&mut pushed, value);
            assert_eq!(pushed, written);
        }

        let mut pushed = vec![0xaa];
        push_var_bytes(&mut pushed, b"abc");
        assert_eq!(pushed, vec![0xaa, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn test_var_bytes_declared_length_too_long() {
        // Claims 0xffff bytes but carries three
        let buf = vec![0xfd, 0xff, 0xff, 1, 2, 3];
        let mut cursor = Cursor::new(buf);
        let err = read_var_bytes(&mut cursor).unwrap_err();
        assert!(matches!(err, DecodeError::Oversized(0xffff)));
    }
}
