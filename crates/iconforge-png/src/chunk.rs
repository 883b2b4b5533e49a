use std::fmt;

use crate::crc::Crc32;
use crate::error::PngError;

/// Largest payload a chunk length field may declare (2^31 - 1).
pub const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

/// Four-byte chunk tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    #[inline]
    pub const fn bytes(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

/// A tagged, length-prefixed, checksummed segment of a PNG stream.
///
/// Wire layout: `len: u32 BE | tag: [u8; 4] | data | crc: u32 BE`, where `len`
/// counts only `data` and `crc` covers `tag + data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    kind: ChunkType,
    data: Vec<u8>,
}

impl Chunk {
    #[inline]
    pub fn new(kind: ChunkType, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    /// Empty `IEND` trailer.
    #[inline]
    pub fn end() -> Self {
        Self::new(ChunkType::IEND, Vec::new())
    }

    #[inline]
    pub fn kind(&self) -> ChunkType {
        self.kind
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// CRC-32 over tag followed by data.
    pub fn crc(&self) -> u32 {
        checksum(self.kind, &self.data)
    }

    /// Number of bytes [`write_to`](Self::write_to) appends.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        12 + self.data.len()
    }

    /// Appends the serialized chunk to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<(), PngError> {
        if self.data.len() > MAX_CHUNK_LEN {
            return Err(PngError::ChunkTooLarge { len: self.data.len() });
        }
        out.reserve(self.encoded_len());
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.kind.0);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
        Ok(())
    }
}

pub(crate) fn checksum(kind: ChunkType, data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(&kind.0);
    crc.update(data);
    crc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iend_serializes_to_known_bytes() {
        let mut out = Vec::new();
        Chunk::end().write_to(&mut out).unwrap();
        assert_eq!(
            out,
            [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn length_counts_only_data() {
        let chunk = Chunk::new(ChunkType(*b"tEXt"), b"hello".to_vec());
        let mut out = Vec::new();
        chunk.write_to(&mut out).unwrap();

        assert_eq!(out.len(), chunk.encoded_len());
        assert_eq!(&out[..4], &5u32.to_be_bytes());
        assert_eq!(&out[4..8], b"tEXt");
        assert_eq!(&out[8..13], b"hello");
        assert_eq!(&out[13..], &chunk.crc().to_be_bytes());
    }

    #[test]
    fn crc_covers_tag() {
        let a = Chunk::new(ChunkType(*b"aaaa"), vec![1, 2, 3]);
        let b = Chunk::new(ChunkType(*b"bbbb"), vec![1, 2, 3]);
        assert_ne!(a.crc(), b.crc());
    }

    #[test]
    fn display_escapes_non_ascii() {
        assert_eq!(ChunkType::IDAT.to_string(), "IDAT");
        assert_eq!(ChunkType([b'a', 0, b'b', 0xff]).to_string(), "a\\x00b\\xff");
    }
}
