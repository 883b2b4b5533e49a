//! Chunk-level reader used to check encoded streams.
//!
//! This is not a decoder: it splits a stream into chunks and verifies every
//! stored CRC, nothing more.

use crate::chunk::{checksum, Chunk, ChunkType, MAX_CHUNK_LEN};
use crate::encoder::SIGNATURE;
use crate::error::PngError;

/// Splits `bytes` into chunks, verifying the signature and each CRC.
///
/// Reading stops after `IEND`; trailing bytes are ignored.
pub fn read_chunks(bytes: &[u8]) -> Result<Vec<Chunk>, PngError> {
    if bytes.len() < SIGNATURE.len() || bytes[..SIGNATURE.len()] != SIGNATURE {
        return Err(PngError::BadSignature);
    }

    let mut chunks = Vec::new();
    let mut pos = SIGNATURE.len();

    while pos < bytes.len() {
        let len = read_u32(bytes, pos)? as usize;
        if len > MAX_CHUNK_LEN {
            return Err(PngError::ChunkTooLarge { len });
        }
        let tag = bytes.get(pos + 4..pos + 8).ok_or(PngError::Truncated { offset: pos + 4 })?;
        let kind = ChunkType([tag[0], tag[1], tag[2], tag[3]]);

        let data_start = pos + 8;
        let data_end = data_start + len;
        let data = bytes
            .get(data_start..data_end)
            .ok_or(PngError::Truncated { offset: data_start })?;

        let stored = read_u32(bytes, data_end)?;
        let computed = checksum(kind, data);
        if stored != computed {
            return Err(PngError::CrcMismatch { kind, stored, computed });
        }

        chunks.push(Chunk::new(kind, data.to_vec()));
        pos = data_end + 4;

        if kind == ChunkType::IEND {
            break;
        }
    }

    Ok(chunks)
}

fn read_u32(bytes: &[u8], at: usize) -> Result<u32, PngError> {
    let b = bytes.get(at..at + 4).ok_or(PngError::Truncated { offset: at })?;
    Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}
