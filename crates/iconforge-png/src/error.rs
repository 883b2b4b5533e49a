use std::fmt;

use crate::chunk::ChunkType;

/// Errors produced while encoding or checking a PNG stream.
#[derive(Debug, Clone, PartialEq)]
pub enum PngError {
    /// Width or height is zero.
    ZeroDimension { width: u32, height: u32 },
    /// `width × height × channels` does not fit in memory on this target.
    DimensionOverflow { width: u32, height: u32 },
    /// The raster buffer does not hold exactly `width × height × channels` bytes.
    BufferSizeMismatch { expected: usize, actual: usize },
    /// A chunk payload is larger than the 31-bit length field allows.
    ChunkTooLarge { len: usize },
    /// The deflate backend failed.
    Compression(String),
    /// The stream does not start with the PNG signature.
    BadSignature,
    /// The stream ended in the middle of a chunk.
    Truncated { offset: usize },
    /// Stored CRC does not match the CRC computed over tag + data.
    CrcMismatch { kind: ChunkType, stored: u32, computed: u32 },
    /// An `IHDR` payload could not be interpreted.
    InvalidHeader(String),
}

impl fmt::Display for PngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PngError::ZeroDimension { width, height } => {
                write!(f, "png: image dimensions must be non-zero (got {width}x{height})")
            }
            PngError::DimensionOverflow { width, height } => {
                write!(f, "png: image {width}x{height} is too large to address")
            }
            PngError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "png: raster buffer has {actual} bytes, expected {expected}"
            ),
            PngError::ChunkTooLarge { len } => {
                write!(f, "png: chunk payload of {len} bytes exceeds 2^31-1")
            }
            PngError::Compression(msg) => write!(f, "png: deflate failed: {msg}"),
            PngError::BadSignature => write!(f, "png: missing PNG signature"),
            PngError::Truncated { offset } => {
                write!(f, "png: stream truncated at byte {offset}")
            }
            PngError::CrcMismatch { kind, stored, computed } => write!(
                f,
                "png: CRC mismatch in {kind} chunk (stored {stored:#010x}, computed {computed:#010x})"
            ),
            PngError::InvalidHeader(msg) => write!(f, "png: invalid IHDR: {msg}"),
        }
    }
}

impl std::error::Error for PngError {}
