use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::chunk::{Chunk, ChunkType};
use crate::error::PngError;
use crate::header::{ColorType, ImageHeader};

/// Fixed 8-byte PNG magic.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Scanline filter type "None".
const FILTER_NONE: u8 = 0;

/// Encodes a raster buffer as a complete PNG byte stream.
///
/// `pixels` must be row-major, top-to-bottom, with exactly
/// `width × height × color_type.channels()` bytes. Any other length is
/// rejected before output is produced; nothing is truncated or padded.
///
/// Output is a pure function of the inputs (no timestamps, no ancillary
/// chunks), so encoding the same buffer twice yields identical bytes.
pub fn encode(
    width: u32,
    height: u32,
    color_type: ColorType,
    pixels: &[u8],
) -> Result<Vec<u8>, PngError> {
    let header = ImageHeader::new(width, height, color_type);
    check_buffer(&header, pixels)?;

    let raw = frame_scanlines(&header, pixels);
    let compressed = compress(&raw)?;

    let chunks = [
        header.to_chunk(),
        Chunk::new(ChunkType::IDAT, compressed),
        Chunk::end(),
    ];

    let total = SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&SIGNATURE);
    for chunk in &chunks {
        chunk.write_to(&mut out)?;
    }

    log::debug!(
        "png: encoded {}x{} {:?} ({} raw -> {} bytes)",
        width,
        height,
        color_type,
        raw.len(),
        out.len()
    );
    Ok(out)
}

/// Byte length a buffer for `header` must have.
pub fn expected_len(header: &ImageHeader) -> Result<usize, PngError> {
    if header.width == 0 || header.height == 0 {
        return Err(PngError::ZeroDimension { width: header.width, height: header.height });
    }
    (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|n| n.checked_mul(header.color_type.channels()))
        .ok_or(PngError::DimensionOverflow { width: header.width, height: header.height })
}

fn check_buffer(header: &ImageHeader, pixels: &[u8]) -> Result<(), PngError> {
    let expected = expected_len(header)?;
    if pixels.len() != expected {
        return Err(PngError::BufferSizeMismatch { expected, actual: pixels.len() });
    }
    Ok(())
}

/// Prefixes every row with the filter byte and concatenates the rows.
///
/// Caller guarantees `pixels.len() == row_bytes × height`.
pub fn frame_scanlines(header: &ImageHeader, pixels: &[u8]) -> Vec<u8> {
    let row = header.row_bytes();
    let mut raw = Vec::with_capacity((row + 1) * header.height as usize);
    for line in pixels.chunks_exact(row) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(line);
    }
    raw
}

/// zlib stream at the maximum compression level.
pub fn compress(raw: &[u8]) -> Result<Vec<u8>, PngError> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
    enc.write_all(raw).map_err(|e| PngError::Compression(e.to_string()))?;
    enc.finish().map_err(|e| PngError::Compression(e.to_string()))
}
