use crate::chunk::{Chunk, ChunkType};
use crate::error::PngError;

/// Pixel layout of the raster buffer. Always 8 bits per channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorType {
    /// Three channels per pixel.
    Rgb,
    /// Four channels per pixel, straight (non-premultiplied) alpha.
    Rgba,
}

impl ColorType {
    /// Value of the IHDR color type field.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            ColorType::Rgb => 2,
            ColorType::Rgba => 6,
        }
    }

    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, ColorType::Rgba)
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(ColorType::Rgb),
            6 => Some(ColorType::Rgba),
            _ => None,
        }
    }
}

/// Contents of the `IHDR` chunk.
///
/// Bit depth is fixed at 8; compression, filter and interlace methods are
/// fixed at 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
}

impl ImageHeader {
    pub const BIT_DEPTH: u8 = 8;
    pub const LEN: usize = 13;

    #[inline]
    pub const fn new(width: u32, height: u32, color_type: ColorType) -> Self {
        Self { width, height, color_type }
    }

    /// Bytes per row, excluding the filter byte.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.color_type.channels()
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = Self::BIT_DEPTH;
        out[9] = self.color_type.code();
        // out[10..13]: compression, filter, interlace = 0
        out
    }

    pub fn to_chunk(&self) -> Chunk {
        Chunk::new(ChunkType::IHDR, self.to_bytes().to_vec())
    }

    /// Parses an `IHDR` payload produced by this crate.
    ///
    /// Only the subset this crate writes is accepted (8-bit RGB/RGBA,
    /// no interlacing).
    pub fn parse(data: &[u8]) -> Result<Self, PngError> {
        if data.len() != Self::LEN {
            return Err(PngError::InvalidHeader(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                data.len()
            )));
        }
        let width = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        let height = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        if width == 0 || height == 0 {
            return Err(PngError::ZeroDimension { width, height });
        }
        if data[8] != Self::BIT_DEPTH {
            return Err(PngError::InvalidHeader(format!("unsupported bit depth {}", data[8])));
        }
        let color_type = ColorType::from_code(data[9]).ok_or_else(|| {
            PngError::InvalidHeader(format!("unsupported color type {}", data[9]))
        })?;
        if data[10..13] != [0, 0, 0] {
            return Err(PngError::InvalidHeader(
                "compression, filter and interlace must be 0".into(),
            ));
        }
        Ok(Self { width, height, color_type })
    }
}
