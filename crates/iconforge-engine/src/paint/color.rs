/// One pixel as `[r, g, b, a]`. RGB rasters drop the last element.
pub type Pixel = [u8; 4];

/// Straight (non-premultiplied) 8-bit sRGB color.
///
/// Alpha is not part of the color; layers set it separately.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Pixel with the given alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Pixel {
        [self.r, self.g, self.b, a]
    }

    /// Fully opaque pixel.
    #[inline]
    pub const fn opaque(self) -> Pixel {
        self.with_alpha(255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(Color::from_hex(0x6C5CE7), Color::rgb(108, 92, 231));
    }

    #[test]
    fn opaque_sets_full_alpha() {
        assert_eq!(Color::white().opaque(), [255, 255, 255, 255]);
        assert_eq!(Color::black().with_alpha(7), [0, 0, 0, 7]);
    }
}
