use iconforge_png::PngError;

use crate::paint::ChannelLayout;

/// Row-major, top-to-bottom pixel data produced by [`render`](super::render).
///
/// Invariant: `data.len() == width × height × layout.channels()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl RasterBuffer {
    pub(super) fn from_parts(width: u32, height: u32, layout: ChannelLayout, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * layout.channels(),
            "raster buffer length does not match its dimensions"
        );
        Self { width, height, layout, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Channel values of pixel `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels();
        let i = (y as usize * self.width as usize + x as usize) * c;
        Some(&self.data[i..i + c])
    }

    /// Consumes the buffer and encodes it as PNG.
    pub fn encode_png(self) -> Result<Vec<u8>, PngError> {
        iconforge_png::encode(self.width, self.height, self.layout, &self.data)
    }
}
