use crate::scene::GeometryError;

/// Pixel grid of one render.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Square `size × size` canvas.
    #[inline]
    pub fn square(size: u32) -> Result<Self, GeometryError> {
        Self::new(size, size)
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}
