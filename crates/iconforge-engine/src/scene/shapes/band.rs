use crate::coords::{Rect, Vec2};
use crate::geometry;
use crate::paint::Color;
use crate::scene::{GeometryError, LayerId, RecipeBuilder};

use super::validate_rect;

/// Axis-aligned line band, e.g. one transcript line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Band {
    pub rect: Rect,
}

impl Band {
    pub fn new(rect: Rect) -> Result<Self, GeometryError> {
        let shape = Self { rect };
        shape.validate()?;
        Ok(shape)
    }

    /// Horizontal band starting at `(x, y)`.
    pub fn horizontal(x: f64, y: f64, length: f64, thickness: f64) -> Result<Self, GeometryError> {
        Self::new(Rect::new(x, y, length, thickness))
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        validate_rect("band", self.rect)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        geometry::point_in_band(p, self.rect.origin, self.rect.size)
    }
}

impl RecipeBuilder {
    /// Records a solid band paint layer.
    #[inline]
    pub fn paint_band(&mut self, rect: Rect, color: Color) -> Result<LayerId, GeometryError> {
        self.paint(Band { rect }, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_band_spans_thickness_inclusive() {
        let band = Band::horizontal(2.0, 10.0, 8.0, 2.0).unwrap();
        assert!(band.contains(Vec2::new(2.0, 10.0)));
        assert!(band.contains(Vec2::new(10.0, 12.0)));
        assert!(!band.contains(Vec2::new(10.0, 13.0)));
        assert!(!band.contains(Vec2::new(1.0, 11.0)));
    }

    #[test]
    fn negative_length_is_rejected() {
        assert!(Band::horizontal(0.0, 0.0, -1.0, 1.0).is_err());
    }
}
