use crate::coords::{Rect, Vec2};
use crate::geometry;
use crate::paint::Color;
use crate::scene::{GeometryError, LayerId, RecipeBuilder};

use super::validate_rect;

/// Rectangle with a uniform corner radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f64,
}

impl RoundedRect {
    /// Validated constructor.
    pub fn new(rect: Rect, radius: f64) -> Result<Self, GeometryError> {
        let shape = Self { rect, radius };
        shape.validate()?;
        Ok(shape)
    }

    /// Corner radius must lie in `[0, min(w, h) / 2]`; larger radii would
    /// make opposite corner discs overlap.
    pub fn validate(&self) -> Result<(), GeometryError> {
        validate_rect("rounded rect", self.rect)?;
        if !self.radius.is_finite() {
            return Err(GeometryError::NonFinite { shape: "rounded rect" });
        }
        let max = self.rect.min_extent() * 0.5;
        if self.radius < 0.0 || self.radius > max {
            return Err(GeometryError::CornerRadiusOutOfRange { radius: self.radius, max });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        geometry::point_in_rounded_rect(p, self.rect.origin, self.rect.size, self.radius)
    }
}

impl RecipeBuilder {
    /// Records a solid rounded rectangle paint layer.
    #[inline]
    pub fn paint_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        color: Color,
    ) -> Result<LayerId, GeometryError> {
        self.paint(RoundedRect { rect, radius }, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_at_half_extent_is_accepted() {
        assert!(RoundedRect::new(Rect::new(0.0, 0.0, 10.0, 4.0), 2.0).is_ok());
    }

    #[test]
    fn radius_past_half_extent_is_rejected() {
        assert_eq!(
            RoundedRect::new(Rect::new(0.0, 0.0, 10.0, 4.0), 2.5),
            Err(GeometryError::CornerRadiusOutOfRange { radius: 2.5, max: 2.0 })
        );
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(RoundedRect::new(Rect::new(0.0, 0.0, 10.0, 10.0), -1.0).is_err());
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(matches!(
            RoundedRect::new(Rect::new(0.0, 0.0, -3.0, 10.0), 0.0),
            Err(GeometryError::NegativeSize { .. })
        ));
    }

    #[test]
    fn nan_origin_is_rejected() {
        assert!(matches!(
            RoundedRect::new(Rect::new(f64::NAN, 0.0, 3.0, 3.0), 0.0),
            Err(GeometryError::NonFinite { .. })
        ));
    }
}
