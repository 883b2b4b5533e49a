use crate::coords::Vec2;
use crate::geometry;
use crate::paint::Color;
use crate::scene::{GeometryError, LayerId, RecipeBuilder};

/// Disc, or ring when `inner_radius > 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f64,
    pub inner_radius: f64,
}

impl Disc {
    /// Full disc.
    pub fn new(center: Vec2, radius: f64) -> Result<Self, GeometryError> {
        Self::ring(center, radius, 0.0)
    }

    /// Ring between `inner_radius` and `radius` (both inclusive).
    pub fn ring(center: Vec2, radius: f64, inner_radius: f64) -> Result<Self, GeometryError> {
        let shape = Self { center, radius, inner_radius };
        shape.validate()?;
        Ok(shape)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.center.is_finite() || !self.radius.is_finite() || !self.inner_radius.is_finite() {
            return Err(GeometryError::NonFinite { shape: "disc" });
        }
        if self.radius < 0.0 {
            return Err(GeometryError::NegativeRadius { radius: self.radius });
        }
        if self.inner_radius < 0.0 || self.inner_radius > self.radius {
            return Err(GeometryError::InnerRadiusOutOfRange {
                inner: self.inner_radius,
                radius: self.radius,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        geometry::point_in_disc(p, self.center, self.radius, self.inner_radius)
    }
}

impl RecipeBuilder {
    /// Records a solid disc paint layer.
    #[inline]
    pub fn paint_disc(
        &mut self,
        center: Vec2,
        radius: f64,
        color: Color,
    ) -> Result<LayerId, GeometryError> {
        self.paint(Disc { center, radius, inner_radius: 0.0 }, color)
    }
}
