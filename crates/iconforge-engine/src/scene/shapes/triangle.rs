use crate::coords::Vec2;
use crate::geometry;
use crate::paint::Color;
use crate::scene::{GeometryError, LayerId, RecipeBuilder};

/// Filled triangle. Vertex order (winding) does not matter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Result<Self, GeometryError> {
        let shape = Self { a, b, c };
        shape.validate()?;
        Ok(shape)
    }

    /// Only finiteness is checked. Collinear vertices are allowed and
    /// contain just the points of their segment.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.a.is_finite() && self.b.is_finite() && self.c.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::NonFinite { shape: "triangle" })
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        geometry::point_in_triangle(p, self.a, self.b, self.c)
    }
}

impl RecipeBuilder {
    /// Records a solid triangle paint layer.
    #[inline]
    pub fn paint_triangle(
        &mut self,
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Color,
    ) -> Result<LayerId, GeometryError> {
        self.paint(Triangle { a, b, c }, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_vertex_is_rejected() {
        let t = Triangle::new(Vec2::zero(), Vec2::new(f64::INFINITY, 0.0), Vec2::new(1.0, 1.0));
        assert_eq!(t, Err(GeometryError::NonFinite { shape: "triangle" }));
    }

    #[test]
    fn contains_delegates_to_predicate() {
        let t = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), Vec2::new(10.0, 5.0))
            .unwrap();
        assert!(t.contains(Vec2::new(1.0, 5.0)));
        assert!(!t.contains(Vec2::new(9.0, 9.0)));
    }
}
