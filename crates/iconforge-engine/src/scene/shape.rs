use crate::coords::Vec2;

use super::shapes::{Band, Disc, RoundedRect, Triangle};
use super::GeometryError;

/// Region a layer covers.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement its containment test in `geometry`
/// - implement paint helpers inside that shape module
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    RoundedRect(RoundedRect),
    Triangle(Triangle),
    Band(Band),
    Disc(Disc),
}

impl Shape {
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Shape::RoundedRect(s) => s.contains(p),
            Shape::Triangle(s) => s.contains(p),
            Shape::Band(s) => s.contains(p),
            Shape::Disc(s) => s.contains(p),
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            Shape::RoundedRect(s) => s.validate(),
            Shape::Triangle(s) => s.validate(),
            Shape::Band(s) => s.validate(),
            Shape::Disc(s) => s.validate(),
        }
    }
}

impl From<RoundedRect> for Shape {
    fn from(s: RoundedRect) -> Self {
        Shape::RoundedRect(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<Band> for Shape {
    fn from(s: Band) -> Self {
        Shape::Band(s)
    }
}

impl From<Disc> for Shape {
    fn from(s: Disc) -> Self {
        Shape::Disc(s)
    }
}
