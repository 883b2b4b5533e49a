//! Coordinate and geometry types shared by shapes, recipes and the rasterizer.
//!
//! Canvas space:
//! - one unit per pixel
//! - origin top-left
//! - +X right, +Y down
//!
//! Pixel `(x, y)` is sampled at the integer point `(x, y)`.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
