//! Paint model shared between recipes and the rasterizer.
//!
//! Scope:
//! - 8-bit straight RGB colors
//! - channel layout of the produced raster (RGB or RGBA)
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, Pixel};

/// Channel layout of a raster buffer. Same type the encoder consumes.
pub use iconforge_png::ColorType as ChannelLayout;
