//! CPU rasterizer.
//!
//! Each pixel is resolved independently: background test, then every layer
//! of the recipe in order. No anti-aliasing.

mod canvas;
mod raster;
mod rasterizer;

pub use canvas::Canvas;
pub use raster::RasterBuffer;
pub use rasterizer::render;
