//! iconforge engine crate.
//!
//! Builds icons out of geometric containment tests: a recipe of layered
//! shapes is evaluated per pixel into a raster buffer, which is then handed
//! to `iconforge-png` for encoding.

pub mod coords;
pub mod geometry;
pub mod icon;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
