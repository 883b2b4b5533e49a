//! Built-in icon designs and the size → PNG bytes pipeline.

pub mod document;
pub mod red;

use std::fmt;
use std::str::FromStr;

use anyhow::Context;

use crate::render::{render, Canvas};
use crate::scene::{GeometryError, Recipe};

/// One of the compiled-in icon designs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Design {
    /// Purple document with play cut-out and transcript lines (RGBA).
    #[default]
    Document,
    /// Red square with white play triangle and lines (RGB).
    Red,
}

impl Design {
    pub const ALL: [Design; 2] = [Design::Document, Design::Red];

    pub fn name(self) -> &'static str {
        match self {
            Design::Document => "document",
            Design::Red => "red",
        }
    }

    /// Recipe for this design on a `size × size` canvas.
    pub fn recipe(self, size: u32) -> Result<Recipe, GeometryError> {
        match self {
            Design::Document => document::recipe(size),
            Design::Red => red::recipe(size),
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `Design::from_str` for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDesign(pub String);

impl fmt::Display for UnknownDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Design::ALL.iter().map(|d| d.name()).collect();
        write!(f, "unknown design '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownDesign {}

impl FromStr for Design {
    type Err = UnknownDesign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Design::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDesign(s.to_string()))
    }
}

/// Renders `design` at `size × size` and encodes it as PNG.
///
/// Either the full byte stream is returned or nothing is.
pub fn produce_png(size: u32, design: Design) -> anyhow::Result<Vec<u8>> {
    let canvas = Canvas::square(size).with_context(|| format!("invalid icon size {size}"))?;
    let recipe = design
        .recipe(size)
        .with_context(|| format!("building {design} recipe at {size}px"))?;

    let raster = render(canvas, &recipe);
    raster
        .encode_png()
        .with_context(|| format!("encoding {design} icon at {size}px"))
}
