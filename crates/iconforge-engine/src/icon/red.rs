//! Opaque red rounded square with a white play triangle over three lines.

use crate::coords::{Rect, Vec2};
use crate::paint::{ChannelLayout, Color};
use crate::scene::shapes::RoundedRect;
use crate::scene::{GeometryError, Recipe};

pub const RED: Color = Color::from_hex(0xE53935);
pub const MARK: Color = Color::white();

const LINE_LENGTHS: [f64; 3] = [1.0, 0.75, 0.5];

pub fn recipe(size: u32) -> Result<Recipe, GeometryError> {
    let s = size as f64;

    let bg = RoundedRect::new(Rect::new(0.0, 0.0, s - 1.0, s - 1.0), s * 0.22)?;
    let mut b = Recipe::builder(ChannelLayout::Rgb, bg, RED)?;

    b.paint_triangle(
        Vec2::new(s * 0.38, s * 0.20),
        Vec2::new(s * 0.38, s * 0.52),
        Vec2::new(s * 0.66, s * 0.36),
        MARK,
    )?;

    let left = s * 0.22;
    let avail = s * 0.56;
    let thickness = (s * 0.055).round_ties_even().max(1.0);
    for (i, frac) in LINE_LENGTHS.iter().enumerate() {
        let y = s * (0.62 + 0.10 * i as f64);
        b.paint_band(Rect::new(left, y, avail * frac, thickness), MARK)?;
    }

    Ok(b.build())
}
