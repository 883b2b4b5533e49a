//! Purple rounded square with a white document: dog-ear fold, a play
//! triangle punched through it, and three transcript lines.

use crate::coords::{Rect, Vec2};
use crate::paint::{ChannelLayout, Color};
use crate::scene::shapes::{Band, RoundedRect, Triangle};
use crate::scene::{GeometryError, LayerOp, Recipe};

pub const PURPLE: Color = Color::from_hex(0x6C5CE7);
pub const PAPER: Color = Color::white();
pub const FOLD: Color = Color::rgb(200, 195, 240);
pub const FOLD_ALPHA: u8 = 180;

/// Transcript line lengths, relative to the available width.
const LINE_LENGTHS: [f64; 3] = [0.95, 0.70, 0.50];

pub fn recipe(size: u32) -> Result<Recipe, GeometryError> {
    let s = size as f64;

    let bg = RoundedRect::new(Rect::new(0.0, 0.0, s - 1.0, s - 1.0), s * 0.22)?;
    let mut b = Recipe::builder(ChannelLayout::Rgba, bg, PURPLE)?;

    // Document, inset from the background.
    let left = s * 0.22;
    let right = s - s * 0.22;
    let top = s * 0.16;
    let bottom = s - s * 0.18;
    let doc_w = right - left;
    let doc_h = bottom - top;
    let doc = b.paint_rounded_rect(Rect::new(left, top, doc_w, doc_h), s * 0.08, PAPER)?;

    // Play triangle, upper-left of the document, cut through to the purple.
    let center = Vec2::new(left + doc_w * 0.30, top + doc_h * 0.22);
    let r = doc_w * 0.16;
    let play = Triangle::new(
        center + Vec2::new(-0.5 * r, -0.85 * r),
        center + Vec2::new(-0.5 * r, 0.85 * r),
        center + Vec2::new(0.9 * r, 0.0),
    )?;
    b.subtract(play, doc)?;

    // Transcript lines in the lower part of the document.
    let line_left = left + doc_w * 0.14;
    let line_right = right - doc_w * 0.14;
    let avail = line_right - line_left;
    let thickness = (s * 0.055).round_ties_even().max(1.0);
    let lines_top = top + doc_h * 0.38;
    let lines_bottom = bottom - doc_h * 0.15;
    let spacing = (lines_bottom - lines_top) / 2.0;
    for (i, frac) in LINE_LENGTHS.iter().enumerate() {
        let y = lines_top + i as f64 * spacing;
        let line = Band::horizontal(line_left, y, avail * frac, thickness)?;
        b.paint_within(line, PURPLE, doc)?;
    }

    // Dog-ear: cut the top-right corner of the document, then shade the
    // part of the cut under the fold flap.
    let ear = doc_w * 0.25;
    let ear_x = right - ear;
    let cut = Triangle::new(
        Vec2::new(ear_x, top),
        Vec2::new(right, top),
        Vec2::new(ear_x, top + ear),
    )?;
    let cut = b.subtract(cut, doc)?;
    let flap = Triangle::new(
        Vec2::new(ear_x, top),
        Vec2::new(right, top),
        Vec2::new(right, top + ear),
    )?;
    b.push(
        flap,
        LayerOp::Paint { color: FOLD, alpha: Some(FOLD_ALPHA), clip: Some(cut) },
    )?;

    Ok(b.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Pixel;
    use crate::render::{render, Canvas};

    fn rendered(size: u32) -> crate::render::RasterBuffer {
        render(Canvas::square(size).unwrap(), &recipe(size).unwrap())
    }

    #[test]
    fn layer_count() {
        // document, play cut, 3 lines, ear cut, fold flap
        assert_eq!(recipe(48).unwrap().layers().len(), 7);
    }

    #[test]
    fn size_one_is_rejected() {
        assert!(matches!(recipe(1), Err(GeometryError::CornerRadiusOutOfRange { .. })));
    }

    #[test]
    fn corners_are_transparent() {
        let buf = rendered(128);
        for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127)] {
            assert_eq!(buf.pixel(x, y).unwrap(), &[0, 0, 0, 0]);
        }
    }

    #[test]
    fn margin_is_purple() {
        let buf = rendered(128);
        assert_eq!(buf.pixel(10, 64).unwrap(), &PURPLE.opaque());
    }

    #[test]
    fn document_body_is_white() {
        // Between the play triangle and the first line, left of the ear.
        let buf = rendered(128);
        assert_eq!(buf.pixel(64, 45).unwrap(), &PAPER.opaque());
    }

    #[test]
    fn play_triangle_shows_purple() {
        // Play center at (left + 0.3w, top + 0.22h) = (~48.6, ~39.1).
        let buf = rendered(128);
        assert_eq!(buf.pixel(49, 39).unwrap(), &PURPLE.opaque());
    }

    #[test]
    fn first_line_is_purple() {
        // lines_top = 20.48 + 84.48 * 0.38 = ~52.6, thickness 7.
        let buf = rendered(128);
        assert_eq!(buf.pixel(64, 56).unwrap(), &PURPLE.opaque());
    }

    // ── edge pixels ───────────────────────────────────────────────────────

    const P: Pixel = PURPLE.opaque();
    const W: Pixel = PAPER.opaque();
    const F: Pixel = FOLD.with_alpha(FOLD_ALPHA);

    fn assert_pixels(size: u32, expected: &[(u32, u32, Pixel)]) {
        let buf = rendered(size);
        for &(x, y, px) in expected {
            assert_eq!(buf.pixel(x, y).unwrap(), &px, "size {size} ({x}, {y})");
        }
    }

    #[test]
    fn line_ends_are_inclusive() {
        // The third line ends exactly on s / 2.
        assert_pixels(16, &[(8, 12, P), (9, 12, W)]);
        assert_pixels(48, &[(24, 35, P), (25, 35, W)]);
        let buf = rendered(128);
        for y in 93..=99 {
            assert_eq!(buf.pixel(64, y).unwrap(), &P, "(64, {y})");
        }
        assert_eq!(buf.pixel(64, 92).unwrap(), &W);
        assert_eq!(buf.pixel(64, 100).unwrap(), &W);
        assert_eq!(buf.pixel(65, 93).unwrap(), &W);
    }

    #[test]
    fn line_edges() {
        assert_pixels(16, &[(10, 7, P), (11, 7, W), (5, 7, P), (4, 7, W), (9, 10, P), (10, 10, W)]);
        assert_pixels(48, &[(32, 20, P), (33, 20, W), (15, 20, P), (14, 20, W), (27, 28, P), (28, 28, W)]);
        assert_pixels(128, &[(87, 53, P), (88, 53, W), (39, 53, P), (38, 53, W), (74, 73, P), (75, 73, W)]);
    }

    #[test]
    fn play_cutout_edges() {
        assert_pixels(16, &[(5, 5, W), (6, 5, P), (7, 5, P), (8, 5, W)]);
        assert_pixels(48, &[(16, 15, W), (17, 15, P), (22, 15, W)]);
        assert_pixels(128, &[(43, 39, W), (44, 39, P), (59, 39, P), (60, 39, W)]);
    }

    #[test]
    fn ear_edges() {
        assert_pixels(16, &[(10, 3, W), (11, 3, F), (12, 3, F), (13, 3, P), (11, 4, P), (12, 4, W)]);
        assert_pixels(48, &[
            (30, 8, W), (31, 8, P), (32, 8, F), (35, 8, F), (36, 8, P),
            (31, 14, P), (32, 14, W), (37, 14, W),
        ]);
        assert_pixels(128, &[
            (81, 21, W), (82, 21, P), (83, 21, F), (92, 21, F), (93, 21, P),
            (82, 38, P), (83, 38, W), (99, 38, W),
        ]);
    }

    #[test]
    fn fold_is_translucent_lavender() {
        // Near the top edge, centered in the ear: inside cut and flap.
        let buf = rendered(128);
        assert_eq!(buf.pixel(91, 22).unwrap(), &FOLD.with_alpha(FOLD_ALPHA));
    }
}
