//! Point containment predicates.
//!
//! Every test is closed: points exactly on a boundary are inside. Callers are
//! expected to validate parameters first (see `scene::shapes`); these
//! functions never fail.

use crate::coords::{Rect, Vec2};

/// Euclidean distance between `p` and `q`.
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f64 {
    (p - q).length()
}

/// `|p - center| <= radius`, on the rooted distance.
#[inline]
fn within(p: Vec2, center: Vec2, radius: f64) -> bool {
    distance(p, center) <= radius
}

/// Rectangle with circular corners of radius `corner_radius`.
///
/// Inside means: in the horizontal band `[x+r, x+w-r] × [y, y+h]`, in the
/// vertical band `[x, x+w] × [y+r, y+h-r]`, or within `r` of one of the four
/// corner centers (each inset by `r` from both edges).
///
/// `corner_radius = 0` is a plain rectangle test. Radii above
/// `min(w, h) / 2` make the corner discs overlap and are rejected upstream.
pub fn point_in_rounded_rect(point: Vec2, origin: Vec2, size: Vec2, corner_radius: f64) -> bool {
    let r = corner_radius;
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);
    let (px, py) = (point.x, point.y);

    if px >= x0 + r && px <= x1 - r && py >= y0 && py <= y1 {
        return true;
    }
    if px >= x0 && px <= x1 && py >= y0 + r && py <= y1 - r {
        return true;
    }

    let corners = [
        Vec2::new(x0 + r, y0 + r),
        Vec2::new(x1 - r, y0 + r),
        Vec2::new(x0 + r, y1 - r),
        Vec2::new(x1 - r, y1 - r),
    ];
    corners.iter().any(|&c| within(point, c, r))
}

/// Triangle containment via the sign of each edge's cross product.
///
/// Inside iff the three signed areas are not a mix of strictly positive and
/// strictly negative values. Zero (on an edge or vertex) counts as inside,
/// and either winding order gives the same answer.
pub fn point_in_triangle(point: Vec2, v1: Vec2, v2: Vec2, v3: Vec2) -> bool {
    let d1 = edge_sign(point, v1, v2);
    let d2 = edge_sign(point, v2, v3);
    let d3 = edge_sign(point, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Signed area of the parallelogram `(p - b) × (a - b)`.
/// Same sign as `(a - p) × (b - p)`.
#[inline]
fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    (p - b).cross(a - b)
}

/// Axis-aligned band (closed rectangle).
#[inline]
pub fn point_in_band(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    Rect::from_origin_size(origin, size).contains(point)
}

/// Annulus `inner_radius <= |p - center| <= radius`.
///
/// `inner_radius = 0` is a full disc.
pub fn point_in_disc(point: Vec2, center: Vec2, radius: f64, inner_radius: f64) -> bool {
    let d2 = (point - center).length_squared();
    d2 <= radius * radius && d2 >= inner_radius * inner_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 { Vec2::new(x, y) }

    fn grid() -> impl Iterator<Item = Vec2> {
        (-4..=24).flat_map(|y| (-4..=24).map(move |x| v(x as f64 * 0.5, y as f64 * 0.5)))
    }

    // ── distance ──────────────────────────────────────────────────────────

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(v(1.0, 1.0), v(4.0, 5.0)), 5.0);
        assert_eq!(distance(v(2.0, 2.0), v(2.0, 2.0)), 0.0);
    }

    // ── triangle ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_known_points() {
        let (a, b, c) = (v(0.0, 0.0), v(0.0, 10.0), v(10.0, 5.0));
        assert!(point_in_triangle(v(1.0, 5.0), a, b, c));
        assert!(!point_in_triangle(v(9.0, 9.0), a, b, c));
    }

    #[test]
    fn triangle_vertices_and_edges_are_inside() {
        let (a, b, c) = (v(0.0, 0.0), v(0.0, 10.0), v(10.0, 5.0));
        assert!(point_in_triangle(a, a, b, c));
        assert!(point_in_triangle(c, a, b, c));
        assert!(point_in_triangle(v(0.0, 3.0), a, b, c));
    }

    #[test]
    fn triangle_independent_of_vertex_order() {
        let (a, b, c) = (v(1.0, 1.5), v(2.0, 9.0), v(8.5, 4.0));
        for p in grid() {
            let expected = point_in_triangle(p, a, b, c);
            assert_eq!(point_in_triangle(p, b, a, c), expected, "{p:?}");
            assert_eq!(point_in_triangle(p, a, c, b), expected, "{p:?}");
            assert_eq!(point_in_triangle(p, c, b, a), expected, "{p:?}");
            assert_eq!(point_in_triangle(p, b, c, a), expected, "{p:?}");
            assert_eq!(point_in_triangle(p, c, a, b), expected, "{p:?}");
        }
    }

    #[test]
    fn degenerate_triangle_contains_only_its_segment() {
        let (a, b, c) = (v(0.0, 0.0), v(5.0, 0.0), v(10.0, 0.0));
        assert!(point_in_triangle(v(3.0, 0.0), a, b, c));
        assert!(!point_in_triangle(v(3.0, 1.0), a, b, c));
    }

    // ── rounded rect ──────────────────────────────────────────────────────

    #[test]
    fn zero_radius_matches_plain_rect() {
        let (origin, size) = (v(1.0, 2.0), v(6.5, 4.0));
        let rect = Rect::from_origin_size(origin, size);
        for p in grid() {
            assert_eq!(point_in_rounded_rect(p, origin, size, 0.0), rect.contains(p), "{p:?}");
        }
    }

    #[test]
    fn corners_are_cut() {
        let (origin, size) = (v(0.0, 0.0), v(15.0, 15.0));
        let r = 16.0 * 0.22;
        assert!(!point_in_rounded_rect(v(0.0, 0.0), origin, size, r));
        assert!(!point_in_rounded_rect(v(15.0, 0.0), origin, size, r));
        assert!(!point_in_rounded_rect(v(0.0, 15.0), origin, size, r));
        assert!(!point_in_rounded_rect(v(15.0, 15.0), origin, size, r));
        assert!(point_in_rounded_rect(v(8.0, 8.0), origin, size, r));
    }

    #[test]
    fn edge_midpoints_are_inside() {
        let (origin, size) = (v(0.0, 0.0), v(15.0, 15.0));
        let r = 4.0;
        assert!(point_in_rounded_rect(v(7.5, 0.0), origin, size, r));
        assert!(point_in_rounded_rect(v(0.0, 7.5), origin, size, r));
        assert!(point_in_rounded_rect(v(15.0, 7.5), origin, size, r));
        assert!(point_in_rounded_rect(v(7.5, 15.0), origin, size, r));
    }

    #[test]
    fn corner_arc_is_inclusive() {
        // Corner center (4, 4), radius 4: (4, 0) lies exactly on the arc.
        let (origin, size) = (v(0.0, 0.0), v(20.0, 20.0));
        assert!(point_in_rounded_rect(v(4.0, 0.0), origin, size, 4.0));
        assert!(!point_in_rounded_rect(v(1.0, 1.0), origin, size, 4.0));
    }

    // ── band / disc ───────────────────────────────────────────────────────

    #[test]
    fn band_is_closed() {
        let (origin, size) = (v(2.0, 5.0), v(6.0, 1.0));
        assert!(point_in_band(v(2.0, 5.0), origin, size));
        assert!(point_in_band(v(8.0, 6.0), origin, size));
        assert!(!point_in_band(v(8.0, 7.0), origin, size));
    }

    #[test]
    fn disc_and_annulus() {
        let c = v(5.0, 5.0);
        assert!(point_in_disc(c, c, 3.0, 0.0));
        assert!(point_in_disc(v(8.0, 5.0), c, 3.0, 0.0));
        assert!(!point_in_disc(v(8.0, 6.0), c, 3.0, 0.0));

        assert!(!point_in_disc(c, c, 3.0, 1.0));
        assert!(point_in_disc(v(7.0, 5.0), c, 3.0, 1.0));
        assert!(point_in_disc(v(6.0, 5.0), c, 3.0, 1.0));
    }
}
