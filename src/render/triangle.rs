//! Triangle outline rasterization.
//!
//! Outlines are built from three line draws; nothing is filled.

use super::line::{draw_segment, LineRasterizer};
use super::pixel::PixelBuffer;
use crate::math::Point;

/// A triangle in integer screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { points: [a, b, c] }
    }

    /// The three edges A–B, B–C, C–A, in drawing order.
    pub fn edges(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
    }

    /// The same triangle with vertices ordered so that `y` is non-increasing.
    ///
    /// Uses a three-comparator sorting network (A/B, A/C, B/C) that swaps
    /// only on a strict comparison. Vertices with equal `y` end up in a
    /// deterministic order, which is not always their input order.
    pub fn sorted_by_y(&self) -> Self {
        let [mut a, mut b, mut c] = self.points;
        if a.y < b.y {
            std::mem::swap(&mut a, &mut b);
        }
        if a.y < c.y {
            std::mem::swap(&mut a, &mut c);
        }
        if b.y < c.y {
            std::mem::swap(&mut b, &mut c);
        }
        Self::new(a, b, c)
    }
}

impl From<[Point; 3]> for Triangle {
    fn from(points: [Point; 3]) -> Self {
        Self { points }
    }
}

/// One color per edge of an outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeColors<C> {
    pub ab: C,
    pub bc: C,
    pub ca: C,
}

impl<C: Copy> EdgeColors<C> {
    pub fn uniform(color: C) -> Self {
        Self {
            ab: color,
            bc: color,
            ca: color,
        }
    }
}

/// Draws the edges A–B, B–C and C–A, in that order, with Bresenham lines.
///
/// The pixel set is the union of the three edges. Zero-area triangles come out
/// as overlapping lines; a triangle whose vertices coincide is a single pixel
/// set three times.
pub fn draw_triangle_outline<C, B>(a: Point, b: Point, c: Point, buffer: &mut B, color: C)
where
    C: Copy,
    B: PixelBuffer<C> + ?Sized,
{
    draw_segment(a, b, buffer, color);
    draw_segment(b, c, buffer, color);
    draw_segment(c, a, buffer, color);
}

/// Sorts the vertices by descending `y`, then outlines A–B, B–C, C–A with
/// the matching edge colors.
///
/// After sorting, C–A spans the full height of the triangle, which lets it be
/// told apart from the two shorter edges when colored differently. The pixel
/// set is the same as [`draw_triangle_outline`].
pub fn draw_triangle_sorted<C, B>(
    a: Point,
    b: Point,
    c: Point,
    buffer: &mut B,
    colors: EdgeColors<C>,
) where
    C: Copy,
    B: PixelBuffer<C> + ?Sized,
{
    let [a, b, c] = Triangle::new(a, b, c).sorted_by_y().points;
    draw_segment(a, b, buffer, colors.ab);
    draw_segment(b, c, buffer, colors.bc);
    draw_segment(c, a, buffer, colors.ca);
}

/// Outlines a triangle with any [`LineRasterizer`].
pub fn draw_triangle_with<R, C, B>(rasterizer: &R, triangle: &Triangle, buffer: &mut B, color: C)
where
    R: LineRasterizer + ?Sized,
    C: Copy,
    B: PixelBuffer<C> + ?Sized,
{
    for (from, to) in triangle.edges() {
        rasterizer.draw_line(from, to, buffer, color);
    }
}
