use std::mem::swap;

use super::LineRasterizer;
use crate::math::Point;
use crate::render::pixel::PixelBuffer;

/// Draws a line between two points using Bresenham's line algorithm.
///
/// Only integer arithmetic is used. Steep lines are transposed so the loop
/// always runs along the axis with the larger extent, and the endpoints are
/// ordered left to right so the same pixels are produced whichever endpoint
/// comes first.
///
/// The error term holds the vertical drift of the ideal line from the current
/// row, scaled by `2 * dx`. Once it passes half a pixel (`dx`) we step one row
/// towards the far endpoint and pay back a whole pixel (`2 * dx`).
///
/// Exactly `max(|dx|, |dy|) + 1` pixels are set, each once. A zero-length
/// segment sets a single pixel.
#[inline]
pub fn draw_line<C, B>(ax: i32, ay: i32, bx: i32, by: i32, buffer: &mut B, color: C)
where
    C: Copy,
    B: PixelBuffer<C> + ?Sized,
{
    let (steep, a, b) = normalize(Point::new(ax, ay), Point::new(bx, by));
    let (ax, ay, bx, by) = (a.x, a.y, b.x, b.y);

    // Widened so extreme i32 endpoints can't overflow the doubled extents.
    let dx = i64::from(bx) - i64::from(ax);
    let dy = (i64::from(by) - i64::from(ay)).abs();
    let y_step = if by > ay { 1 } else { -1 };

    let mut y = i64::from(ay);
    let mut error = 0i64;
    for x in ax..=bx {
        // y never leaves [ay, by] while pixels are still being emitted
        let row = y as i32;
        if steep {
            buffer.set(row, x, color);
        } else {
            buffer.set(x, row, color);
        }
        error += 2 * dy;
        if error > dx {
            y += y_step;
            error -= 2 * dx;
        }
    }
}

/// [`draw_line`] taking [`Point`] endpoints.
#[inline]
pub fn draw_segment<C, B>(a: Point, b: Point, buffer: &mut B, color: C)
where
    C: Copy,
    B: PixelBuffer<C> + ?Sized,
{
    draw_line(a.x, a.y, b.x, b.y, buffer, color);
}

/// Transpose steep segments and order the endpoints left to right.
///
/// Returns the steep flag followed by the normalized endpoints.
#[inline]
pub(super) fn normalize(a: Point, b: Point) -> (bool, Point, Point) {
    let width = (i64::from(a.x) - i64::from(b.x)).abs();
    let height = (i64::from(a.y) - i64::from(b.y)).abs();
    let steep = width < height;
    let (mut a, mut b) = if steep {
        (a.transposed(), b.transposed())
    } else {
        (a, b)
    };
    if a.x > b.x {
        swap(&mut a, &mut b);
    }
    (steep, a, b)
}

/// The production line rasterizer, see [`draw_line`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BresenhamRasterizer;

impl BresenhamRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for BresenhamRasterizer {
    #[inline]
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized,
    {
        draw_segment(a, b, buffer, color);
    }
}

/// Bresenham with the row step folded into arithmetic instead of a branch.
///
/// Produces exactly the same pixels as [`BresenhamRasterizer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchlessRasterizer;

impl BranchlessRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for BranchlessRasterizer {
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized,
    {
        let (steep, a, b) = normalize(a, b);
        let (ax, ay, bx, by) = (a.x, a.y, b.x, b.y);

        let dx = i64::from(bx) - i64::from(ax);
        let dy = (i64::from(by) - i64::from(ay)).abs();
        let y_step = if by > ay { 1 } else { -1 };

        let mut y = i64::from(ay);
        let mut error = 0i64;
        for x in ax..=bx {
            let row = y as i32;
            if steep {
                buffer.set(row, x, color);
            } else {
                buffer.set(x, row, color);
            }
            error += 2 * dy;
            let overshoot = i64::from(error > dx);
            y += y_step * overshoot;
            error -= 2 * dx * overshoot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pixel::Trace;
    use std::collections::HashSet;

    fn trace(ax: i32, ay: i32, bx: i32, by: i32) -> Trace<()> {
        let mut trace = Trace::new();
        draw_line(ax, ay, bx, by, &mut trace, ());
        trace
    }

    fn points(coords: &[(i32, i32)]) -> HashSet<Point> {
        coords.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn single_point_sets_one_pixel() {
        let t = trace(4, -9, 4, -9);
        assert_eq!(t.pixels(), &[(Point::new(4, -9), ())]);
    }

    #[test]
    fn horizontal_line_covers_every_column() {
        let expected: HashSet<Point> = (2..=9).map(|x| Point::new(x, 5)).collect();
        assert_eq!(trace(2, 5, 9, 5).point_set(), expected);
        assert_eq!(trace(9, 5, 2, 5).point_set(), expected);
    }

    #[test]
    fn vertical_line_covers_every_row() {
        let t = trace(3, 8, 3, -2);
        let expected: HashSet<Point> = (-2..=8).map(|y| Point::new(3, y)).collect();
        assert_eq!(t.len(), 11);
        assert_eq!(t.point_set(), expected);
    }

    #[test]
    fn diagonal_line_is_exact() {
        let expected = points(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
        let t = trace(0, 0, 5, 5);
        assert_eq!(t.len(), 6);
        assert_eq!(t.point_set(), expected);
    }

    #[test]
    fn anti_diagonal_line_is_exact() {
        let expected = points(&[(0, 3), (1, 2), (2, 1), (3, 0)]);
        assert_eq!(trace(0, 3, 3, 0).point_set(), expected);
        assert_eq!(trace(3, 0, 0, 3).point_set(), expected);
    }

    #[test]
    fn steep_line_sets_one_pixel_per_row() {
        let t = trace(0, 0, 1, 10);
        assert_eq!(t.len(), 11);
        assert!(!t.has_duplicates());

        let mut by_row: Vec<Point> = t.points().collect();
        by_row.sort_by_key(|p| p.y);
        let rows: Vec<i32> = by_row.iter().map(|p| p.y).collect();
        assert_eq!(rows, (0..=10).collect::<Vec<_>>());
        assert!(by_row.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn shallow_line_steps_at_half_pixel() {
        // error reaches exactly dx on the first column, so no step there yet
        let expected = points(&[(0, 0), (1, 0), (2, 1)]);
        assert_eq!(trace(0, 0, 2, 1).point_set(), expected);
    }

    #[test]
    fn reference_segment_spans_rows_3_to_37() {
        let t = trace(7, 3, 12, 37);
        assert_eq!(t.len(), 35);
        assert!(!t.has_duplicates());

        let ys: Vec<i32> = t.points().map(|p| p.y).collect();
        assert_eq!(ys, (3..=37).collect::<Vec<_>>());
        let xs: Vec<i32> = t.points().map(|p| p.x).collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(xs.first(), Some(&7));
        assert_eq!(xs.last(), Some(&12));
    }

    #[test]
    fn color_is_forwarded_unchanged() {
        let mut t = Trace::new();
        draw_line(0, 0, 3, 1, &mut t, [9u8, 8, 7, 6]);
        assert!(t.pixels().iter().all(|(_, c)| *c == [9, 8, 7, 6]));
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let mut t = Trace::new();
        draw_line(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 1, &mut t, ());
        assert_eq!(t.len(), 3);
        assert!(t.point_set().contains(&Point::new(i32::MAX, i32::MIN + 1)));
    }

    #[test]
    fn normalize_transposes_steep_and_orders_left_to_right() {
        let (steep, a, b) = normalize(Point::new(12, 37), Point::new(7, 3));
        assert!(steep);
        assert_eq!((a, b), (Point::new(3, 7), Point::new(37, 12)));

        let (steep, a, b) = normalize(Point::new(9, 1), Point::new(2, 4));
        assert!(!steep);
        assert_eq!((a, b), (Point::new(2, 4), Point::new(9, 1)));
    }

    #[test]
    fn branchless_matches_on_reference_segment() {
        let mut expected = Trace::new();
        let mut actual = Trace::new();
        let (a, b) = (Point::new(7, 3), Point::new(12, 37));
        BresenhamRasterizer.draw_line(a, b, &mut expected, ());
        BranchlessRasterizer.draw_line(a, b, &mut actual, ());
        assert_eq!(expected, actual);
    }
}
