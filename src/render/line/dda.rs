use super::bresenham::normalize;
use super::LineRasterizer;
use crate::math::Point;
use crate::render::pixel::PixelBuffer;

/// Digital differential analyzer using floating-point interpolation.
///
/// After the same steep/direction normalization as Bresenham, each column's
/// row is found by interpolating between the endpoints and rounding. Ties round
/// away from zero, so a few pixels may differ from [`BresenhamRasterizer`].
///
/// [`BresenhamRasterizer`]: super::BresenhamRasterizer
#[derive(Clone, Copy, Debug, Default)]
pub struct DdaRasterizer;

impl DdaRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for DdaRasterizer {
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized,
    {
        let (steep, a, b) = normalize(a, b);
        let (ax, ay, bx, by) = (a.x, a.y, b.x, b.y);
        let dx = f64::from(bx) - f64::from(ax);
        let dy = f64::from(by) - f64::from(ay);

        for x in ax..=bx {
            // dx is zero only for a single point, where t must stay at 0
            let t = if dx == 0.0 {
                0.0
            } else {
                (f64::from(x) - f64::from(ax)) / dx
            };
            let y = (f64::from(ay) + dy * t).round() as i32;
            if steep {
                buffer.set(y, x, color);
            } else {
                buffer.set(x, y, color);
            }
        }
    }
}

/// Incremental line drawing with a floating-point error accumulator.
///
/// Adds the slope to the error every column and steps a row once it exceeds
/// half a pixel. This is Bresenham before the error is scaled to integers.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatErrorRasterizer;

impl FloatErrorRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for FloatErrorRasterizer {
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized,
    {
        let (steep, a, b) = normalize(a, b);
        let (ax, ay, bx, by) = (a.x, a.y, b.x, b.y);
        let dx = f64::from(bx) - f64::from(ax);
        let slope = if dx == 0.0 {
            0.0
        } else {
            (f64::from(by) - f64::from(ay)).abs() / dx
        };
        let y_step = if by > ay { 1 } else { -1 };

        let mut y = i64::from(ay);
        let mut error = 0.0;
        for x in ax..=bx {
            let row = y as i32;
            if steep {
                buffer.set(row, x, color);
            } else {
                buffer.set(x, row, color);
            }
            error += slope;
            if error > 0.5 {
                y += y_step;
                error -= 1.0;
            }
        }
    }
}
