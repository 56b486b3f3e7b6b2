use super::LineRasterizer;
use crate::math::Point;
use crate::render::pixel::PixelBuffer;

/// Samples the segment at evenly spaced parameter values and rounds.
///
/// The sample count is fixed regardless of length: long segments get gaps and
/// short ones set the same pixel repeatedly. `t` stops short of 1, so the far
/// endpoint is only reached when the sampling happens to round onto it.
#[derive(Clone, Copy, Debug)]
pub struct ParametricRasterizer {
    samples: u32,
}

impl ParametricRasterizer {
    pub const DEFAULT_SAMPLES: u32 = 50;

    pub fn new() -> Self {
        Self::with_samples(Self::DEFAULT_SAMPLES)
    }

    /// At least one sample is always taken.
    pub fn with_samples(samples: u32) -> Self {
        Self {
            samples: samples.max(1),
        }
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl Default for ParametricRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRasterizer for ParametricRasterizer {
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized,
    {
        let dx = f64::from(b.x) - f64::from(a.x);
        let dy = f64::from(b.y) - f64::from(a.y);
        for i in 0..self.samples {
            let t = f64::from(i) / f64::from(self.samples);
            let x = (f64::from(a.x) + dx * t).round() as i32;
            let y = (f64::from(a.y) + dy * t).round() as i32;
            buffer.set(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pixel::Trace;

    #[test]
    fn one_call_per_sample() {
        let mut t = Trace::new();
        ParametricRasterizer::with_samples(10).draw_line(
            Point::new(0, 0),
            Point::new(100, 0),
            &mut t,
            (),
        );
        assert_eq!(t.len(), 10);
        let xs: Vec<i32> = t.points().map(|p| p.x).collect();
        assert_eq!(xs, (0..10).map(|i| i * 10).collect::<Vec<_>>());
    }

    #[test]
    fn short_segment_repeats_pixels() {
        let mut t = Trace::new();
        ParametricRasterizer::new().draw_line(Point::new(0, 0), Point::new(2, 0), &mut t, ());
        assert_eq!(t.len(), 50);
        assert!(t.has_duplicates());
        assert_eq!(t.point_set().len(), 3);
    }

    #[test]
    fn zero_samples_clamped_to_one() {
        assert_eq!(ParametricRasterizer::with_samples(0).samples(), 1);
    }
}
