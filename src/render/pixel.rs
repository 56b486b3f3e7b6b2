//! The pixel-set boundary between the rasterizers and whatever stores pixels.

use std::collections::HashSet;

use crate::math::Point;

/// A destination for rasterized pixels.
///
/// The rasterizers only ever call [`set`](PixelBuffer::set); bounds policy
/// belongs to the implementor. Coordinates outside the buffer may be issued
/// for primitives that extend past its edges.
pub trait PixelBuffer<C> {
    fn set(&mut self, x: i32, y: i32, color: C);
}

impl<C, B: PixelBuffer<C> + ?Sized> PixelBuffer<C> for &mut B {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: C) {
        (**self).set(x, y, color);
    }
}

/// Records every `set` call in emission order.
///
/// Nothing is clipped, which makes it useful for inspecting exactly what a
/// rasterizer produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace<C> {
    pixels: Vec<(Point, C)>,
}

impl<C> Trace<C> {
    pub fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Every recorded call, in order.
    pub fn pixels(&self) -> &[(Point, C)] {
        &self.pixels
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.pixels.iter().map(|(p, _)| *p)
    }

    /// The distinct coordinates touched, ignoring order and color.
    pub fn point_set(&self) -> HashSet<Point> {
        self.points().collect()
    }

    /// Whether any coordinate was set more than once.
    pub fn has_duplicates(&self) -> bool {
        self.point_set().len() != self.pixels.len()
    }
}

impl<C> PixelBuffer<C> for Trace<C> {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: C) {
        self.pixels.push((Point::new(x, y), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_records_in_order() {
        let mut trace = Trace::new();
        trace.set(1, 2, 'a');
        trace.set(-3, 4, 'b');
        assert_eq!(
            trace.pixels(),
            &[(Point::new(1, 2), 'a'), (Point::new(-3, 4), 'b')]
        );
        assert!(!trace.has_duplicates());
    }

    #[test]
    fn trace_detects_duplicates() {
        let mut trace = Trace::new();
        trace.set(0, 0, ());
        trace.set(0, 0, ());
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.point_set().len(), 1);
        assert!(trace.has_duplicates());
    }

    #[test]
    fn mutable_reference_forwards() {
        fn plot<B: PixelBuffer<u8>>(mut buffer: B) {
            buffer.set(5, 6, 7);
        }
        let mut trace = Trace::new();
        plot(&mut trace);
        assert_eq!(trace.pixels(), &[(Point::new(5, 6), 7)]);
    }
}
