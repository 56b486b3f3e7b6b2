//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a bounds-checked view over a flat slice of pixels.

use super::pixel::PixelBuffer;

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass a buffer + dimensions together.
///
/// Row `y` starts at index `y * width`. Writes outside the buffer are dropped.
pub struct FrameBuffer<'a, C> {
    color_buffer: &'a mut [C],
    width: u32,
    height: u32,
}

impl<'a, C: Copy> FrameBuffer<'a, C> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [C], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: C) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<C> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }
}

impl<C: Copy> PixelBuffer<C> for FrameBuffer<'_, C> {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: C) {
        self.set_pixel(x, y, color);
    }
}
