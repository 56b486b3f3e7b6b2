//! Owning raster with image output.
//!
//! Provides the [`Canvas`] struct which owns the color buffer the demo scenes
//! and the wireframe renderer draw into, and knows how to encode it.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::framebuffer::FrameBuffer;
use super::pixel::PixelBuffer;
use crate::colors::{self, Color};
use crate::error::{Error, Result};

/// A `width * height` grid of [`Color`]s.
///
/// Row 0 is the bottom of the encoded image, so `y` grows upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    color_buffer: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// A canvas cleared to [`colors::BLACK`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Self {
            color_buffer: vec![colors::BLACK; size],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    /// Set a pixel, ignoring coordinates outside the canvas.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            let index = y as usize * self.width as usize + x as usize;
            self.color_buffer[index] = color;
        }
    }

    /// The color at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Row-major pixels, bottom row first.
    pub fn pixels(&self) -> &[Color] {
        &self.color_buffer
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.color_buffer.iter().filter(|&&c| c == color).count()
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_, Color> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Convert to an RGBA image with the origin moved to the top-left.
    pub fn to_image(&self) -> RgbaImage {
        let top = self.height - 1;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let row = (top - y) as usize;
            Rgba(self.color_buffer[row * self.width as usize + x as usize].to_rgba())
        })
    }

    /// Encode the canvas to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!(
            "writing {}x{} canvas to {}",
            self.width,
            self.height,
            path.display()
        );
        self.to_image().save(path)?;
        Ok(())
    }
}

impl PixelBuffer<Color> for Canvas {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color);
    }
}
