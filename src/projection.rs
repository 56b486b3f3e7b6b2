//! Orthographic projection from model space to canvas pixels.
//!
//! Model coordinates in `[-1, 1]` on x and y are stretched over the canvas;
//! depth is discarded.

use crate::math::{Point, Vec3};

/// Orthographic projection onto a `width * height` canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orthographic {
    width: u32,
    height: u32,
}

impl Orthographic {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The unrounded canvas position of `v`.
    pub fn screen_position(&self, v: Vec3) -> (f32, f32) {
        (
            (v.x + 1.0) * self.width as f32 / 2.0,
            (v.y + 1.0) * self.height as f32 / 2.0,
        )
    }

    /// The pixel `v` lands on, truncating toward zero.
    pub fn project(&self, v: Vec3) -> Point {
        let (x, y) = self.screen_position(v);
        Point::new(x as i32, y as i32)
    }
}

/// Shorthand for [`Orthographic::project`].
pub fn project_orthographic(v: Vec3, width: u32, height: u32) -> Point {
    Orthographic::new(width, height).project(v)
}
