//! An integer-only line and triangle outline rasterizer.
//!
//! The core is two functions: [`draw_line`], a Bresenham line that sets each
//! pixel of a segment exactly once, and [`draw_triangle_outline`], which
//! outlines a triangle with three of those lines. Both write through the
//! [`PixelBuffer`] trait and never interpret the color they are given.
//!
//! Around the core sit a [`Canvas`] that can be saved as an image, an OBJ
//! [`Model`] loader, an orthographic projection and a wireframe [`Engine`].
//!
//! # Quick Start
//!
//! ```
//! use edgeraster::prelude::*;
//!
//! let mut pixels = Trace::new();
//! draw_line(0, 0, 5, 5, &mut pixels, WHITE);
//! assert_eq!(pixels.len(), 6);
//! ```

pub mod colors;
pub mod engine;
pub mod error;
pub mod math;
pub mod model;
pub mod projection;
pub mod render;
pub mod scenes;

pub use colors::Color;
pub use engine::Engine;
pub use error::{Error, Result};
pub use math::{Point, Vec3};
pub use model::{Face, Model};
pub use projection::{project_orthographic, Orthographic};
pub use render::{
    draw_line, draw_segment, draw_triangle_outline, draw_triangle_sorted, Canvas, EdgeColors,
    LineAlgorithm, PixelBuffer, Triangle,
};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use edgeraster::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use crate::render::{
        draw_line, draw_segment, draw_triangle_outline, draw_triangle_sorted, EdgeColors,
        PixelBuffer, Trace, Triangle,
    };

    // Buffers
    pub use crate::render::{Canvas, FrameBuffer};

    // Line algorithms
    pub use crate::render::{LineAlgorithm, LineDispatcher, LineRasterizer};

    // Colors
    pub use crate::colors::{Color, BLACK, BLUE, GREEN, RED, WHITE, YELLOW};

    // Math
    pub use crate::math::{Point, Vec3};

    // Models
    pub use crate::engine::Engine;
    pub use crate::model::{Face, Model};
    pub use crate::projection::Orthographic;
}

/// Module exposing every line implementation for benchmarking.
pub mod bench {
    pub use crate::render::{
        BranchlessRasterizer, BresenhamRasterizer, DdaRasterizer, FloatErrorRasterizer,
        FrameBuffer, LineRasterizer, ParametricRasterizer,
    };
}
