//! Line rasterization algorithms.
//!
//! [`draw_line`] is the production path: integer-only Bresenham. The other
//! implementations are earlier refinements of the same idea, kept behind the
//! [`LineRasterizer`] trait so they can be swapped at runtime and benchmarked.
//!
//! Available algorithms:
//! - [`ParametricRasterizer`]: fixed-count parameter sampling
//! - [`DdaRasterizer`]: per-column floating-point interpolation
//! - [`FloatErrorRasterizer`]: floating-point error accumulation
//! - [`BresenhamRasterizer`]: integer error accumulation (default)
//! - [`BranchlessRasterizer`]: Bresenham with an arithmetic row step

mod bresenham;
mod dda;
mod parametric;

pub use bresenham::{draw_line, draw_segment, BranchlessRasterizer, BresenhamRasterizer};
pub use dda::{DdaRasterizer, FloatErrorRasterizer};
pub use parametric::ParametricRasterizer;

use std::fmt;
use std::str::FromStr;

use super::pixel::PixelBuffer;
use crate::error::Error;
use crate::math::Point;

/// Trait for line rasterization algorithms.
///
/// Implementors convert a segment between two integer endpoints into
/// `set` calls on a pixel buffer. The color is passed through untouched.
pub trait LineRasterizer {
    /// Rasterize the segment from `a` to `b` into the buffer.
    ///
    /// # Arguments
    /// * `a` - First endpoint
    /// * `b` - Second endpoint
    /// * `buffer` - Pixel buffer receiving one `set` call per emitted pixel
    /// * `color` - Color forwarded to every `set` call
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized;
}

/// Available line algorithms.
///
/// Use this enum to select which algorithm an [`Engine`] draws with.
///
/// [`Engine`]: crate::Engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    Parametric,
    Dda,
    FloatError,
    #[default]
    Bresenham,
    Branchless,
}

impl LineAlgorithm {
    pub const ALL: [LineAlgorithm; 5] = [
        LineAlgorithm::Parametric,
        LineAlgorithm::Dda,
        LineAlgorithm::FloatError,
        LineAlgorithm::Bresenham,
        LineAlgorithm::Branchless,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LineAlgorithm::Parametric => "parametric",
            LineAlgorithm::Dda => "dda",
            LineAlgorithm::FloatError => "float-error",
            LineAlgorithm::Bresenham => "bresenham",
            LineAlgorithm::Branchless => "branchless",
        }
    }

    /// Whether the algorithm sets exactly one pixel per step of the major axis.
    pub fn is_gap_free(self) -> bool {
        !matches!(self, LineAlgorithm::Parametric)
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LineAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Holds every line implementation and forwards to the active one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDispatcher {
    parametric: ParametricRasterizer,
    dda: DdaRasterizer,
    float_error: FloatErrorRasterizer,
    bresenham: BresenhamRasterizer,
    branchless: BranchlessRasterizer,
    active: LineAlgorithm,
}

impl LineDispatcher {
    pub fn new(algorithm: LineAlgorithm) -> Self {
        Self {
            active: algorithm,
            ..Self::default()
        }
    }

    pub fn set_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.active = algorithm;
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.active
    }
}

impl LineRasterizer for LineDispatcher {
    #[inline]
    fn draw_line<C, B>(&self, a: Point, b: Point, buffer: &mut B, color: C)
    where
        C: Copy,
        B: PixelBuffer<C> + ?Sized,
    {
        match self.active {
            LineAlgorithm::Parametric => self.parametric.draw_line(a, b, buffer, color),
            LineAlgorithm::Dda => self.dda.draw_line(a, b, buffer, color),
            LineAlgorithm::FloatError => self.float_error.draw_line(a, b, buffer, color),
            LineAlgorithm::Bresenham => self.bresenham.draw_line(a, b, buffer, color),
            LineAlgorithm::Branchless => self.branchless.draw_line(a, b, buffer, color),
        }
    }
}
