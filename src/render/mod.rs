//! Rasterization: the pixel boundary, line and triangle algorithms, and the
//! buffers they draw into.

pub mod canvas;
pub mod framebuffer;
pub mod line;
pub mod pixel;
pub mod triangle;

pub use canvas::Canvas;
pub use framebuffer::FrameBuffer;
pub use line::{
    draw_line, draw_segment, BranchlessRasterizer, BresenhamRasterizer, DdaRasterizer,
    FloatErrorRasterizer, LineAlgorithm, LineDispatcher, LineRasterizer, ParametricRasterizer,
};
pub use pixel::{PixelBuffer, Trace};
pub use triangle::{
    draw_triangle_outline, draw_triangle_sorted, draw_triangle_with, EdgeColors, Triangle,
};
