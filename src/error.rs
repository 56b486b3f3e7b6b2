//! Error types for the collaborators around the rasterizer.
//!
//! The line and triangle rasterizers never fail. Errors only come from
//! allocating canvases, encoding images and loading meshes.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),

    /// A canvas must be at least one pixel in each direction.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unknown line algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("face {face} references vertex {index}, but the model has {vertex_count} vertices")]
    InvalidFace {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}
