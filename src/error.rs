use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the Pythagoras tree renderer.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised when a construction or traversal parameter is unusable.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} must be finite")]
    NotFinite { parameter: &'static str },

    #[error("base angles {alpha1}° and {alpha2}° do not form a triangle")]
    DegenerateTriangle { alpha1: f64, alpha2: f64 },

    #[error("depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },
}

/// Errors raised while writing the canvas to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no raster format matches the extension of {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Convenience type alias for results using [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
