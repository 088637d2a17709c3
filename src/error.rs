//! Error types for chroma-gradient operations.
//!
//! The color and gradient models never fail: out-of-range input is normalized.
//! Errors only come from the adapters around them (encoding, files, configuration).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chroma-gradient operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// SIMD compute error from trueno.
    #[error("Compute error: {0}")]
    Compute(#[from] trueno::TruenoError),

    /// Invalid dimensions for a framebuffer or render target.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A gradient without stops was handed to a renderer.
    #[error("Gradient has no stops to render")]
    EmptyGradient,

    /// Harmony name not recognized.
    #[error("Unknown harmony: {0}")]
    UnknownHarmony(String),

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// A configured stop uses a different color space than the base color.
    #[error("Stop {index} is {found}, but the base color is {expected}")]
    MixedColorSpaces {
        /// Index of the offending stop.
        index: usize,
        /// Space of the base color.
        expected: &'static str,
        /// Space of the offending stop.
        found: &'static str,
    },
}
