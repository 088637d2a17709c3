//! # Chroma-Gradient
//!
//! Color model and multi-stop gradient engine for design tooling.
//!
//! Colors live in a perceptual (LCh) or device-oriented (HSL) space, derive harmony
//! relationships by fixed hue offsets, and compose into ordered gradient stops that
//! can be written out as CSS, SVG or PNG, or driven through an animated renderer.
//!
//! ## Features
//!
//! - **Always-valid colors**: every write clamps scalars and wraps hue, nothing fails
//! - **Harmonies**: complementary, triad, analogous, split-complementary, tetradic, square
//! - **Sorted stops**: gradients keep stops ordered by location with a stable sort
//! - **Multiple Outputs**: CSS strings, SVG documents, PNG frames
//!
//! ## Quick Start
//!
//! ```rust
//! use chroma_gradient::prelude::*;
//!
//! let base = Lch::new(50.0, 100.0, 0.0);
//! let gradient = Gradient::from_analogous(&base);
//!
//! let hues: Vec<f64> = gradient.stops().iter().map(|s| s.color.hue()).collect();
//! assert_eq!(hues, vec![330.0, 0.0, 30.0]);
//!
//! let css = css::linear_gradient(&gradient, css::lch);
//! assert!(css.starts_with("linear-gradient(0deg, lch(50% 100 330 / 1) 0%"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize colors, stops and gradients
//! - `config`: YAML gradient descriptions
//! - `full`: All features enabled
//!
//! ## References
//!
//! - CIE 15:2004, *Colorimetry*, 3rd edition (L\*a\*b\* and LCh(ab)).
//! - IEC 61966-2-1:1999, *Default RGB colour space - sRGB*.
//! - Itten, J. (1961). *The Art of Color*. Reinhold (color harmonies).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types, color space conversions and harmonies.
pub mod color;

/// Geometric primitives (points).
pub mod geometry;

/// Multi-stop gradients with optional linear/radial geometry.
pub mod gradient;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Gradient sampling, rasterization and animation.
pub mod render;

/// Output adapters (CSS, SVG, PNG).
pub mod output;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML gradient descriptions.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chroma-gradient operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use chroma_gradient::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::color::{Harmony, Hsl, HueColor, Lch, Rgb8, RgbUnit, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::gradient::{Geometry, Gradient, Linear, Radial, Stop, StopInput};
    pub use crate::output::{css, PngEncoder, SvgEncoder, SvgFill};
    pub use crate::render::{AnimatedGradient, GradientSampler, Rasterizer};
}
