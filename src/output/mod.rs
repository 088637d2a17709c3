//! Output adapters (CSS, SVG, PNG).

pub mod css;
mod png_encoder;
mod svg;

pub use png_encoder::PngEncoder;
pub use svg::{SvgEncoder, SvgFill};
