//! Gradient rendering.
//!
//! Turns a [`Gradient`](crate::gradient::Gradient) into pixels.
//!
//! - [`GradientSampler`]: piecewise-linear color lookup along the stop range
//! - [`Rasterizer`]: fills a framebuffer following the gradient's geometry
//! - [`AnimatedGradient`]: CPU rendition of the noise-warp shader, with a
//!   palette drawn from the gradient's stops
//!
//! # References
//!
//! - Quilez, I. (2014). "Gradient Noise." <https://iquilezles.org/articles/gradientnoise/>

mod animated;
mod rasterizer;
mod sampler;

pub use animated::{crossfade, AnimatedGradient, PALETTE_SIZE};
pub use rasterizer::Rasterizer;
pub use sampler::GradientSampler;
