//! Gradient rasterization into a framebuffer.

use super::GradientSampler;
use crate::color::HueColor;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::gradient::{Geometry, Gradient, Linear, Radial};

/// Fills framebuffers with gradients.
///
/// Geometry coordinates are in pixels, origin top-left. Each pixel is sampled
/// at its center.
///
/// # Example
///
/// ```
/// use chroma_gradient::prelude::*;
///
/// let gradient = Gradient::new(vec![Hsl::new(0.0, 0.0, 0.0), Hsl::new(0.0, 0.0, 100.0)]);
/// let fb = Rasterizer::new(64, 8).render(&gradient).unwrap();
///
/// assert_eq!(fb.get_pixel(0, 0).unwrap().r, 2);
/// assert_eq!(fb.get_pixel(63, 7).unwrap().r, 253);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rasterizer {
    width: u32,
    height: u32,
}

/// Maps a pixel center to a gradient position.
enum Projection {
    Horizontal { width: f64 },
    Axis { origin: Point, direction: Point, inv_len2: f64 },
    Radial { center: Point, radius: f64 },
}

impl Projection {
    fn for_gradient(geometry: Option<&Geometry>, width: u32, height: u32) -> Self {
        match geometry {
            None => Self::Horizontal {
                width: f64::from(width),
            },
            Some(Geometry::Linear(linear)) => Self::linear(linear, width, height),
            Some(Geometry::Radial(Radial { center, radius })) => Self::Radial {
                center: *center,
                radius: *radius,
            },
        }
    }

    fn linear(linear: &Linear, width: u32, height: u32) -> Self {
        let direction = Point::new(linear.width(), linear.height());
        let len2 = direction.dot(direction);
        if len2 > f64::EPSILON && len2.is_finite() {
            return Self::Axis {
                origin: linear.start,
                direction,
                inv_len2: len2.recip(),
            };
        }

        // Degenerate segment: follow the angle across the whole frame, CSS-style
        // (0deg points up, 90deg points right).
        tracing::debug!(angle = linear.angle(), "degenerate linear segment, using angle");
        let (w, h) = (f64::from(width), f64::from(height));
        let radians = linear.angle().to_radians();
        let unit = Point::new(radians.sin(), -radians.cos());
        let span = (w * unit.x).abs() + (h * unit.y).abs();
        let center = Point::new(w / 2.0, h / 2.0);
        let direction = Point::new(unit.x * span, unit.y * span);

        Self::Axis {
            origin: center.translate(-direction.x / 2.0, -direction.y / 2.0),
            direction,
            inv_len2: (span * span).recip(),
        }
    }

    fn position(&self, pixel: Point) -> f32 {
        let t = match *self {
            Self::Horizontal { width } => pixel.x / width,
            Self::Axis {
                origin,
                direction,
                inv_len2,
            } => pixel.translate(-origin.x, -origin.y).dot(direction) * inv_len2,
            Self::Radial { center, radius } => {
                if radius > 0.0 {
                    pixel.distance(center) / radius
                } else {
                    f64::INFINITY
                }
            }
        };
        t as f32
    }
}

impl Rasterizer {
    /// Create a rasterizer producing `width` x `height` frames.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Output width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Render `gradient` into a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] if the gradient has no usable stops, or
    /// [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn render<C: HueColor>(&self, gradient: &Gradient<C>) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        self.render_into(gradient, &mut fb)?;
        Ok(fb)
    }

    /// Render `gradient` over the whole of `fb`, using `fb`'s dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGradient`] if the gradient has no usable stops.
    pub fn render_into<C: HueColor>(&self, gradient: &Gradient<C>, fb: &mut Framebuffer) -> Result<()> {
        let sampler = GradientSampler::new(gradient);
        if sampler.is_empty() {
            return Err(Error::EmptyGradient);
        }

        let projection = Projection::for_gradient(gradient.geometry(), fb.width(), fb.height());

        for y in 0..fb.height() {
            let py = f64::from(y) + 0.5;
            if let Some(row) = fb.row_mut(y) {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let pixel = Point::new(x as f64 + 0.5, py);
                    px.copy_from_slice(&sampler.sample(projection.position(pixel)).to_array());
                }
            }
        }

        tracing::trace!(
            width = fb.width(),
            height = fb.height(),
            stops = sampler.len(),
            "gradient rasterized"
        );
        Ok(())
    }
}

impl batuta_common::display::WithDimensions for Rasterizer {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
