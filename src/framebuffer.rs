//! Render target for gradient rasterization.
//!
//! A row-padded RGBA pixel buffer. Row strides are rounded up to 64 bytes so each
//! row starts on a SIMD-friendly boundary; whole-frame blending and luminance
//! reductions go through trueno vectors.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::{Backend, Vector};

/// Row alignment in bytes (AVX-512 width).
const ROW_ALIGNMENT: usize = 64;

/// RGBA pixel buffer in row-major order.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// `[R, G, B, A]` per pixel, rows padded to `stride` bytes.
    pixels: Vec<u8>,
    stride: usize,
}

impl Framebuffer {
    /// Create a transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_gradient::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(320, 200).unwrap();
    /// assert_eq!(fb.width(), 320);
    /// assert_eq!(fb.height(), 200);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = row_bytes.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT;

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row width in bytes, including padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw pixel data, padding included.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of pixels without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// One mutable row of pixels without padding.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&mut self.pixels[start..end])
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for y in 0..self.height {
            if let Some(row) = self.row_mut(y) {
                for chunk in row.chunks_exact_mut(4) {
                    chunk.copy_from_slice(&rgba);
                }
            }
        }
    }

    /// Color at `(x, y)`, or `None` out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Overwrite the color at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Mix `other` into this buffer: `out = other * alpha + self * (1 - alpha)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffers have different dimensions, or if a
    /// row fails to blend.
    pub fn blend_over(&mut self, other: &Framebuffer, alpha: f32) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::InvalidDimensions {
                width: other.width,
                height: other.height,
            });
        }

        let alpha = alpha.clamp(0.0, 1.0);
        let row_bytes = (self.width as usize) * 4;

        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            let mixed = mix_row(
                &self.pixels[start..start + row_bytes],
                &other.pixels[start..start + row_bytes],
                alpha,
            )?;
            self.pixels[start..start + row_bytes].copy_from_slice(&mixed);
        }

        Ok(())
    }

    /// Returns `(min, max, mean)` BT.709 luminance over all pixels.
    #[must_use]
    pub fn luminance_stats(&self) -> (f32, f32, f32) {
        let mut luminances = Vec::with_capacity(self.pixel_count());

        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                luminances.extend(row.chunks_exact(4).map(|px| {
                    0.2126 * f32::from(px[0]) + 0.7152 * f32::from(px[1]) + 0.0722 * f32::from(px[2])
                }));
            }
        }

        let vec = Vector::from_vec(luminances);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(255.0);
        let mean = vec.mean().unwrap_or(127.5);

        (min, max, mean)
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Pixels without row padding, as PNG encoders expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// SIMD backend trueno selected for this machine.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }
}

/// `src * alpha + dst * (1 - alpha)` over one row of bytes.
fn mix_row(dst: &[u8], src: &[u8], alpha: f32) -> Result<Vec<u8>> {
    let dst = Vector::from_vec(dst.iter().map(|&b| f32::from(b)).collect());
    let src = Vector::from_vec(src.iter().map(|&b| f32::from(b)).collect());

    let src_scaled = src.mul(&Vector::from_vec(vec![alpha; src.len()]))?;
    let dst_scaled = dst.mul(&Vector::from_vec(vec![1.0 - alpha; dst.len()]))?;
    let mixed = src_scaled.add(&dst_scaled)?;

    Ok(mixed
        .as_slice()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect())
}
