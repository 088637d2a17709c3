//! Animated noise-warp gradient, evaluated per pixel on the CPU.
//!
//! Each frame rotates the canvas by an angle driven by gradient noise, warps it
//! with two sine waves, then blends two layered color ramps. The six ramp colors
//! come from the gradient, sampled at evenly spaced positions.
//!
//! Time is supplied by the caller in seconds; nothing here reads a clock.

use super::GradientSampler;
use crate::color::{HueColor, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::gradient::Gradient;

type Rgb = [f32; 3];

/// Palette slots, in the order layers reference them.
const RED: usize = 0;
const YELLOW: usize = 1;
const WHITE: usize = 2;
const PURPLE: usize = 3;
const GREEN: usize = 4;
const BLUE: usize = 5;

/// Number of palette colors a frame draws from.
pub const PALETTE_SIZE: usize = 6;

/// Palette used when the gradient has no stops.
const CLASSIC_PALETTE: [Rgb; PALETTE_SIZE] = [
    [0.914, 0.345, 0.62],
    [1.0, 0.973, 0.325],
    [1.0, 1.0, 1.0],
    [0.792, 0.573, 0.871],
    [0.612, 0.91, 0.364],
    [0.42, 0.773, 0.937],
];

const WAVE_FREQUENCY: f32 = 2.0;
const WAVE_AMPLITUDE: f32 = 30.0;
const WAVE_SPEED: f32 = 4.0;
const NOISE_SPEED: f32 = 0.1;

/// Animated gradient renderer.
///
/// # Example
///
/// ```
/// use chroma_gradient::prelude::*;
///
/// let gradient = Gradient::from_triad(&Lch::new(60.0, 70.0, 20.0));
/// let animated = AnimatedGradient::new(&gradient, 32, 24);
///
/// let frame = animated.render_frame(1.5).unwrap();
/// assert_eq!((frame.width(), frame.height()), (32, 24));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedGradient {
    palette: [Rgb; PALETTE_SIZE],
    width: u32,
    height: u32,
}

impl AnimatedGradient {
    /// Create a renderer with a palette taken from `gradient`.
    #[must_use]
    pub fn new<C: HueColor>(gradient: &Gradient<C>, width: u32, height: u32) -> Self {
        let mut animated = Self {
            palette: CLASSIC_PALETTE,
            width,
            height,
        };
        animated.set_gradient(gradient);
        animated
    }

    /// Re-sample the palette from `gradient`.
    ///
    /// A gradient without stops restores the built-in pink/yellow/blue palette.
    pub fn set_gradient<C: HueColor>(&mut self, gradient: &Gradient<C>) {
        let sampler = GradientSampler::new(gradient);
        if sampler.is_empty() {
            tracing::debug!("empty gradient, using built-in animation palette");
            self.palette = CLASSIC_PALETTE;
            return;
        }

        for (slot, color) in self.palette.iter_mut().zip(sampler.palette(PALETTE_SIZE)) {
            *slot = [color.r, color.g, color.b].map(|c| f32::from(c) / 255.0);
        }
    }

    /// The palette as display colors.
    #[must_use]
    pub fn palette(&self) -> [Rgba; PALETTE_SIZE] {
        self.palette.map(to_rgba)
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Render the frame at `time` seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension is zero.
    pub fn render_frame(&self, time: f64) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        let time = time as f32;
        let (w, h) = (self.width as f32, self.height as f32);

        for y in 0..self.height {
            // Shader coordinates grow upwards.
            let v = (h - y as f32 - 0.5) / h;
            if let Some(row) = fb.row_mut(y) {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let u = (x as f32 + 0.5) / w;
                    let color = self.shade(u, v, w / h, time);
                    px.copy_from_slice(&to_rgba(color).to_array());
                }
            }
        }

        tracing::trace!(time, width = self.width, height = self.height, "animated frame rendered");
        Ok(fb)
    }

    /// Color at normalized canvas position `(u, v)`, `v` pointing up.
    fn shade(&self, u: f32, v: f32, ratio: f32, time: f32) -> Rgb {
        let mut tuv = [u - 0.5, v - 0.5];

        let degree = noise([time * NOISE_SPEED, tuv[0] * tuv[1]]);

        tuv[1] /= ratio;
        tuv = rotate(tuv, ((degree - 0.5) * 720.0 + 75.0).to_radians());
        tuv[1] *= ratio;

        let speed = time * WAVE_SPEED;
        tuv[0] += (tuv[1] * WAVE_FREQUENCY + speed).sin() / WAVE_AMPLITUDE;
        tuv[1] += (tuv[0] * WAVE_FREQUENCY * 1.5 + speed).sin() / (WAVE_AMPLITUDE * 0.5);

        let p = &self.palette;
        let x = rotate(tuv, (-5.0_f32).to_radians())[0];

        let mut layer1 = mix(p[RED], p[YELLOW], smoothstep(-0.6, 0.2, x));
        layer1 = mix(layer1, p[WHITE], smoothstep(-0.6, 0.2, x));
        layer1 = mix(layer1, p[PURPLE], smoothstep(-0.2, 0.6, x));

        let mut layer2 = mix(p[RED], p[YELLOW], smoothstep(-0.8, 0.2, x));
        layer2 = mix(layer2, p[GREEN], smoothstep(-0.1, 0.9, x));
        layer2 = mix(layer2, p[BLUE], smoothstep(-0.5, 0.5, x));

        mix(layer1, layer2, smoothstep(0.7, -0.5, tuv[1]))
    }
}

impl batuta_common::display::WithDimensions for AnimatedGradient {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// Blend two frames: `t = 0` gives `from`, `t = 1` gives `to`.
///
/// # Errors
///
/// Returns an error if the frames have different dimensions.
pub fn crossfade(from: &Framebuffer, to: &Framebuffer, t: f32) -> Result<Framebuffer> {
    let mut out = from.clone();
    out.blend_over(to, t)?;
    Ok(out)
}

fn to_rgba(color: Rgb) -> Rgba {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Rgba::rgb(r, g, b)
}

/// Row-vector rotation, `v * Rot(a)`.
fn rotate([x, y]: [f32; 2], angle: f32) -> [f32; 2] {
    let (s, c) = angle.sin_cos();
    [c * x - s * y, s * x + c * y]
}

fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

/// Hermite step; a reversed edge pair yields a falling step.
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

fn hash([x, y]: [f32; 2]) -> [f32; 2] {
    let p = [x * 2127.1 + y * 81.17, x * 1269.5 + y * 283.37];
    p.map(|v| fract(v.sin() * 43_758.547))
}

/// 2D gradient noise in `[0, 1]`.
fn noise(p: [f32; 2]) -> f32 {
    let i = [p[0].floor(), p[1].floor()];
    let f = [fract(p[0]), fract(p[1])];
    let u = f.map(|v| v * v * (3.0 - 2.0 * v));

    let corner = |dx: f32, dy: f32| {
        let g = hash([i[0] + dx, i[1] + dy]).map(|h| -1.0 + 2.0 * h);
        g[0] * (f[0] - dx) + g[1] * (f[1] - dy)
    };
    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

    let n = lerp(
        lerp(corner(0.0, 0.0), corner(1.0, 0.0), u[0]),
        lerp(corner(0.0, 1.0), corner(1.0, 1.0), u[0]),
        u[1],
    );
    0.5 + 0.5 * n
}
