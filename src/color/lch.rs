//! CIE LCh(ab) color model.

use std::f64::consts::TAU;

use super::{clamp_channel, wrap_hue, HueColor, Rgb8, Rgba};

/// D65 reference white, 2 degree observer.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// Lab linear-segment threshold (216/24389, rounded as published).
const EPSILON: f64 = 0.008_856;
/// Lab linear-segment slope (24389/27/116, rounded as published).
const KAPPA_SLOPE: f64 = 7.787;

/// Linear sRGB from XYZ (D65).
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266, 1.876_010_8, 0.041_556],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// Color in the CIE LCh(ab) space with an alpha channel.
///
/// Invariants: `luminance ∈ [0, 100]`, `chroma ∈ [0, 230]`, `hue ∈ [0, 360)`,
/// `alpha ∈ [0, 1]`. Setters clamp scalars and wrap hue instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LchParts"))]
pub struct Lch {
    luminance: f64,
    chroma: f64,
    hue: f64,
    alpha: f64,
}

/// Unvalidated field set, routed through the setters on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LchParts {
    luminance: f64,
    chroma: f64,
    hue: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<LchParts> for Lch {
    fn from(parts: LchParts) -> Self {
        Self::with_alpha(parts.luminance, parts.chroma, parts.hue, parts.alpha)
    }
}

impl Default for Lch {
    fn default() -> Self {
        Self {
            luminance: 0.0,
            chroma: 0.0,
            hue: 0.0,
            alpha: 1.0,
        }
    }
}

impl Lch {
    /// Upper bound for luminance.
    pub const MAX_LUMINANCE: f64 = 100.0;
    /// Upper bound for chroma.
    pub const MAX_CHROMA: f64 = 230.0;

    /// Create an opaque color, normalizing every channel.
    #[must_use]
    pub fn new(luminance: f64, chroma: f64, hue: f64) -> Self {
        Self::with_alpha(luminance, chroma, hue, 1.0)
    }

    /// Create a color with an explicit alpha, normalizing every channel.
    #[must_use]
    pub fn with_alpha(luminance: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        let mut color = Self::default();
        color.set_luminance(luminance);
        color.set_chroma(chroma);
        color.set_hue(hue);
        color.set_alpha(alpha);
        color
    }

    /// Luminance (0.0-100.0).
    #[must_use]
    pub const fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Set the luminance, clamped to `[0, 100]`.
    pub fn set_luminance(&mut self, luminance: f64) {
        self.luminance = clamp_channel(luminance, 0.0, Self::MAX_LUMINANCE);
    }

    /// Chroma (0.0-230.0).
    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Set the chroma, clamped to `[0, 230]`.
    pub fn set_chroma(&mut self, chroma: f64) {
        self.chroma = clamp_channel(chroma, 0.0, Self::MAX_CHROMA);
    }

    /// Channels as `[luminance, chroma, hue, alpha]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.luminance, self.chroma, self.hue, self.alpha]
    }

    /// Convert to CIE L\*a\*b\* as `(l, a, b)`.
    #[must_use]
    pub fn to_lab(&self) -> (f64, f64, f64) {
        let radians = self.hue / 360.0 * TAU;
        (
            self.luminance,
            self.chroma * radians.cos(),
            self.chroma * radians.sin(),
        )
    }

    /// Convert to CIE XYZ (D65, Y scaled to 100).
    #[must_use]
    pub fn to_xyz(&self) -> (f64, f64, f64) {
        let (l, a, b) = self.to_lab();

        let fy = (l + 16.0) / 116.0;
        let fx = a / 500.0 + fy;
        let fz = fy - b / 200.0;

        (
            lab_inverse(fx) * WHITE_X,
            lab_inverse(fy) * WHITE_Y,
            lab_inverse(fz) * WHITE_Z,
        )
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Out-of-gamut channels are clipped to `[0, 255]`; results are rounded to
    /// the nearest integer.
    ///
    /// ```
    /// use chroma_gradient::color::{Lch, Rgb8};
    ///
    /// assert_eq!(Lch::new(50.0, 100.0, 0.0).rgb(), Rgb8::new(255, 0, 123));
    /// ```
    #[must_use]
    pub fn rgb(&self) -> Rgb8 {
        let (x, y, z) = self.to_xyz();
        let xyz = [x / 100.0, y / 100.0, z / 100.0];

        let channel = |row: [f64; 3]| {
            let linear = row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2];
            (srgb_compand(linear).clamp(0.0, 1.0) * 255.0).round() as u8
        };

        Rgb8::new(
            channel(XYZ_TO_SRGB[0]),
            channel(XYZ_TO_SRGB[1]),
            channel(XYZ_TO_SRGB[2]),
        )
    }
}

/// Inverse of the Lab companding function `f(t)`.
fn lab_inverse(t: f64) -> f64 {
    let cubed = t.powi(3);
    if cubed > EPSILON {
        cubed
    } else {
        (t - 16.0 / 116.0) / KAPPA_SLOPE
    }
}

/// sRGB transfer function (linear to gamma-encoded).
fn srgb_compand(linear: f64) -> f64 {
    if linear > 0.003_130_8 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        linear * 12.92
    }
}

impl HueColor for Lch {
    fn hue(&self) -> f64 {
        self.hue
    }

    fn set_hue(&mut self, hue: f64) {
        self.hue = wrap_hue(hue);
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = clamp_channel(alpha, 0.0, 1.0);
    }

    fn to_rgba(&self) -> Rgba {
        let Rgb8 { red, green, blue } = self.rgb();
        Rgba::new(red, green, blue, (self.alpha * 255.0).round() as u8)
    }
}
