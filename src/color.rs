//! Color types and color space conversions.
//!
//! Two always-valid color models share the [`HueColor`] seam:
//!
//! - [`Lch`]: CIE LCh(ab), converted to 8-bit sRGB through Lab and XYZ (D65).
//! - [`Hsl`]: hue/saturation/lightness, converted to unit-range RGB.
//!
//! Every setter clamps scalar channels to their closed range and wraps hue
//! modulo 360, so no sequence of writes can produce an invalid color.
//!
//! # References
//!
//! - CIE 15:2004, *Colorimetry*, 3rd edition.
//! - IEC 61966-2-1:1999, *Default RGB colour space - sRGB*.

pub mod harmony;
mod hsl;
mod lch;

pub use harmony::Harmony;
pub use hsl::Hsl;
pub use lch::Lch;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors, rounded to the nearest step.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;

        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Alpha as a unit-range value.
    #[must_use]
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// Device RGB triple with 8-bit channels, produced by [`Lch::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb8 {
    /// Red channel (0-255).
    pub red: u8,
    /// Green channel (0-255).
    pub green: u8,
    /// Blue channel (0-255).
    pub blue: u8,
}

impl Rgb8 {
    /// Create a new triple.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// RGB triple with channels in `[0, 1]`, produced by [`Hsl::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbUnit {
    /// Red channel (0.0-1.0).
    pub red: f64,
    /// Green channel (0.0-1.0).
    pub green: f64,
    /// Blue channel (0.0-1.0).
    pub blue: f64,
}

impl RgbUnit {
    /// Create a new triple.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// Normalize an angle in degrees into `[0, 360)`.
///
/// Negative and large inputs wrap rather than clamp, so `wrap_hue(h)` equals
/// `wrap_hue(h + 360.0 * k)` for any integer `k`. Non-finite input maps to 0.
#[must_use]
pub fn wrap_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        tracing::debug!(degrees, "non-finite hue normalized to 0");
        return 0.0;
    }

    let hue = degrees % 360.0;
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    // -1e-20 + 360.0 rounds to exactly 360.0
    if hue >= 360.0 {
        0.0
    } else {
        // Fold -0.0 into 0.0
        hue + 0.0
    }
}

/// Clamp a scalar channel to `[min, max]`; NaN falls to `min`.
pub(crate) fn clamp_channel(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// A color with a hue angle and an alpha channel.
///
/// Implementors only provide the accessors; rotation, formatting and every
/// harmony generator come for free. Harmony methods work in both call styles:
/// `Lch::triad(&color)` and `color.triad()` are the same function, and neither
/// touches the receiver.
pub trait HueColor: Copy + std::fmt::Debug {
    /// Hue angle in degrees, always in `[0, 360)`.
    fn hue(&self) -> f64;

    /// Set the hue, wrapping it into `[0, 360)`.
    fn set_hue(&mut self, hue: f64);

    /// Alpha channel in `[0, 1]`.
    fn alpha(&self) -> f64;

    /// Set the alpha channel, clamped to `[0, 1]`.
    fn set_alpha(&mut self, alpha: f64);

    /// Convert to an 8-bit display color, alpha included.
    fn to_rgba(&self) -> Rgba;

    /// Rotate the hue in place by `degrees`.
    fn rotate(&mut self, degrees: f64) {
        self.set_hue(self.hue() + degrees);
    }

    /// Copy of this color with the hue rotated by `degrees`.
    #[must_use]
    fn rotated(&self, degrees: f64) -> Self {
        let mut color = *self;
        color.rotate(degrees);
        color
    }

    /// Hand the color to a formatter and return its output.
    fn format<F>(&self, formatter: F) -> String
    where
        F: FnOnce(&Self) -> String,
    {
        formatter(self)
    }

    /// The complementary color (hue + 180).
    #[must_use]
    fn complementary(&self) -> Self {
        harmony::complementary(self)
    }

    /// Three colors at hue +0, +120, +240.
    #[must_use]
    fn triad(&self) -> [Self; 3] {
        harmony::triad(self)
    }

    /// Three colors at hue -30, +0, +30.
    #[must_use]
    fn analogous(&self) -> [Self; 3] {
        harmony::analogous(self)
    }

    /// Three colors at hue +0, -30, +30.
    #[must_use]
    fn split_complementary(&self) -> [Self; 3] {
        harmony::split_complementary(self)
    }

    /// Four colors at hue +0, +90, +180, +240.
    #[must_use]
    fn tetradic(&self) -> [Self; 4] {
        harmony::tetradic(self)
    }

    /// Four colors at hue +0, +90, +180, +270.
    #[must_use]
    fn square(&self) -> [Self; 4] {
        harmony::square(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hue_in_range_passes_through() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(180.0), 180.0);
        assert_eq!(wrap_hue(359.5), 359.5);
    }

    #[test]
    fn test_wrap_hue_negative() {
        assert_eq!(wrap_hue(-10.0), 350.0);
        assert_eq!(wrap_hue(-360.0), 0.0);
        assert_eq!(wrap_hue(-730.0), 350.0);
    }

    #[test]
    fn test_wrap_hue_large() {
        assert_eq!(wrap_hue(400.0), 40.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(720.0 + 15.0), 15.0);
    }

    #[test]
    fn test_wrap_hue_tiny_negative_folds_to_zero() {
        assert_eq!(wrap_hue(-1e-20), 0.0);
    }

    #[test]
    fn test_wrap_hue_non_finite() {
        assert_eq!(wrap_hue(f64::NAN), 0.0);
        assert_eq!(wrap_hue(f64::INFINITY), 0.0);
        assert_eq!(wrap_hue(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_wrap_hue_negative_zero() {
        assert!(wrap_hue(-0.0).is_sign_positive());
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp_channel(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp_channel(42.0, 0.0, 100.0), 42.0);
        assert_eq!(clamp_channel(f64::NAN, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid, Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_lerp_boundaries() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, -0.5), black);
        assert_eq!(black.lerp(white, 1.5), white);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }

    #[test]
    fn test_rgba_opacity() {
        assert_eq!(Rgba::WHITE.opacity(), 1.0);
        assert_eq!(Rgba::TRANSPARENT.opacity(), 0.0);
    }

    #[test]
    fn test_format_passes_color_to_formatter() {
        let color = Lch::new(50.0, 50.0, 0.0);
        let out = color.format(|c| format!("L={}", c.luminance()));
        assert_eq!(out, "L=50");
    }

    #[test]
    fn test_rotated_leaves_original() {
        let color = Hsl::new(10.0, 50.0, 50.0);
        let turned = color.rotated(20.0);
        assert_eq!(color.hue(), 10.0);
        assert_eq!(turned.hue(), 30.0);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Wrapped hue always lands in [0, 360)
        #[test]
        fn prop_wrap_hue_in_range(h in -1.0e6f64..1.0e6) {
            let wrapped = wrap_hue(h);
            prop_assert!((0.0..360.0).contains(&wrapped), "{} wrapped to {}", h, wrapped);
        }

        /// Whole turns do not change the wrapped hue
        #[test]
        fn prop_wrap_hue_periodic(h in -720.0f64..720.0, k in -20i32..20) {
            let a = wrap_hue(h);
            let b = wrap_hue(h + 360.0 * f64::from(k));
            let diff = (a - b).abs();
            prop_assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "{} vs {}", a, b);
        }

        /// Integer hues wrap exactly
        #[test]
        fn prop_wrap_hue_periodic_integers(h in -3600i32..3600, k in -20i32..20) {
            let h = f64::from(h);
            prop_assert_eq!(wrap_hue(h), wrap_hue(h + 360.0 * f64::from(k)));
        }
    }
}
