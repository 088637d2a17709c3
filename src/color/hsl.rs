//! Hue/saturation/lightness color model.

use super::{clamp_channel, wrap_hue, HueColor, RgbUnit, Rgba};

/// Color in the HSL space with an alpha channel.
///
/// Saturation and lightness are percentages. Invariants: `hue ∈ [0, 360)`,
/// `saturation ∈ [0, 100]`, `lightness ∈ [0, 100]`, `alpha ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "HslParts"))]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HslParts {
    hue: f64,
    saturation: f64,
    lightness: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<HslParts> for Hsl {
    fn from(parts: HslParts) -> Self {
        Self::with_alpha(parts.hue, parts.saturation, parts.lightness, parts.alpha)
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.0,
            alpha: 1.0,
        }
    }
}

impl Hsl {
    /// Create an opaque color, normalizing every channel.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::with_alpha(hue, saturation, lightness, 1.0)
    }

    /// Create a color with an explicit alpha, normalizing every channel.
    #[must_use]
    pub fn with_alpha(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let mut color = Self::default();
        color.set_hue(hue);
        color.set_saturation(saturation);
        color.set_lightness(lightness);
        color.set_alpha(alpha);
        color
    }

    /// Saturation (0.0-100.0).
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Set the saturation, clamped to `[0, 100]`.
    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = clamp_channel(saturation, 0.0, 100.0);
    }

    /// Lightness (0.0-100.0).
    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Set the lightness, clamped to `[0, 100]`.
    pub fn set_lightness(&mut self, lightness: f64) {
        self.lightness = clamp_channel(lightness, 0.0, 100.0);
    }

    /// Channels as `[hue, saturation, lightness, alpha]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.hue, self.saturation, self.lightness, self.alpha]
    }

    /// Convert to RGB with channels in `[0, 1]`.
    ///
    /// ```
    /// use chroma_gradient::color::{Hsl, RgbUnit};
    ///
    /// assert_eq!(Hsl::new(0.0, 0.0, 50.0).rgb(), RgbUnit::new(0.5, 0.5, 0.5));
    /// ```
    #[must_use]
    pub fn rgb(&self) -> RgbUnit {
        let h = self.hue / 360.0;
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        if s == 0.0 {
            return RgbUnit::new(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        RgbUnit::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl HueColor for Hsl {
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
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let RgbUnit { red, green, blue } = self.rgb();
        Rgba::new(to_byte(red), to_byte(green), to_byte(blue), to_byte(self.alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_rgb(actual: RgbUnit, expected: (f64, f64, f64)) {
        assert_relative_eq!(actual.red, expected.0, epsilon = 1e-12);
        assert_relative_eq!(actual.green, expected.1, epsilon = 1e-12);
        assert_relative_eq!(actual.blue, expected.2, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_red() {
        assert_rgb(Hsl::new(0.0, 100.0, 50.0).rgb(), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_green() {
        assert_rgb(Hsl::new(120.0, 100.0, 50.0).rgb(), (0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rgb_blue() {
        assert_rgb(Hsl::new(240.0, 100.0, 50.0).rgb(), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgb_gray_short_circuits() {
        assert_eq!(Hsl::new(200.0, 0.0, 50.0).rgb(), RgbUnit::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_rgb_dark_red() {
        // l < 0.5 takes the l * (1 + s) branch
        assert_rgb(Hsl::new(0.0, 100.0, 25.0).rgb(), (0.5, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_magenta() {
        // hue near 300 pushes t above 1.0 for the red channel
        assert_rgb(Hsl::new(300.0, 100.0, 50.0).rgb(), (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgb_cyan() {
        assert_rgb(Hsl::new(180.0, 100.0, 50.0).rgb(), (0.0, 1.0, 1.0));
    }

    #[test]
    fn test_setters_clamp() {
        let mut color = Hsl::new(0.0, 50.0, 50.0);
        color.set_saturation(150.0);
        color.set_lightness(-20.0);
        assert_eq!(color.saturation(), 100.0);
        assert_eq!(color.lightness(), 0.0);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Hsl::new(-10.0, 50.0, 50.0).hue(), 350.0);
        assert_eq!(Hsl::new(400.0, 50.0, 50.0).hue(), 40.0);
    }

    #[test]
    fn test_to_rgba() {
        let rgba = Hsl::with_alpha(0.0, 100.0, 50.0, 0.5).to_rgba();
        assert_eq!(rgba, Rgba::new(255, 0, 0, 128));
    }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Hsl::default().to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Hsl::default().to_rgba(), Rgba::BLACK);
    }
}
