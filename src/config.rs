//! YAML gradient descriptions.
//!
//! A document names a base color, then either a harmony to seed stops from or
//! an explicit stop list, plus optional geometry and a render size:
//!
//! ```yaml
//! version: 1
//! base: { space: lch, luminance: 50, chroma: 100, hue: 0 }
//! harmony: analogous
//! geometry: { kind: linear, angle: 15, start: [0, 0], end: [256, 0] }
//! render: { width: 256, height: 64 }
//! ```
//!
//! Colors are normalized on load exactly as the setters normalize them, so an
//! out-of-range value in a file is clamped or wrapped, never rejected.

use crate::color::{Harmony, Hsl, Lch};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::gradient::{Geometry, Gradient, Linear, Radial, Stop, StopInput};
use crate::output::css;
use crate::render::{AnimatedGradient, Rasterizer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A color tagged with its space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum ColorSpec {
    /// CIE LCh.
    Lch(Lch),
    /// HSL.
    Hsl(Hsl),
}

impl ColorSpec {
    /// Space name as written in configuration files.
    #[must_use]
    pub const fn space(&self) -> &'static str {
        match self {
            Self::Lch(_) => "lch",
            Self::Hsl(_) => "hsl",
        }
    }
}

/// One configured stop. Stops without a location are evenly spaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopSpec {
    /// Stop color; must share the base color's space.
    pub color: ColorSpec,
    /// Position along the gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<f64>,
}

/// Configured placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeometrySpec {
    /// Linear from `start` to `end`.
    Linear {
        /// Presentation angle in degrees.
        #[serde(default)]
        angle: f64,
        /// Start point `[x, y]`.
        start: [f64; 2],
        /// End point `[x, y]`.
        end: [f64; 2],
    },
    /// Radial around `center`.
    Radial {
        /// Center `[x, y]`.
        center: [f64; 2],
        /// Radius of the outermost stop.
        radius: f64,
    },
}

impl From<GeometrySpec> for Geometry {
    fn from(spec: GeometrySpec) -> Self {
        match spec {
            GeometrySpec::Linear { angle, start, end } => Self::Linear(Linear::new(
                angle,
                Point::from((start[0], start[1])),
                Point::from((end[0], end[1])),
            )),
            GeometrySpec::Radial { center, radius } => {
                Self::Radial(Radial::new(Point::from((center[0], center[1])), radius))
            }
        }
    }
}

/// Output size for rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frame width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,
    /// Frame height in pixels.
    #[serde(default = "default_size")]
    pub height: u32,
}

fn default_size() -> u32 {
    256
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
        }
    }
}

/// A gradient description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base color; also fixes the color space of every stop.
    #[serde(default = "default_base")]
    pub base: ColorSpec,

    /// Harmony to seed stops from. Takes precedence over `stops`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmony: Option<Harmony>,

    /// Explicit stops, used when no harmony is given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<StopSpec>,

    /// Optional placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometrySpec>,

    /// Render size.
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_version() -> u32 {
    1
}

fn default_base() -> ColorSpec {
    ColorSpec::Lch(Lch::new(50.0, 100.0, 0.0))
}

impl Default for GradientConfig {
    /// An analogous LCh gradient around a saturated red.
    fn default() -> Self {
        Self {
            version: default_version(),
            base: default_base(),
            harmony: Some(Harmony::Analogous),
            stops: Vec::new(),
            geometry: None,
            render: RenderConfig::default(),
        }
    }
}

impl GradientConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file cannot be read, or
    /// [`Error::ConfigParse`] if it is not a valid description.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "gradient configuration loaded");
        Ok(config)
    }

    /// Parses a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads a configuration, falling back to the default on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "using default gradient configuration");
            Self::default()
        })
    }

    /// Serializes the configuration back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// A rasterizer sized by `render`.
    #[must_use]
    pub const fn rasterizer(&self) -> Rasterizer {
        Rasterizer::new(self.render.width, self.render.height)
    }

    /// Build the described gradient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MixedColorSpaces`] if a stop's space differs from the
    /// base color's.
    pub fn build(&self) -> Result<ConfiguredGradient> {
        if self.harmony.is_some() && !self.stops.is_empty() {
            tracing::debug!(
                stops = self.stops.len(),
                "harmony given, explicit stops ignored"
            );
        }

        let geometry = self.geometry.map(Geometry::from);
        let expected = self.base.space();

        let configured = match self.base {
            ColorSpec::Lch(base) => {
                let mut gradient = self.seed(&base, |index, spec| match spec {
                    ColorSpec::Lch(color) => Ok(color),
                    other => Err(mixed(index, expected, other)),
                })?;
                gradient.set_geometry(geometry);
                ConfiguredGradient::Lch(gradient)
            }
            ColorSpec::Hsl(base) => {
                let mut gradient = self.seed(&base, |index, spec| match spec {
                    ColorSpec::Hsl(color) => Ok(color),
                    other => Err(mixed(index, expected, other)),
                })?;
                gradient.set_geometry(geometry);
                ConfiguredGradient::Hsl(gradient)
            }
        };

        Ok(configured)
    }

    fn seed<C, F>(&self, base: &C, extract: F) -> Result<Gradient<C>>
    where
        C: crate::color::HueColor,
        F: Fn(usize, ColorSpec) -> Result<C>,
    {
        if let Some(harmony) = self.harmony {
            return Ok(Gradient::from_harmony(harmony, base));
        }

        let colors = self
            .stops
            .iter()
            .enumerate()
            .map(|(index, stop)| extract(index, stop.color))
            .collect::<Result<Vec<C>>>()?;

        if self.stops.iter().all(|stop| stop.location.is_none()) {
            return Ok(Gradient::new(StopInput::Colors(colors)));
        }

        // Partially located: fill the gaps with even spacing.
        let span = self.stops.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .into_iter()
            .zip(&self.stops)
            .enumerate()
            .map(|(index, (color, spec))| {
                Stop::new(color, spec.location.unwrap_or(index as f64 / span))
            })
            .collect();

        Ok(Gradient::new(StopInput::Stops(stops)))
    }
}

fn mixed(index: usize, expected: &'static str, found: ColorSpec) -> Error {
    Error::MixedColorSpaces {
        index,
        expected,
        found: found.space(),
    }
}

/// A gradient built from configuration, in the base color's space.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguredGradient {
    /// LCh stops.
    Lch(Gradient<Lch>),
    /// HSL stops.
    Hsl(Gradient<Hsl>),
}

impl ConfiguredGradient {
    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Lch(gradient) => gradient.len(),
            Self::Hsl(gradient) => gradient.len(),
        }
    }

    /// Whether there are no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// CSS for the gradient: radial geometry gives `radial-gradient`,
    /// anything else `linear-gradient`. Colors use their own space's notation.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Lch(gradient) if gradient.as_radial().is_some() => {
                css::radial_gradient(gradient, css::lch)
            }
            Self::Lch(gradient) => css::linear_gradient(gradient, css::lch),
            Self::Hsl(gradient) if gradient.as_radial().is_some() => {
                css::radial_gradient(gradient, css::hsla)
            }
            Self::Hsl(gradient) => css::linear_gradient(gradient, css::hsla),
        }
    }

    /// Rasterize with `rasterizer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the gradient is empty or the size is invalid.
    pub fn rasterize(&self, rasterizer: &Rasterizer) -> Result<Framebuffer> {
        match self {
            Self::Lch(gradient) => rasterizer.render(gradient),
            Self::Hsl(gradient) => rasterizer.render(gradient),
        }
    }

    /// Animated renderer with a palette from these stops.
    #[must_use]
    pub fn animated(&self, width: u32, height: u32) -> AnimatedGradient {
        match self {
            Self::Lch(gradient) => AnimatedGradient::new(gradient, width, height),
            Self::Hsl(gradient) => AnimatedGradient::new(gradient, width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HueColor;

    #[test]
    fn test_config_default() {
        let config = GradientConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.harmony, Some(Harmony::Analogous));
        assert_eq!(config.render, RenderConfig { width: 256, height: 256 });
        assert_eq!(config.build().unwrap().len(), 3);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = GradientConfig::parse("version: 1").unwrap();
        assert_eq!(config.base, default_base());
        assert!(config.harmony.is_none());
        assert!(config.build().unwrap().is_empty());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
version: 1
base: { space: lch, luminance: 50, chroma: 100, hue: 0 }
harmony: analogous
geometry: { kind: linear, angle: 15, start: [0, 0], end: [100, 0] }
render: { width: 128, height: 32 }
"#;
        let config = GradientConfig::parse(yaml).unwrap();
        assert_eq!(config.render, RenderConfig { width: 128, height: 32 });

        let ConfiguredGradient::Lch(gradient) = config.build().unwrap() else {
            panic!("expected an LCh gradient");
        };
        let hues: Vec<f64> = gradient.colors().map(HueColor::hue).collect();
        assert_eq!(hues, vec![330.0, 0.0, 30.0]);

        let linear = gradient.as_linear().unwrap();
        assert_eq!(linear.angle(), 15.0);
        assert_eq!(linear.end, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_harmony_names() {
        let config = GradientConfig::parse("harmony: split-complementary").unwrap();
        assert_eq!(config.harmony, Some(Harmony::SplitComplementary));
    }

    #[test]
    fn test_explicit_hsl_stops() {
        let yaml = r#"
base: { space: hsl, hue: 0, saturation: 100, lightness: 50 }
stops:
  - color: { space: hsl, hue: 240, saturation: 100, lightness: 50 }
    location: 1.0
  - color: { space: hsl, hue: 0, saturation: 100, lightness: 50, alpha: 0.5 }
    location: 0.0
geometry: { kind: radial, center: [10, 20], radius: 5 }
"#;
        let built = GradientConfig::parse(yaml).unwrap().build().unwrap();
        assert_eq!(
            built.to_css(),
            "radial-gradient(circle 5px at 10px 20px, hsla(0, 100%, 50%, 0.5) 0%, hsla(240, 100%, 50%, 1) 100%);"
        );
    }

    #[test]
    fn test_unlocated_stops_evenly_spaced() {
        let yaml = r#"
base: { space: hsl, hue: 0, saturation: 0, lightness: 0 }
stops:
  - color: { space: hsl, hue: 0, saturation: 0, lightness: 0 }
  - color: { space: hsl, hue: 0, saturation: 0, lightness: 50 }
  - color: { space: hsl, hue: 0, saturation: 0, lightness: 100 }
"#;
        let ConfiguredGradient::Hsl(gradient) = GradientConfig::parse(yaml).unwrap().build().unwrap()
        else {
            panic!("expected an HSL gradient");
        };
        let locations: Vec<f64> = gradient.locations().collect();
        assert_eq!(locations, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_partially_located_stops() {
        let yaml = r#"
stops:
  - color: { space: lch, luminance: 10, chroma: 0, hue: 0 }
  - color: { space: lch, luminance: 20, chroma: 0, hue: 0 }
    location: 0.9
  - color: { space: lch, luminance: 30, chroma: 0, hue: 0 }
"#;
        let ConfiguredGradient::Lch(gradient) = GradientConfig::parse(yaml).unwrap().build().unwrap()
        else {
            panic!("expected an LCh gradient");
        };
        let locations: Vec<f64> = gradient.locations().collect();
        assert_eq!(locations, vec![0.0, 0.9, 1.0]);
    }

    #[test]
    fn test_mixed_color_spaces_rejected() {
        let yaml = r#"
base: { space: lch, luminance: 50, chroma: 50, hue: 0 }
stops:
  - color: { space: lch, luminance: 50, chroma: 50, hue: 0 }
  - color: { space: hsl, hue: 0, saturation: 50, lightness: 50 }
"#;
        let err = GradientConfig::parse(yaml).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            Error::MixedColorSpaces { index: 1, expected: "lch", found: "hsl" }
        ));
    }

    #[test]
    fn test_values_normalized_on_load() {
        let yaml = "base: { space: lch, luminance: 150, chroma: -5, hue: 370 }";
        let config = GradientConfig::parse(yaml).unwrap();
        let ColorSpec::Lch(base) = config.base else {
            panic!("expected an LCh base");
        };
        assert_eq!(base.luminance(), 100.0);
        assert_eq!(base.chroma(), 0.0);
        assert_eq!(base.hue(), 10.0);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
render:
  width: not_a_number
"#;
        let err = GradientConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line: 4, .. }), "{err}");
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_unknown_harmony_is_parse_error() {
        let err = GradientConfig::parse("harmony: pentadic").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = GradientConfig::load_or_default("/nonexistent/path");
        assert_eq!(config, GradientConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GradientConfig::load("/nonexistent/gradient.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(path) if path.contains("gradient.yaml")));
    }

    #[test]
    fn test_load_and_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.yaml");

        let mut config = GradientConfig::default();
        config.harmony = Some(Harmony::Square);
        config.geometry = Some(GeometrySpec::Radial {
            center: [32.0, 32.0],
            radius: 16.0,
        });
        std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

        let loaded = GradientConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_rasterize_and_animate() {
        let mut config = GradientConfig::default();
        config.render = RenderConfig { width: 8, height: 4 };
        let built = config.build().unwrap();

        let fb = built.rasterize(&config.rasterizer()).unwrap();
        assert_eq!((fb.width(), fb.height()), (8, 4));

        let frame = built.animated(6, 6).render_frame(0.5).unwrap();
        assert_eq!(frame.width(), 6);
    }
}
