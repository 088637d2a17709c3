//! SVG output encoder.
//!
//! Gradients are written as native `<linearGradient>` / `<radialGradient>`
//! definitions, so the output stays resolution independent. Rendered frames can
//! be embedded as raster images instead.

use crate::color::{HueColor, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::gradient::{Geometry, Gradient};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG document builder.
///
/// # Example
///
/// ```
/// use chroma_gradient::prelude::*;
///
/// let gradient = Gradient::from_complementary(&Hsl::new(200.0, 80.0, 50.0));
/// let svg = SvgEncoder::new(200, 100)
///     .linear_gradient("sky", &gradient)
///     .rect(0.0, 0.0, 200.0, 100.0, SvgFill::gradient("sky"))
///     .render();
///
/// assert!(svg.contains(r#"<linearGradient id="sky""#));
/// assert!(svg.contains(r#"fill="url(#sky)""#));
/// ```
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    width: u32,
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    defs: Vec<GradientDef>,
    elements: Vec<SvgElement>,
}

/// How a shape is painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgFill {
    /// A flat color.
    Solid(Rgba),
    /// A reference to a gradient definition by id.
    Gradient(String),
}

impl SvgFill {
    /// Reference the gradient registered under `id`.
    #[must_use]
    pub fn gradient(id: impl Into<String>) -> Self {
        Self::Gradient(id.into())
    }

    fn to_attr(&self) -> String {
        match self {
            Self::Solid(color) => rgba_to_css(color),
            Self::Gradient(id) => format!("url(#{})", escape_xml(id)),
        }
    }
}

impl From<Rgba> for SvgFill {
    fn from(color: Rgba) -> Self {
        Self::Solid(color)
    }
}

/// Stop as written: offset in percent, 8-bit color, unit opacity.
#[derive(Debug, Clone, PartialEq)]
struct SvgStop {
    offset: f64,
    color: Rgba,
    opacity: f64,
}

#[derive(Debug, Clone)]
enum GradientDef {
    Linear {
        id: String,
        /// Endpoints in user space; `None` spans the shape's bounding box.
        endpoints: Option<[f64; 4]>,
        /// Bounding-box rotation for segments with no length.
        rotate: Option<f64>,
        stops: Vec<SvgStop>,
    },
    Radial {
        id: String,
        /// `(cx, cy, r)` in user space; `None` uses SVG defaults.
        circle: Option<[f64; 3]>,
        stops: Vec<SvgStop>,
    },
}

#[derive(Debug, Clone)]
enum SvgElement {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: SvgFill,
    },
    /// Embedded raster image (base64 PNG data URI)
    Image { width: f32, height: f32, data: String },
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create an empty document with a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Create a document holding `fb` as an embedded PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        let mut encoder = Self::new(fb.width(), fb.height());
        encoder.background = None;

        let png_bytes = super::PngEncoder::to_bytes(fb)?;
        encoder.elements.push(SvgElement::Image {
            width: fb.width() as f32,
            height: fb.height() as f32,
            data: format!("data:image/png;base64,{}", STANDARD.encode(&png_bytes)),
        });

        Ok(encoder)
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Define a linear gradient under `id`.
    ///
    /// Linear geometry is placed in user space; without it the gradient runs
    /// left to right across the filled shape.
    #[must_use]
    pub fn linear_gradient<C: HueColor>(mut self, id: &str, gradient: &Gradient<C>) -> Self {
        let (endpoints, rotate) = match gradient.as_linear() {
            Some(linear) if linear.length() > f64::EPSILON => (
                Some([linear.start.x, linear.start.y, linear.end.x, linear.end.y]),
                None,
            ),
            // 90deg is left to right, the bounding-box default
            Some(linear) => (None, Some(linear.angle() - 90.0)),
            None => (None, None),
        };

        self.defs.push(GradientDef::Linear {
            id: id.to_string(),
            endpoints,
            rotate,
            stops: svg_stops(gradient),
        });
        self
    }

    /// Define a radial gradient under `id`.
    #[must_use]
    pub fn radial_gradient<C: HueColor>(mut self, id: &str, gradient: &Gradient<C>) -> Self {
        let circle = match gradient.geometry() {
            Some(Geometry::Radial(radial)) => {
                Some([radial.center.x, radial.center.y, radial.radius.max(0.0)])
            }
            _ => None,
        };

        self.defs.push(GradientDef::Radial {
            id: id.to_string(),
            circle,
            stops: svg_stops(gradient),
        });
        self
    }

    /// Add a rectangle.
    #[must_use]
    pub fn rect(mut self, x: f32, y: f32, width: f32, height: f32, fill: impl Into<SvgFill>) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill: fill.into(),
        });
        self
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            for def in &self.defs {
                write_gradient_def(&mut svg, def);
            }
            svg.push_str("  </defs>\n");
        }

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(&bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

fn svg_stops<C: HueColor>(gradient: &Gradient<C>) -> Vec<SvgStop> {
    gradient
        .stops()
        .iter()
        .map(|stop| SvgStop {
            offset: stop.location * 100.0,
            color: stop.color.to_rgba(),
            opacity: stop.color.alpha(),
        })
        .collect()
}

fn write_gradient_def(svg: &mut String, def: &GradientDef) {
    let stops = match def {
        GradientDef::Linear {
            id,
            endpoints,
            rotate,
            stops,
        } => {
            let _ = write!(svg, r#"    <linearGradient id="{}""#, escape_xml(id));
            if let Some([x1, y1, x2, y2]) = endpoints {
                let _ = write!(
                    svg,
                    r#" gradientUnits="userSpaceOnUse" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}""#
                );
            }
            if let Some(degrees) = rotate {
                let _ = write!(svg, r#" gradientTransform="rotate({degrees} 0.5 0.5)""#);
            }
            stops
        }
        GradientDef::Radial { id, circle, stops } => {
            let _ = write!(svg, r#"    <radialGradient id="{}""#, escape_xml(id));
            if let Some([cx, cy, r]) = circle {
                let _ = write!(
                    svg,
                    r#" gradientUnits="userSpaceOnUse" cx="{cx}" cy="{cy}" r="{r}""#
                );
            }
            stops
        }
    };
    svg.push_str(">\n");

    for SvgStop {
        offset,
        color,
        opacity,
    } in stops
    {
        let _ = writeln!(
            svg,
            r#"      <stop offset="{offset}%" stop-color="rgb({},{},{})" stop-opacity="{opacity}"/>"#,
            color.r, color.g, color.b
        );
    }

    let close = match def {
        GradientDef::Linear { .. } => "linearGradient",
        GradientDef::Radial { .. } => "radialGradient",
    };
    let _ = writeln!(svg, "    </{close}>");
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: &Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => format!(
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
            fill.to_attr()
        ),
        SvgElement::Image {
            width,
            height,
            data,
        } => format!(r#"<image x="0" y="0" width="{width}" height="{height}" xlink:href="{data}"/>"#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Hsl, Lch};
    use crate::geometry::Point;
    use crate::gradient::Stop;

    fn two_stop() -> Vec<Hsl> {
        vec![Hsl::new(0.0, 100.0, 50.0), Hsl::with_alpha(240.0, 100.0, 50.0, 0.5)]
    }

    #[test]
    fn test_svg_encoder_new() {
        let svg = SvgEncoder::new(800, 600).render();

        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_svg_solid_rect() {
        let svg = SvgEncoder::new(100, 100)
            .rect(10.0, 20.0, 30.0, 40.0, Rgba::rgb(255, 0, 0))
            .render();

        assert!(svg.contains(r#"<rect x="10" y="20" width="30" height="40" fill="rgb(255,0,0)"/>"#));
    }

    #[test]
    fn test_linear_gradient_stops() {
        let svg = SvgEncoder::new(100, 100)
            .linear_gradient("g", &Gradient::new(two_stop()))
            .render();

        assert!(svg.contains(r#"<linearGradient id="g">"#));
        assert!(svg.contains(
            r#"<stop offset="0%" stop-color="rgb(255,0,0)" stop-opacity="1"/>"#
        ));
        assert!(svg.contains(
            r#"<stop offset="100%" stop-color="rgb(0,0,255)" stop-opacity="0.5"/>"#
        ));
        assert!(svg.contains("</linearGradient>"));
    }

    #[test]
    fn test_linear_gradient_user_space() {
        let gradient = Gradient::linear(0.0, Point::new(0.0, 0.0), Point::new(0.0, 50.0), two_stop());
        let svg = SvgEncoder::new(100, 100).linear_gradient("v", &gradient).render();

        assert!(svg.contains(r#"gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="0" y2="50""#));
    }

    #[test]
    fn test_degenerate_linear_rotates_bounding_box() {
        let gradient = Gradient::linear(180.0, Point::ORIGIN, Point::ORIGIN, two_stop());
        let svg = SvgEncoder::new(100, 100).linear_gradient("d", &gradient).render();

        assert!(svg.contains(r#"gradientTransform="rotate(90 0.5 0.5)""#));
    }

    #[test]
    fn test_radial_gradient() {
        let gradient = Gradient::radial(Point::new(50.0, 40.0), 25.0, two_stop());
        let svg = SvgEncoder::new(100, 100)
            .radial_gradient("r", &gradient)
            .rect(0.0, 0.0, 100.0, 100.0, SvgFill::gradient("r"))
            .render();

        assert!(svg.contains(r#"<radialGradient id="r" gradientUnits="userSpaceOnUse" cx="50" cy="40" r="25">"#));
        assert!(svg.contains("</radialGradient>"));
        assert!(svg.contains(r#"fill="url(#r)""#));
    }

    #[test]
    fn test_stop_offsets_follow_locations() {
        let gradient = Gradient::new(vec![
            Stop::new(Lch::new(50.0, 0.0, 0.0), 0.25),
            Stop::new(Lch::new(100.0, 0.0, 0.0), 0.75),
        ]);
        let svg = SvgEncoder::new(10, 10).linear_gradient("s", &gradient).render();

        assert!(svg.contains(r#"offset="25%" stop-color="rgb(119,119,119)""#));
        assert!(svg.contains(r#"offset="75%" stop-color="rgb(255,255,255)""#));
    }

    #[test]
    fn test_gradient_id_escaped() {
        let svg = SvgEncoder::new(10, 10)
            .linear_gradient("a\"b", &Gradient::new(two_stop()))
            .rect(0.0, 0.0, 10.0, 10.0, SvgFill::gradient("a\"b"))
            .render();

        assert!(svg.contains(r#"id="a&quot;b""#));
        assert!(svg.contains(r#"url(#a&quot;b)"#));
    }

    #[test]
    fn test_svg_transparent_background() {
        let svg = SvgEncoder::new(100, 100).background(None).render();
        assert_eq!(svg.matches("<rect").count(), 0);
    }

    #[test]
    fn test_svg_rgba_alpha() {
        let css = rgba_to_css(&Rgba::new(255, 0, 0, 128));
        assert!(css.contains("rgba"));
        assert!(css.contains("0.502"));
    }

    #[test]
    fn test_svg_from_framebuffer() {
        let mut fb = Framebuffer::new(16, 16).unwrap();
        fb.clear(Rgba::rgb(10, 20, 30));

        let svg = SvgEncoder::from_framebuffer(&fb).unwrap().render();

        assert!(svg.contains("<image"));
        assert!(svg.contains("data:image/png;base64,"));
        assert_eq!(svg.matches("<rect").count(), 0);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.svg");

        SvgEncoder::new(10, 10)
            .linear_gradient("g", &Gradient::new(two_stop()))
            .write_to_file(&path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
    }
}
