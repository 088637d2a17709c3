//! CSS formatters.
//!
//! Color formatters have the shape `Fn(&C) -> String` and plug into
//! [`HueColor::format`]; gradient formatters take one of them to render each
//! stop. Numbers are written in their shortest round-trip form (`50`, `0.5`).
//!
//! ```
//! use chroma_gradient::prelude::*;
//!
//! let color = Hsl::new(0.0, 100.0, 50.0);
//! assert_eq!(color.format(css::hsl), "hsl(0, 100%, 50%)");
//!
//! let gradient = Gradient::new(vec![color, color.complementary()]);
//! assert_eq!(
//!     css::linear_gradient(&gradient, css::hsl),
//!     "linear-gradient(0deg, hsl(0, 100%, 50%) 0%, hsl(180, 100%, 50%) 100%);"
//! );
//! ```

use crate::color::{Hsl, HueColor, Lch};
use crate::gradient::Gradient;

/// `lch(L% C H / alpha)`.
#[must_use]
pub fn lch(color: &Lch) -> String {
    format!(
        "lch({}% {} {} / {})",
        color.luminance(),
        color.chroma(),
        color.hue(),
        color.alpha()
    )
}

/// `hsl(H, S%, L%)`; alpha is dropped.
#[must_use]
pub fn hsl(color: &Hsl) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        color.hue(),
        color.saturation(),
        color.lightness()
    )
}

/// `hsla(H, S%, L%, alpha)`.
#[must_use]
pub fn hsla(color: &Hsl) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        color.hue(),
        color.saturation(),
        color.lightness(),
        color.alpha()
    )
}

/// `rgba(r, g, b, alpha)` from any color's 8-bit conversion.
#[must_use]
pub fn rgba<C: HueColor>(color: &C) -> String {
    let rgb = color.to_rgba();
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, color.alpha())
}

/// `linear-gradient(<angle>deg, <color> <pct>%, ...);`
///
/// The angle comes from linear geometry, or is `0` without it.
#[must_use]
pub fn linear_gradient<C, F>(gradient: &Gradient<C>, formatter: F) -> String
where
    C: HueColor,
    F: Fn(&C) -> String,
{
    let angle = gradient.as_linear().map_or(0.0, |linear| linear.angle());
    format!("linear-gradient({angle}deg, {});", stop_list(gradient, &formatter))
}

/// `radial-gradient(circle <r>px at <cx>px <cy>px, <color> <pct>%, ...);`
///
/// Without radial geometry the shape is a bare `circle`.
#[must_use]
pub fn radial_gradient<C, F>(gradient: &Gradient<C>, formatter: F) -> String
where
    C: HueColor,
    F: Fn(&C) -> String,
{
    let shape = gradient.as_radial().map_or_else(
        || "circle".to_string(),
        |radial| {
            format!(
                "circle {}px at {}px {}px",
                radial.radius, radial.center.x, radial.center.y
            )
        },
    );
    format!("radial-gradient({shape}, {});", stop_list(gradient, &formatter))
}

fn stop_list<C, F>(gradient: &Gradient<C>, formatter: &F) -> String
where
    C: HueColor,
    F: Fn(&C) -> String,
{
    gradient
        .stops()
        .iter()
        .map(|stop| format!("{} {}%", formatter(&stop.color), stop.location * 100.0))
        .collect::<Vec<_>>()
        .join(", ")
}
