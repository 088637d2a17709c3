//! Multi-stop gradients.
//!
//! A [`Gradient`] is an ordered sequence of [`Stop`]s, kept sorted by location
//! after every write. Stops are supplied either as bare colors, which get evenly
//! spaced locations, or as explicit `(color, location)` pairs; [`StopInput`]
//! makes that choice at the call site.
//!
//! Geometry is optional and orthogonal to the stops: a gradient may carry a
//! [`Linear`] or [`Radial`] placement, and consumers match on [`Geometry`].

mod shape;

pub use shape::{Geometry, Linear, Radial};

use crate::color::{Harmony, Hsl, HueColor, Lch};
use crate::geometry::Point;

/// A color anchored at a normalized position along the gradient.
///
/// Locations are nominally in `[0, 1]` but are not validated; out-of-range
/// values are kept as given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop<C = Lch> {
    /// Stop color.
    pub color: C,
    /// Position along the gradient.
    pub location: f64,
}

impl<C> Stop<C> {
    /// Create a new stop.
    #[must_use]
    pub const fn new(color: C, location: f64) -> Self {
        Self { color, location }
    }
}

/// How a stop sequence is supplied.
///
/// `Vec<Lch>`, `Vec<Hsl>` and `Vec<Stop<C>>` convert with `into`; other color
/// types name the variant directly.
#[derive(Debug, Clone, PartialEq)]
pub enum StopInput<C = Lch> {
    /// Bare colors; stop `i` of `n` is placed at `i / (n - 1)`.
    Colors(Vec<C>),
    /// Explicit stops, used as given and then sorted.
    Stops(Vec<Stop<C>>),
}

impl From<Vec<Lch>> for StopInput<Lch> {
    fn from(colors: Vec<Lch>) -> Self {
        Self::Colors(colors)
    }
}

impl From<Vec<Hsl>> for StopInput<Hsl> {
    fn from(colors: Vec<Hsl>) -> Self {
        Self::Colors(colors)
    }
}

impl<C> From<Vec<Stop<C>>> for StopInput<C> {
    fn from(stops: Vec<Stop<C>>) -> Self {
        Self::Stops(stops)
    }
}

impl<C> StopInput<C> {
    /// Resolve into stops, spacing bare colors evenly.
    ///
    /// A single color has no span to divide and is placed at 0.
    #[must_use]
    pub fn into_stops(self) -> Vec<Stop<C>> {
        match self {
            Self::Stops(stops) => stops,
            Self::Colors(colors) => {
                let count = colors.len();
                if count == 1 {
                    tracing::debug!("single-color gradient placed at location 0");
                }
                let span = count.saturating_sub(1).max(1) as f64;

                colors
                    .into_iter()
                    .enumerate()
                    .map(|(i, color)| Stop::new(color, i as f64 / span))
                    .collect()
            }
        }
    }
}

/// An ordered sequence of color stops with optional geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "GradientParts<C>",
        bound(deserialize = "C: HueColor + serde::Deserialize<'de>")
    )
)]
pub struct Gradient<C = Lch> {
    stops: Vec<Stop<C>>,
    geometry: Option<Geometry>,
}

/// Stops in any order, sorted on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GradientParts<C> {
    stops: Vec<Stop<C>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[cfg(feature = "serde")]
impl<C: HueColor> From<GradientParts<C>> for Gradient<C> {
    fn from(parts: GradientParts<C>) -> Self {
        let mut gradient = Self::new(StopInput::Stops(parts.stops));
        gradient.geometry = parts.geometry;
        gradient
    }
}

impl<C> Default for Gradient<C> {
    fn default() -> Self {
        Self {
            stops: Vec::new(),
            geometry: None,
        }
    }
}

impl<C: HueColor> Gradient<C> {
    /// Create a gradient without geometry.
    ///
    /// ```
    /// use chroma_gradient::prelude::*;
    ///
    /// let gradient = Gradient::new(vec![Hsl::new(0.0, 50.0, 50.0), Hsl::new(120.0, 50.0, 50.0)]);
    /// let locations: Vec<f64> = gradient.stops().iter().map(|s| s.location).collect();
    /// assert_eq!(locations, vec![0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn new(input: impl Into<StopInput<C>>) -> Self {
        let mut gradient = Self::default();
        gradient.set_stops(input);
        gradient
    }

    /// Create a linear gradient running from `start` to `end`.
    #[must_use]
    pub fn linear(angle: f64, start: Point, end: Point, input: impl Into<StopInput<C>>) -> Self {
        let mut gradient = Self::new(input);
        gradient.geometry = Some(Geometry::Linear(Linear::new(angle, start, end)));
        gradient
    }

    /// Create a radial gradient around `center`.
    #[must_use]
    pub fn radial(center: Point, radius: f64, input: impl Into<StopInput<C>>) -> Self {
        let mut gradient = Self::new(input);
        gradient.geometry = Some(Geometry::Radial(Radial::new(center, radius)));
        gradient
    }

    /// Stops in ascending location order.
    #[must_use]
    pub fn stops(&self) -> &[Stop<C>] {
        &self.stops
    }

    /// Replace every stop, then sort by location.
    ///
    /// The sort is stable: stops sharing a location keep their input order.
    pub fn set_stops(&mut self, input: impl Into<StopInput<C>>) {
        self.stops = input.into().into_stops();
        self.sort();
    }

    /// Insert a stop after any existing stops at the same location.
    pub fn push_stop(&mut self, stop: Stop<C>) {
        let index = self
            .stops
            .partition_point(|s| s.location.total_cmp(&stop.location).is_le());
        self.stops.insert(index, stop);
    }

    /// Edit the stops in place; order is restored afterwards.
    pub fn update_stops<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Vec<Stop<C>>),
    {
        edit(&mut self.stops);
        self.sort();
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the gradient has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop colors in order.
    pub fn colors(&self) -> impl Iterator<Item = &C> + '_ {
        self.stops.iter().map(|s| &s.color)
    }

    /// Stop locations in order.
    pub fn locations(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().map(|s| s.location)
    }

    /// Placement, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Replace the placement; stops are unaffected.
    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
    }

    /// Linear placement, if this is a linear gradient.
    #[must_use]
    pub fn as_linear(&self) -> Option<&Linear> {
        match &self.geometry {
            Some(Geometry::Linear(linear)) => Some(linear),
            _ => None,
        }
    }

    /// Mutable linear placement, if this is a linear gradient.
    pub fn as_linear_mut(&mut self) -> Option<&mut Linear> {
        match &mut self.geometry {
            Some(Geometry::Linear(linear)) => Some(linear),
            _ => None,
        }
    }

    /// Radial placement, if this is a radial gradient.
    #[must_use]
    pub fn as_radial(&self) -> Option<&Radial> {
        match &self.geometry {
            Some(Geometry::Radial(radial)) => Some(radial),
            _ => None,
        }
    }

    /// Mutable radial placement, if this is a radial gradient.
    pub fn as_radial_mut(&mut self) -> Option<&mut Radial> {
        match &mut self.geometry {
            Some(Geometry::Radial(radial)) => Some(radial),
            _ => None,
        }
    }

    /// Hand the gradient to a formatter and return its output.
    pub fn format<F>(&self, formatter: F) -> String
    where
        F: FnOnce(&Self) -> String,
    {
        formatter(self)
    }

    // ------------------------------------------------------------------------
    // Harmony seeding
    // ------------------------------------------------------------------------

    /// Replace the stops with an evenly spaced harmony of `base`.
    ///
    /// Complementary seeds two stops, the base and its complement; the other
    /// harmonies seed exactly the generated colors. Geometry is kept.
    pub fn set_harmony(&mut self, harmony: Harmony, base: &C) {
        let colors = match harmony {
            Harmony::Complementary => vec![*base, base.complementary()],
            other => other.generate(base),
        };
        self.set_stops(StopInput::Colors(colors));
    }

    /// Seed with the base and its complement.
    pub fn set_complementary(&mut self, base: &C) {
        self.set_harmony(Harmony::Complementary, base);
    }

    /// Seed with triad colors.
    pub fn set_triad(&mut self, base: &C) {
        self.set_harmony(Harmony::Triad, base);
    }

    /// Seed with analogous colors.
    pub fn set_analogous(&mut self, base: &C) {
        self.set_harmony(Harmony::Analogous, base);
    }

    /// Seed with split-complementary colors.
    pub fn set_split_complementary(&mut self, base: &C) {
        self.set_harmony(Harmony::SplitComplementary, base);
    }

    /// Seed with tetradic colors.
    pub fn set_tetradic(&mut self, base: &C) {
        self.set_harmony(Harmony::Tetradic, base);
    }

    /// Seed with square colors.
    pub fn set_square(&mut self, base: &C) {
        self.set_harmony(Harmony::Square, base);
    }

    /// New gradient seeded with a harmony of `base`.
    #[must_use]
    pub fn from_harmony(harmony: Harmony, base: &C) -> Self {
        let mut gradient = Self::default();
        gradient.set_harmony(harmony, base);
        gradient
    }

    /// New gradient from the base and its complement.
    #[must_use]
    pub fn from_complementary(base: &C) -> Self {
        Self::from_harmony(Harmony::Complementary, base)
    }

    /// New gradient from triad colors.
    #[must_use]
    pub fn from_triad(base: &C) -> Self {
        Self::from_harmony(Harmony::Triad, base)
    }

    /// New gradient from analogous colors.
    #[must_use]
    pub fn from_analogous(base: &C) -> Self {
        Self::from_harmony(Harmony::Analogous, base)
    }

    /// New gradient from split-complementary colors.
    #[must_use]
    pub fn from_split_complementary(base: &C) -> Self {
        Self::from_harmony(Harmony::SplitComplementary, base)
    }

    /// New gradient from tetradic colors.
    #[must_use]
    pub fn from_tetradic(base: &C) -> Self {
        Self::from_harmony(Harmony::Tetradic, base)
    }

    /// New gradient from square colors.
    #[must_use]
    pub fn from_square(base: &C) -> Self {
        Self::from_harmony(Harmony::Square, base)
    }

    fn sort(&mut self) {
        self.stops.sort_by(|a, b| a.location.total_cmp(&b.location));
        tracing::trace!(stops = self.stops.len(), "gradient stops sorted");
    }
}
