//! Gradient placement: linear and radial geometry.

use std::f64::consts::PI;

use crate::geometry::Point;

/// Where a gradient is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Geometry {
    /// Along a line segment.
    Linear(Linear),
    /// Outward from a center point.
    Radial(Radial),
}

/// Linear placement between two points, plus a presentation angle.
///
/// The angle is reduced with a plain remainder: `370` becomes `10`, but `-90`
/// stays `-90`. Hue wrapping in the color model folds negatives; this does not.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LinearParts"))]
pub struct Linear {
    angle: f64,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

/// Unreduced angle and endpoints, routed through [`Linear::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LinearParts {
    #[serde(default)]
    angle: f64,
    start: Point,
    end: Point,
}

#[cfg(feature = "serde")]
impl From<LinearParts> for Linear {
    fn from(parts: LinearParts) -> Self {
        Self::new(parts.angle, parts.start, parts.end)
    }
}

impl Linear {
    /// Create a linear placement.
    #[must_use]
    pub fn new(angle: f64, start: Point, end: Point) -> Self {
        let mut linear = Self {
            angle: 0.0,
            start,
            end,
        };
        linear.set_angle(angle);
        linear
    }

    /// Angle in degrees, in `(-360, 360)`.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the angle, reduced by `% 360`.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle % 360.0;
    }

    /// Horizontal extent, `end.x - start.x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Move the end point so the horizontal extent is `width`.
    pub fn set_width(&mut self, width: f64) {
        self.end.x = self.start.x + width;
    }

    /// Vertical extent, `end.y - start.y`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Move the end point so the vertical extent is `height`.
    pub fn set_height(&mut self, height: f64) {
        self.end.y = self.start.y + height;
    }

    /// Width and height as a point.
    #[must_use]
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Set width and height together.
    pub fn set_size(&mut self, size: Point) {
        self.set_width(size.x);
        self.set_height(size.y);
    }

    /// Distance from start to end.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Move the end point along the current direction so the length is `length`.
    ///
    /// A zero-length segment has no direction and extends along +x.
    pub fn set_length(&mut self, length: f64) {
        let direction = self.height().atan2(self.width());
        self.end = Point::new(
            self.start.x + length * direction.cos(),
            self.start.y + length * direction.sin(),
        );
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Translate both endpoints so the midpoint lands on `center`.
    pub fn set_center(&mut self, center: Point) {
        let current = self.center();
        let (dx, dy) = (center.x - current.x, center.y - current.y);
        self.start = self.start.translate(dx, dy);
        self.end = self.end.translate(dx, dy);
    }
}

/// Radial placement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radial {
    /// Center of the gradient.
    pub center: Point,
    /// Radius of the outermost stop.
    pub radius: f64,
}

impl Radial {
    /// Create a radial placement.
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Twice the radius.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Set the radius from a diameter.
    pub fn set_diameter(&mut self, diameter: f64) {
        self.radius = diameter / 2.0;
    }

    /// Circumference of the outer circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Set the radius from a circumference.
    pub fn set_circumference(&mut self, circumference: f64) {
        self.radius = circumference / (2.0 * PI);
    }
}
