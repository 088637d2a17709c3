//! Color lookup along a gradient's stops.

use crate::color::{HueColor, Rgba};
use crate::gradient::Gradient;

/// Snapshot of a gradient's stops as display colors.
///
/// Interpolation happens between the 8-bit colors, not in the source color
/// space, which matches how browsers render `linear-gradient`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSampler {
    stops: Vec<(f32, Rgba)>,
}

impl GradientSampler {
    /// Snapshot `gradient`. Stops with a non-finite location are skipped.
    #[must_use]
    pub fn new<C: HueColor>(gradient: &Gradient<C>) -> Self {
        let stops = gradient
            .stops()
            .iter()
            .filter(|stop| stop.location.is_finite())
            .map(|stop| (stop.location as f32, stop.color.to_rgba()))
            .collect();

        Self { stops }
    }

    /// Number of usable stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether there is nothing to sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at position `t`.
    ///
    /// Positions before the first stop take its color, positions after the
    /// last take the last color. An empty sampler returns transparent.
    #[must_use]
    pub fn sample(&self, t: f32) -> Rgba {
        let (Some(&(first_at, first)), Some(&(last_at, last))) =
            (self.stops.first(), self.stops.last())
        else {
            return Rgba::TRANSPARENT;
        };

        if t.is_nan() || t <= first_at {
            return first;
        }
        if t >= last_at {
            return last;
        }

        // First stop strictly past t; the one before it is at or below t.
        let upper = self.stops.partition_point(|&(at, _)| at <= t);
        let (lo_at, lo) = self.stops[upper - 1];
        let (hi_at, hi) = self.stops[upper];

        let span = hi_at - lo_at;
        if span <= f32::EPSILON {
            return hi;
        }
        lo.lerp(hi, (t - lo_at) / span)
    }

    /// `count` evenly spaced samples from 0 to 1 inclusive.
    #[must_use]
    pub fn palette(&self, count: usize) -> Vec<Rgba> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => {
                let last = (count - 1) as f32;
                (0..count).map(|i| self.sample(i as f32 / last)).collect()
            }
        }
    }
}
