//! Color harmonies: fixed hue-offset relationships.
//!
//! Each generator copies the base color and rotates the copies. Only hue
//! changes; every other channel, alpha included, is carried over exactly.

use std::fmt;
use std::str::FromStr;

use super::HueColor;
use crate::error::{Error, Result};

const COMPLEMENTARY: [f64; 1] = [180.0];
const TRIAD: [f64; 3] = [0.0, 120.0, 240.0];
const ANALOGOUS: [f64; 3] = [-30.0, 0.0, 30.0];
const SPLIT_COMPLEMENTARY: [f64; 3] = [0.0, -30.0, 30.0];
const TETRADIC: [f64; 4] = [0.0, 90.0, 180.0, 240.0];
const SQUARE: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Color at hue + 180.
#[must_use]
pub fn complementary<C: HueColor>(base: &C) -> C {
    let [complement] = rotate_all(base, COMPLEMENTARY);
    complement
}

/// Colors at hue +0, +120, +240.
#[must_use]
pub fn triad<C: HueColor>(base: &C) -> [C; 3] {
    rotate_all(base, TRIAD)
}

/// Colors at hue -30, +0, +30 (the base sits in the middle).
#[must_use]
pub fn analogous<C: HueColor>(base: &C) -> [C; 3] {
    rotate_all(base, ANALOGOUS)
}

/// Colors at hue +0, -30, +30.
#[must_use]
pub fn split_complementary<C: HueColor>(base: &C) -> [C; 3] {
    rotate_all(base, SPLIT_COMPLEMENTARY)
}

/// Colors at hue +0, +90, +180, +240.
#[must_use]
pub fn tetradic<C: HueColor>(base: &C) -> [C; 4] {
    rotate_all(base, TETRADIC)
}

/// Colors at hue +0, +90, +180, +270.
#[must_use]
pub fn square<C: HueColor>(base: &C) -> [C; 4] {
    rotate_all(base, SQUARE)
}

fn rotate_all<C: HueColor, const N: usize>(base: &C, degrees: [f64; N]) -> [C; N] {
    degrees.map(|d| rotate_by(base, d))
}

fn rotate_by<C: HueColor>(base: &C, degrees: f64) -> C {
    if degrees == 0.0 {
        *base
    } else {
        base.rotated(degrees)
    }
}

/// A named harmony, for callers that pick the relationship at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Harmony {
    /// Base rotated by 180.
    Complementary,
    /// Three colors evenly spaced.
    Triad,
    /// Base flanked by its 30-degree neighbours.
    Analogous,
    /// Base followed by its 30-degree neighbours.
    SplitComplementary,
    /// Two complementary-ish pairs.
    Tetradic,
    /// Four colors evenly spaced.
    Square,
}

impl Harmony {
    /// Every harmony, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Complementary,
        Self::Triad,
        Self::Analogous,
        Self::SplitComplementary,
        Self::Tetradic,
        Self::Square,
    ];

    /// Hue offsets in generation order.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &COMPLEMENTARY,
            Self::Triad => &TRIAD,
            Self::Analogous => &ANALOGOUS,
            Self::SplitComplementary => &SPLIT_COMPLEMENTARY,
            Self::Tetradic => &TETRADIC,
            Self::Square => &SQUARE,
        }
    }

    /// Generate the harmony colors for `base`.
    #[must_use]
    pub fn generate<C: HueColor>(self, base: &C) -> Vec<C> {
        self.offsets().iter().map(|&d| rotate_by(base, d)).collect()
    }

    /// Kebab-case name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triad => "triad",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Harmony {
    type Err = Error;

    /// Accepts kebab-case, snake_case and camelCase spellings.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|h| h.name().replace('-', "") == normalized)
            .ok_or_else(|| Error::UnknownHarmony(s.to_string()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Lch;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Harmonies change hue only
        #[test]
        fn prop_non_hue_channels_preserved(
            l in 0.0f64..=100.0,
            c in 0.0f64..=230.0,
            h in 0.0f64..360.0,
            a in 0.0f64..=1.0,
        ) {
            let color = Lch::with_alpha(l, c, h, a);
            for harmony in Harmony::ALL {
                for generated in harmony.generate(&color) {
                    prop_assert_eq!(generated.luminance(), l);
                    prop_assert_eq!(generated.chroma(), c);
                    prop_assert_eq!(generated.alpha(), a);
                    prop_assert!((0.0..360.0).contains(&generated.hue()));
                }
            }
        }

        /// Rotation composes additively modulo 360
        #[test]
        fn prop_rotation_composes(h in 0.0f64..360.0, d1 in -1000.0f64..1000.0, d2 in -1000.0f64..1000.0) {
            let mut stepwise = Lch::new(50.0, 50.0, h);
            stepwise.rotate(d1);
            stepwise.rotate(d2);

            let direct = Lch::new(50.0, 50.0, h).rotated(d1 + d2);

            let diff = (stepwise.hue() - direct.hue()).abs();
            prop_assert!(diff < 1e-9 || (360.0 - diff) < 1e-9,
                "stepwise {} vs direct {}", stepwise.hue(), direct.hue());
        }
    }
}
