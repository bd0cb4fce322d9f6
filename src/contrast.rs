//! WCAG 2.x relative luminance, contrast ratios and conformance levels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{color::Hex, models::linearize};

/// Minimum contrast for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum contrast for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum contrast for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum contrast for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// A WCAG conformance level, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Neither AA nor AAA is met.
    #[serde(rename = "fail")]
    Fail,
    /// Level AA.
    #[serde(rename = "AA")]
    AA,
    /// Level AAA.
    #[serde(rename = "AAA")]
    AAA,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WcagLevel::Fail => "fail",
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        })
    }
}

/// The relative luminance of a color, in [0..1].
pub fn relative_luminance(color: Hex) -> f64 {
    let linear = color.to_srgb().to_components().map(linearize);

    0.2126 * linear.0 as f64 + 0.7152 * linear.1 as f64 + 0.0722 * linear.2 as f64
}

/// The contrast ratio between two colors, in [1..21]. The order of the
/// arguments does not matter.
pub fn contrast_ratio(a: Hex, b: Hex) -> f64 {
    let a = relative_luminance(a);
    let b = relative_luminance(b);

    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Rate a contrast ratio against the WCAG thresholds.
pub fn wcag_rating(ratio: f64, large_text: bool) -> WcagLevel {
    let (aa, aaa) = if large_text {
        (AA_LARGE, AAA_LARGE)
    } else {
        (AA_NORMAL, AAA_NORMAL)
    };

    if ratio >= aaa {
        WcagLevel::AAA
    } else if ratio >= aa {
        WcagLevel::AA
    } else {
        WcagLevel::Fail
    }
}

/// The better of the contrast ratios against pure white and pure black.
pub fn best_contrast(color: Hex) -> f64 {
    contrast_ratio(color, Hex::WHITE).max(contrast_ratio(color, Hex::BLACK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn luminance_of_primaries() {
        assert_abs_diff_eq!(relative_luminance(Hex::WHITE), 1.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(relative_luminance(Hex::BLACK), 0.0);
        assert_abs_diff_eq!(
            relative_luminance(Hex::new(255, 0, 0)),
            0.2126,
            epsilon = 1.0e-6
        );
        assert_abs_diff_eq!(
            relative_luminance(Hex::new(255, 85, 85)),
            0.28413,
            epsilon = 1.0e-4
        );
    }

    #[test]
    fn black_on_white() {
        assert_abs_diff_eq!(
            contrast_ratio(Hex::BLACK, Hex::WHITE),
            21.0,
            epsilon = 1.0e-4
        );
    }

    #[test]
    fn ratio_is_symmetric_and_reflexive() {
        let a = Hex::new(40, 42, 54);
        let b = Hex::new(248, 248, 242);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert_eq!(contrast_ratio(a, a), 1.0);
    }

    #[test]
    fn gray_just_passes_aa() {
        let ratio = contrast_ratio(Hex::new(118, 118, 118), Hex::WHITE);
        assert_abs_diff_eq!(ratio, 4.54, epsilon = 0.01);
        assert_eq!(wcag_rating(ratio, false), WcagLevel::AA);
        assert_eq!(wcag_rating(ratio, true), WcagLevel::AAA);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(wcag_rating(7.0, false), WcagLevel::AAA);
        assert_eq!(wcag_rating(6.99, false), WcagLevel::AA);
        assert_eq!(wcag_rating(4.49, false), WcagLevel::Fail);
        assert_eq!(wcag_rating(3.0, true), WcagLevel::AA);
        assert_eq!(wcag_rating(2.99, true), WcagLevel::Fail);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(WcagLevel::Fail < WcagLevel::AA);
        assert!(WcagLevel::AA < WcagLevel::AAA);
        assert_eq!(serde_json::to_string(&WcagLevel::Fail).unwrap(), "\"fail\"");
        assert_eq!(WcagLevel::AAA.to_string(), "AAA");
    }
}
