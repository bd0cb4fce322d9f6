//! Match arbitrary colors against the reference table.

use serde::Serialize;
use tracing::warn;

use crate::{
    color::Hex,
    math::round_to,
    models::Lab,
    parse::parse_color,
    reference::{BaseColor, DRACULA_COLORS},
};

/// Returned by [`normalize_color_to_hex`] for input that is not a color.
pub const FALLBACK_COLOR: Hex = Hex::new(0xff, 0x79, 0xc6);

/// Number of suggestions returned by [`find_closest_reference_colors`].
const MAX_SUGGESTIONS: usize = 5;

/// A reference color close to some input color.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSuggestion {
    /// CIEDE2000 distance to the input.
    pub distance: f64,
    /// The reference color.
    pub reference: &'static BaseColor,
    /// Similarity in percent, rounded to one decimal.
    pub similarity: f64,
}

/// The CIEDE2000 color difference between two CIE-Lab colors, with unit
/// weighting factors.
pub fn delta_e(first: &Lab, second: &Lab) -> f64 {
    const POW_25_7: f64 = 6_103_515_625.0;

    let (l1, a1, b1) = (first.lightness as f64, first.a as f64, first.b as f64);
    let (l2, a2, b2) = (second.lightness as f64, second.a as f64, second.b as f64);

    let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW_25_7)).sqrt());

    let a1 = (1.0 + g) * a1;
    let a2 = (1.0 + g) * a2;

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    let hue = |b: f64, a: f64| {
        if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    };
    let h1 = hue(b1, a1);
    let h2 = hue(b2, a2);

    let achromatic = c1 * c2 == 0.0;

    let delta_l = l2 - l1;
    let delta_c = c2 - c1;
    let delta_h = if achromatic {
        0.0
    } else {
        let d = h2 - h1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let delta_h = 2.0 * (c1 * c2).sqrt() * (delta_h.to_radians() / 2.0).sin();

    let l_bar = (l1 + l2) / 2.0;
    let c_bar = (c1 + c2) / 2.0;
    let h_bar = if achromatic {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let cos = |degrees: f64| degrees.to_radians().cos();
    let t = 1.0 - 0.17 * cos(h_bar - 30.0) + 0.24 * cos(2.0 * h_bar) + 0.32 * cos(3.0 * h_bar + 6.0)
        - 0.20 * cos(4.0 * h_bar - 63.0);

    let delta_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
    let c_bar_7 = c_bar.powi(7);
    let r_c = 2.0 * (c_bar_7 / (c_bar_7 + POW_25_7)).sqrt();

    let l_offset = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar;
    let s_h = 1.0 + 0.015 * c_bar * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let l = delta_l / s_l;
    let c = delta_c / s_c;
    let h = delta_h / s_h;

    (l * l + c * c + h * h + r_t * c * h).sqrt()
}

/// The reference colors closest to `input`, nearest first. Text that is not
/// a color yields no suggestions.
pub fn find_closest_reference_colors(input: &str) -> Vec<ColorSuggestion> {
    let Ok(color) = parse_color(input) else {
        return Vec::new();
    };
    let lab = color.to_lab();

    let mut suggestions = DRACULA_COLORS
        .iter()
        .map(|reference| {
            let distance = delta_e(&lab, &reference.hex.to_lab());
            let similarity = (100.0 - distance * 4.0).clamp(0.0, 100.0);

            ColorSuggestion {
                distance,
                reference,
                similarity: round_to(similarity, 1),
            }
        })
        .collect::<Vec<_>>();

    suggestions.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Whether `input` can be read as a color.
pub fn is_valid_color(input: &str) -> bool {
    parse_color(input).is_ok()
}

/// Read `input` as a color, falling back to [`FALLBACK_COLOR`].
pub fn normalize_color_to_hex(input: &str) -> Hex {
    parse_color(input).unwrap_or_else(|err| {
        warn!(input, error = %err, "could not normalize color, using fallback");
        FALLBACK_COLOR
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identical_colors_have_no_difference() {
        let lab = Hex::new(0xbd, 0x93, 0xf9).to_lab();
        assert_eq!(delta_e(&lab, &lab), 0.0);
    }

    #[test]
    fn reference_pairs() {
        // Sharma, Wu and Dalal test data.
        #[rustfmt::skip]
        let pairs = [
            ((50.0, 2.6772, -79.7751), (50.0, 0.0, -82.7485), 2.0425),
            ((50.0, 2.5, 0.0), (73.0, 25.0, -18.0), 27.1492),
            ((50.0, 2.49, -0.001), (50.0, -2.49, 0.0009), 7.1792),
            ((22.7233, 20.0904, -46.6940), (23.0331, 14.9730, -42.5619), 2.0373),
        ];

        for ((l1, a1, b1), (l2, a2, b2), expected) in pairs {
            let first = Lab::new(l1, a1, b1);
            let second = Lab::new(l2, a2, b2);
            assert_abs_diff_eq!(delta_e(&first, &second), expected, epsilon = 1.0e-3);
            assert_abs_diff_eq!(delta_e(&second, &first), expected, epsilon = 1.0e-3);
        }
    }

    #[test]
    fn exact_reference_color_comes_first() {
        let suggestions = find_closest_reference_colors("#ff5555");
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].reference.name, "Red");
        assert_eq!(suggestions[0].distance, 0.0);
        assert_eq!(suggestions[0].similarity, 100.0);
        assert!(suggestions
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance));
    }

    #[test]
    fn shared_hex_values_keep_table_order() {
        let suggestions = find_closest_reference_colors("rgb(98, 114, 164)");
        assert_eq!(suggestions[0].reference.name, "Selection");
        assert_eq!(suggestions[1].reference.name, "Comment");
    }

    #[test]
    fn near_colors_are_similar() {
        let suggestions = find_closest_reference_colors("#fe5656");
        assert_eq!(suggestions[0].reference.name, "Red");
        assert!(suggestions[0].similarity > 95.0 && suggestions[0].similarity < 100.0);
        // Rounded to one decimal.
        let scaled = suggestions[0].similarity * 10.0;
        assert_abs_diff_eq!(scaled, scaled.round(), epsilon = 1.0e-9);
    }

    #[test]
    fn invalid_input() {
        assert!(find_closest_reference_colors("not a color").is_empty());
        assert!(!is_valid_color("#12345"));
        assert!(is_valid_color("hsl(120, 50%, 50%)"));
        assert_eq!(normalize_color_to_hex("nope"), FALLBACK_COLOR);
        assert_eq!(
            normalize_color_to_hex("RGB(255, 0, 0)").to_string(),
            "#ff0000"
        );
    }
}
