//! Nudge the colors of a palette until text on them is readable.

use tracing::debug;

use crate::{
    color::{Component, Hex},
    contrast::{best_contrast, contrast_ratio, AA_NORMAL},
    math::normalize,
    models::Hsl,
    palette::{calculate_accessibility, GeneratedColor, GeneratedPalette},
};

/// Suffix appended to adjusted colors and to the palette name.
const SUFFIX: &str = " (Accessible)";
/// Lightness change per iteration.
const STEP: Component = 0.05;
/// Upper bound on the iterations per color.
const MAX_ITERATIONS: usize = 20;
/// Lightness bounds of an adjusted color.
const MIN_LIGHTNESS: Component = 0.05;
const MAX_LIGHTNESS: Component = 0.95;

/// Return a copy of `palette` where every color reaches a contrast of 4.5
/// against white or black where possible.
pub fn generate_accessible_variants(palette: &GeneratedPalette) -> GeneratedPalette {
    generate_accessible_variants_with_target(palette, AA_NORMAL)
}

/// Like [`generate_accessible_variants`] with a custom contrast target.
///
/// Colors below the target are stepped in HSL lightness away from the text
/// color they contrast best with, keeping hue and saturation, for at most 20
/// steps. Adjusted colors are renamed with an " (Accessible)" suffix, the
/// rest pass through untouched.
pub fn generate_accessible_variants_with_target(
    palette: &GeneratedPalette,
    target: f64,
) -> GeneratedPalette {
    let colors = palette
        .colors
        .iter()
        .map(|color| adjust(color, target))
        .collect::<Vec<_>>();

    GeneratedPalette {
        name: format!("{}{SUFFIX}", palette.name),
        standard: palette.standard,
        base_color: palette.base_color.clone(),
        accessibility: calculate_accessibility(&colors),
        colors,
    }
}

fn adjust(color: &GeneratedColor, target: f64) -> GeneratedColor {
    let original = best_contrast(color.hex);
    if original >= target {
        return color.clone();
    }

    // Dark colors are read with white text, so darken them further.
    let darken = contrast_ratio(color.hex, Hex::WHITE) > contrast_ratio(color.hex, Hex::BLACK);

    let mut adjusted = color.hex;
    for _ in 0..MAX_ITERATIONS {
        if best_contrast(adjusted) >= target {
            break;
        }

        let Hsl {
            hue,
            saturation,
            lightness,
            ..
        } = adjusted.to_hsl();

        let lightness = normalize(lightness);
        let lightness = if darken {
            (lightness - STEP).max(MIN_LIGHTNESS)
        } else {
            (lightness + STEP).min(MAX_LIGHTNESS)
        };

        let Ok(next) = Hex::try_from(Hsl::new(
            normalize(hue),
            normalize(saturation),
            lightness,
        )) else {
            break;
        };

        if next == adjusted {
            break;
        }
        adjusted = next;
    }

    // Never hand back something worse than the input.
    if best_contrast(adjusted) < original {
        adjusted = color.hex;
    }

    if adjusted == color.hex {
        debug!(color = %color.hex, target, "no lightness step improves contrast");
        return color.clone();
    }

    debug!(
        from = %color.hex,
        to = %adjusted,
        contrast = best_contrast(adjusted),
        "adjusted color for contrast"
    );

    GeneratedColor {
        hex: adjusted,
        name: format!("{}{SUFFIX}", color.name),
        ..color.clone()
    }
}
