//! Generate palettes for several standards at once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    palette::{generate, ConfigTable, GeneratedPalette, Standard, StandardSet},
    reference::BaseColor,
};

/// Palettes generated for one base color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteGenerationResult {
    /// One palette per generated standard, in request order.
    pub palettes: Vec<GeneratedPalette>,
    /// The color the palettes were generated from.
    pub base_color: BaseColor,
    /// Number of colors over all palettes.
    pub total_colors: usize,
    /// The standards that were requested.
    pub standards: Vec<Standard>,
}

/// Generate palettes for `base` with the built-in configuration of every
/// standard in `standards`.
pub fn generate_palettes_for_color(
    base: &BaseColor,
    standards: StandardSet,
) -> PaletteGenerationResult {
    generate_palettes_with(&ConfigTable::default(), base, &standards.standards())
}

/// Generate palettes for `base` for each standard key. Unknown keys are
/// skipped.
pub fn generate_palettes_for_keys<S: AsRef<str>>(
    base: &BaseColor,
    keys: &[S],
) -> PaletteGenerationResult {
    let standards = keys
        .iter()
        .filter_map(|key| match key.as_ref().parse::<Standard>() {
            Ok(standard) => Some(standard),
            Err(err) => {
                debug!(error = %err, "skipping unknown palette standard");
                None
            }
        })
        .collect::<Vec<_>>();

    generate_palettes_with(&ConfigTable::default(), base, &standards)
}

/// Generate palettes for `base` with the configurations in `table`, in the
/// order of `standards`.
pub fn generate_palettes_with(
    table: &ConfigTable,
    base: &BaseColor,
    standards: &[Standard],
) -> PaletteGenerationResult {
    let palettes = standards
        .iter()
        .map(|&standard| generate(base, &table.get(standard)))
        .collect::<Vec<_>>();

    let total_colors = palettes.iter().map(|palette| palette.colors.len()).sum();

    debug!(
        base = %base.hex,
        palettes = palettes.len(),
        total_colors,
        "generated palettes"
    );

    PaletteGenerationResult {
        palettes,
        base_color: base.clone(),
        total_colors,
        standards: standards.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Hex, palette::PaletteConfig, reference::find_reference_color};

    #[test]
    fn default_standards() {
        let red = find_reference_color("Red").unwrap();
        let result = generate_palettes_for_color(red, StandardSet::default());

        assert_eq!(
            result.standards,
            vec![Standard::Material, Standard::Hsluv, Standard::Oklch]
        );
        // 11 material steps, 9 hsluv, 11 oklch
        assert_eq!(result.total_colors, 31);
        assert_eq!(result.palettes[0].name, "Material Red");
        assert_eq!(result.base_color, *red);
    }

    #[test]
    fn every_standard() {
        let base = BaseColor::custom(Hex::new(0xbd, 0x93, 0xf9));
        let result = generate_palettes_for_color(&base, StandardSet::all());
        assert_eq!(result.palettes.len(), 10);
        assert_eq!(
            result.total_colors,
            11 + 9 + 11 + 9 + 9 + 9 + 12 + 10 + 8 + 10
        );
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let base = BaseColor::custom(Hex::new(0x50, 0xfa, 0x7b));
        let result = generate_palettes_for_keys(&base, &["cubehelix", "munsell", "hcl"]);

        assert_eq!(result.standards, vec![Standard::Cubehelix, Standard::Hcl]);
        assert_eq!(result.palettes.len(), 2);
        assert_eq!(result.total_colors, 19);
    }

    #[test]
    fn no_standards_gives_an_empty_result() {
        let base = BaseColor::custom(Hex::BLACK);
        let result = generate_palettes_for_keys::<&str>(&base, &[]);
        assert!(result.palettes.is_empty());
        assert_eq!(result.total_colors, 0);
    }

    #[test]
    fn custom_table() {
        let mut table = ConfigTable::default();
        table.insert(PaletteConfig::new(Standard::Hsluv, 3, [0.2, 0.4]).unwrap());

        let base = BaseColor::custom(Hex::new(0xff, 0xb8, 0x6c));
        let result = generate_palettes_with(&table, &base, &[Standard::Hsluv, Standard::Hsluv]);
        assert_eq!(result.total_colors, 6);
        assert_eq!(result.palettes[0], result.palettes[1]);
    }

    #[test]
    fn result_serializes_in_camel_case() {
        let base = BaseColor::custom(Hex::new(0xff, 0x79, 0xc6));
        let result = generate_palettes_for_keys(&base, &["hpluv"]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalColors"], 8);
        assert_eq!(json["standards"][0], "hpluv");
        assert_eq!(json["palettes"][0]["baseColor"]["hex"], "#ff79c6");
        assert_eq!(
            json["palettes"][0]["accessibility"]["contrastRatios"]["0-white"]
                .as_f64()
                .map(|ratio| ratio > 1.0),
            Some(true)
        );
    }
}
