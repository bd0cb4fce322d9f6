//! Palette generation.
//!
//! A [`GeneratedPalette`] is produced from a [`BaseColor`] and a
//! [`PaletteConfig`] by the generator of the configured [`Standard`]:
//!
//! ```rust
//! use chromatone::{
//!     palette::{generate, PaletteConfig, Standard},
//!     reference::BaseColor,
//!     Hex,
//! };
//!
//! let base = BaseColor::custom(Hex::new(0xff, 0x55, 0x55));
//! let config = PaletteConfig::new(Standard::Oklch, 11, [0.05, 0.95]).unwrap();
//! let palette = generate(&base, &config);
//!
//! assert_eq!(palette.colors.len(), 11);
//! assert_eq!(palette.name, "OKLCH Custom");
//! ```

mod accessibility;
mod accessible;
mod config;
mod generate;
mod manager;
mod standard;

use serde::{Deserialize, Serialize};

use crate::{color::Component, color::Hex, reference::BaseColor};

pub use accessibility::{calculate_accessibility, AccessibilitySummary, FOREGROUND};
pub use accessible::{generate_accessible_variants, generate_accessible_variants_with_target};
pub use config::{ConfigTable, PaletteConfig};
pub use generate::{generate, Generator};
pub use manager::{
    generate_palettes_for_color, generate_palettes_for_keys, generate_palettes_with,
    PaletteGenerationResult,
};
pub use standard::{Category, HarmonyRule, Standard, StandardSet};

/// What a generated color is suited for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Usage {
    /// Backgrounds and large areas.
    Surface,
    /// Text and icons drawn on a surface.
    OnSurface,
    /// The main brand color.
    Primary,
    /// Supporting tints.
    Secondary,
    /// Highlights.
    Accent,
    /// Neutral tones.
    Neutral,
}

impl Usage {
    /// The usage of a color with the given lightness in [0..1].
    pub fn for_lightness(lightness: Component) -> Self {
        if lightness > 0.8 {
            Usage::Surface
        } else if lightness > 0.6 {
            Usage::Secondary
        } else if lightness > 0.4 {
            Usage::Primary
        } else if lightness > 0.2 {
            Usage::Accent
        } else {
            Usage::OnSurface
        }
    }

    /// The usage of a Material Design tonal step.
    pub fn for_material_step(step: u16) -> Self {
        match step {
            0..=100 => Usage::Surface,
            101..=300 => Usage::Secondary,
            500 => Usage::Primary,
            301..=700 => Usage::Accent,
            _ => Usage::OnSurface,
        }
    }

    /// The stable key of the usage.
    pub fn key(&self) -> &'static str {
        match self {
            Usage::Surface => "surface",
            Usage::OnSurface => "on-surface",
            Usage::Primary => "primary",
            Usage::Secondary => "secondary",
            Usage::Accent => "accent",
            Usage::Neutral => "neutral",
        }
    }
}

/// One entry of a generated palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedColor {
    /// The color.
    pub hex: Hex,
    /// Display name.
    pub name: String,
    /// The lightness the color was generated at, in [0..1].
    pub lightness: Component,
    /// Chroma or saturation in [0, 1], when the standard tracks one. LCh
    /// chroma is stored relative to 150.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chroma: Option<Component>,
    /// Hue in degrees, when the standard tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<Component>,
    /// What the color is suited for.
    pub usage: Usage,
}

/// An ordered palette generated from a base color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPalette {
    /// Display name.
    pub name: String,
    /// The standard the palette was generated with.
    pub standard: Standard,
    /// The color the palette was generated from.
    pub base_color: BaseColor,
    /// The colors, in generation order.
    pub colors: Vec<GeneratedColor>,
    /// Contrast ratios and the aggregate WCAG level.
    pub accessibility: AccessibilitySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_by_lightness() {
        assert_eq!(Usage::for_lightness(0.95), Usage::Surface);
        assert_eq!(Usage::for_lightness(0.8), Usage::Secondary);
        assert_eq!(Usage::for_lightness(0.5), Usage::Primary);
        assert_eq!(Usage::for_lightness(0.3), Usage::Accent);
        assert_eq!(Usage::for_lightness(0.2), Usage::OnSurface);
    }

    #[test]
    fn usage_by_material_step() {
        let usages = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]
            .map(Usage::for_material_step)
            .map(|usage| usage.key());
        assert_eq!(
            usages,
            [
                "surface",
                "surface",
                "secondary",
                "secondary",
                "accent",
                "primary",
                "accent",
                "accent",
                "on-surface",
                "on-surface",
                "on-surface",
            ]
        );
    }

    #[test]
    fn usage_serializes_as_key() {
        assert_eq!(
            serde_json::to_string(&Usage::OnSurface).unwrap(),
            "\"on-surface\""
        );
    }
}
