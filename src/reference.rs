//! Base colors and the built-in Dracula reference table.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    color::{Component, Hex},
    math::{normalize, normalize_hue},
    models::Oklch,
};

/// Tonal steps of [`BaseColor::variants`], lightest first.
pub const VARIANT_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Oklch lightness of the lightest and darkest variants.
const VARIANT_LIGHTNESS: (Component, Component) = (0.95, 0.05);

/// The role a reference color plays in a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    /// Editor and UI backgrounds.
    Background,
    /// Text and secondary text.
    Foreground,
    /// Syntax accents.
    Accent,
    /// Terminal palette entries.
    Ansi,
}

/// A named color that palettes are generated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseColor {
    /// Display name.
    pub name: Cow<'static, str>,
    /// The color itself.
    pub hex: Hex,
    /// The 8-bit channels, if known up front.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<[u8; 3]>,
    /// Lightness in [0..1], chroma and hue in degrees, if known up front.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oklch: Option<[Component; 3]>,
    /// What the color is used for.
    pub description: Cow<'static, str>,
    /// The role of the color.
    pub category: ColorCategory,
}

impl BaseColor {
    /// Create a base color with no precomputed metadata.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        hex: Hex,
        description: impl Into<Cow<'static, str>>,
        category: ColorCategory,
    ) -> Self {
        Self {
            name: name.into(),
            hex,
            rgb: None,
            oklch: None,
            description: description.into(),
            category,
        }
    }

    /// A base color for a user supplied value.
    pub fn custom(hex: Hex) -> Self {
        Self::new("Custom", hex, "Custom base color", ColorCategory::Accent)
    }

    /// The 8-bit channels, taken from the metadata when present.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb.unwrap_or(self.hex.to_array())
    }

    /// Lightness, chroma and hue in Oklch, taken from the metadata when
    /// present.
    pub fn oklch(&self) -> [Component; 3] {
        self.oklch.unwrap_or_else(|| {
            let oklch = self.hex.to_oklch();
            [
                normalize(oklch.lightness),
                normalize(oklch.chroma),
                normalize_hue(oklch.hue),
            ]
        })
    }

    /// Tonal variants keyed by step, from 50 (lightest) to 950 (darkest).
    ///
    /// Chroma and hue are kept. Lightness runs from 0.95 at step 0 down to
    /// the base lightness at step 500 and on to 0.05 at step 950.
    pub fn variants(&self) -> IndexMap<u16, Hex> {
        let [base, chroma, hue] = self.oklch();
        let (light, dark) = VARIANT_LIGHTNESS;

        VARIANT_STEPS
            .into_iter()
            .map(|step| {
                let step_f = Component::from(step);
                let lightness = if step <= 500 {
                    base + (500.0 - step_f) / 500.0 * (light - base)
                } else {
                    base - (step_f - 500.0) / 450.0 * (base - dark)
                };
                let lightness = lightness.clamp(dark, light);

                let hex = Hex::try_from_model(&Oklch::new(lightness, chroma, hue))
                    .unwrap_or_else(|err| {
                        warn!(color = %self.name, step, error = %err, "variant failed, using gray");
                        Hex::FALLBACK_GRAY
                    });
                (step, hex)
            })
            .collect()
    }
}

const fn reference(
    name: &'static str,
    hex: Hex,
    oklch: [Component; 3],
    description: &'static str,
    category: ColorCategory,
) -> BaseColor {
    BaseColor {
        name: Cow::Borrowed(name),
        hex,
        rgb: Some(hex.to_array()),
        oklch: Some(oklch),
        description: Cow::Borrowed(description),
        category,
    }
}

/// The Dracula theme colors.
#[rustfmt::skip]
pub static DRACULA_COLORS: [BaseColor; 12] = {
    use ColorCategory::*;

    [
        reference("Background", Hex::new(0x28, 0x2a, 0x36), [0.19, 0.02, 264.0], "Main background color", Background),
        reference("Current Line", Hex::new(0x44, 0x47, 0x5a), [0.31, 0.03, 264.0], "Current line highlight", Background),
        reference("Selection", Hex::new(0x62, 0x72, 0xa4), [0.49, 0.08, 264.0], "Selection background", Background),
        reference("Foreground", Hex::new(0xf8, 0xf8, 0xf2), [0.97, 0.01, 102.0], "Main text color", Foreground),
        reference("Comment", Hex::new(0x62, 0x72, 0xa4), [0.49, 0.08, 264.0], "Comments and secondary text", Foreground),
        reference("Cyan", Hex::new(0x8b, 0xe9, 0xfd), [0.87, 0.08, 199.0], "Cyan accent color", Accent),
        reference("Green", Hex::new(0x50, 0xfa, 0x7b), [0.85, 0.15, 141.0], "Green accent color", Accent),
        reference("Orange", Hex::new(0xff, 0xb8, 0x6c), [0.79, 0.1, 71.0], "Orange accent color", Accent),
        reference("Pink", Hex::new(0xff, 0x79, 0xc6), [0.74, 0.15, 334.0], "Pink accent color", Accent),
        reference("Purple", Hex::new(0xbd, 0x93, 0xf9), [0.72, 0.12, 293.0], "Purple accent color", Accent),
        reference("Red", Hex::new(0xff, 0x55, 0x55), [0.67, 0.17, 27.0], "Red accent color", Accent),
        reference("Yellow", Hex::new(0xf1, 0xfa, 0x8c), [0.92, 0.08, 102.0], "Yellow accent color", Accent),
    ]
};

/// Look up a reference color by name, ignoring case.
pub fn find_reference_color(name: &str) -> Option<&'static BaseColor> {
    DRACULA_COLORS
        .iter()
        .find(|color| color.name.eq_ignore_ascii_case(name))
}
