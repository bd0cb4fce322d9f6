//! The palette standards, their metadata and the harmony rules.

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{color::Component, error::ParseError, math::normalize_hue};

/// A color standard a palette can be generated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Standard {
    /// Material Design 3 tonal palettes.
    Material,
    /// HSLuv inspired lightness ramp.
    Hsluv,
    /// OKLCH inspired lightness ramp.
    Oklch,
    /// CIE LCh ramp.
    Hcl,
    /// CAM16-UCS inspired ramp.
    #[serde(rename = "cam16-ucs")]
    Cam16Ucs,
    /// IPT intensity ramp.
    Ipt,
    /// Hue rotation by a harmony rule.
    ColorHarmony,
    /// CIELAB lightness ramp.
    Cielab,
    /// HPLuv inspired pastels.
    Hpluv,
    /// Dave Green's cubehelix spiral.
    Cubehelix,
}

/// Groups the standards are presented in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Widely used design system standards.
    Popular,
    /// Color science models.
    Scientific,
    /// Standards aimed at the web.
    Web,
    /// Artistic rules.
    Artistic,
}

impl Standard {
    /// Every standard, in presentation order.
    pub const ALL: [Standard; 10] = [
        Standard::Material,
        Standard::Hsluv,
        Standard::Oklch,
        Standard::Hcl,
        Standard::Cam16Ucs,
        Standard::Ipt,
        Standard::ColorHarmony,
        Standard::Cielab,
        Standard::Hpluv,
        Standard::Cubehelix,
    ];

    /// The stable key of the standard.
    pub fn key(&self) -> &'static str {
        match self {
            Standard::Material => "material",
            Standard::Hsluv => "hsluv",
            Standard::Oklch => "oklch",
            Standard::Hcl => "hcl",
            Standard::Cam16Ucs => "cam16-ucs",
            Standard::Ipt => "ipt",
            Standard::ColorHarmony => "color-harmony",
            Standard::Cielab => "cielab",
            Standard::Hpluv => "hpluv",
            Standard::Cubehelix => "cubehelix",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Material => "Material Design 3",
            Standard::Hsluv => "HSLuv",
            Standard::Oklch => "OKLCH",
            Standard::Hcl => "HCL (CIE LCH)",
            Standard::Cam16Ucs => "CAM16-UCS",
            Standard::Ipt => "IPT Color Space",
            Standard::ColorHarmony => "Color Harmony",
            Standard::Cielab => "CIE LAB Curves",
            Standard::Hpluv => "HPLuv (Pastel)",
            Standard::Cubehelix => "Cubehelix",
        }
    }

    /// The prefix used for palette names.
    pub fn short_name(&self) -> &'static str {
        match self {
            Standard::Material => "Material",
            Standard::Hsluv => "HSLuv",
            Standard::Oklch => "OKLCH",
            Standard::Hcl => "HCL",
            Standard::Cam16Ucs => "CAM16",
            Standard::Ipt => "IPT",
            Standard::ColorHarmony => "Color Harmony",
            Standard::Cielab => "CIELAB",
            Standard::Hpluv => "HPLuv",
            Standard::Cubehelix => "Cubehelix",
        }
    }

    /// One line description.
    pub fn description(&self) -> &'static str {
        match self {
            Standard::Material => "Google's Material Design 3 tonal palette system",
            Standard::Hsluv => "Perceptually uniform HSL alternative based on CIELUV",
            Standard::Oklch => "Latest perceptually uniform color space (CSS Color 4)",
            Standard::Hcl => "Cylindrical representation of CIE LAB color space",
            Standard::Cam16Ucs => "Latest CIE color appearance model with uniform color space",
            Standard::Ipt => "Image Processing Transform for HDR and wide gamut",
            Standard::ColorHarmony => {
                "Traditional color harmony rules (complementary, triadic, etc.)"
            }
            Standard::Cielab => "Bézier curves through CIE LAB color space",
            Standard::Hpluv => "HSLuv variant optimized for soft, pastel colors",
            Standard::Cubehelix => "Perceptually uniform spiral through RGB cube",
        }
    }

    /// What the standard works best for.
    pub fn best_for(&self) -> &'static str {
        match self {
            Standard::Material => "UI/UX design, Android apps, web interfaces",
            Standard::Hsluv => "Data visualization, perceptual uniformity",
            Standard::Oklch => "Modern web design, wide gamut displays",
            Standard::Hcl => "Print design, color science applications",
            Standard::Cam16Ucs => "Professional color matching, scientific applications",
            Standard::Ipt => "HDR content, image processing, photography",
            Standard::ColorHarmony => "Artistic design, color theory applications",
            Standard::Cielab => "Accessible color palettes, smooth gradients",
            Standard::Hpluv => "Pastel designs, soft UI themes, minimalist interfaces",
            Standard::Cubehelix => "Scientific visualization, data representation",
        }
    }

    /// The color space the standard is named after.
    pub fn color_space(&self) -> &'static str {
        match self {
            Standard::Material => "HCT (Hue-Chroma-Tone)",
            Standard::Hsluv => "HSLuv",
            Standard::Oklch => "OKLCH",
            Standard::Hcl => "LCH",
            Standard::Cam16Ucs => "CAM16-UCS",
            Standard::Ipt => "IPT",
            Standard::ColorHarmony => "Various",
            Standard::Cielab => "CIE LAB",
            Standard::Hpluv => "HPLuv",
            Standard::Cubehelix => "RGB",
        }
    }

    /// The group the standard is presented in.
    pub fn category(&self) -> Category {
        match self {
            Standard::Material | Standard::Hsluv | Standard::Oklch => Category::Popular,
            Standard::Hcl | Standard::Cam16Ucs | Standard::Ipt | Standard::Cubehelix => {
                Category::Scientific
            }
            Standard::Cielab => Category::Web,
            Standard::ColorHarmony | Standard::Hpluv => Category::Artistic,
        }
    }

    fn flag(&self) -> StandardSet {
        match self {
            Standard::Material => StandardSet::MATERIAL,
            Standard::Hsluv => StandardSet::HSLUV,
            Standard::Oklch => StandardSet::OKLCH,
            Standard::Hcl => StandardSet::HCL,
            Standard::Cam16Ucs => StandardSet::CAM16_UCS,
            Standard::Ipt => StandardSet::IPT,
            Standard::ColorHarmony => StandardSet::COLOR_HARMONY,
            Standard::Cielab => StandardSet::CIELAB,
            Standard::Hpluv => StandardSet::HPLUV,
            Standard::Cubehelix => StandardSet::CUBEHELIX,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Standard {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Standard::ALL
            .into_iter()
            .find(|standard| standard.key() == key)
            .ok_or_else(|| ParseError::UnknownStandard(s.to_string()))
    }
}

bitflags! {
    /// A set of standards to generate palettes for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StandardSet : u16 {
        /// [`Standard::Material`]
        const MATERIAL = 1 << 0;
        /// [`Standard::Hsluv`]
        const HSLUV = 1 << 1;
        /// [`Standard::Oklch`]
        const OKLCH = 1 << 2;
        /// [`Standard::Hcl`]
        const HCL = 1 << 3;
        /// [`Standard::Cam16Ucs`]
        const CAM16_UCS = 1 << 4;
        /// [`Standard::Ipt`]
        const IPT = 1 << 5;
        /// [`Standard::ColorHarmony`]
        const COLOR_HARMONY = 1 << 6;
        /// [`Standard::Cielab`]
        const CIELAB = 1 << 7;
        /// [`Standard::Hpluv`]
        const HPLUV = 1 << 8;
        /// [`Standard::Cubehelix`]
        const CUBEHELIX = 1 << 9;

        /// The popular standards, also the default selection.
        const POPULAR = Self::MATERIAL.bits() | Self::HSLUV.bits() | Self::OKLCH.bits();
        /// The color science standards.
        const SCIENTIFIC = Self::HCL.bits()
            | Self::CAM16_UCS.bits()
            | Self::IPT.bits()
            | Self::CUBEHELIX.bits();
        /// Standards aimed at the web.
        const WEB = Self::CIELAB.bits();
        /// Artistic standards.
        const ARTISTIC = Self::COLOR_HARMONY.bits() | Self::HPLUV.bits();
    }
}

impl StandardSet {
    /// The standards in the set, in presentation order.
    pub fn standards(&self) -> Vec<Standard> {
        Standard::ALL
            .into_iter()
            .filter(|standard| self.contains(standard.flag()))
            .collect()
    }

    /// The preset for a category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Popular => Self::POPULAR,
            Category::Scientific => Self::SCIENTIFIC,
            Category::Web => Self::WEB,
            Category::Artistic => Self::ARTISTIC,
        }
    }
}

impl Default for StandardSet {
    fn default() -> Self {
        Self::POPULAR
    }
}

impl From<Standard> for StandardSet {
    fn from(value: Standard) -> Self {
        value.flag()
    }
}

impl FromIterator<Standard> for StandardSet {
    fn from_iter<T: IntoIterator<Item = Standard>>(iter: T) -> Self {
        iter.into_iter()
            .fold(StandardSet::empty(), |set, standard| set | standard.flag())
    }
}

/// A rule that picks hues relative to a base hue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyRule {
    /// Only the base hue.
    Monochromatic,
    /// The base hue and its neighbours at ±30°.
    #[default]
    Analogous,
    /// The base hue and its opposite.
    Complementary,
    /// The base hue and the two neighbours of its opposite.
    SplitComplementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues on a rectangle.
    Tetradic,
    /// Four hues 90° apart.
    Square,
    /// Treated as monochromatic.
    DoubleSplitComplementary,
}

impl HarmonyRule {
    /// Every rule.
    pub const ALL: [HarmonyRule; 8] = [
        HarmonyRule::Monochromatic,
        HarmonyRule::Analogous,
        HarmonyRule::Complementary,
        HarmonyRule::SplitComplementary,
        HarmonyRule::Triadic,
        HarmonyRule::Tetradic,
        HarmonyRule::Square,
        HarmonyRule::DoubleSplitComplementary,
    ];

    /// The stable key of the rule.
    pub fn key(&self) -> &'static str {
        match self {
            HarmonyRule::Monochromatic => "monochromatic",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::SplitComplementary => "split-complementary",
            HarmonyRule::Triadic => "triadic",
            HarmonyRule::Tetradic => "tetradic",
            HarmonyRule::Square => "square",
            HarmonyRule::DoubleSplitComplementary => "double-split-complementary",
        }
    }

    /// The hues of the rule for `base`, in degrees within [0..360).
    pub fn hues(&self, base: Component) -> Vec<Component> {
        let offsets: &[Component] = match self {
            HarmonyRule::Complementary => &[0.0, 180.0],
            HarmonyRule::Triadic => &[0.0, 120.0, 240.0],
            HarmonyRule::Analogous => &[0.0, 30.0, -30.0],
            HarmonyRule::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyRule::Tetradic | HarmonyRule::Square => &[0.0, 90.0, 180.0, 270.0],
            HarmonyRule::Monochromatic | HarmonyRule::DoubleSplitComplementary => &[0.0],
        };

        offsets
            .iter()
            .map(|offset| normalize_hue(base + offset))
            .collect()
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HarmonyRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        HarmonyRule::ALL
            .into_iter()
            .find(|rule| rule.key() == key)
            .ok_or_else(|| ParseError::UnknownHarmonyRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for standard in Standard::ALL {
            assert_eq!(standard.key().parse::<Standard>().unwrap(), standard);
            let json = serde_json::to_string(&standard).unwrap();
            assert_eq!(json, format!("\"{}\"", standard.key()));
        }
        assert_eq!(" OKLCH ".parse::<Standard>().unwrap(), Standard::Oklch);
        assert_eq!(
            "munsell".parse::<Standard>(),
            Err(ParseError::UnknownStandard("munsell".to_string()))
        );
    }

    #[test]
    fn categories_match_the_presets() {
        for category in [
            Category::Popular,
            Category::Scientific,
            Category::Web,
            Category::Artistic,
        ] {
            let preset = StandardSet::for_category(category);
            for standard in Standard::ALL {
                assert_eq!(
                    preset.contains(standard.into()),
                    standard.category() == category,
                    "{standard}"
                );
            }
        }
    }

    #[test]
    fn sets_list_standards_in_order() {
        let set: StandardSet = [Standard::Cubehelix, Standard::Material].into_iter().collect();
        assert_eq!(set.standards(), vec![Standard::Material, Standard::Cubehelix]);
        assert_eq!(
            StandardSet::default().standards(),
            vec![Standard::Material, Standard::Hsluv, Standard::Oklch]
        );
        assert_eq!(StandardSet::all().standards().len(), 10);
    }

    #[test]
    fn harmony_hues() {
        assert_eq!(HarmonyRule::Complementary.hues(0.0), vec![0.0, 180.0]);
        assert_eq!(HarmonyRule::Triadic.hues(0.0), vec![0.0, 120.0, 240.0]);
        assert_eq!(HarmonyRule::Analogous.hues(10.0), vec![10.0, 40.0, 340.0]);
        assert_eq!(
            HarmonyRule::SplitComplementary.hues(300.0),
            vec![300.0, 90.0, 150.0]
        );
        assert_eq!(HarmonyRule::Square.hues(0.0), HarmonyRule::Tetradic.hues(0.0));
        assert_eq!(HarmonyRule::Monochromatic.hues(42.0), vec![42.0]);
        assert_eq!(HarmonyRule::DoubleSplitComplementary.hues(42.0), vec![42.0]);
    }

    #[test]
    fn harmony_rule_names() {
        assert_eq!(
            "split-complementary".parse::<HarmonyRule>().unwrap(),
            HarmonyRule::SplitComplementary
        );
        assert_eq!(HarmonyRule::default(), HarmonyRule::Analogous);
        assert!(matches!(
            "clashing".parse::<HarmonyRule>(),
            Err(ParseError::UnknownHarmonyRule(_))
        ));
    }
}
