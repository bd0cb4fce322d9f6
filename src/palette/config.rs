//! Palette configuration and the per-standard configuration table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    color::Component,
    error::ConfigError,
    palette::standard::{HarmonyRule, Standard},
};

/// How a palette is generated. Validated on construction, immutable
/// afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPaletteConfig")]
pub struct PaletteConfig {
    standard: Standard,
    steps: usize,
    lightness_range: [Component; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    chroma_range: Option<[Component; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    harmony_rule: Option<HarmonyRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue_shift: Option<Component>,
}

impl PaletteConfig {
    /// Create a configuration, rejecting fewer than 2 steps and lightness
    /// ranges that are inverted or fall outside [0..1].
    pub fn new(
        standard: Standard,
        steps: usize,
        lightness_range: [Component; 2],
    ) -> Result<Self, ConfigError> {
        if steps < 2 {
            return Err(ConfigError::TooFewSteps(steps));
        }
        check_range("lightness", lightness_range, true)?;

        Ok(Self::unchecked(standard, steps, lightness_range))
    }

    const fn unchecked(standard: Standard, steps: usize, lightness_range: [Component; 2]) -> Self {
        Self {
            standard,
            steps,
            lightness_range,
            chroma_range: None,
            harmony_rule: None,
            hue_shift: None,
        }
    }

    /// The built-in configuration for a standard.
    pub fn default_for(standard: Standard) -> Self {
        match standard {
            Standard::Material => Self::unchecked(standard, 11, [0.05, 0.95]),
            Standard::Hsluv => Self::unchecked(standard, 9, [0.1, 0.9]),
            Standard::Oklch => Self {
                chroma_range: Some([0.02, 0.2]),
                ..Self::unchecked(standard, 11, [0.05, 0.95])
            },
            Standard::Hcl => Self::unchecked(standard, 9, [0.15, 0.85]),
            Standard::Cam16Ucs => Self::unchecked(standard, 9, [0.1, 0.9]),
            Standard::Ipt => Self::unchecked(standard, 9, [0.1, 0.9]),
            Standard::ColorHarmony => Self {
                harmony_rule: Some(HarmonyRule::Analogous),
                ..Self::unchecked(standard, 12, [0.2, 0.8])
            },
            Standard::Cielab => Self::unchecked(standard, 10, [0.15, 0.85]),
            Standard::Hpluv => Self::unchecked(standard, 8, [0.6, 0.95]),
            Standard::Cubehelix => Self::unchecked(standard, 10, [0.1, 0.9]),
        }
    }

    /// Attach a chroma range. Carried as metadata, the bounds only need to be
    /// non-negative and ordered.
    pub fn with_chroma_range(mut self, chroma_range: [Component; 2]) -> Result<Self, ConfigError> {
        check_range("chroma", chroma_range, false)?;
        self.chroma_range = Some(chroma_range);
        Ok(self)
    }

    /// Set the harmony rule used by [`Standard::ColorHarmony`].
    pub fn with_harmony_rule(mut self, harmony_rule: HarmonyRule) -> Self {
        self.harmony_rule = Some(harmony_rule);
        self
    }

    /// Rotate the base hue by `degrees` before generating.
    pub fn with_hue_shift(mut self, degrees: Component) -> Self {
        self.hue_shift = Some(degrees).filter(|d| d.is_finite());
        self
    }

    /// The standard to generate with.
    pub fn standard(&self) -> Standard {
        self.standard
    }

    /// Number of colors to generate, always at least 2.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Lightness bounds in [0..1].
    pub fn lightness_range(&self) -> [Component; 2] {
        self.lightness_range
    }

    /// Optional chroma bounds.
    pub fn chroma_range(&self) -> Option<[Component; 2]> {
        self.chroma_range
    }

    /// The harmony rule, if one was set.
    pub fn harmony_rule(&self) -> Option<HarmonyRule> {
        self.harmony_rule
    }

    /// The hue rotation in degrees, if one was set.
    pub fn hue_shift(&self) -> Option<Component> {
        self.hue_shift
    }

    /// The lightness at position `t` in [0..1] of the range.
    pub(crate) fn lightness_at(&self, t: Component) -> Component {
        let [lo, hi] = self.lightness_range;
        crate::math::lerp(lo, hi, t)
    }

    /// The positions in [0..1] of each step.
    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, Component)> {
        let last = (self.steps - 1) as Component;
        (0..self.steps).map(move |i| (i, i as Component / last))
    }

    fn apply(mut self, overrides: ConfigOverride) -> Result<Self, ConfigError> {
        if let Some(steps) = overrides.steps {
            if steps < 2 {
                return Err(ConfigError::TooFewSteps(steps));
            }
            self.steps = steps;
        }
        if let Some(range) = overrides.lightness_range {
            check_range("lightness", range, true)?;
            self.lightness_range = range;
        }
        if let Some(range) = overrides.chroma_range {
            self = self.with_chroma_range(range)?;
        }
        if let Some(rule) = overrides.harmony_rule {
            self = self.with_harmony_rule(rule);
        }
        if let Some(shift) = overrides.hue_shift {
            self = self.with_hue_shift(shift);
        }
        Ok(self)
    }
}

fn check_range(
    name: &'static str,
    [min, max]: [Component; 2],
    unit: bool,
) -> Result<(), ConfigError> {
    for value in [min, max] {
        let in_range = if unit {
            (0.0..=1.0).contains(&value)
        } else {
            value >= 0.0 && value.is_finite()
        };
        if !in_range {
            return Err(ConfigError::OutOfRange {
                name,
                value: value as f64,
            });
        }
    }

    if min > max {
        return Err(ConfigError::InvertedRange {
            name,
            min: min as f64,
            max: max as f64,
        });
    }

    Ok(())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaletteConfig {
    standard: Standard,
    steps: usize,
    lightness_range: [Component; 2],
    #[serde(default)]
    chroma_range: Option<[Component; 2]>,
    #[serde(default)]
    harmony_rule: Option<HarmonyRule>,
    #[serde(default)]
    hue_shift: Option<Component>,
}

impl TryFrom<RawPaletteConfig> for PaletteConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPaletteConfig) -> Result<Self, Self::Error> {
        PaletteConfig::new(raw.standard, raw.steps, raw.lightness_range)?.apply(ConfigOverride {
            steps: None,
            lightness_range: None,
            chroma_range: raw.chroma_range,
            harmony_rule: raw.harmony_rule,
            hue_shift: raw.hue_shift,
        })
    }
}

/// Partial configuration read from JSON and applied over a default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigOverride {
    steps: Option<usize>,
    lightness_range: Option<[Component; 2]>,
    chroma_range: Option<[Component; 2]>,
    harmony_rule: Option<HarmonyRule>,
    hue_shift: Option<Component>,
}

/// The configuration used for every standard.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigTable {
    configs: IndexMap<Standard, PaletteConfig>,
}

impl Default for ConfigTable {
    fn default() -> Self {
        Self {
            configs: Standard::ALL
                .into_iter()
                .map(|standard| (standard, PaletteConfig::default_for(standard)))
                .collect(),
        }
    }
}

impl ConfigTable {
    /// Start from the defaults and apply the overrides in `json`, an object
    /// keyed by standard key, e.g. `{"oklch": {"steps": 7}}`. Unknown keys
    /// are skipped.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: IndexMap<String, ConfigOverride> = serde_json::from_str(json)?;

        let mut table = Self::default();
        for (key, overrides) in overrides {
            let Ok(standard) = key.parse::<Standard>() else {
                warn!(key = %key, "unknown palette standard in configuration; skipping");
                continue;
            };

            let config = table.get(standard).apply(overrides)?;
            debug!(standard = %standard, ?config, "configuration override applied");
            table.configs.insert(standard, config);
        }

        Ok(table)
    }

    /// The configuration for a standard.
    pub fn get(&self, standard: Standard) -> PaletteConfig {
        self.configs
            .get(&standard)
            .cloned()
            .unwrap_or_else(|| PaletteConfig::default_for(standard))
    }

    /// Replace the configuration of its standard.
    pub fn insert(&mut self, config: PaletteConfig) {
        self.configs.insert(config.standard(), config);
    }

    /// Iterate over every configuration in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteConfig> {
        self.configs.values()
    }
}
