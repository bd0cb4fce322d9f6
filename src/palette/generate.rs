//! One generator per standard.
//!
//! Every generator walks `t = i / (steps - 1)` over the configured lightness
//! range. The OKLCH, HSLuv, HCL and CAM16 generators are lightweight HSL and
//! LCh approximations of those spaces, not full implementations.

use tracing::{debug, warn};

use crate::{
    color::{Component, Hex},
    convert::Cubehelix,
    error::ConversionError,
    math::{normalize, normalize_hue, or_fallback},
    models::{Hsl, Ipt, Lab, Lch},
    palette::{
        calculate_accessibility, GeneratedColor, GeneratedPalette, PaletteConfig, Standard, Usage,
    },
    reference::BaseColor,
};

/// Generates a palette for one standard.
pub type Generator = fn(&BaseColor, &PaletteConfig) -> GeneratedPalette;

impl Standard {
    /// The generator for this standard.
    pub fn generator(&self) -> Generator {
        match self {
            Standard::Material => material,
            Standard::Hsluv => hsluv,
            Standard::Oklch => oklch,
            Standard::Hcl => hcl,
            Standard::Cam16Ucs => cam16_ucs,
            Standard::Ipt => ipt,
            Standard::ColorHarmony => color_harmony,
            Standard::Cielab => cielab,
            Standard::Hpluv => hpluv,
            Standard::Cubehelix => cubehelix,
        }
    }
}

/// Generate a palette for `base` with the standard named in `config`.
pub fn generate(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    debug!(
        base = %base.hex,
        standard = %config.standard(),
        steps = config.steps(),
        "generating palette"
    );

    (config.standard().generator())(base, config)
}

/// Material Design tonal steps.
const MATERIAL_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

fn material(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl { hue, saturation, .. } = BaseHsl::new(base, config);

    let colors = MATERIAL_STEPS
        .into_iter()
        .map(|step| {
            let lightness = material_lightness(step);
            let saturation =
                saturation * (0.7 + 0.3 * (1.0 - (lightness - 0.5).abs() * 2.0));

            GeneratedColor {
                hex: hsl_hex(hue, saturation, lightness),
                name: format!("{} {step}", base.name),
                lightness,
                chroma: Some(saturation),
                hue: Some(hue),
                usage: Usage::for_material_step(step),
            }
        })
        .collect();

    finish(Standard::Material, base, colors)
}

/// 0.95 at step 50 falling to 0.5 at step 500, then to 0.05 at step 950.
fn material_lightness(step: u16) -> Component {
    let step = step as Component;
    if step <= 500.0 {
        0.95 - (step - 50.0) / 450.0 * 0.45
    } else {
        0.5 - (step - 500.0) / 450.0 * 0.45
    }
}

fn hsluv(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl { hue, saturation, .. } = BaseHsl::new(base, config);

    let colors = config
        .positions()
        .map(|(_, t)| {
            let lightness = config.lightness_at(t);
            let saturation = saturation * (1.0 - (t - 0.5).abs() * 0.3);

            lightness_entry(
                base,
                "HSLuv",
                hsl_hex(hue, saturation, lightness),
                lightness,
                Some(saturation),
                Some(hue),
            )
        })
        .collect();

    finish(Standard::Hsluv, base, colors)
}

fn oklch(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl { hue, saturation, .. } = BaseHsl::new(base, config);

    let colors = config
        .positions()
        .map(|(_, t)| {
            let lightness = config.lightness_at(t).powf(0.8);
            let saturation =
                saturation * (1.0 - ((lightness - 0.5).abs() * 2.0).powf(1.5) * 0.4);

            lightness_entry(
                base,
                "OKLCH",
                hsl_hex(hue, saturation, lightness),
                lightness,
                Some(saturation),
                Some(hue),
            )
        })
        .collect();

    finish(Standard::Oklch, base, colors)
}

/// LCh chroma stored as a relative chroma of 1.
const LCH_CHROMA_REFERENCE: Component = 150.0;

/// Chroma as a fraction of `reference`, clamped to [0, 1].
fn relative_chroma(chroma: Component, reference: Component) -> Component {
    (normalize(chroma) / reference).clamp(0.0, 1.0)
}

fn hcl(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let lch = base.hex.to_lch();
    let chroma = or_fallback(lch.chroma, 30.0);
    let hue = shifted(lch.hue, config);

    let colors = config
        .positions()
        .map(|(_, t)| {
            let l = 100.0 * config.lightness_at(t);
            let c = chroma * (0.6 + 0.4 * (1.0 - (t - 0.5).abs() * 2.0));
            let hex = or_gray(Hex::try_from_model(&Lch::new(l, c, hue)));

            GeneratedColor {
                hex,
                name: format!("{} HCL {}", base.name, l.round()),
                lightness: l / 100.0,
                chroma: Some(relative_chroma(c, LCH_CHROMA_REFERENCE)),
                hue: Some(hue),
                usage: Usage::for_lightness(l / 100.0),
            }
        })
        .collect();

    finish(Standard::Hcl, base, colors)
}

fn cam16_ucs(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl { hue, saturation, .. } = BaseHsl::new(base, config);

    let colors = config
        .positions()
        .map(|(_, t)| {
            let lightness = config.lightness_at(t);
            let (hex, adjusted) = cam16_lightness(hue, saturation, lightness);

            lightness_entry(base, "CAM16", hex, lightness, Some(adjusted), Some(hue))
        })
        .collect();

    finish(Standard::Cam16Ucs, base, colors)
}

/// Approximate CAM16 lightness J with a power curve and damp saturation
/// away from mid tones. Returns the color and the saturation used.
fn cam16_lightness(hue: Component, saturation: Component, target: Component) -> (Hex, Component) {
    let saturation = saturation * (1.0 - ((target - 0.5).abs() * 2.0).powf(1.2) * 0.4);
    (hsl_hex(hue, saturation, target.powf(0.67)), saturation)
}

fn ipt(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let base_ipt = base.hex.to_ipt();
    let (protan, tritan) = rotate(base_ipt.protan, base_ipt.tritan, config.hue_shift());

    let colors = config
        .positions()
        .map(|(_, t)| {
            let lightness = config.lightness_at(t);
            let scale = 0.8 + 0.4 * lightness;
            let ipt = Ipt::new(
                base_ipt.intensity * lightness * 2.0,
                protan * scale,
                tritan * scale,
            );
            let (chroma, hue) = ipt.chroma_and_hue();
            let hex = or_gray(Hex::try_from_model(&ipt));
            let chroma = relative_chroma(chroma, 1.0);

            lightness_entry(base, "IPT", hex, lightness, Some(chroma), Some(hue))
        })
        .collect();

    finish(Standard::Ipt, base, colors)
}

fn cielab(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let base_lab = base.hex.to_lab();
    let (a, b) = rotate(base_lab.a, base_lab.b, config.hue_shift());
    let base_lightness = or_fallback(base_lab.lightness, 50.0);

    let colors = config
        .positions()
        .map(|(_, t)| {
            let l = 100.0 * config.lightness_at(t);
            let scale = (l / base_lightness).sqrt() * 0.8;
            let lab = Lab::new(l, a * scale, b * scale);
            let polar = lab.to_polar();
            let hex = or_gray(Hex::try_from_model(&lab));

            GeneratedColor {
                hex,
                name: format!("{} CIELAB {}", base.name, l.round()),
                lightness: l / 100.0,
                chroma: Some(relative_chroma(polar.chroma, LCH_CHROMA_REFERENCE)),
                hue: Some(normalize_hue(polar.hue)),
                usage: Usage::for_lightness(l / 100.0),
            }
        })
        .collect();

    finish(Standard::Cielab, base, colors)
}

fn cubehelix(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl { hue, .. } = BaseHsl::new(base, config);
    let scheme = Cubehelix::from_hue(hue);

    let colors = config
        .positions()
        .map(|(_, t)| {
            let position = config.lightness_at(t);
            let hex = or_gray(scheme.at(position));

            lightness_entry(base, "Cubehelix", hex, position, None, Some(hue))
        })
        .collect();

    finish(Standard::Cubehelix, base, colors)
}

fn color_harmony(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl { hue, saturation, .. } = BaseHsl::new(base, config);
    let hues = config.harmony_rule().unwrap_or_default().hues(hue);
    let saturation = saturation * 0.8;

    let colors = config
        .positions()
        .map(|(i, t)| {
            let lightness = config.lightness_at(t);
            let hue = hues[i % hues.len()];

            lightness_entry(
                base,
                "Harmony",
                hsl_hex(hue, saturation, lightness),
                lightness,
                Some(saturation),
                Some(hue),
            )
        })
        .collect();

    finish(Standard::ColorHarmony, base, colors)
}

/// Pastel chroma relative to the base.
const PASTEL_CHROMA: Component = 0.4;

fn hpluv(base: &BaseColor, config: &PaletteConfig) -> GeneratedPalette {
    let BaseHsl {
        hue,
        saturation,
        lightness: base_lightness,
    } = BaseHsl::new(base, config);
    let base_lightness = or_fallback(base_lightness, 0.5);

    let base_lab = base.hex.to_lab();
    let (a, b) = rotate(base_lab.a, base_lab.b, config.hue_shift());

    let colors = config
        .positions()
        .map(|(_, t)| {
            let lightness = 0.6 + t * 0.35;
            let scale = PASTEL_CHROMA * (lightness / base_lightness);
            let lab = Lab::new(lightness * 100.0, a * scale, b * scale);

            let (hex, chroma) = match Hex::try_from_model(&lab) {
                Ok(hex) => (hex, PASTEL_CHROMA),
                Err(err) => {
                    let saturation = (saturation * 0.4).min(0.3);
                    warn!(error = %err, "pastel Lab color failed, using HSL");
                    (hsl_hex(hue, saturation, lightness), saturation)
                }
            };

            lightness_entry(base, "HPLuv", hex, lightness, Some(chroma), Some(hue))
        })
        .collect();

    finish(Standard::Hpluv, base, colors)
}

/// The HSL components of the base color with the defaults applied: a missing
/// hue is 0 and a missing or zero saturation is 0.5. The hue shift of the
/// configuration is applied to the hue.
struct BaseHsl {
    hue: Component,
    saturation: Component,
    lightness: Component,
}

impl BaseHsl {
    fn new(base: &BaseColor, config: &PaletteConfig) -> Self {
        let Hsl {
            hue,
            saturation,
            lightness,
            ..
        } = base.hex.to_hsl();

        Self {
            hue: shifted(hue, config),
            saturation: or_fallback(saturation, 0.5),
            lightness: normalize(lightness),
        }
    }
}

fn shifted(hue: Component, config: &PaletteConfig) -> Component {
    normalize_hue(normalize(hue) + config.hue_shift().unwrap_or(0.0))
}

/// Rotate a point on an opponent color plane by `degrees`.
fn rotate(x: Component, y: Component, degrees: Option<Component>) -> (Component, Component) {
    let Some(degrees) = degrees else {
        return (x, y);
    };

    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

fn hsl_hex(hue: Component, saturation: Component, lightness: Component) -> Hex {
    or_gray(Hex::try_from(Hsl::new(hue, saturation, lightness)))
}

fn or_gray(result: Result<Hex, ConversionError>) -> Hex {
    result.unwrap_or_else(|err| {
        warn!(error = %err, "substituting gray for failed conversion");
        Hex::FALLBACK_GRAY
    })
}

/// An entry of a lightness keyed standard, named after the rounded lightness.
fn lightness_entry(
    base: &BaseColor,
    label: &str,
    hex: Hex,
    lightness: Component,
    chroma: Option<Component>,
    hue: Option<Component>,
) -> GeneratedColor {
    GeneratedColor {
        hex,
        name: format!("{} {label} {}", base.name, (lightness * 100.0).round()),
        lightness,
        chroma,
        hue,
        usage: Usage::for_lightness(lightness),
    }
}

fn finish(standard: Standard, base: &BaseColor, colors: Vec<GeneratedColor>) -> GeneratedPalette {
    let accessibility = calculate_accessibility(&colors);

    GeneratedPalette {
        name: format!("{} {}", standard.short_name(), base.name),
        standard,
        base_color: base.clone(),
        colors,
        accessibility,
    }
}
