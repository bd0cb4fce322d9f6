//! Format colors and palettes as text for use outside the crate.
//!
//! ```rust
//! use chromatone::{export::{format_color, ColorFormat}, Hex};
//!
//! let red = Hex::new(0xff, 0x55, 0x55);
//! assert_eq!(format_color(red, ColorFormat::Rgb), "rgb(255, 85, 85)");
//! assert_eq!(format_color(red, "hsl".parse().unwrap()), "hsl(0, 100%, 67%)");
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::{
    color::{Component, Hex},
    contrast::WcagLevel,
    error::{ExportError, ParseError},
    math::normalize,
    palette::{GeneratedPalette, Standard, Usage},
};

/// The text notations a single color can be formatted as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, 1)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, 1)`
    Hsla,
    /// `oklch(l c h)`
    Oklch,
    /// `lch(l c h)`
    Lch,
    /// `lab(l a b)`
    Lab,
}

impl ColorFormat {
    /// Every format, in menu order.
    pub const ALL: [ColorFormat; 8] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
        ColorFormat::Oklch,
        ColorFormat::Lch,
        ColorFormat::Lab,
    ];

    /// The lowercase key of the format.
    pub fn key(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
            ColorFormat::Oklch => "oklch",
            ColorFormat::Lch => "lch",
            ColorFormat::Lab => "lab",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Rgba => "RGBA",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsla => "HSLA",
            ColorFormat::Oklch => "OKLCH",
            ColorFormat::Lch => "LCH",
            ColorFormat::Lab => "LAB",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.key() == key)
            .ok_or_else(|| ParseError::UnknownFormat(s.to_string()))
    }
}

/// Round to the nearest integer, halves toward positive infinity. Missing
/// values print as 0, and so does -0.
fn whole(value: Component) -> i32 {
    (normalize(value) + 0.5).floor() as i32
}

/// Hue, saturation and lightness rounded to degrees and whole percentages.
fn hsl_parts(hex: Hex) -> (i32, i32, i32) {
    let hsl = hex.to_hsl();
    (
        whole(hsl.hue),
        whole(hsl.saturation * 100.0),
        whole(hsl.lightness * 100.0),
    )
}

/// Format `hex` in the given notation. Every output can be read back with
/// [`parse_color`](crate::parse::parse_color).
pub fn format_color(hex: Hex, format: ColorFormat) -> String {
    let [red, green, blue] = hex.to_array();

    match format {
        ColorFormat::Hex => hex.to_string(),
        ColorFormat::Rgb => format!("rgb({red}, {green}, {blue})"),
        ColorFormat::Rgba => format!("rgba({red}, {green}, {blue}, 1)"),
        ColorFormat::Hsl => {
            let (h, s, l) = hsl_parts(hex);
            format!("hsl({h}, {s}%, {l}%)")
        }
        ColorFormat::Hsla => {
            let (h, s, l) = hsl_parts(hex);
            format!("hsla({h}, {s}%, {l}%, 1)")
        }
        ColorFormat::Oklch => {
            let oklch = hex.to_oklch();
            format!(
                "oklch({:.3} {:.3} {})",
                normalize(oklch.lightness),
                normalize(oklch.chroma),
                whole(oklch.hue)
            )
        }
        ColorFormat::Lch => {
            let lch = hex.to_lch();
            format!(
                "lch({} {} {})",
                whole(lch.lightness),
                whole(lch.chroma),
                whole(lch.hue)
            )
        }
        ColorFormat::Lab => {
            let lab = hex.to_lab();
            format!("lab({} {} {})", whole(lab.lightness), whole(lab.a), whole(lab.b))
        }
    }
}

/// Lowercase `name` and join its words with dashes.
fn slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// The palette as CSS custom properties on `:root`.
pub fn generate_css_variables(palette: &GeneratedPalette) -> String {
    let prefix = slug(&palette.name);

    let variables = palette
        .colors
        .iter()
        .map(|color| format!("  --{prefix}-{}: {};", slug(&color.name), color.hex))
        .collect::<Vec<_>>()
        .join("\n");

    format!(":root {{\n{variables}\n}}")
}

/// The palette as SCSS variables, followed by a mixin that declares them as
/// custom properties.
pub fn generate_scss_variables(palette: &GeneratedPalette) -> String {
    let prefix = slug(&palette.name);
    let names = palette
        .colors
        .iter()
        .map(|color| (format!("{prefix}-{}", slug(&color.name)), color.hex))
        .collect::<Vec<_>>();

    let variables = names
        .iter()
        .map(|(name, hex)| format!("${name}: {hex};"))
        .collect::<Vec<_>>()
        .join("\n");

    let properties = names
        .iter()
        .map(|(name, _)| format!("  --{name}: #{{${name}}};"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// {} Palette\n{variables}\n\n// Usage mixin\n@mixin {prefix}-colors {{\n{properties}\n}}",
        palette.name
    )
}

/// Serialize with the given indentation.
fn to_json_indented<T: Serialize>(value: &T, indent: &[u8]) -> Result<String, ExportError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// A snippet extending the colors of a Tailwind config.
pub fn generate_tailwind_config(palette: &GeneratedPalette) -> Result<String, ExportError> {
    let colors = palette
        .colors
        .iter()
        .map(|color| (slug(&color.name), color.hex))
        .collect::<IndexMap<_, _>>();

    let colors = to_json_indented(&colors, b"        ")?;

    Ok(format!(
        "// Add to your tailwind.config.js\n\
         module.exports = {{\n  \
           theme: {{\n    \
             extend: {{\n      \
               colors: {{\n        \
                 '{}': {colors}\n      \
               }}\n    \
             }}\n  \
           }}\n\
         }}",
        slug(&palette.name)
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    name: &'a str,
    standard: Standard,
    base_color: JsonBaseColor<'a>,
    accessibility: JsonAccessibility,
    colors: Vec<JsonColor<'a>>,
    total_colors: usize,
    generated_at: String,
}

#[derive(Serialize)]
struct JsonBaseColor<'a> {
    name: &'a str,
    hex: Hex,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAccessibility {
    wcag_level: WcagLevel,
}

#[derive(Serialize)]
struct JsonColor<'a> {
    name: &'a str,
    hex: String,
    rgb: JsonRgb,
    hsl: JsonHsl,
    usage: Usage,
    lightness: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    chroma: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<i32>,
}

#[derive(Serialize)]
struct JsonRgb {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Serialize)]
struct JsonHsl {
    h: i32,
    s: i32,
    l: i32,
}

/// The palette as a JSON document stamped with the current time.
pub fn generate_json_export(palette: &GeneratedPalette) -> Result<String, ExportError> {
    generate_json_export_at(palette, OffsetDateTime::now_utc())
}

/// The palette as a JSON document stamped with `generated_at`.
///
/// The verbose contrast ratios are left out, only the WCAG level is kept.
/// Chroma is scaled to a percentage and omitted when it is absent or zero.
pub fn generate_json_export_at(
    palette: &GeneratedPalette,
    generated_at: OffsetDateTime,
) -> Result<String, ExportError> {
    let colors = palette
        .colors
        .iter()
        .map(|color| {
            let [r, g, b] = color.hex.to_array();
            let (h, s, l) = hsl_parts(color.hex);

            JsonColor {
                name: &color.name,
                hex: color.hex.to_string().to_uppercase(),
                rgb: JsonRgb { r, g, b },
                hsl: JsonHsl { h, s, l },
                usage: color.usage,
                lightness: whole(color.lightness * 100.0),
                chroma: color
                    .chroma
                    .filter(|chroma| *chroma != 0.0 && !chroma.is_nan())
                    .map(|chroma| whole(chroma * 100.0)),
                hue: color.hue.map(whole),
            }
        })
        .collect::<Vec<_>>();

    let export = JsonExport {
        name: &palette.name,
        standard: palette.standard,
        base_color: JsonBaseColor {
            name: &palette.base_color.name,
            hex: palette.base_color.hex,
        },
        accessibility: JsonAccessibility {
            wcag_level: palette.accessibility.wcag_level,
        },
        total_colors: colors.len(),
        colors,
        generated_at: generated_at.format(&Rfc3339)?,
    };

    Ok(serde_json::to_string_pretty(&export)?)
}

#[derive(Serialize)]
struct FigmaToken {
    value: Hex,
    #[serde(rename = "type")]
    kind: &'static str,
    description: String,
}

/// The palette as design tokens for Figma.
pub fn generate_figma_tokens(palette: &GeneratedPalette) -> Result<String, ExportError> {
    let prefix = slug(&palette.name);

    let tokens = palette
        .colors
        .iter()
        .map(|color| {
            let token = FigmaToken {
                value: color.hex,
                kind: "color",
                description: format!("{} - {} color", color.name, color.usage.key()),
            };
            (format!("{prefix}-{}", slug(&color.name)), token)
        })
        .collect::<IndexMap<_, _>>();

    let mut document = IndexMap::new();
    document.insert(prefix, tokens);

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        palette::{calculate_accessibility, generate, GeneratedColor, PaletteConfig},
        parse::parse_color,
        reference::{find_reference_color, DRACULA_COLORS},
    };

    fn palette() -> GeneratedPalette {
        let colors = vec![
            GeneratedColor {
                hex: Hex::new(0xff, 0xcc, 0xcc),
                name: "Red 100".to_string(),
                lightness: 0.9,
                chroma: Some(0.8),
                hue: Some(0.0),
                usage: Usage::Surface,
            },
            GeneratedColor {
                hex: Hex::new(0x33, 0x00, 0x00),
                name: "Red 900".to_string(),
                lightness: 0.1,
                chroma: None,
                hue: None,
                usage: Usage::OnSurface,
            },
        ];

        GeneratedPalette {
            name: "Material Red".to_string(),
            standard: Standard::Material,
            base_color: find_reference_color("red").unwrap().clone(),
            accessibility: calculate_accessibility(&colors),
            colors,
        }
    }

    #[test]
    fn formats_red() {
        let red = Hex::new(0xff, 0x55, 0x55);
        assert_eq!(format_color(red, ColorFormat::Hex), "#ff5555");
        assert_eq!(format_color(red, ColorFormat::Rgb), "rgb(255, 85, 85)");
        assert_eq!(format_color(red, ColorFormat::Rgba), "rgba(255, 85, 85, 1)");
        assert_eq!(format_color(red, ColorFormat::Hsl), "hsl(0, 100%, 67%)");
        assert_eq!(format_color(red, ColorFormat::Hsla), "hsla(0, 100%, 67%, 1)");
        assert_eq!(format_color(red, ColorFormat::Oklch), "oklch(0.682 0.206 24)");
        assert_eq!(format_color(red, ColorFormat::Lch), "lch(60 74 30)");
        assert_eq!(format_color(red, ColorFormat::Lab), "lab(60 64 37)");
    }

    #[test]
    fn achromatic_colors_print_a_zero_hue() {
        assert_eq!(format_color(Hex::WHITE, ColorFormat::Hsl), "hsl(0, 0%, 100%)");
        assert_eq!(format_color(Hex::BLACK, ColorFormat::Hsl), "hsl(0, 0%, 0%)");
        assert_eq!(
            format_color(Hex::FALLBACK_GRAY, ColorFormat::Hsla),
            "hsla(0, 0%, 50%, 1)"
        );
        assert_eq!(format_color(Hex::BLACK, ColorFormat::Lab), "lab(0 0 0)");
        assert_eq!(format_color(Hex::BLACK, ColorFormat::Lch), "lch(0 0 0)");
        assert_eq!(format_color(Hex::BLACK, ColorFormat::Oklch), "oklch(0.000 0.000 0)");
    }

    /// Coordinates scaled to [0, 1] in the space `format` writes, with the
    /// index of the hue when there is one.
    fn normalized(hex: Hex, format: ColorFormat) -> ([Component; 3], Option<usize>) {
        match format {
            ColorFormat::Hex | ColorFormat::Rgb | ColorFormat::Rgba => {
                (hex.to_array().map(|c| c as Component / 255.0), None)
            }
            ColorFormat::Hsl | ColorFormat::Hsla => {
                let hsl = hex.to_hsl();
                ([normalize(hsl.hue) / 360.0, hsl.saturation, hsl.lightness], Some(0))
            }
            ColorFormat::Oklch => {
                let oklch = hex.to_oklch();
                (
                    [oklch.lightness, oklch.chroma / 0.4, normalize(oklch.hue) / 360.0],
                    Some(2),
                )
            }
            ColorFormat::Lch => {
                let lch = hex.to_lch();
                (
                    [lch.lightness / 100.0, lch.chroma / 150.0, normalize(lch.hue) / 360.0],
                    Some(2),
                )
            }
            ColorFormat::Lab => {
                let lab = hex.to_lab();
                ([lab.lightness / 100.0, lab.a / 125.0, lab.b / 125.0], None)
            }
        }
    }

    #[test]
    fn formatted_colors_parse_back() {
        for reference in &DRACULA_COLORS {
            let hex = reference.hex;
            for format in ColorFormat::ALL {
                let text = format_color(hex, format);
                let back = parse_color(&text).unwrap();

                let channels = back
                    .to_array()
                    .into_iter()
                    .zip(hex.to_array())
                    .map(|(a, b)| a.abs_diff(b))
                    .max()
                    .unwrap_or(0);

                let (expected, hue) = normalized(hex, format);
                let (actual, _) = normalized(back, format);
                let coordinates = expected
                    .into_iter()
                    .zip(actual)
                    .enumerate()
                    .map(|(i, (a, b))| {
                        let diff = (a - b).abs();
                        if Some(i) == hue {
                            diff.min(1.0 - diff)
                        } else {
                            diff
                        }
                    })
                    .fold(0.0, Component::max);

                match format {
                    ColorFormat::Hex | ColorFormat::Rgb | ColorFormat::Rgba => {
                        assert_eq!(back, hex, "{text}")
                    }
                    _ => assert!(
                        channels <= 1 || coordinates <= 0.01,
                        "{text} parsed as {back}, expected {hex}: off by {coordinates}"
                    ),
                }
            }
        }
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(whole(2.5), 3);
        assert_eq!(whole(-2.5), -2);
        assert_eq!(whole(-0.4), 0);
        assert_eq!(whole(Component::NAN), 0);
    }

    #[test]
    fn json_chroma_is_a_percentage() {
        let base = find_reference_color("red").unwrap();
        let palette = generate(base, &PaletteConfig::default_for(Standard::Cielab));
        let json = generate_json_export_at(&palette, OffsetDateTime::UNIX_EPOCH).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for color in value["colors"].as_array().unwrap() {
            if let Some(chroma) = color.get("chroma") {
                assert!((0..=100).contains(&chroma.as_i64().unwrap()), "{chroma}");
            }
        }
    }

    #[test]
    fn format_keys() {
        assert_eq!("OKLCH".parse::<ColorFormat>().unwrap(), ColorFormat::Oklch);
        assert_eq!(ColorFormat::Hsla.to_string(), "hsla");
        assert_eq!(ColorFormat::Lab.label(), "LAB");
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(ParseError::UnknownFormat("cmyk".to_string()))
        );
    }

    #[test]
    fn css_variables() {
        assert_eq!(
            generate_css_variables(&palette()),
            ":root {\n  --material-red-red-100: #ffcccc;\n  --material-red-red-900: #330000;\n}"
        );
    }

    #[test]
    fn scss_variables() {
        let expected = "// Material Red Palette\n\
                        $material-red-red-100: #ffcccc;\n\
                        $material-red-red-900: #330000;\n\
                        \n\
                        // Usage mixin\n\
                        @mixin material-red-colors {\n  \
                          --material-red-red-100: #{$material-red-red-100};\n  \
                          --material-red-red-900: #{$material-red-red-900};\n\
                        }";
        assert_eq!(generate_scss_variables(&palette()), expected);
    }

    #[test]
    fn tailwind_config() {
        let config = generate_tailwind_config(&palette()).unwrap();
        assert!(config.starts_with("// Add to your tailwind.config.js\nmodule.exports = {"));
        assert!(config.contains(
            "        'material-red': {\n        \"red-100\": \"#ffcccc\",\n        \"red-900\": \"#330000\"\n}"
        ));
        assert!(config.ends_with("    }\n  }\n}"));
    }

    #[test]
    fn json_export() {
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let json = generate_json_export_at(&palette(), at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Material Red");
        assert_eq!(value["standard"], "material");
        assert_eq!(value["baseColor"]["name"], "Red");
        assert_eq!(value["baseColor"]["hex"], "#ff5555");
        assert_eq!(value["accessibility"]["wcagLevel"], "AAA");
        assert!(value["accessibility"].get("contrastRatios").is_none());
        assert_eq!(value["totalColors"], 2);
        assert_eq!(value["generatedAt"], "2023-11-14T22:13:20Z");

        let first = &value["colors"][0];
        assert_eq!(first["hex"], "#FFCCCC");
        assert_eq!(first["rgb"], serde_json::json!({"r": 255, "g": 204, "b": 204}));
        assert_eq!(first["hsl"], serde_json::json!({"h": 0, "s": 100, "l": 90}));
        assert_eq!(first["usage"], "surface");
        assert_eq!(first["lightness"], 90);
        assert_eq!(first["chroma"], 80);
        assert_eq!(first["hue"], 0);

        let second = &value["colors"][1];
        assert_eq!(second["usage"], "on-surface");
        assert!(second.get("chroma").is_none());
        assert!(second.get("hue").is_none());
    }

    #[test]
    fn zero_chroma_is_left_out() {
        let mut palette = palette();
        palette.colors[0].chroma = Some(0.0);
        let at = OffsetDateTime::UNIX_EPOCH;
        let json = generate_json_export_at(&palette, at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["colors"][0].get("chroma").is_none());
        assert_eq!(value["generatedAt"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn figma_tokens() {
        let tokens = generate_figma_tokens(&palette()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&tokens).unwrap();
        let token = &value["material-red"]["material-red-red-900"];
        assert_eq!(token["value"], "#330000");
        assert_eq!(token["type"], "color");
        assert_eq!(token["description"], "Red 900 - on-surface color");
    }
}
