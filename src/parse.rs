//! Read colors from text.
//!
//! Accepts hex notation (`#rgb`, `#rrggbb`, `#` optional, any case) and the
//! CSS functional notations the exporters write: `rgb()`, `rgba()`, `hsl()`,
//! `hsla()`, `oklch()`, `lch()` and `lab()`. Components may be separated by
//! commas, whitespace or a slash. Alpha is accepted and ignored.

use crate::{
    color::{Component, Hex},
    error::ParseError,
    models::{Hsl, Lab, Lch, Oklch, Srgb},
};

/// Parse a color from its text form.
pub fn parse_color(input: &str) -> Result<Hex, ParseError> {
    let input = input.trim();

    let Some(open) = input.find('(') else {
        return parse_hex(input);
    };

    let function = input[..open].trim().to_ascii_lowercase();
    let Some(body) = input[open + 1..].strip_suffix(')') else {
        return Err(ParseError::InvalidColor(input.to_string()));
    };

    let args = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|arg| !arg.is_empty())
        .collect::<Vec<_>>();

    let expect = |with_alpha: bool| -> Result<(), ParseError> {
        let ok = if with_alpha {
            args.len() == 4
        } else {
            args.len() == 3 || args.len() == 4
        };
        if ok {
            Ok(())
        } else {
            Err(ParseError::ComponentCount {
                function: function.clone(),
                expected: if with_alpha { 4 } else { 3 },
                found: args.len(),
            })
        }
    };

    let result = match function.as_str() {
        "rgb" | "rgba" => {
            expect(function == "rgba")?;
            let red = Number::parse(args[0])?.scaled(255.0);
            let green = Number::parse(args[1])?.scaled(255.0);
            let blue = Number::parse(args[2])?.scaled(255.0);
            Hex::try_from_srgb(Srgb::new(red / 255.0, green / 255.0, blue / 255.0))
        }

        "hsl" | "hsla" => {
            expect(function == "hsla")?;
            let hue = Number::parse(args[0])?.value;
            let saturation = Number::parse(args[1])?.scaled(100.0) / 100.0;
            let lightness = Number::parse(args[2])?.scaled(100.0) / 100.0;
            Hex::try_from(Hsl::new(hue, saturation, lightness))
        }

        "oklch" => {
            expect(false)?;
            let lightness = Number::parse(args[0])?.scaled(1.0);
            let chroma = Number::parse(args[1])?.scaled(0.4);
            let hue = Number::parse(args[2])?.value;
            Hex::try_from_model(&Oklch::new(lightness, chroma, hue))
        }

        "lch" => {
            expect(false)?;
            let lightness = Number::parse(args[0])?.scaled(100.0);
            let chroma = Number::parse(args[1])?.scaled(150.0);
            let hue = Number::parse(args[2])?.value;
            Hex::try_from_model(&Lch::new(lightness, chroma, hue))
        }

        "lab" => {
            expect(false)?;
            let lightness = Number::parse(args[0])?.scaled(100.0);
            let a = Number::parse(args[1])?.scaled(125.0);
            let b = Number::parse(args[2])?.scaled(125.0);
            Hex::try_from_model(&Lab::new(lightness, a, b))
        }

        _ => return Err(ParseError::InvalidColor(input.to_string())),
    };

    result.map_err(|_| ParseError::InvalidColor(input.to_string()))
}

fn parse_hex(input: &str) -> Result<Hex, ParseError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let invalid = || ParseError::InvalidColor(input.to_string());

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        3 => {
            let mut channels = [0_u8; 3];
            for (i, value) in channels.iter_mut().enumerate() {
                *value = channel(&digits[i..i + 1])? * 17;
            }
            Ok(Hex::from(channels))
        }
        6 => Ok(Hex::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// A numeric component, optionally written as a percentage.
struct Number {
    value: Component,
    percentage: bool,
}

impl Number {
    fn parse(arg: &str) -> Result<Self, ParseError> {
        if arg.eq_ignore_ascii_case("none") {
            return Ok(Self {
                value: 0.0,
                percentage: false,
            });
        }

        let (text, percentage) = match arg.strip_suffix('%') {
            Some(text) => (text, true),
            None => (arg.strip_suffix("deg").unwrap_or(arg), false),
        };

        let value = text
            .parse::<Component>()
            .map_err(|_| ParseError::InvalidComponent(arg.to_string()))?;

        if !value.is_finite() {
            return Err(ParseError::InvalidComponent(arg.to_string()));
        }

        Ok(Self { value, percentage })
    }

    /// The value with a percentage mapped onto `[0..reference]`.
    fn scaled(&self, reference: Component) -> Component {
        if self.percentage {
            self.value / 100.0 * reference
        } else {
            self.value
        }
    }
}
