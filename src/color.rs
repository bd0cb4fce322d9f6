//! A [`Hex`] is a 24-bit sRGB color, the currency every generated palette is
//! expressed in.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConversionError, ParseError};
use crate::models::Srgb;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// An sRGB color with 8 bits per channel.
///
/// The text form is always the canonical lowercase `#rrggbb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hex {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Hex {
    /// Pure white, `#ffffff`.
    pub const WHITE: Hex = Hex::new(255, 255, 255);
    /// Pure black, `#000000`.
    pub const BLACK: Hex = Hex::new(0, 0, 0);
    /// Neutral gray substituted when a conversion fails, `#808080`.
    pub const FALLBACK_GRAY: Hex = Hex::new(128, 128, 128);

    /// Create a new color from its 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels as an array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Quantize a gamma encoded sRGB color, clamping each channel to the
    /// [0..1] range first.
    ///
    /// Fails if any component is not a finite number.
    pub fn try_from_srgb(srgb: Srgb) -> Result<Self, ConversionError> {
        if !srgb.is_finite() {
            return Err(ConversionError::NonFinite(srgb.to_components()));
        }

        Ok(Self::new(
            quantize(srgb.red),
            quantize(srgb.green),
            quantize(srgb.blue),
        ))
    }

    /// Convert to a gamma encoded sRGB color with components in [0..1].
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }
}

/// Scale a [0..1] channel to [0..255], rounding to the nearest integer.
fn quantize(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Hex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s)
    }
}

impl From<[u8; 3]> for Hex {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Anything that can be resolved into a [`Hex`] color.
///
/// Text inputs may fail to parse, typed colors never do.
pub trait ToHex {
    /// Resolve this value into a color.
    fn to_hex(&self) -> Result<Hex, ParseError>;
}

impl ToHex for Hex {
    fn to_hex(&self) -> Result<Hex, ParseError> {
        Ok(*self)
    }
}

impl ToHex for str {
    fn to_hex(&self) -> Result<Hex, ParseError> {
        self.parse()
    }
}

impl ToHex for String {
    fn to_hex(&self) -> Result<Hex, ParseError> {
        self.parse()
    }
}

impl<T: ToHex + ?Sized> ToHex for &T {
    fn to_hex(&self) -> Result<Hex, ParseError> {
        (**self).to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_and_zero_padded() {
        assert_eq!(Hex::new(255, 85, 85).to_string(), "#ff5555");
        assert_eq!(Hex::new(0, 10, 1).to_string(), "#000a01");
    }

    #[test]
    fn quantize_clamps_out_of_range_components() {
        let hex = Hex::try_from_srgb(Srgb::new(1.3, -0.2, 0.5)).unwrap();
        assert_eq!(hex, Hex::new(255, 0, 128));
    }

    #[test]
    fn non_finite_components_are_rejected() {
        let err = Hex::try_from_srgb(Srgb::new(Component::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ConversionError::NonFinite(_)));
    }

    #[test]
    fn srgb_round_trip() {
        let hex = Hex::new(40, 42, 54);
        assert_eq!(Hex::try_from_srgb(hex.to_srgb()).unwrap(), hex);
    }

    #[test]
    fn serde_uses_the_text_form() {
        let json = serde_json::to_string(&Hex::new(189, 147, 249)).unwrap();
        assert_eq!(json, "\"#bd93f9\"");

        let back: Hex = serde_json::from_str("\"#BD93F9\"").unwrap();
        assert_eq!(back, Hex::new(189, 147, 249));

        assert!(serde_json::from_str::<Hex>("\"#bd93\"").is_err());
    }

    #[test]
    fn strings_resolve_through_to_hex() {
        assert_eq!("#fff".to_hex().unwrap(), Hex::WHITE);
        assert_eq!(String::from("000000").to_hex().unwrap(), Hex::BLACK);
        assert!("nope".to_hex().is_err());
    }
}
