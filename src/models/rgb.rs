//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
};

pub mod encoding {
    //! Tags that specify whether RGB components are gamma encoded.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded with the sRGB transfer function.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are linear light.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

/// Decode a gamma encoded sRGB channel into linear light.
pub fn linearize(value: Component) -> Component {
    let abs = value.abs();

    if abs <= 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light channel with the sRGB transfer function. This is the
/// inverse of [`linearize`].
pub fn gamma_encode(value: Component) -> Component {
    let abs = value.abs();

    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

chromatone_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Rgb<encoding::GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Rgb<encoding::LinearLight> {
        self.to_components().map(linearize).into()
    }
}

impl Rgb<encoding::LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<encoding::GammaEncoded> {
        self.to_components().map(gamma_encode).into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.9692660,  0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.0415560,  1.0572252,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        transform(&TO_XYZ, Components(self.red, self.green, self.blue)).into()
    }
}

impl ToXyz for Srgb {
    fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }
}

impl Xyz {
    /// Convert this color to gamma encoded sRGB. Components can fall outside
    /// of [0..1] for colors outside of the sRGB gamut.
    pub fn to_srgb(&self) -> Srgb {
        SrgbLinear::from(*self).to_gamma_encoded()
    }
}
