//! Model a color in the IPT color space of Ebner and Fairchild.

use crate::{
    color::Component,
    math::{signed_pow, transform, transform_3x3, Transform},
    models::{
        lms::Lms,
        xyz::{ToXyz, Xyz},
    },
};

/// Exponent of the cone response compression.
const NONLINEARITY: Component = 0.43;

chromatone_macros::gen_model! {
    /// A color in the IPT space: intensity plus two opponent axes.
    pub struct Ipt {
        /// Intensity.
        pub intensity: Component,
        /// Red-green (protan) opponent axis.
        pub protan: Component,
        /// Yellow-blue (tritan) opponent axis.
        pub tritan: Component,
    }
}

impl Ipt {
    /// Return the radial distance from the neutral axis and the angle in
    /// degrees on the P/T plane.
    pub fn chroma_and_hue(&self) -> (Component, Component) {
        let chroma = (self.protan * self.protan + self.tritan * self.tritan).sqrt();
        let hue = self.tritan.atan2(self.protan).to_degrees().rem_euclid(360.0);
        (chroma, hue)
    }

    /// Convert back to linear cone responses.
    pub fn to_lms(&self) -> Lms {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const IPT_TO_LMS: Transform = transform_3x3(
            1.0,                 1.0,                 1.0,
            0.0975689305146139, -0.1138764854731471,  0.0326151099170664,
            0.2052264331645916,  0.1332171583699981, -0.6768871830691794,
        );

        transform(&IPT_TO_LMS, self.to_components())
            .map(|v| signed_pow(v, 1.0 / NONLINEARITY))
            .into()
    }
}

impl From<Lms> for Ipt {
    fn from(value: Lms) -> Self {
        #[rustfmt::skip]
        const LMS_TO_IPT: Transform = transform_3x3(
            0.4,  4.455,  0.8056,
            0.4, -4.851,  0.3572,
            0.2,  0.396, -1.1628,
        );

        let compressed = value
            .to_components()
            .map(|v| signed_pow(v, NONLINEARITY));
        transform(&LMS_TO_IPT, compressed).into()
    }
}

impl From<Xyz> for Ipt {
    fn from(value: Xyz) -> Self {
        Ipt::from(Lms::from(value))
    }
}

impl ToXyz for Ipt {
    fn to_xyz(&self) -> Xyz {
        self.to_lms().to_xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Srgb};

    #[test]
    fn black_is_zero() {
        let ipt = Ipt::from(Xyz::new(0.0, 0.0, 0.0));
        assert_component_eq!(ipt.intensity, 0.0);
        assert_component_eq!(ipt.protan, 0.0);
        assert_component_eq!(ipt.tritan, 0.0);
    }

    #[test]
    fn round_trip_through_xyz() {
        let srgb = Srgb::new(1.0, 0.333333, 0.333333);
        let back = Ipt::from(srgb.to_xyz()).to_xyz().to_srgb();
        assert_component_eq!(back.red, srgb.red, 1.0e-3);
        assert_component_eq!(back.green, srgb.green, 1.0e-3);
        assert_component_eq!(back.blue, srgb.blue, 1.0e-3);
    }

    #[test]
    fn negative_responses_keep_their_sign() {
        let lms = Ipt::from(Lms::new(-0.1, 0.2, 0.3)).to_lms();
        assert_component_eq!(lms.long, -0.1, 1.0e-4);
        assert_component_eq!(lms.medium, 0.2, 1.0e-4);
        assert_component_eq!(lms.short, 0.3, 1.0e-4);
    }
}
