//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The CIE standard illuminant D65 reference white, normalized to Y = 1.
#[allow(clippy::excessive_precision)]
pub const D65: Components = Components(0.95047, 1.0, 1.08883);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ with a D65 white point.
    fn to_xyz(&self) -> Xyz;
}

chromatone_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl ToXyz for Xyz {
    fn to_xyz(&self) -> Xyz {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip() {
        let xyz = Xyz::new(0.1, 0.2, 0.3);
        assert_eq!(xyz.to_components(), Components(0.1, 0.2, 0.3));
        assert_eq!(Xyz::from(Components(0.1, 0.2, 0.3)), xyz);
        assert_eq!(xyz.to_xyz(), xyz);
    }
}
