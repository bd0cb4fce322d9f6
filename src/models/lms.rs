//! Model a color in the LMS cone response space.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
};

chromatone_macros::gen_model! {
    /// Cone responses computed with the Hunt-Pointer-Estevez matrix.
    pub struct Lms {
        /// Long wavelength response.
        pub long: Component,
        /// Medium wavelength response.
        pub medium: Component,
        /// Short wavelength response.
        pub short: Component,
    }
}

impl From<Xyz> for Lms {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        const XYZ_TO_LMS: Transform = transform_3x3(
             0.38971, -0.22981, 0.0,
             0.68898,  1.18340, 0.0,
            -0.07868,  0.04641, 1.0,
        );

        transform(&XYZ_TO_LMS, value.to_components()).into()
    }
}

impl ToXyz for Lms {
    fn to_xyz(&self) -> Xyz {
        // Algebraic inverse of the Hunt-Pointer-Estevez matrix above.
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_XYZ: Transform = transform_3x3(
             1.9101968340520348,  0.3709500882486886,  0.0,
            -1.1121238927878747,  0.6290542573926132,  0.0,
             0.2019079567674994, -0.0000080551421844,  1.0,
        );

        transform(&LMS_TO_XYZ, self.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn short_cone_is_z() {
        let lms = Lms::from(Xyz::new(0.3, 0.4, 0.5));
        assert_component_eq!(lms.short, 0.5);
        assert_component_eq!(lms.long, 0.38971 * 0.3 + 0.68898 * 0.4 - 0.07868 * 0.5);
    }

    #[test]
    fn inverse_round_trips() {
        let xyz = Xyz::new(0.318634, 0.239006, 0.041637);
        let back = Lms::from(xyz).to_xyz();
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
    }
}
