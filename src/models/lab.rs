//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! CIE-Lch, Oklab and Oklch.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz, D65},
};

pub mod space {
    //! Tags for the color spaces that have a rectangular and a polar form.

    /// Identifies a color space tag.
    pub trait Space {}

    /// Tag for CIE-Lab.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Lab;
    impl Space for Lab {}

    /// Tag for Oklab.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Oklab;
    impl Space for Oklab {}
}

chromatone_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            Component::NAN
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Polar::new(self.lightness, chroma, hue)
    }
}

chromatone_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component.
        pub hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form. A missing hue is treated as zero.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = normalize_hue(self.hue).to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b)
    }
}

/// The model for a color specified in the CIE-Lab color space with the rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

/// The model for a color specified in the CIE-Lab color space with the cylindrical polar form.
pub type Lch = Polar<space::Lab>;

/// The model for a color specified in the oklab color space with the rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

/// The model for a color specified in the oklab color space with the cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;

const EPSILON: Component = 0.008856;
const KAPPA: Component = 7.787;
const OFFSET: Component = 16.0 / 116.0;
/// Cube root of [`EPSILON`], the point where the inverse switches segments.
const F_EPSILON: Component = 0.206897;

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let adapted = Components(value.x / D65.0, value.y / D65.1, value.z / D65.2);

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                KAPPA * v + OFFSET
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

impl ToXyz for Lab {
    fn to_xyz(&self) -> Xyz {
        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = self.a / 500.0 + f1;
        let f2 = f1 - self.b / 200.0;

        let Components(x, y, z) = Components(f0, f1, f2).map(|f| {
            if f > F_EPSILON {
                f * f * f
            } else {
                (f - OFFSET) / KAPPA
            }
        });

        Xyz::new(x * D65.0, y * D65.1, z * D65.2)
    }
}

impl ToXyz for Lch {
    fn to_xyz(&self) -> Xyz {
        self.to_rectangular().to_xyz()
    }
}

impl From<Xyz> for Oklab {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const XYZ_TO_LMS: Transform = transform_3x3(
             0.8190224432164319,  0.0329836671980271,  0.048177199566046255,
             0.3619062562801221,  0.9292868468965546,  0.26423952494422764,
            -0.12887378261216414, 0.03614466816999844, 0.6335478258136937,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

impl ToXyz for Oklab {
    fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            0.99999999845051981432,  1.0000000088817607767,    1.0000000546724109177,
            0.39633779217376785678, -0.1055613423236563494,   -0.089484182094965759684,
            0.21580375806075880339, -0.063854174771705903402, -1.2914855378640917399,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_XYZ: Transform = transform_3x3(
             1.2268798733741557,  -0.04057576262431372, -0.07637294974672142,
            -0.5578149965554813,   1.1122868293970594,  -0.4214933239627914,
             0.28139105017721583, -0.07171106666151701,  1.5869240244272418,
        );

        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_XYZ, lms).into()
    }
}

impl ToXyz for Oklch {
    fn to_xyz(&self) -> Xyz {
        self.to_rectangular().to_xyz()
    }
}
