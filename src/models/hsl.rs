//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

chromatone_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// Hue is in degrees, saturation and lightness in [0..1]. The hue of an
    /// achromatic color is missing and stored as NaN.
    pub struct Hsl {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}
