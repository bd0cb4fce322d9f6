//! Conversions between [`Hex`] colors and the models.
//!
//! Every conversion from a model back to [`Hex`] goes through
//! [`Hex::try_from_srgb`], so out of gamut results are clamped and non-finite
//! results are reported instead of silently quantized.

use crate::{
    color::{Component, Components, Hex},
    error::ConversionError,
    models::{Hsl, Ipt, Lab, Lch, Oklab, Oklch, Srgb, ToXyz, Xyz},
};

impl Hex {
    /// Convert to CIE-XYZ with a D65 white point.
    pub fn to_xyz(self) -> Xyz {
        self.to_srgb().to_xyz()
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(self) -> Hsl {
        self.to_srgb().to_hsl()
    }

    /// Convert to CIE-Lab.
    pub fn to_lab(self) -> Lab {
        Lab::from(self.to_xyz())
    }

    /// Convert to CIE-Lch.
    pub fn to_lch(self) -> Lch {
        self.to_lab().to_polar()
    }

    /// Convert to Oklab.
    pub fn to_oklab(self) -> Oklab {
        Oklab::from(self.to_xyz())
    }

    /// Convert to Oklch.
    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_polar()
    }

    /// Convert to IPT.
    pub fn to_ipt(self) -> Ipt {
        Ipt::from(self.to_xyz())
    }

    /// Convert any model that can reach CIE-XYZ back to an 8-bit color.
    pub fn try_from_model(model: &impl ToXyz) -> Result<Hex, ConversionError> {
        Hex::try_from_srgb(model.to_xyz().to_srgb())
    }
}

impl TryFrom<Hsl> for Hex {
    type Error = ConversionError;

    fn try_from(value: Hsl) -> Result<Self, Self::Error> {
        Hex::try_from_srgb(value.to_srgb())
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

/// Calculate a color on Dave Green's cubehelix spiral.
///
/// `t` runs from black (0) to white (1), `start` is the starting hue in
/// [0..3], `rotations` the number of R-G-B rotations over the range,
/// `hue_intensity` the saturation of the spiral and `gamma` emphasizes low or
/// high intensities.
pub fn cubehelix(
    t: Component,
    start: Component,
    rotations: Component,
    hue_intensity: Component,
    gamma: Component,
) -> Srgb {
    use std::f64::consts::PI;

    let angle = 2.0 * (PI as Component) * (start / 3.0 + 1.0 + rotations * t);
    let fract = t.powf(gamma);
    let amplitude = hue_intensity * fract * (1.0 - fract) / 2.0;

    let (sin, cos) = angle.sin_cos();

    Srgb::new(
        fract + amplitude * (-0.14861 * cos + 1.78277 * sin),
        fract + amplitude * (-0.29227 * cos - 0.90649 * sin),
        fract + amplitude * (1.97294 * cos),
    )
}

/// Parameters of a cubehelix color scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubehelix {
    /// Starting hue in [0..3].
    pub start: Component,
    /// Number of rotations over the scheme.
    pub rotations: Component,
    /// Hue intensity (saturation).
    pub hue_intensity: Component,
    /// Intensity gamma.
    pub gamma: Component,
}

impl Default for Cubehelix {
    fn default() -> Self {
        Self {
            start: 0.5,
            rotations: -1.5,
            hue_intensity: 1.0,
            gamma: 1.0,
        }
    }
}

impl Cubehelix {
    /// Start the spiral at the given hue in degrees.
    pub fn from_hue(hue: Component) -> Self {
        Self {
            start: crate::math::normalize_hue(hue) / 360.0 * 3.0,
            ..Self::default()
        }
    }

    /// Return the color at position `t` in [0..1].
    pub fn at(&self, t: Component) -> Result<Hex, ConversionError> {
        Hex::try_from_srgb(cubehelix(
            t,
            self.start,
            self.rotations,
            self.hue_intensity,
            self.gamma,
        ))
    }
}

impl From<Components> for Cubehelix {
    fn from(value: Components) -> Self {
        Self {
            start: value.0,
            rotations: value.1,
            hue_intensity: value.2,
            ..Self::default()
        }
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(&str, Component, Component, Component, Component, Component, Component)] = &[
            // hex        hue     sat     light    lab L     lab a     lab b
            ("#ff5555",   0.0,    1.0,    0.66667, 60.2659,  64.2094,  36.5480),
            ("#282a36", 231.4286, 0.14894, 0.18431, 17.3358,   2.3590, -8.0127),
            ("#50fa7b", 135.1765, 0.94444, 0.64706, 87.7285, -69.1118, 48.1644),
            ("#808080",   0.0,    0.0,    0.50196, 53.5850,   0.0,      0.0),
        ];

        for &(hex, hue, saturation, lightness, l, a, b) in TESTS {
            let hex: Hex = hex.parse().unwrap();

            let hsl = hex.to_hsl();
            if saturation > 0.0 {
                assert_component_eq!(hsl.hue, hue, 1.0e-3);
            } else {
                assert!(hsl.hue.is_nan());
            }
            assert_component_eq!(hsl.saturation, saturation, 1.0e-4);
            assert_component_eq!(hsl.lightness, lightness, 1.0e-4);

            let lab = hex.to_lab();
            assert_component_eq!(lab.lightness, l, 0.01);
            assert_component_eq!(lab.a, a, 0.01);
            assert_component_eq!(lab.b, b, 0.01);
        }
    }

    #[test]
    fn hue_is_powerless_if_there_is_no_chroma() {
        let hsl = Hex::new(40, 40, 40).to_hsl();
        assert!(hsl.hue.is_nan());
        assert_eq!(hsl.saturation, 0.0);
    }

    #[test]
    fn hsl_round_trips_through_hex() {
        for hex in [Hex::new(255, 85, 85), Hex::new(98, 114, 164), Hex::new(241, 250, 140)] {
            assert_eq!(Hex::try_from(hex.to_hsl()).unwrap(), hex);
        }
    }

    #[test]
    fn models_round_trip_through_hex() {
        let hex = Hex::new(189, 147, 249);
        assert_eq!(Hex::try_from_model(&hex.to_lab()).unwrap(), hex);
        assert_eq!(Hex::try_from_model(&hex.to_lch()).unwrap(), hex);
        assert_eq!(Hex::try_from_model(&hex.to_oklch()).unwrap(), hex);
        assert_eq!(Hex::try_from_model(&hex.to_ipt()).unwrap(), hex);
    }

    #[test]
    fn cubehelix_end_points_are_black_and_white() {
        let scheme = Cubehelix::default();
        assert_eq!(scheme.at(0.0).unwrap(), Hex::BLACK);
        assert_eq!(scheme.at(1.0).unwrap(), Hex::WHITE);
    }

    #[test]
    fn cubehelix_midpoint() {
        // angle = 2π(0.5/3 + 1 - 0.75), amplitude = 0.125
        let srgb = cubehelix(0.5, 0.5, -1.5, 1.0, 1.0);
        let angle = 2.0 * std::f64::consts::PI as Component * (0.5 / 3.0 + 0.25);
        assert_component_eq!(
            srgb.red,
            0.5 + 0.125 * (-0.14861 * angle.cos() + 1.78277 * angle.sin())
        );
        assert_component_eq!(srgb.blue, 0.5 + 0.125 * 1.97294 * angle.cos());
    }

    #[test]
    fn cubehelix_start_follows_hue() {
        assert_component_eq!(Cubehelix::from_hue(120.0).start, 1.0);
        assert_component_eq!(Cubehelix::from_hue(-120.0).start, 2.0);
    }
}
