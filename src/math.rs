//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. The values are in the order
/// euclid expects: each group of three holds the coefficients one input
/// component contributes to the three outputs.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Return true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    const EPSILON: Component = 1.0e-4;
    value.abs() < EPSILON
}

/// Replace a missing (NaN) component with zero.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Wrap a hue in degrees into [0..360). A missing hue becomes zero.
pub fn normalize_hue(hue: Component) -> Component {
    normalize(hue).rem_euclid(360.0)
}

/// Treat a missing (NaN) or zero value as absent and use `fallback` instead.
pub fn or_fallback(value: Component, fallback: Component) -> Component {
    if value.is_nan() || value == 0.0 {
        fallback
    } else {
        value
    }
}

/// Raise the magnitude of `value` to `exponent`, keeping its sign.
pub fn signed_pow(value: Component, exponent: Component) -> Component {
    value.signum() * value.abs().powf(exponent)
}

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round to the given number of decimal places.
pub fn round_to<T: Float>(value: T, places: i32) -> T {
    let Some(ten) = T::from(10.0) else {
        return value;
    };
    let scale = ten.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_uses_groups_as_input_columns() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 0.0, 2.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );
        // The first input contributes to the first and third outputs.
        assert_eq!(
            transform(&M, Components(1.0, 2.0, 3.0)),
            Components(1.0, 2.0, 5.0)
        );
    }

    #[test]
    fn hues_wrap() {
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(Component::NAN), 0.0);
    }

    #[test]
    fn fallback_replaces_zero_and_nan() {
        assert_eq!(or_fallback(0.0, 0.5), 0.5);
        assert_eq!(or_fallback(Component::NAN, 0.5), 0.5);
        assert_eq!(or_fallback(0.25, 0.5), 0.25);
    }

    #[test]
    fn signed_pow_keeps_sign() {
        assert_eq!(signed_pow(-4.0, 0.5), -2.0);
        assert_eq!(signed_pow(4.0, 0.5), 2.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(12.345_f64, 1), 12.3);
        assert_eq!(lerp(0.0_f64, 10.0, 0.25), 2.5);
    }
}
