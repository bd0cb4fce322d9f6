//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.
//!
//! ```rust
//! use chromatone::models::{Ipt, Lab, Srgb, ToXyz};
//! let red = Srgb::new(1.0, 0.0, 0.0);
//! let lab = Lab::from(red.to_xyz());   // srgb -> linear -> xyz -> lab
//! let ipt = Ipt::from(red.to_xyz());   // xyz -> lms -> ipt
//! let back = ipt.to_xyz().to_srgb();
//! assert!((back.red - 1.0).abs() < 1.0e-3);
//! assert!(lab.lightness > 50.0);
//! ```

mod hsl;
mod ipt;
mod lab;
mod lms;
mod rgb;
mod xyz;

pub use hsl::Hsl;
pub use ipt::Ipt;
pub use lab::{space, Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use lms::Lms;
pub use rgb::{encoding, gamma_encode, linearize, Rgb, Srgb, SrgbLinear};
pub use xyz::{ToXyz, Xyz, D65};
