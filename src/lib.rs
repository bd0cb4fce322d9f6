//! chromatone converts colors between the sRGB, HSL, CIE-Lab, Oklab and IPT
//! color spaces, generates tonal palettes from a base color following ten
//! palette standards, rates them against the WCAG contrast guidelines and
//! formats the results for export.
//!
//! ```rust
//! use chromatone::{
//!     export::generate_css_variables,
//!     palette::{generate_palettes_for_color, StandardSet},
//!     reference::find_reference_color,
//! };
//!
//! let purple = find_reference_color("purple").unwrap();
//! let result = generate_palettes_for_color(purple, StandardSet::POPULAR);
//! assert_eq!(result.palettes.len(), 3);
//!
//! let css = generate_css_variables(&result.palettes[0]);
//! assert!(css.starts_with(":root {"));
//! ```

#![deny(missing_docs)]

mod color;
pub mod contrast;
mod convert;
pub mod error;
pub mod export;
pub mod matcher;
mod math;
pub mod models;
pub mod palette;
pub mod parse;
pub mod reference;


pub use color::{Component, Components, Hex, ToHex};
pub use convert::{cubehelix, Cubehelix};
pub use error::{ConfigError, ConversionError, ExportError, ParseError};
