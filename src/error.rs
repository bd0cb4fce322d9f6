//! Error types returned by the crate.

use thiserror::Error;

use crate::color::Components;

/// Errors raised while reading colors or identifiers from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input is not a recognized color notation.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    /// A functional notation has the wrong number of arguments.
    #[error("{function}() expects {expected} components, found {found}")]
    ComponentCount {
        /// Name of the CSS function.
        function: String,
        /// Number of components the function takes.
        expected: usize,
        /// Number of components found in the input.
        found: usize,
    },
    /// A component could not be read as a number.
    #[error("invalid component: {0:?}")]
    InvalidComponent(String),
    /// The palette standard key is unknown.
    #[error("unknown palette standard: {0:?}")]
    UnknownStandard(String),
    /// The harmony rule name is unknown.
    #[error("unknown harmony rule: {0:?}")]
    UnknownHarmonyRule(String),
    /// The export format name is unknown.
    #[error("unknown color format: {0:?}")]
    UnknownFormat(String),
}

/// Errors raised when a palette configuration is degenerate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A palette needs at least two steps.
    #[error("a palette needs at least 2 steps, got {0}")]
    TooFewSteps(usize),
    /// A range bound lies outside [0, 1].
    #[error("{name} range bound {value} is outside [0, 1]")]
    OutOfRange {
        /// Which range is invalid.
        name: &'static str,
        /// The offending bound.
        value: f64,
    },
    /// The lower bound of a range is greater than its upper bound.
    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        /// Which range is invalid.
        name: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The configuration could not be deserialized.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when a color conversion produces an unusable result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// At least one component is NaN or infinite.
    #[error("conversion produced non-finite components {0}")]
    NonFinite(Components),
}

/// Errors raised while rendering a palette as a document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document could not be serialized.
    #[error("could not serialize export: {0}")]
    Json(#[from] serde_json::Error),
    /// The timestamp could not be formatted.
    #[error("could not format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}
