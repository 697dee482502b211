// File: crates/plotpoint-core/src/error.rs
// Summary: Error type for input validation and axis computation.

use std::fmt;

use thiserror::Error;

/// Which axis a value belongs to. Used in error messages and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("X"),
            AxisKind::Y => f.write_str("Y"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    #[error("invalid number {token:?} in {axis} values")]
    InvalidNumber { axis: AxisKind, token: String },

    #[error("need at least 2 values, got {len}")]
    TooFewValues { len: usize },

    #[error("non-finite value {value} at position {index}")]
    NonFinite { index: usize, value: f64 },

    #[error("X and Y must have the same length (x: {x}, y: {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("values from {min} to {max} span a range too wide or too narrow to place ticks")]
    UnplottableRange { min: f64, max: f64 },

    #[error("invalid color {0:?}; expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown palette key {0:?}")]
    UnknownColorKey(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
