// File: crates/plotpoint-core/src/input.rs
// Summary: Parsing of user-typed number lists and caption defaults.

use crate::error::{AxisKind, PlotError, Result};

/// Parse comma- and/or whitespace-separated numbers.
///
/// All or nothing: one bad token rejects the whole text. Non-finite values
/// ("NaN", "inf") count as bad tokens.
pub fn parse_numbers(text: &str, axis: AxisKind) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(PlotError::InvalidNumber { axis, token: tok.to_string() }),
        })
        .collect()
}

/// Trimmed `s`, or `default` when `s` is blank.
pub fn text_or_default(s: &str, default: &str) -> String {
    let t = s.trim();
    if t.is_empty() { default.to_string() } else { t.to_string() }
}

/// Title used when none is given: "<y> vs <x>".
pub fn default_title(x_label: &str, y_label: &str) -> String {
    format!("{y_label} vs {x_label}")
}

/// Render values back to the comma-separated form `parse_numbers` accepts.
pub fn join_numbers(values: &[f64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

/// Built-in sample data: a flat velocity trace over eight seconds.
pub struct Sample {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub title: &'static str,
}

pub fn sample() -> Sample {
    Sample {
        x: (1..=8).map(f64::from).collect(),
        y: vec![0.851; 8],
        x_label: "Time (s)",
        y_label: "Velocity (m/s)",
        title: "Velocity (m/s) vs Time (s)",
    }
}
