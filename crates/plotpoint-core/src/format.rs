// File: crates/plotpoint-core/src/format.rs
// Summary: Tick label formatting (up to 3 decimals, no trailing zeros, no "-0").

/// Magnitudes below this print as "0".
const ZERO_SNAP: f64 = 5e-4;

pub fn format_tick(value: f64) -> String {
    let v = if value.abs() < ZERO_SNAP { 0.0 } else { value };
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
