// File: crates/plotpoint-core/src/axis.rs
// Summary: Axis model, visible domain and tick generation (nice or exact).

use crate::error::{PlotError, Result};

/// Default number of intervals the nice-tick heuristic aims for.
pub const DEFAULT_TARGET_TICKS: usize = 8;

/// How tick values are chosen for an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickMode {
    /// Rounded steps of 1, 2 or 5 times a power of ten.
    #[default]
    Nice,
    /// One tick per distinct data value.
    Exact,
}

impl TickMode {
    pub fn toggled(self) -> Self {
        match self {
            TickMode::Nice => TickMode::Exact,
            TickMode::Exact => TickMode::Nice,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub target_ticks: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), target_ticks: DEFAULT_TARGET_TICKS }
    }

    pub fn with_target_ticks(mut self, target: usize) -> Self {
        self.target_ticks = target;
        self
    }

    pub fn default_x() -> Self {
        Self::new("X")
    }

    pub fn default_y() -> Self {
        Self::new("Y")
    }

    /// Domain and ticks for `values` under `mode`, honoring this axis' target.
    pub fn layout(&self, values: &[f64], mode: TickMode) -> Result<AxisLayout> {
        compute_axis_with_target(values, mode, self.target_ticks)
    }
}

/// Visible domain plus tick values for one axis.
///
/// `min < max` always holds. In nice mode the first and last tick may lie
/// slightly outside `[min, max]`; points are mapped against the domain, not
/// against the tick extent.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
    /// Tick spacing in nice mode, `None` for exact ticks.
    pub step: Option<f64>,
}

/// Compute the domain and ticks for `values` with the default target count.
pub fn compute_axis(values: &[f64], mode: TickMode) -> Result<AxisLayout> {
    compute_axis_with_target(values, mode, DEFAULT_TARGET_TICKS)
}

pub fn compute_axis_with_target(values: &[f64], mode: TickMode, target: usize) -> Result<AxisLayout> {
    if values.len() < 2 {
        return Err(PlotError::TooFewValues { len: values.len() });
    }
    let (lo, hi) = finite_min_max(values)?;
    let (min, max) = expand_range(lo, hi);
    if !(max - min).is_finite() {
        return Err(PlotError::UnplottableRange { min, max });
    }

    let layout = match mode {
        TickMode::Nice => {
            let (ticks, step) = nice_ticks(min, max, target).ok_or(PlotError::UnplottableRange { min, max })?;
            AxisLayout { min, max, ticks, step: Some(step) }
        }
        TickMode::Exact => AxisLayout { min, max, ticks: exact_ticks(values), step: None },
    };
    tracing::debug!(
        min = layout.min,
        max = layout.max,
        ticks = layout.ticks.len(),
        ?mode,
        "axis computed"
    );
    Ok(layout)
}

fn finite_min_max(values: &[f64]) -> Result<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(PlotError::NonFinite { index, value });
        }
        lo = lo.min(value);
        hi = hi.max(value);
    }
    Ok((lo, hi))
}

/// Widen a flat range symmetrically so it has non-zero width.
///
/// Non-flat ranges are returned unchanged.
pub fn expand_range(min: f64, max: f64) -> (f64, f64) {
    if min != max {
        return (min, max);
    }
    let base = min.abs();
    let pad = f64::max(1e-3, if base > 1e-9 { base * 0.10 } else { 1.0 });
    (min - pad, max + pad)
}

/// Snap `range` to 1, 2, 5 or 10 times a power of ten.
///
/// `round` selects the nearest-value thresholds used for the step size;
/// otherwise the snapped value is never smaller than `range`.
/// `range` must be finite and positive.
pub fn nice_number(range: f64, round: bool) -> f64 {
    debug_assert!(range.is_finite() && range > 0.0, "nice_number needs a positive range");
    let exp = range.log10().floor();
    let f = range / 10f64.powf(exp);
    let nf = if round {
        if f < 1.5 {
            1.0
        } else if f < 3.0 {
            2.0
        } else if f < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nf * 10f64.powf(exp)
}

/// Rounded ticks covering `[min, max]`, and the step between them.
///
/// A `target` of 0 falls back to [`DEFAULT_TARGET_TICKS`]. Returns `None`
/// when the span or the step leaves the finite positive range of `f64`.
/// Ticks are strictly ascending; once `step` drops below the float spacing
/// at this magnitude, repeated values are skipped.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Option<(Vec<f64>, f64)> {
    let max = if min == max { min + 1.0 } else { max };
    let target = if target == 0 { DEFAULT_TARGET_TICKS } else { target };

    let range = nice_number(positive(max - min)?, false);
    let step = nice_number(positive(range / target as f64)?, true);
    let step = positive(step)?;
    let nice_min = (min / step).floor() * step;
    let nice_max = (max / step).ceil() * step;
    if !(nice_min.is_finite() && nice_max.is_finite()) {
        return None;
    }
    // half a step of slack so the last tick survives accumulated rounding
    let limit = nice_max + 0.5 * step;

    let mut ticks: Vec<f64> = Vec::new();
    let mut i = 0u32;
    let mut v = nice_min;
    while v <= limit {
        if ticks.last().map_or(true, |&last| v > last) {
            ticks.push(v);
        }
        i += 1;
        v = nice_min + f64::from(i) * step;
    }
    Some((ticks, step))
}

fn positive(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

/// Distinct values sorted ascending. `-0.0` and `0.0` count as one value.
pub fn exact_ticks(values: &[f64]) -> Vec<f64> {
    let mut ticks = values.to_vec();
    ticks.sort_by(f64::total_cmp);
    ticks.dedup_by(|a, b| a == b);
    ticks
}
