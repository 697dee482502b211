// File: crates/plotpoint-core/src/series.rs
// Summary: Validated (x, y) point sequence; order defines line connection order.

use crate::error::{PlotError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Build a series from equal-length columns of at least two finite values.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.len() < 2 {
            return Err(PlotError::TooFewValues { len: x.len() });
        }
        for column in [&x, &y] {
            if let Some((index, &value)) = column.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(PlotError::NonFinite { index, value });
            }
        }
        Ok(Self { x, y })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let (x, y) = points.iter().copied().unzip();
        Self::new(x, y)
    }

    pub fn xs(&self) -> &[f64] {
        &self.x
    }

    pub fn ys(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; a series holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
