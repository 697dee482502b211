// File: crates/plotpoint-core/src/scale.rs
// Summary: Linear data-to-pixel mapping for X and Y axes.

use crate::axis::AxisLayout;

/// Map `value` from `[d_min, d_max]` onto `[p_min, p_max]`, rounding half up.
///
/// For a vertical axis pass the bottom row as `p_min` and the top row as
/// `p_max` so larger values land higher on screen. A zero-width domain maps
/// everything to the pixel midpoint.
#[inline]
pub fn map_to_pixel(value: f64, d_min: f64, d_max: f64, p_min: i32, p_max: i32) -> i32 {
    if d_max == d_min {
        return (p_min + p_max) / 2;
    }
    let t = (value - d_min) / (d_max - d_min);
    let px = f64::from(p_min) + t * f64::from(p_max - p_min);
    (px + 0.5).floor() as i32
}

/// A domain bound to a pixel span, for mapping many values the same way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub d_min: f64,
    pub d_max: f64,
    pub p_min: i32,
    pub p_max: i32,
}

impl AxisScale {
    pub const fn new(d_min: f64, d_max: f64, p_min: i32, p_max: i32) -> Self {
        Self { d_min, d_max, p_min, p_max }
    }

    /// Horizontal scale: domain min at `left`, domain max at `right`.
    pub fn horizontal(layout: &AxisLayout, left: i32, right: i32) -> Self {
        Self::new(layout.min, layout.max, left, right)
    }

    /// Vertical scale: domain min at `bottom`, domain max at `top`.
    pub fn vertical(layout: &AxisLayout, top: i32, bottom: i32) -> Self {
        Self::new(layout.min, layout.max, bottom, top)
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> i32 {
        map_to_pixel(value, self.d_min, self.d_max, self.p_min, self.p_max)
    }
}
