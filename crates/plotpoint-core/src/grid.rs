// File: crates/plotpoint-core/src/grid.rs
// Summary: Tick positions in pixel space, shared by gridlines, tick marks and labels.

use crate::axis::AxisLayout;
use crate::format::format_tick;
use crate::scale::AxisScale;

#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub px: i32,
    pub label: String,
}

/// Map every tick of `layout` through `scale`.
pub fn tick_marks(layout: &AxisLayout, scale: &AxisScale) -> Vec<TickMark> {
    layout
        .ticks
        .iter()
        .map(|&value| TickMark { value, px: scale.to_px(value), label: format_tick(value) })
        .collect()
}
