// File: crates/plotpoint-core/src/types.rs
// Summary: Shared layout constants (surface size, paddings, tick and marker metrics).

/// Default surface width in pixels.
pub const WIDTH: i32 = 980;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Length of a tick mark outside the plot rectangle.
pub const TICK_LEN: i32 = 6;
/// Gap between a Y tick mark and the right edge of its label.
pub const Y_TICK_LABEL_GAP: i32 = 10;
/// Diameter of a point marker.
pub const POINT_DIAM: u32 = 8;
/// Tick label and caption font size.
pub const LABEL_SIZE: f32 = 12.0;
/// Title font size.
pub const TITLE_SIZE: f32 = 15.0;

pub const AXIS_WIDTH: f32 = 2.0;
pub const GRID_WIDTH: f32 = 1.0;
pub const TICK_WIDTH: f32 = 1.5;
pub const LINE_WIDTH: f32 = 2.0;
/// Grid dash pattern: on, off.
pub const GRID_DASH: [f32; 2] = [2.0, 6.0];

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Left leaves room for Y tick labels and the rotated caption.
    fn default() -> Self {
        Self::new(80, 30, 50, 55)
    }
}
