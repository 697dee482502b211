// File: crates/plotpoint-core/src/lib.rs
// Summary: Core library entry point; axis ticks, pixel mapping, scene building and SVG output.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod format;
pub mod input;
pub mod theme;
pub mod scene;
pub mod svg;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{compute_axis, nice_number, Axis, AxisLayout, TickMode};
pub use scale::{map_to_pixel, AxisScale};
pub use format::format_tick;
pub use input::{parse_numbers, text_or_default};
pub use theme::{Rgba, Theme};
pub use scene::Scene;
pub use error::{AxisKind, PlotError};
