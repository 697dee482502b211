// File: crates/plotpoint-core/src/scene.rs
// Summary: Backend-neutral drawing primitives produced by a chart render pass.

use crate::geometry::{PointI32, RectI32};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    /// On/off dash lengths; solid when `None`.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(color: Rgba, width: f32) -> Self {
        Self { color, width, dash: None }
    }
    pub const fn dashed(color: Rgba, width: f32, dash: [f32; 2]) -> Self {
        Self { color, width, dash: Some(dash) }
    }
}

/// Horizontal placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Baseline,
    Middle,
    Top,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub at: PointI32,
    pub anchor: Anchor,
    pub valign: VAlign,
    pub size: f32,
    pub color: Rgba,
    /// Clockwise rotation in degrees around `at`.
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Clear(Rgba),
    Line { from: PointI32, to: PointI32, stroke: Stroke },
    Polyline { points: Vec<PointI32>, stroke: Stroke },
    /// Filled circle.
    Dot { center: PointI32, diameter: u32, color: Rgba },
    Text(TextRun),
    /// Restrict following primitives to `rect` until the matching `PopClip`.
    PushClip(RectI32),
    PopClip,
}

/// Ordered drawing commands for a `width` x `height` surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn line(&mut self, from: impl Into<PointI32>, to: impl Into<PointI32>, stroke: Stroke) {
        self.push(Primitive::Line { from: from.into(), to: to.into(), stroke });
    }

    pub fn text(&mut self, run: TextRun) {
        self.push(Primitive::Text(run));
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = PointI32> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Dot { center, .. } => Some(*center),
            _ => None,
        })
    }
}
