// File: crates/plotpoint-core/src/chart.rs
// Summary: Chart struct and the render pass that turns it into a backend-neutral scene.

use anyhow::{Context, Result as AnyResult};

use crate::axis::{Axis, AxisLayout, TickMode};
use crate::error::Result;
use crate::geometry::{PointI32, RectI32};
use crate::grid::tick_marks;
use crate::input::default_title;
use crate::scale::AxisScale;
use crate::scene::{Anchor, Primitive, Scene, Stroke, TextRun, VAlign};
use crate::series::Series;
use crate::theme::{Theme, CAPTION};
use crate::types::*;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Tick labels, captions and title. Off gives font-independent output.
    pub draw_labels: bool,
    pub draw_title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            draw_title: true,
        }
    }
}

impl RenderOptions {
    pub fn plot_rect(&self) -> RectI32 {
        RectI32::inset(self.width, self.height, &self.insets)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Series,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub tick_mode: TickMode,
}

impl Chart {
    pub fn new(series: Series) -> Self {
        Self {
            series,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
            tick_mode: TickMode::Nice,
        }
    }

    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tick_mode(mut self, mode: TickMode) -> Self {
        self.tick_mode = mode;
        self
    }

    /// Explicit title, or "<Y> vs <X>".
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => default_title(&self.x_axis.label, &self.y_axis.label),
        }
    }

    /// Domains and ticks for both axes, recomputed on every call.
    pub fn layout(&self) -> Result<(AxisLayout, AxisLayout)> {
        let x = self.x_axis.layout(self.series.xs(), self.tick_mode)?;
        let y = self.y_axis.layout(self.series.ys(), self.tick_mode)?;
        Ok((x, y))
    }

    /// Build the full drawing sequence for one frame.
    pub fn scene(&self, opts: &RenderOptions, theme: &Theme) -> Result<Scene> {
        let (x_layout, y_layout) = self.layout()?;
        let plot = opts.plot_rect();
        let sx = AxisScale::horizontal(&x_layout, plot.left, plot.right);
        let sy = AxisScale::vertical(&y_layout, plot.top, plot.bottom);
        let x_ticks = tick_marks(&x_layout, &sx);
        let y_ticks = tick_marks(&y_layout, &sy);

        let mut scene = Scene::new(opts.width, opts.height);
        scene.push(Primitive::Clear(theme.background));

        // Axes
        let axis = Stroke::solid(theme.axis, AXIS_WIDTH);
        scene.line((plot.left, plot.bottom), (plot.right, plot.bottom), axis);
        scene.line((plot.left, plot.bottom), (plot.left, plot.top), axis);

        // Grid
        let grid = Stroke::dashed(theme.grid, GRID_WIDTH, GRID_DASH);
        for t in &x_ticks {
            scene.line((t.px, plot.top), (t.px, plot.bottom), grid);
        }
        for t in &y_ticks {
            scene.line((plot.left, t.px), (plot.right, t.px), grid);
        }

        // Tick marks
        let tick = Stroke::solid(theme.axis, TICK_WIDTH);
        for t in &x_ticks {
            scene.line((t.px, plot.bottom), (t.px, plot.bottom + TICK_LEN), tick);
        }
        for t in &y_ticks {
            scene.line((plot.left - TICK_LEN, t.px), (plot.left, t.px), tick);
        }

        if opts.draw_labels {
            for t in &x_ticks {
                scene.text(label(&t.label, (t.px, plot.bottom + TICK_LEN + 2), Anchor::Middle, VAlign::Top, theme));
            }
            let label_right = plot.left - TICK_LEN - Y_TICK_LABEL_GAP;
            for t in &y_ticks {
                scene.text(label(&t.label, (label_right, t.px), Anchor::End, VAlign::Middle, theme));
            }
            self.captions(&mut scene, opts, plot);
        }

        // Data, clipped to the plot area
        scene.push(Primitive::PushClip(plot));
        let points: Vec<PointI32> =
            self.series.points().map(|(x, y)| PointI32::new(sx.to_px(x), sy.to_px(y))).collect();
        scene.push(Primitive::Polyline { points: points.clone(), stroke: Stroke::solid(theme.line, LINE_WIDTH) });
        for center in points {
            scene.push(Primitive::Dot { center, diameter: POINT_DIAM, color: theme.point });
        }
        scene.push(Primitive::PopClip);

        tracing::debug!(
            width = opts.width,
            height = opts.height,
            primitives = scene.primitives.len(),
            "scene built"
        );
        Ok(scene)
    }

    fn captions(&self, scene: &mut Scene, opts: &RenderOptions, plot: RectI32) {
        scene.text(TextRun {
            text: self.x_axis.label.clone(),
            at: PointI32::new(plot.center_x(), opts.height - 8),
            anchor: Anchor::Middle,
            valign: VAlign::Baseline,
            size: LABEL_SIZE,
            color: CAPTION,
            rotation: 0.0,
        });
        scene.text(TextRun {
            text: self.y_axis.label.clone(),
            at: PointI32::new(14, plot.center_y()),
            anchor: Anchor::Middle,
            valign: VAlign::Baseline,
            size: LABEL_SIZE,
            color: CAPTION,
            rotation: -90.0,
        });
        if opts.draw_title {
            scene.text(TextRun {
                text: self.display_title(),
                at: PointI32::new(opts.width / 2, plot.top / 2),
                anchor: Anchor::Middle,
                valign: VAlign::Middle,
                size: TITLE_SIZE,
                color: CAPTION,
                rotation: 0.0,
            });
        }
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions, theme: &Theme) -> AnyResult<String> {
        crate::svg::to_svg(&self.scene(opts, theme)?)
    }

    /// Render the chart to an SVG file, creating parent directories.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        theme: &Theme,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> AnyResult<()> {
        let path = output_svg_path.as_ref();
        let svg = self.render_to_svg_string(opts, theme)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote svg");
        Ok(())
    }
}

fn label(text: &str, at: (i32, i32), anchor: Anchor, valign: VAlign, theme: &Theme) -> TextRun {
    TextRun {
        text: text.to_string(),
        at: at.into(),
        anchor,
        valign,
        size: LABEL_SIZE,
        color: theme.ticks,
        rotation: 0.0,
    }
}
