// File: crates/plotpoint/src/config.rs
// Summary: Command-line arguments and TOML palette configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use serde::Deserialize;

use plotpoint_core::axis::DEFAULT_TARGET_TICKS;
use plotpoint_core::input::{sample, text_or_default};
use plotpoint_core::theme::{self, ColorKey};
use plotpoint_core::types::{HEIGHT, WIDTH};
use plotpoint_core::{parse_numbers, Axis, AxisKind, Chart, PlotError, RenderOptions, Rgba, Series, Theme, TickMode};

/// Shown with any input error.
pub const INPUT_HINT: &str =
    "Please enter comma-separated numbers for X and Y with the same length (>= 2)";

/// Data, captions, tick mode and palette for one chart.
#[derive(Args, Clone, Debug, Default)]
pub struct ChartArgs {
    /// X values, separated by commas and/or whitespace
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<String>,

    /// Y values, separated by commas and/or whitespace
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<String>,

    /// X axis caption
    #[arg(long, default_value = "")]
    pub x_label: String,

    /// Y axis caption
    #[arg(long, default_value = "")]
    pub y_label: String,

    /// Chart title (defaults to "<Y> vs <X>")
    #[arg(long)]
    pub title: Option<String>,

    /// Put ticks at the data values instead of rounded steps
    #[arg(long)]
    pub exact: bool,

    /// Number of intervals the rounded ticks aim for
    #[arg(long, default_value_t = DEFAULT_TARGET_TICKS)]
    pub ticks: usize,

    /// Palette preset (classic, light, dark, solarized-dark, solarized-light, high-contrast-dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// TOML palette file with an optional `theme` and per-color overrides
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Override one palette color, e.g. `--color line=#ff0000` (repeatable)
    #[arg(long = "color", value_name = "KEY=#RRGGBB")]
    pub colors: Vec<String>,

    /// Use the built-in sample data for any missing X/Y values
    #[arg(long)]
    pub sample: bool,
}

impl ChartArgs {
    pub fn tick_mode(&self) -> TickMode {
        if self.exact { TickMode::Exact } else { TickMode::Nice }
    }

    /// Parse and validate the data into a chart. All-or-nothing.
    pub fn build_chart(&self) -> Result<Chart, PlotError> {
        let demo = sample();
        let x = match self.x.as_deref() {
            Some(text) => parse_numbers(text, AxisKind::X)?,
            None if self.sample => demo.x.clone(),
            None => Vec::new(),
        };
        let y = match self.y.as_deref() {
            Some(text) => parse_numbers(text, AxisKind::Y)?,
            None if self.sample => demo.y.clone(),
            None => Vec::new(),
        };
        let series = Series::new(x, y)?;

        let (x_default, y_default) = if self.sample { (demo.x_label, demo.y_label) } else { ("X", "Y") };
        let x_axis = Axis::new(text_or_default(&self.x_label, x_default)).with_target_ticks(self.ticks);
        let y_axis = Axis::new(text_or_default(&self.y_label, y_default)).with_target_ticks(self.ticks);

        let mut chart = Chart::new(series).with_axes(x_axis, y_axis).with_tick_mode(self.tick_mode());
        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            chart = chart.with_title(title.trim());
        }
        Ok(chart)
    }

    /// Preset from `--theme` or the palette file, then file overrides, then `--color`.
    pub fn resolve_theme(&self) -> Result<Theme> {
        let file = match &self.palette {
            Some(path) => PaletteFile::load(path)?,
            None => PaletteFile::default(),
        };
        let mut theme = match self.theme.as_deref().or(file.theme.as_deref()) {
            Some(name) => theme::find_or_default(name),
            None => Theme::classic(),
        };
        for (key, value) in file.overrides() {
            let color = Rgba::from_hex(value).with_context(|| format!("palette key `{}`", key.as_str()))?;
            theme.set_color(key, color);
        }
        for entry in &self.colors {
            let (key, color) = parse_color_override(entry)?;
            theme.set_color(key, color);
        }
        tracing::debug!(theme = theme.name, "palette resolved");
        Ok(theme)
    }
}

/// Output-to-file configuration for the `plotpoint` binary.
#[derive(Parser, Clone, Debug)]
#[command(name = "plotpoint", version)]
#[command(about = "Plot two columns of numbers as a line-and-point chart")]
pub struct Config {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Output file; `.svg` writes SVG, anything else PNG
    #[arg(short, long, default_value = "target/out/plotpoint.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(160..))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(160..))]
    pub height: i32,

    /// Skip tick labels, captions and title
    #[arg(long)]
    pub no_labels: bool,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            draw_labels: !self.no_labels,
            ..RenderOptions::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

/// Palette file contents. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteFile {
    pub theme: Option<String>,
    pub line: Option<String>,
    pub point: Option<String>,
    pub grid: Option<String>,
    pub background: Option<String>,
    pub axis: Option<String>,
    pub ticks: Option<String>,
}

impl PaletteFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading palette {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("parsing palette {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Colors set in the file, in palette order.
    pub fn overrides(&self) -> impl Iterator<Item = (ColorKey, &str)> + '_ {
        ColorKey::ALL.into_iter().filter_map(move |key| {
            let value = match key {
                ColorKey::Line => &self.line,
                ColorKey::Point => &self.point,
                ColorKey::Grid => &self.grid,
                ColorKey::Background => &self.background,
                ColorKey::Axis => &self.axis,
                ColorKey::Ticks => &self.ticks,
            };
            value.as_deref().map(|v| (key, v))
        })
    }
}

/// Parse `key=#rrggbb`.
pub fn parse_color_override(entry: &str) -> Result<(ColorKey, Rgba), PlotError> {
    let (key, value) = entry.split_once('=').ok_or_else(|| PlotError::InvalidColor(entry.to_string()))?;
    Ok((key.parse()?, value.parse()?))
}
