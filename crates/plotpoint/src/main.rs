// File: crates/plotpoint/src/main.rs
// Summary: Renders X/Y number lists to a PNG or SVG chart.

use anyhow::{Context, Result};
use clap::Parser;

use plotpoint::config::INPUT_HINT;
use plotpoint::{Config, OutputFormat};
use plotpoint_render_skia::SkiaRenderer;

fn main() -> Result<()> {
    plotpoint::init_tracing();
    let cfg = Config::parse();

    // Nothing is drawn unless the whole input is valid
    let chart = cfg.chart.build_chart().context(INPUT_HINT)?;
    let theme = cfg.chart.resolve_theme()?;
    let opts = cfg.render_options();

    let (x, y) = chart.layout().context(INPUT_HINT)?;
    tracing::info!(
        points = chart.series.len(),
        mode = ?chart.tick_mode,
        x_ticks = x.ticks.len(),
        y_ticks = y.ticks.len(),
        "plotting {}",
        chart.display_title()
    );

    match OutputFormat::from_path(&cfg.output) {
        OutputFormat::Svg => chart.render_to_svg(&opts, &theme, &cfg.output)?,
        OutputFormat::Png => {
            let scene = chart.scene(&opts, &theme)?;
            SkiaRenderer::new()
                .render_png(&scene, &cfg.output)
                .with_context(|| format!("rendering {}", cfg.output.display()))?;
        }
    }
    println!("Wrote {}", cfg.output.display());
    Ok(())
}
