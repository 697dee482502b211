// File: crates/plotpoint-window/src/main.rs
// Summary: Shows one chart in a window via RGBA blit (CPU) using winit + softbuffer.
// Keys: N toggles nice/exact ticks, T cycles palette presets, Esc closes.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use plotpoint::config::INPUT_HINT;
use plotpoint::ChartArgs;
use plotpoint_core::types::{HEIGHT, WIDTH};
use plotpoint_core::{theme, Chart, RenderOptions, Theme};
use plotpoint_render_skia::SkiaRenderer;

#[derive(Parser, Debug)]
#[command(name = "plotpoint-window", version)]
#[command(about = "Show two columns of numbers as a line-and-point chart in a window")]
struct Args {
    #[command(flatten)]
    chart: ChartArgs,
}

fn main() -> Result<()> {
    plotpoint::init_tracing();
    let args = Args::parse();
    let mut chart = args.chart.build_chart().context(INPUT_HINT)?;
    let mut palette = args.chart.resolve_theme()?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(chart.display_title())
        .with_inner_size(LogicalSize::new(f64::from(WIDTH), f64::from(HEIGHT)))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let renderer = SkiaRenderer::new();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::N => {
                        chart.tick_mode = chart.tick_mode.toggled();
                        tracing::info!(mode = ?chart.tick_mode, "tick mode");
                        window.request_redraw();
                    }
                    VirtualKeyCode::T => {
                        palette = theme::next_preset(palette.name);
                        tracing::info!(theme = palette.name, "palette");
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = present(&renderer, &mut surface, &chart, &palette, size.width, size.height) {
                    tracing::error!("redraw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

/// Render at the current window size and blit into the softbuffer frame.
fn present(
    renderer: &SkiaRenderer,
    surface: &mut softbuffer::Surface,
    chart: &Chart,
    palette: &Theme,
    width: u32,
    height: u32,
) -> Result<()> {
    // minimized
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    let opts = RenderOptions { width: width as i32, height: height as i32, ..RenderOptions::default() };
    let frame = renderer.render_rgba8(&chart.scene(&opts, palette)?)?;

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    // softbuffer wants 0RGB per pixel
    for (dst, px) in buffer.iter_mut().zip(frame.pixels.chunks_exact(4)) {
        *dst = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
    }
    buffer.present().map_err(|e| anyhow!("present frame: {e}"))?;
    Ok(())
}
