// File: crates/plotpoint-render-skia/src/lib.rs
// Summary: Paints plotpoint scenes onto Skia CPU raster surfaces; RGBA and PNG output.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use skia_safe as skia;

use plotpoint_core::scene::{Primitive, Scene, Stroke};
use plotpoint_core::geometry::PointI32;
use plotpoint_core::Rgba;

pub mod text;

pub use text::TextShaper;

/// RGBA8 pixels, unpremultiplied, rows packed without padding.
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbaFrame {
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride() + x as usize * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Replay `scene` onto `canvas` in order.
    pub fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        for p in &scene.primitives {
            match p {
                Primitive::Clear(c) => {
                    canvas.clear(to_color(*c));
                }
                Primitive::Line { from, to, stroke } => {
                    canvas.draw_line(to_point(*from), to_point(*to), &stroke_paint(stroke));
                }
                Primitive::Polyline { points, stroke } => {
                    let Some((first, rest)) = points.split_first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to(to_point(*first));
                    for p in rest {
                        path.line_to(to_point(*p));
                    }
                    canvas.draw_path(&path, &stroke_paint(stroke));
                }
                Primitive::Dot { center, diameter, color } => {
                    let mut fill = skia::Paint::default();
                    fill.set_anti_alias(true);
                    fill.set_style(skia::paint::Style::Fill);
                    fill.set_color(to_color(*color));
                    canvas.draw_circle(to_point(*center), *diameter as f32 / 2.0, &fill);
                }
                Primitive::Text(run) => self.shaper.draw(canvas, run),
                Primitive::PushClip(r) => {
                    canvas.save();
                    let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
                    canvas.clip_rect(rect, skia::ClipOp::Intersect, true);
                }
                Primitive::PopClip => {
                    canvas.restore();
                }
            }
        }
    }

    /// Render to an RGBA8 buffer using a CPU raster surface.
    pub fn render_rgba8(&self, scene: &Scene) -> Result<RgbaFrame> {
        let (w, h) = (scene.width, scene.height);
        if w <= 0 || h <= 0 {
            bail!("surface size must be positive, got {w}x{h}");
        }
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), scene);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("reading pixels from raster surface failed");
        }
        tracing::debug!(width = w, height = h, "rendered rgba frame");
        Ok(RgbaFrame { pixels, width: w as u32, height: h as u32 })
    }

    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let frame = self.render_rgba8(scene)?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", scene.width, scene.height))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render to a PNG file, creating parent directories.
    pub fn render_png(&self, scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_point(p: PointI32) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(to_color(stroke.color));
    if let Some(dash) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
    }
    paint
}
