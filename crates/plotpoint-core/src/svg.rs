// File: crates/plotpoint-core/src/svg.rs
// Summary: Replays a scene onto a plotters drawing backend; SVG text output.

use std::f64::consts::TAU;

use anyhow::{anyhow, ensure, Result};
use plotters::backend::{DrawingBackend, SVGBackend};
use plotters_backend::{BackendCoord, DrawingErrorKind};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontTransform, IntoFont, RGBAColor, ShapeStyle};

use crate::geometry::{PointI32, RectI32};
use crate::scene::{Anchor, Primitive, Scene, Stroke, TextRun, VAlign};
use crate::theme::Rgba;

type Pt = (f64, f64);

/// Corners of the polygon that stands in for a partly clipped dot.
const DOT_SEGMENTS: usize = 24;

/// Render `scene` as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> Result<String> {
    ensure!(scene.width > 0 && scene.height > 0, "invalid svg size {}x{}", scene.width, scene.height);
    let mut out = String::new();
    {
        let mut backend = SVGBackend::with_string(&mut out, (scene.width as u32, scene.height as u32));
        replay(scene, &mut backend).map_err(|e| anyhow!("drawing svg: {e}"))?;
        backend.present().map_err(|e| anyhow!("finishing svg: {e}"))?;
    }
    Ok(out)
}

/// Draw every primitive of `scene` onto `backend` in order.
///
/// Plotters backends have no clip stack, so clip regions are applied here:
/// strokes are cut at the region edge and dots crossing it become polygons.
pub fn replay<DB: DrawingBackend>(scene: &Scene, backend: &mut DB) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    let mut clips: Vec<RectI32> = Vec::new();
    for p in &scene.primitives {
        let clip = clips.last().copied();
        match p {
            Primitive::Clear(c) => {
                backend.draw_rect((0, 0), (scene.width, scene.height), &fill(*c), true)?;
            }
            Primitive::Line { from, to, stroke } => draw_stroked(backend, &[*from, *to], stroke, clip)?,
            Primitive::Polyline { points, stroke } => draw_stroked(backend, points, stroke, clip)?,
            Primitive::Dot { center, diameter, color } => draw_dot(backend, *center, *diameter, *color, clip)?,
            Primitive::Text(run) => draw_text(backend, run)?,
            Primitive::PushClip(rect) => {
                // nested regions intersect
                clips.push(match clip {
                    Some(outer) => intersect(outer, *rect),
                    None => *rect,
                });
            }
            Primitive::PopClip => {
                clips.pop();
            }
        }
    }
    Ok(())
}

fn draw_stroked<DB: DrawingBackend>(
    backend: &mut DB,
    points: &[PointI32],
    stroke: &Stroke,
    clip: Option<RectI32>,
) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    let style = ShapeStyle {
        color: rgba(stroke.color),
        filled: false,
        stroke_width: stroke.width.round().max(1.0) as u32,
    };
    let mut segments: Vec<(Pt, Pt)> = Vec::with_capacity(points.len());
    for w in points.windows(2) {
        let (a, b) = (to_pt(w[0]), to_pt(w[1]));
        match stroke.dash {
            Some(pattern) => segments.extend(dashes(a, b, pattern)),
            None => segments.push((a, b)),
        }
    }

    // clipped pieces that still touch are joined into one path
    let mut path: Vec<BackendCoord> = Vec::new();
    for (a, b) in segments {
        let Some((a, b)) = clip_segment(a, b, clip) else { continue };
        let (a, b) = (to_coord(a), to_coord(b));
        if path.last() != Some(&a) {
            flush(backend, &mut path, &style)?;
            path.push(a);
        }
        path.push(b);
    }
    flush(backend, &mut path, &style)
}

fn flush<DB: DrawingBackend>(
    backend: &mut DB,
    path: &mut Vec<BackendCoord>,
    style: &ShapeStyle,
) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    match path.len() {
        0 | 1 => path.clear(),
        2 => {
            backend.draw_line(path[0], path[1], style)?;
            path.clear();
        }
        _ => backend.draw_path(std::mem::take(path), style)?,
    }
    Ok(())
}

/// Split `a`-`b` into on/off dashes, starting with an "on" piece.
fn dashes(a: Pt, b: Pt, [on, off]: [f32; 2]) -> Vec<(Pt, Pt)> {
    let (on, off) = (f64::from(on), f64::from(off));
    let len = (b.0 - a.0).hypot(b.1 - a.1);
    if len == 0.0 || on <= 0.0 || off <= 0.0 {
        return vec![(a, b)];
    }
    let (ux, uy) = ((b.0 - a.0) / len, (b.1 - a.1) / len);
    let at = |d: f64| (a.0 + ux * d, a.1 + uy * d);
    let mut out = Vec::new();
    let mut d = 0.0;
    while d < len {
        out.push((at(d), at((d + on).min(len))));
        d += on + off;
    }
    out
}

fn draw_dot<DB: DrawingBackend>(
    backend: &mut DB,
    center: PointI32,
    diameter: u32,
    color: Rgba,
    clip: Option<RectI32>,
) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    let style = fill(color);
    let r = (diameter / 2) as i32;
    let corner = |dx: i32, dy: i32| PointI32::new(center.x + dx, center.y + dy);
    match clip {
        Some(rect) if !(rect.contains(corner(-r, -r)) && rect.contains(corner(r, r))) => {
            let (cx, cy, r) = (f64::from(center.x), f64::from(center.y), f64::from(r));
            let ring: Vec<Pt> = (0..DOT_SEGMENTS)
                .map(|i| {
                    let a = i as f64 * TAU / DOT_SEGMENTS as f64;
                    (cx + r * a.cos(), cy + r * a.sin())
                })
                .collect();
            let visible = clip_polygon(ring, rect);
            if visible.len() >= 3 {
                backend.fill_polygon(visible.into_iter().map(to_coord), &style)?;
            }
            Ok(())
        }
        _ => backend.draw_circle((center.x, center.y), diameter / 2, &style, true),
    }
}

fn draw_text<DB: DrawingBackend>(backend: &mut DB, run: &TextRun) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    if run.text.is_empty() {
        return Ok(());
    }
    let h = match run.anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
        Anchor::End => HPos::Right,
    };
    let v = match run.valign {
        VAlign::Baseline => VPos::Bottom,
        VAlign::Middle => VPos::Center,
        VAlign::Top => VPos::Top,
    };
    let style = ("sans-serif", f64::from(run.size))
        .into_font()
        .transform(quarter_turn(run.rotation))
        .color(&rgba(run.color))
        .pos(Pos::new(h, v));
    backend.draw_text(&run.text, &style, (run.at.x, run.at.y))
}

/// Backend text only turns in quarter turns; anything else is drawn upright.
fn quarter_turn(degrees: f32) -> FontTransform {
    match degrees.rem_euclid(360.0).round() as i32 {
        90 => FontTransform::Rotate90,
        180 => FontTransform::Rotate180,
        270 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

/// Liang-Barsky clip of segment `a`-`b` against `clip`.
fn clip_segment(a: Pt, b: Pt, clip: Option<RectI32>) -> Option<(Pt, Pt)> {
    let Some(r) = clip else { return Some((a, b)) };
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [
        (-dx, a.0 - f64::from(r.left)),
        (dx, f64::from(r.right) - a.0),
        (-dy, a.1 - f64::from(r.top)),
        (dy, f64::from(r.bottom) - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    (t0 <= t1).then(|| ((a.0 + t0 * dx, a.1 + t0 * dy), (a.0 + t1 * dx, a.1 + t1 * dy)))
}

/// Sutherland-Hodgman clip of a convex polygon against `r`.
fn clip_polygon(mut poly: Vec<Pt>, r: RectI32) -> Vec<Pt> {
    let (left, top) = (f64::from(r.left), f64::from(r.top));
    let (right, bottom) = (f64::from(r.right), f64::from(r.bottom));
    for edge in 0..4 {
        let inside = |p: Pt| match edge {
            0 => p.0 >= left,
            1 => p.0 <= right,
            2 => p.1 >= top,
            _ => p.1 <= bottom,
        };
        // only called when p and q sit on opposite sides of the edge
        let cross = |p: Pt, q: Pt| match edge {
            0 | 1 => {
                let x = if edge == 0 { left } else { right };
                (x, p.1 + (x - p.0) / (q.0 - p.0) * (q.1 - p.1))
            }
            _ => {
                let y = if edge == 2 { top } else { bottom };
                (p.0 + (y - p.1) / (q.1 - p.1) * (q.0 - p.0), y)
            }
        };
        let input = std::mem::take(&mut poly);
        let Some(&last) = input.last() else { break };
        let mut prev = last;
        for p in input {
            match (inside(prev), inside(p)) {
                (true, true) => poly.push(p),
                (true, false) => poly.push(cross(prev, p)),
                (false, true) => {
                    poly.push(cross(prev, p));
                    poly.push(p);
                }
                (false, false) => {}
            }
            prev = p;
        }
    }
    poly
}

fn intersect(a: RectI32, b: RectI32) -> RectI32 {
    RectI32::from_ltrb(a.left.max(b.left), a.top.max(b.top), a.right.min(b.right), a.bottom.min(b.bottom))
}

fn to_pt(p: PointI32) -> Pt {
    (f64::from(p.x), f64::from(p.y))
}

fn to_coord(p: Pt) -> BackendCoord {
    (p.0.round() as i32, p.1.round() as i32)
}

fn rgba(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, f64::from(c.a) / 255.0)
}

fn fill(c: Rgba) -> ShapeStyle {
    ShapeStyle { color: rgba(c), filled: true, stroke_width: 0 }
}
