// File: crates/plotpoint-render-skia/src/text.rs
// Summary: Text shaping and placement for scene text runs using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use plotpoint_core::scene::{Anchor, TextRun, VAlign};

use crate::to_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            // Tabular digits keep stacked Y labels aligned on the right
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono_numeric);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `run` honoring its anchor, vertical alignment and rotation.
    pub fn draw(&self, canvas: &skia::Canvas, run: &TextRun) {
        if run.text.is_empty() {
            return;
        }
        let mono = run.text.parse::<f64>().is_ok();
        let mut p = self.layout(&run.text, run.size, to_color(run.color), mono);
        let width = p.longest_line();
        let dx = match run.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -width / 2.0,
            Anchor::End => -width,
        };
        // Paragraphs paint from their top-left corner
        let dy = match run.valign {
            VAlign::Baseline => -p.alphabetic_baseline(),
            VAlign::Middle => -p.height() / 2.0,
            VAlign::Top => 0.0,
        };

        canvas.save();
        canvas.translate((run.at.x as f32, run.at.y as f32));
        if run.rotation != 0.0 {
            canvas.rotate(run.rotation, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
