// File: crates/plotpoint-core/tests/scene.rs
// Purpose: Render pass layout (draw order, clipping, labels) and SVG output.

use plotpoint_core::geometry::{PointI32, RectI32};
use plotpoint_core::scene::{Anchor, Primitive, Scene, Stroke};
use plotpoint_core::svg::to_svg;
use plotpoint_core::{Axis, Chart, Rgba, RenderOptions, Series, Theme, TickMode};

fn sample_chart() -> Chart {
    let x: Vec<f64> = (1..=8).map(f64::from).collect();
    Chart::new(Series::new(x, vec![0.851; 8]).unwrap())
        .with_axes(Axis::new("Time (s)"), Axis::new("Velocity (m/s)"))
}

#[test]
fn scene_follows_draw_order() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let scene = chart.scene(&opts, &Theme::classic()).expect("scene");

    assert_eq!((scene.width, scene.height), (opts.width, opts.height));
    assert_eq!(scene.primitives[0], Primitive::Clear(Theme::classic().background));

    let clip = scene.primitives.iter().position(|p| matches!(p, Primitive::PushClip(_))).expect("clip");
    let poly = scene.primitives.iter().position(|p| matches!(p, Primitive::Polyline { .. })).expect("line");
    let first_dot = scene.primitives.iter().position(|p| matches!(p, Primitive::Dot { .. })).expect("dot");
    assert!(clip < poly && poly < first_dot);
    assert_eq!(scene.primitives.last(), Some(&Primitive::PopClip));
    assert_eq!(scene.dots().count(), 8);
}

#[test]
fn flat_series_draws_a_horizontal_line_mid_plot() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let plot = opts.plot_rect();
    let scene = chart.scene(&opts, &Theme::classic()).expect("scene");

    let ys: Vec<i32> = scene.dots().map(|p| p.y).collect();
    assert!(ys.iter().all(|&y| y == ys[0]));
    assert!((ys[0] - plot.center_y()).abs() <= 1);

    let dots: Vec<PointI32> = scene.dots().collect();
    assert_eq!(dots[0].x, plot.left);
    assert_eq!(dots[7].x, plot.right);
}

#[test]
fn tick_labels_and_captions() {
    let chart = sample_chart();
    let scene = chart.scene(&RenderOptions::default(), &Theme::classic()).expect("scene");
    let texts: Vec<&str> = scene.texts().map(|t| t.text.as_str()).collect();

    for label in ["1", "8", "0.76", "0.94", "Time (s)", "Velocity (m/s)", "Velocity (m/s) vs Time (s)"] {
        assert!(texts.contains(&label), "missing {label:?} in {texts:?}");
    }
    let y_caption = scene.texts().find(|t| t.text == "Velocity (m/s)").unwrap();
    assert_eq!(y_caption.rotation, -90.0);
    let y_tick = scene.texts().find(|t| t.text == "0.76").unwrap();
    assert_eq!(y_tick.anchor, Anchor::End);
}

#[test]
fn labels_can_be_disabled() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let scene = sample_chart().scene(&opts, &Theme::dark()).expect("scene");
    assert_eq!(scene.texts().count(), 0);
}

#[test]
fn exact_mode_uses_data_values_as_ticks() {
    let series = Series::new(vec![0.0, 1.5, 4.0], vec![2.0, 1.0, 2.0]).unwrap();
    let chart = Chart::new(series).with_tick_mode(TickMode::Exact).with_title("t");
    let (x, y) = chart.layout().expect("layout");
    assert_eq!(x.ticks, vec![0.0, 1.5, 4.0]);
    assert_eq!(y.ticks, vec![1.0, 2.0]);

    let scene = chart.scene(&RenderOptions::default(), &Theme::classic()).unwrap();
    assert!(scene.texts().any(|t| t.text == "1.5"));
}

#[test]
fn svg_contains_elements_and_escapes_text() {
    let chart = sample_chart().with_title("A & <B>");
    let svg = chart.render_to_svg_string(&RenderOptions::default(), &Theme::classic()).expect("svg");

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    // first and last markers sit on the plot edges and are cut in half
    assert_eq!(svg.matches("<circle ").count(), 6);
    assert_eq!(svg.matches("<polygon ").count(), 2);
    assert!(svg.contains("<polyline "));
    // dashed grid is emitted as short segments
    assert!(svg.matches("<line ").count() > 100);
    assert!(svg.to_ascii_lowercase().contains(r##"fill="#ffffff""##));
    assert!(svg.contains("A &amp; &lt;B&gt;"));
    assert!(svg.contains("rotate(270"));
}

#[test]
fn svg_strokes_are_cut_at_the_clip_region() {
    let mut scene = Scene::new(100, 60);
    scene.push(Primitive::PushClip(RectI32::from_ltrb(10, 10, 50, 50)));
    scene.line((0, 30), (100, 30), Stroke::solid(Rgba::BLACK, 1.0));
    scene.line((0, 5), (100, 5), Stroke::solid(Rgba::BLACK, 1.0));
    scene.push(Primitive::PopClip);
    scene.line((0, 55), (100, 55), Stroke::solid(Rgba::BLACK, 1.0));

    let svg = to_svg(&scene).expect("svg");
    // one line clipped to the region, one dropped, one outside the clip untouched
    assert_eq!(svg.matches("<line ").count(), 2);
    assert!(svg.contains(r#"x1="10""#) && svg.contains(r#"x2="50""#));
    assert!(svg.contains(r#"x1="0""#) && svg.contains(r#"x2="100""#));
}

#[test]
fn svg_rejects_empty_surface() {
    assert!(to_svg(&Scene::new(0, 10)).is_err());
}

#[test]
fn svg_file_written_to_nested_dir() {
    let out = std::path::PathBuf::from("target/test_out/nested/sample.svg");
    let _ = std::fs::remove_file(&out);
    sample_chart()
        .render_to_svg(&RenderOptions::default(), &Theme::light(), &out)
        .expect("write svg");
    let body = std::fs::read_to_string(&out).expect("read back");
    assert!(body.contains("<svg"));
}
