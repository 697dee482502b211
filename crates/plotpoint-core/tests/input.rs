// File: crates/plotpoint-core/tests/input.rs
// Purpose: Number list parsing, series validation, caption defaults and palettes.

use plotpoint_core::input::{default_title, join_numbers, sample};
use plotpoint_core::theme::{self, ColorKey};
use plotpoint_core::{parse_numbers, text_or_default, AxisKind, PlotError, Rgba, Series, Theme};

#[test]
fn parses_commas_and_whitespace() {
    let v = parse_numbers("1, 2,3\n4\t 5 ,, 6", AxisKind::X).expect("parse");
    assert_eq!(v, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let v = parse_numbers("  -1.5e2 0.851  ", AxisKind::Y).expect("parse");
    assert_eq!(v, vec![-150.0, 0.851]);

    assert!(parse_numbers("", AxisKind::X).expect("empty parses").is_empty());
}

#[test]
fn one_bad_token_rejects_everything() {
    let err = parse_numbers("1, 2, three, 4", AxisKind::Y).unwrap_err();
    assert_eq!(err, PlotError::InvalidNumber { axis: AxisKind::Y, token: "three".into() });
    assert!(err.to_string().contains("Y values"));

    assert!(parse_numbers("1; 2", AxisKind::X).is_err());
    assert!(parse_numbers("1 NaN", AxisKind::X).is_err());
    assert!(parse_numbers("inf 2", AxisKind::X).is_err());
}

#[test]
fn joined_numbers_parse_back() {
    let s = sample();
    let text = join_numbers(&s.y);
    assert_eq!(parse_numbers(&text, AxisKind::Y).expect("parse"), s.y);
}

#[test]
fn series_requires_equal_lengths_of_two_or_more() {
    assert_eq!(
        Series::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]),
        Err(PlotError::LengthMismatch { x: 3, y: 2 })
    );
    assert_eq!(Series::new(vec![1.0], vec![1.0]), Err(PlotError::TooFewValues { len: 1 }));
    assert!(Series::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());

    let s = Series::from_points(&[(3.0, 1.0), (1.0, 2.0), (2.0, 0.5)]).expect("series");
    assert_eq!(s.len(), 3);
    // insertion order is kept
    assert_eq!(s.xs(), &[3.0, 1.0, 2.0]);
    assert_eq!(s.points().nth(1), Some((1.0, 2.0)));
}

#[test]
fn caption_and_title_defaults() {
    assert_eq!(text_or_default("   ", "X"), "X");
    assert_eq!(text_or_default("  Time (s) ", "X"), "Time (s)");
    assert_eq!(default_title("Time (s)", "Velocity (m/s)"), "Velocity (m/s) vs Time (s)");
    assert_eq!(sample().title, default_title(sample().x_label, sample().y_label));
}

#[test]
fn hex_colors_round_trip_and_reject_garbage() {
    assert_eq!(Rgba::from_hex("#dc0000").unwrap(), Rgba::rgb(220, 0, 0));
    assert_eq!(Rgba::from_hex("2896ff").unwrap(), Rgba::rgb(40, 150, 255));
    assert_eq!(Rgba::from_hex("#00000080").unwrap(), Rgba::from_argb(128, 0, 0, 0));
    assert_eq!(Rgba::rgb(190, 190, 190).to_hex(), "#bebebe");
    assert_eq!("#12345".parse::<Rgba>(), Err(PlotError::InvalidColor("#12345".into())));
    assert!(Rgba::from_hex("#gg0000").is_err());
    // sign characters are not hex digits
    assert!(Rgba::from_hex("#+1+2+3").is_err());
    assert!(Rgba::from_hex("-1ffffff").is_err());
}

#[test]
fn palette_keys_address_each_color() {
    let mut t = Theme::classic();
    assert_eq!(t.background, Rgba::WHITE);
    t.set_color("Background".parse::<ColorKey>().unwrap(), Rgba::BLACK);
    assert_eq!(t.color(ColorKey::Background), Rgba::BLACK);
    assert!("frame".parse::<ColorKey>().is_err());
    for key in ColorKey::ALL {
        assert_eq!(key.as_str().parse::<ColorKey>().unwrap(), key);
    }
}

#[test]
fn presets_lookup_and_cycle() {
    assert_eq!(theme::find("SOLARIZED-dark").unwrap().name, "solarized-dark");
    assert!(theme::find("nope").is_none());
    assert_eq!(theme::find_or_default("nope"), Theme::classic());

    let all = theme::presets();
    let mut name = all[0].name;
    for _ in 0..all.len() {
        name = theme::next_preset(name).name;
    }
    assert_eq!(name, all[0].name);
}
