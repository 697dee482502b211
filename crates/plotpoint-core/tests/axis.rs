// File: crates/plotpoint-core/tests/axis.rs
// Purpose: Domain expansion, nice and exact tick generation.

use plotpoint_core::axis::{compute_axis_with_target, exact_ticks, expand_range, nice_ticks};
use plotpoint_core::{compute_axis, nice_number, PlotError, TickMode};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn constant_series_gets_nonzero_domain() {
    for v in [0.0, 0.851, -3.0, 1e-12, 250.0, -1e6] {
        for mode in [TickMode::Nice, TickMode::Exact] {
            let axis = compute_axis(&[v, v, v], mode).expect("axis");
            assert!(axis.max > axis.min, "flat {v} in {mode:?} gave [{}, {}]", axis.min, axis.max);
        }
    }
}

#[test]
fn flat_range_padding_rules() {
    // ten percent of the magnitude
    let (lo, hi) = expand_range(0.851, 0.851);
    assert!(approx(lo, 0.851 - 0.0851));
    assert!(approx(hi, 0.851 + 0.0851));

    // zero falls back to a unit pad
    assert_eq!(expand_range(0.0, 0.0), (-1.0, 1.0));

    // tiny magnitudes never pad less than 1e-3
    let (lo, hi) = expand_range(0.001, 0.001);
    assert!(approx(lo, 0.0));
    assert!(approx(hi, 0.002));

    // non-flat ranges are untouched
    assert_eq!(expand_range(1.0, 4.0), (1.0, 4.0));
}

#[test]
fn nice_number_thresholds() {
    // unrounded: smallest of 1, 2, 5, 10 not below the mantissa
    assert!(approx(nice_number(1.0, false), 1.0));
    assert!(approx(nice_number(1.7, false), 2.0));
    assert!(approx(nice_number(2.0, false), 2.0));
    assert!(approx(nice_number(4.2, false), 5.0));
    assert!(approx(nice_number(7.0, false), 10.0));
    assert!(approx(nice_number(0.1702, false), 0.2));
    assert!(approx(nice_number(340.0, false), 500.0));

    // rounded: nearest with 1.5 / 3 / 7 cut points
    assert!(approx(nice_number(1.49, true), 1.0));
    assert!(approx(nice_number(1.5, true), 2.0));
    assert!(approx(nice_number(2.99, true), 2.0));
    assert!(approx(nice_number(3.0, true), 5.0));
    assert!(approx(nice_number(6.99, true), 5.0));
    assert!(approx(nice_number(7.0, true), 10.0));
    assert!(approx(nice_number(0.025, true), 0.02));
    assert!(approx(nice_number(1.25, true), 1.0));
}

#[test]
fn nice_ticks_are_evenly_spaced_and_cover_domain() {
    let data = [-3.7, 12.2, 0.4, 8.8, 5.0];
    let axis = compute_axis(&data, TickMode::Nice).expect("axis");
    let step = axis.step.expect("nice mode reports a step");
    assert!(axis.ticks.len() >= 2);

    for pair in axis.ticks.windows(2) {
        assert!(pair[1] > pair[0], "ticks not ascending: {:?}", axis.ticks);
        assert!((pair[1] - pair[0] - step).abs() < step * 1e-9, "uneven step in {:?}", axis.ticks);
    }
    let first = axis.ticks[0];
    let last = *axis.ticks.last().unwrap();
    assert!(first <= axis.min + 1e-12);
    assert!(last >= axis.max - 1e-12);
}

#[test]
fn nice_mode_domain_stays_at_data_range() {
    let axis = compute_axis(&[0.3, 9.6], TickMode::Nice).expect("axis");
    assert_eq!((axis.min, axis.max), (0.3, 9.6));
    // edge ticks sit outside the plotted domain
    assert!(axis.ticks[0] < axis.min);
    assert!(*axis.ticks.last().unwrap() > axis.max);
}

#[test]
fn integer_x_axis_gets_unit_ticks() {
    let xs: Vec<f64> = (1..=8).map(f64::from).collect();
    let axis = compute_axis(&xs, TickMode::Nice).expect("axis");
    assert_eq!(axis.step, Some(1.0));
    assert_eq!(axis.ticks, xs);
}

#[test]
fn flat_velocity_sample_ticks() {
    let ys = [0.851; 8];
    let axis = compute_axis(&ys, TickMode::Nice).expect("axis");

    assert!(approx(axis.min, 0.7659));
    assert!(approx(axis.max, 0.9361));

    let expected_step = nice_number(nice_number(axis.max - axis.min, false) / 8.0, true);
    assert!(approx(expected_step, 0.02));
    assert!(approx(axis.step.unwrap(), expected_step));

    assert_eq!(axis.ticks.len(), 10);
    assert!(approx(axis.ticks[0], 0.76));
    assert!(approx(*axis.ticks.last().unwrap(), 0.94));
}

#[test]
fn exact_ticks_are_sorted_distinct_values() {
    let axis = compute_axis(&[3.0, 1.0, 3.0, 2.0], TickMode::Exact).expect("axis");
    assert_eq!(axis.ticks, vec![1.0, 2.0, 3.0]);
    assert_eq!(axis.step, None);
    assert_eq!((axis.min, axis.max), (1.0, 3.0));
}

#[test]
fn exact_ticks_keep_every_distinct_value() {
    let data: Vec<f64> = (0..500).rev().map(|i| f64::from(i) * 0.5).collect();
    let ticks = exact_ticks(&data);
    assert_eq!(ticks.len(), 500);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[499], 249.5);
}

#[test]
fn exact_ticks_merge_signed_zeros() {
    assert_eq!(exact_ticks(&[0.0, -0.0, 1.0]).len(), 2);
}

#[test]
fn zero_target_falls_back_to_default() {
    assert_eq!(nice_ticks(0.0, 10.0, 0), nice_ticks(0.0, 10.0, 8));
    let coarse = compute_axis_with_target(&[0.0, 10.0], TickMode::Nice, 2).expect("axis");
    let fine = compute_axis_with_target(&[0.0, 10.0], TickMode::Nice, 20).expect("axis");
    assert!(coarse.ticks.len() < fine.ticks.len());
}

#[test]
fn compute_axis_is_idempotent() {
    let data = [4.2, -1.0, 7.7, 7.7, 0.0];
    for mode in [TickMode::Nice, TickMode::Exact] {
        let a = compute_axis(&data, mode).expect("first");
        let b = compute_axis(&data, mode).expect("second");
        assert_eq!(a, b);
    }
}

#[test]
fn too_few_values_fail_fast() {
    assert_eq!(compute_axis(&[1.0], TickMode::Nice), Err(PlotError::TooFewValues { len: 1 }));
    assert_eq!(compute_axis(&[], TickMode::Exact), Err(PlotError::TooFewValues { len: 0 }));
}

#[test]
fn non_finite_values_are_rejected() {
    let err = compute_axis(&[1.0, f64::INFINITY], TickMode::Nice).unwrap_err();
    assert!(matches!(err, PlotError::NonFinite { index: 1, .. }));
}

#[test]
fn tick_mode_toggles() {
    assert_eq!(TickMode::Nice.toggled(), TickMode::Exact);
    assert_eq!(TickMode::Exact.toggled(), TickMode::Nice);
}

#[test]
fn overflowing_span_is_rejected() {
    // max - min is infinite, in either mode
    for data in [[-1e308, 1e308], [f64::MAX, f64::MAX]] {
        for mode in [TickMode::Nice, TickMode::Exact] {
            let err = compute_axis(&data, mode).unwrap_err();
            assert!(matches!(err, PlotError::UnplottableRange { .. }), "{data:?} {mode:?} gave {err:?}");
        }
    }
    // finite span whose rounded range overflows
    let err = compute_axis(&[0.0, f64::MAX], TickMode::Nice).unwrap_err();
    assert!(matches!(err, PlotError::UnplottableRange { .. }));
    assert_eq!(compute_axis(&[0.0, f64::MAX], TickMode::Exact).expect("exact").ticks, vec![0.0, f64::MAX]);
}

#[test]
fn subnormal_span_has_no_nice_ticks() {
    let tiny = [0.0, 5e-324];
    assert!(matches!(compute_axis(&tiny, TickMode::Nice), Err(PlotError::UnplottableRange { .. })));
    assert_eq!(nice_ticks(0.0, 5e-324, 8), None);

    // exact ticks only need distinct values
    let axis = compute_axis(&tiny, TickMode::Exact).expect("exact axis");
    assert_eq!(axis.ticks, vec![0.0, 5e-324]);
}

#[test]
fn ticks_stay_distinct_below_float_spacing() {
    let axis = compute_axis(&[1e16, 1e16 + 2.0], TickMode::Nice).expect("axis");
    assert!(axis.ticks.len() >= 2, "{:?}", axis.ticks);
    for pair in axis.ticks.windows(2) {
        assert!(pair[1] > pair[0], "ticks not strictly ascending: {:?}", axis.ticks);
    }
}
