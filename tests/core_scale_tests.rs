use approx::assert_relative_eq;
use chrono::NaiveDate;
use smc_chart::core::{
    BAR_WIDTH_MAX_PX, BAR_WIDTH_MIN_PX, Bar, IndexScale, LinearScale, PriceScale,
};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date") + chrono::Days::new(offset)
}

fn bar(offset: u64, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar::new(day(offset), open, high, low, close, 1_000).expect("valid bar")
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original, 600.0).expect("to pixel");
    let recovered = scale.pixel_to_domain(px, 600.0).expect("from pixel");

    assert_relative_eq!(recovered, original, max_relative = 1e-12);
}

#[test]
fn decimal_ingest_matches_float_construction() {
    use rust_decimal::Decimal;

    let from_decimal = Bar::from_decimal(
        day(0),
        Decimal::new(10_050, 2), // 100.50
        Decimal::new(10_500, 2),
        Decimal::new(9_800, 2),
        Decimal::new(10_200, 2),
        1_000,
    )
    .expect("decimal bar");
    let from_float = bar(0, 100.5, 105.0, 98.0, 102.0);

    assert_eq!(from_decimal, from_float);
}

#[test]
fn linear_scale_rejects_degenerate_domain() {
    assert!(LinearScale::new(5.0, 5.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
}

#[test]
fn price_scale_uses_inverted_y_axis() {
    let scale = PriceScale::new(10.0, 110.0).expect("valid scale");

    let top = scale.price_to_y(110.0, 350.0).expect("top pixel");
    let bottom = scale.price_to_y(10.0, 350.0).expect("bottom pixel");

    assert_relative_eq!(top, 0.0, epsilon = 1e-9);
    assert_relative_eq!(bottom, 350.0, epsilon = 1e-9);
}

#[test]
fn price_scale_pads_envelope_by_five_percent() {
    let bars = vec![
        bar(0, 100.0, 105.0, 98.0, 102.0),
        bar(1, 102.0, 110.0, 101.0, 108.0),
    ];

    let scale = PriceScale::from_bars(&bars).expect("fit from bars");
    let (min, max) = scale.range();
    // Envelope [98, 110], span 12, padding 0.6 on each side.
    assert_relative_eq!(min, 97.4, epsilon = 1e-9);
    assert_relative_eq!(max, 110.6, epsilon = 1e-9);
}

#[test]
fn flat_series_maps_to_plot_midpoint() {
    let bars = vec![bar(0, 50.0, 50.0, 50.0, 50.0), bar(1, 50.0, 50.0, 50.0, 50.0)];

    let scale = PriceScale::from_bars(&bars).expect("fit from flat bars");
    assert!(scale.is_flat());

    let y = scale.price_to_y(50.0, 350.0).expect("flat mapping");
    assert_relative_eq!(y, 175.0, epsilon = 1e-9);
    assert!(y.is_finite());
    assert!(scale.price_to_y(123.0, 350.0).expect("any price").is_finite());
}

#[test]
fn price_scale_round_trip() {
    let scale = PriceScale::new(97.4, 110.6).expect("valid scale");
    let px = scale.price_to_y(102.0, 350.0).expect("to pixel");
    let recovered = scale.y_to_price(px, 350.0).expect("from pixel");
    assert_relative_eq!(recovered, 102.0, max_relative = 1e-12);
}

#[test]
fn six_ticks_span_the_range_evenly() {
    let scale = PriceScale::new(0.0, 100.0).expect("valid scale");
    let ticks = scale.ticks(6, 350.0).expect("ticks");

    assert_eq!(ticks.len(), 6);
    assert_relative_eq!(ticks[0].price, 0.0);
    assert_relative_eq!(ticks[5].price, 100.0);
    for pair in ticks.windows(2) {
        assert_relative_eq!(pair[1].price - pair[0].price, 20.0, epsilon = 1e-9);
        // Higher price, smaller Y.
        assert!(pair[1].y < pair[0].y);
    }
}

#[test]
fn index_scale_centers_bars_in_even_slots() {
    let scale = IndexScale::new(4).expect("valid scale");
    let width = 400.0;

    // Slot width 100, centers at 50, 150, 250, 350.
    for (index, expected) in [(0, 50.0), (1, 150.0), (2, 250.0), (3, 350.0)] {
        let x = scale.index_to_x(index, width).expect("in range");
        assert_relative_eq!(x, expected, epsilon = 1e-9);
    }
    assert!(scale.index_to_x(4, width).is_err());
}

#[test]
fn bar_width_stays_clamped() {
    let wide = IndexScale::new(2).expect("valid scale");
    assert_relative_eq!(wide.bar_width(1000.0).expect("width"), BAR_WIDTH_MAX_PX);

    let dense = IndexScale::new(500).expect("valid scale");
    assert_relative_eq!(dense.bar_width(730.0).expect("width"), BAR_WIDTH_MIN_PX);

    let mid = IndexScale::new(73).expect("valid scale");
    // Slot 10px, 70% of it is inside the clamp band.
    assert_relative_eq!(mid.bar_width(730.0).expect("width"), 7.0, epsilon = 1e-9);
}

#[test]
fn date_tick_step_targets_six_labels() {
    assert_eq!(IndexScale::new(3).expect("scale").date_tick_step(), 1);
    assert_eq!(IndexScale::new(6).expect("scale").date_tick_step(), 1);
    assert_eq!(IndexScale::new(60).expect("scale").date_tick_step(), 10);
    assert_eq!(IndexScale::new(61).expect("scale").date_tick_step(), 10);
}
