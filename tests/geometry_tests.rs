use approx::assert_relative_eq;
use chrono::NaiveDate;
use smc_chart::core::{Bar, CanvasSize, ChartGeometry, Margins, PlotArea, project_candles};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date") + chrono::Days::new(offset)
}

fn bar(offset: u64, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar::new(day(offset), open, high, low, close, 500).expect("valid bar")
}

fn sample_bars() -> Vec<Bar> {
    vec![
        bar(0, 100.0, 105.0, 98.0, 102.0),
        bar(1, 102.0, 110.0, 101.0, 108.0),
    ]
}

#[test]
fn default_margins_shrink_the_canvas() {
    let plot = PlotArea::resolve(CanvasSize::new(800, 400), Margins::default()).expect("plot");
    assert_relative_eq!(plot.width, 730.0);
    assert_relative_eq!(plot.height, 350.0);
}

#[test]
fn margins_must_leave_plot_area() {
    let margins = Margins {
        top: 300.0,
        right: 0.0,
        bottom: 300.0,
        left: 0.0,
    };
    assert!(PlotArea::resolve(CanvasSize::new(800, 400), margins).is_err());
    assert!(PlotArea::resolve(CanvasSize::new(0, 400), Margins::default()).is_err());
}

#[test]
fn worked_example_fits_expected_range() {
    let geometry =
        ChartGeometry::from_bars(&sample_bars(), CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    let (min, max) = geometry.price_range();
    assert_relative_eq!(min, 97.4, epsilon = 1e-9);
    assert_relative_eq!(max, 110.6, epsilon = 1e-9);
    assert_eq!(geometry.bar_count(), 2);

    // Range extremes land on the plot edges.
    assert_relative_eq!(geometry.price_to_y(min).expect("bottom"), 350.0, epsilon = 1e-9);
    assert_relative_eq!(geometry.price_to_y(max).expect("top"), 0.0, epsilon = 1e-9);
}

#[test]
fn both_example_bars_project_bullish() {
    let bars = sample_bars();
    let geometry =
        ChartGeometry::from_bars(&bars, CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    let candles = project_candles(&bars, &geometry).expect("projection");
    assert_eq!(candles.len(), 2);
    assert!(candles[0].is_bullish);
    assert!(candles[1].is_bullish);
    assert!(candles[0].center_x < candles[1].center_x);
}

#[test]
fn doji_body_keeps_minimum_height() {
    let bars = vec![bar(0, 100.0, 101.0, 99.0, 100.0), bar(1, 100.0, 110.0, 90.0, 105.0)];
    let geometry =
        ChartGeometry::from_bars(&bars, CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    let candles = project_candles(&bars, &geometry).expect("projection");
    assert!(candles[0].body_height() >= 1.0);
}

#[test]
fn flat_series_projects_without_nan() {
    let bars = vec![bar(0, 50.0, 50.0, 50.0, 50.0), bar(1, 50.0, 50.0, 50.0, 50.0)];
    let geometry =
        ChartGeometry::from_bars(&bars, CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    for candle in project_candles(&bars, &geometry).expect("projection") {
        for value in [
            candle.center_x,
            candle.body_left,
            candle.body_right,
            candle.body_top,
            candle.body_bottom,
            candle.wick_top,
            candle.wick_bottom,
        ] {
            assert!(value.is_finite());
        }
    }
}

#[test]
fn empty_series_uses_neutral_geometry() {
    let geometry =
        ChartGeometry::from_bars(&[], CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    assert!(geometry.is_empty());
    assert_eq!(geometry.price_range(), (0.0, 100.0));
    assert_eq!(geometry.price_to_y(42.0).expect("no-op"), 0.0);
    assert_eq!(geometry.index_to_x(7).expect("no-op"), 0.0);
    assert!(geometry.price_ticks().expect("ticks").is_empty());
    assert!(geometry.date_ticks(&[]).expect("ticks").is_empty());
}

#[test]
fn date_ticks_sample_and_truncate_labels() {
    let bars: Vec<Bar> = (0..12)
        .map(|offset| bar(offset, 100.0, 101.0, 99.0, 100.5))
        .collect();
    let geometry =
        ChartGeometry::from_bars(&bars, CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    let ticks = geometry.date_ticks(&bars).expect("ticks");
    // Step is max(1, 12 / 6) = 2.
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0].label, "03-01");
    assert_eq!(ticks[1].label, "03-03");
    for pair in ticks.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}

#[test]
fn price_ticks_pair_prices_with_pixels() {
    let geometry =
        ChartGeometry::from_bars(&sample_bars(), CanvasSize::new(800, 400), Margins::default())
            .expect("geometry");

    let ticks = geometry.price_ticks().expect("ticks");
    assert_eq!(ticks.len(), 6);
    for tick in &ticks {
        let expected = geometry.price_to_y(tick.price).expect("mapping");
        assert_relative_eq!(tick.y, expected, epsilon = 1e-9);
    }
}
