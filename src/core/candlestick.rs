use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::ChartGeometry;
use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Minimum rendered candle body height.
pub const MIN_BODY_HEIGHT_PX: f64 = 1.0;

/// One daily OHLCV bar as produced by the upstream analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: u64,
}

impl Bar {
    /// Builds a validated bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Converts strongly-typed decimal input into a validated bar.
    pub fn from_decimal(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> ChartResult<Self> {
        Self::new(
            date,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            volume,
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Projected candle geometry in pixel coordinates.
///
/// `body_bottom - body_top` is never below [`MIN_BODY_HEIGHT_PX`], so doji
/// bars stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

impl CandleGeometry {
    #[must_use]
    pub fn body_height(self) -> f64 {
        self.body_bottom - self.body_top
    }
}

/// Projects OHLC bars into deterministic render geometry.
///
/// The function is intentionally pure and side-effect free so it can be used
/// both in rendering and in regression tests. `geometry` must have been built
/// from the same bar sequence.
pub fn project_candles(bars: &[Bar], geometry: &ChartGeometry) -> ChartResult<Vec<CandleGeometry>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<CandleGeometry>> = bars
            .par_iter()
            .enumerate()
            .map(|(index, bar)| project_single_candle(index, *bar, geometry))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(bars.len());
        for (index, bar) in bars.iter().enumerate() {
            out.push(project_single_candle(index, *bar, geometry)?);
        }
        Ok(out)
    }
}

fn project_single_candle(
    index: usize,
    bar: Bar,
    geometry: &ChartGeometry,
) -> ChartResult<CandleGeometry> {
    let half = geometry.bar_width() / 2.0;
    let center_x = geometry.index_to_x(index)?;
    let open_y = geometry.price_to_y(bar.open)?;
    let close_y = geometry.price_to_y(bar.close)?;
    let wick_top = geometry.price_to_y(bar.high)?;
    let wick_bottom = geometry.price_to_y(bar.low)?;

    let body_top = open_y.min(close_y);
    let body_bottom = body_top + (open_y.max(close_y) - body_top).max(MIN_BODY_HEIGHT_PX);

    Ok(CandleGeometry {
        center_x,
        body_left: center_x - half,
        body_right: center_x + half,
        body_top,
        body_bottom,
        wick_top,
        wick_bottom,
        is_bullish: bar.is_bullish(),
    })
}
