use serde::{Deserialize, Serialize};

use crate::core::{Bar, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Fraction of the raw high/low span added above and below the fitted range.
pub const PRICE_PADDING_RATIO: f64 = 0.05;

/// One labeled position on the price axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTick {
    pub price: f64,
    pub y: f64,
}

/// Price axis model mapped onto an inverted Y pixel axis.
///
/// The range is fitted from the low/high envelope of a bar sequence and padded
/// by [`PRICE_PADDING_RATIO`] on each side. A flat series keeps its degenerate
/// `[v, v]` range; every mapping then falls back to the vertical midpoint of
/// the plot instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    range_min: f64,
    range_max: f64,
}

impl PriceScale {
    /// Creates a scale from an explicit, already padded price range.
    pub fn new(range_min: f64, range_max: f64) -> ChartResult<Self> {
        if !range_min.is_finite() || !range_max.is_finite() || range_min > range_max {
            return Err(ChartError::InvalidData(
                "price range must be finite and ordered".to_owned(),
            ));
        }
        Ok(Self {
            range_min,
            range_max,
        })
    }

    /// Fits the padded range from the low/high envelope of `bars`.
    pub fn from_bars(bars: &[Bar]) -> ChartResult<Self> {
        if bars.is_empty() {
            return Err(ChartError::InvalidData(
                "price scale cannot be built from empty bars".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for bar in bars {
            min = min.min(bar.low);
            max = max.max(bar.high);
        }

        let padding = (max - min) * PRICE_PADDING_RATIO;
        Self::new(min - padding, max + padding)
    }

    /// Neutral default range used for empty series.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            range_min: 0.0,
            range_max: 100.0,
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.range_min == self.range_max
    }

    /// Maps a price to pixel Y inside a plot of `plot_height` pixels.
    ///
    /// Higher prices map to smaller Y. A flat range maps every price to the
    /// plot midpoint.
    pub fn price_to_y(self, price: f64, plot_height: f64) -> ChartResult<f64> {
        validate_height(plot_height)?;
        if !price.is_finite() {
            return Err(ChartError::InvalidData("price must be finite".to_owned()));
        }

        if self.is_flat() {
            return Ok(plot_height / 2.0);
        }

        let ascending = LinearScale::new(self.range_min, self.range_max)?
            .domain_to_pixel(price, plot_height)?;
        Ok(plot_height - ascending)
    }

    /// Inverse of [`price_to_y`](Self::price_to_y). A flat range returns the
    /// range value for any pixel.
    pub fn y_to_price(self, y: f64, plot_height: f64) -> ChartResult<f64> {
        validate_height(plot_height)?;
        if !y.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        if self.is_flat() {
            return Ok(self.range_min);
        }

        LinearScale::new(self.range_min, self.range_max)?
            .pixel_to_domain(plot_height - y, plot_height)
    }

    /// Builds `tick_count` evenly spaced ticks across the range, each paired
    /// with its pixel position.
    ///
    /// A flat range yields a single tick at the plot midpoint.
    pub fn ticks(self, tick_count: usize, plot_height: f64) -> ChartResult<Vec<PriceTick>> {
        if tick_count == 0 {
            return Ok(Vec::new());
        }
        if self.is_flat() || tick_count == 1 {
            return Ok(vec![PriceTick {
                price: self.range_min,
                y: self.price_to_y(self.range_min, plot_height)?,
            }]);
        }

        let step = (self.range_max - self.range_min) / ((tick_count - 1) as f64);
        let mut ticks = Vec::with_capacity(tick_count);
        for index in 0..tick_count {
            let price = self.range_min + step * (index as f64);
            ticks.push(PriceTick {
                price,
                y: self.price_to_y(price, plot_height)?,
            });
        }
        Ok(ticks)
    }
}

fn validate_height(plot_height: f64) -> ChartResult<()> {
    if !plot_height.is_finite() || plot_height <= 0.0 {
        return Err(ChartError::InvalidData(
            "plot height must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
