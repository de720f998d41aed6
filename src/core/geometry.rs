use serde::{Deserialize, Serialize};

use crate::core::price_scale::PriceTick;
use crate::core::{Bar, CanvasSize, IndexScale, Margins, PlotArea, PriceScale};
use crate::error::ChartResult;

/// Number of price axis ticks (five equal steps across the range).
pub const PRICE_TICK_COUNT: usize = 6;

/// Candle body width used when there is no data to derive one from.
const EMPTY_BAR_WIDTH_PX: f64 = 8.0;

/// One labeled position on the date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTick {
    pub label: String,
    pub x: f64,
}

/// Resolved per-chart geometry: plot rectangle, fitted scales and bar width.
///
/// Built once per bar sequence and canvas size; every overlay maps its domain
/// values through this. An empty sequence produces a neutral geometry whose
/// scale functions return constant zero and whose tick lists are empty, so
/// callers can render a placeholder without special-casing arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    canvas: CanvasSize,
    margins: Margins,
    plot: PlotArea,
    price_scale: PriceScale,
    index_scale: Option<IndexScale>,
    bar_width: f64,
}

impl ChartGeometry {
    /// Fits scales for `bars` inside `canvas` net of `margins`.
    pub fn from_bars(bars: &[Bar], canvas: CanvasSize, margins: Margins) -> ChartResult<Self> {
        let plot = PlotArea::resolve(canvas, margins)?;
        if bars.is_empty() {
            return Ok(Self {
                canvas,
                margins,
                plot,
                price_scale: PriceScale::neutral(),
                index_scale: None,
                bar_width: EMPTY_BAR_WIDTH_PX,
            });
        }

        let price_scale = PriceScale::from_bars(bars)?;
        let index_scale = IndexScale::new(bars.len())?;
        let bar_width = index_scale.bar_width(plot.width)?;
        Ok(Self {
            canvas,
            margins,
            plot,
            price_scale,
            index_scale: Some(index_scale),
            bar_width,
        })
    }

    /// Neutral geometry for a chart with no data yet.
    pub fn empty(canvas: CanvasSize, margins: Margins) -> ChartResult<Self> {
        Self::from_bars(&[], canvas, margins)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index_scale.is_none()
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn price_range(&self) -> (f64, f64) {
        self.price_scale.range()
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.index_scale.map_or(0, IndexScale::bar_count)
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// Maps a price to plot-relative pixel Y. Constant `0.0` when empty.
    pub fn price_to_y(&self, price: f64) -> ChartResult<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        self.price_scale.price_to_y(price, self.plot.height)
    }

    /// Maps a bar index to plot-relative pixel X. Constant `0.0` when empty.
    pub fn index_to_x(&self, index: usize) -> ChartResult<f64> {
        match self.index_scale {
            None => Ok(0.0),
            Some(scale) => scale.index_to_x(index, self.plot.width),
        }
    }

    /// Evenly spaced price axis ticks. Empty list when there is no data.
    pub fn price_ticks(&self) -> ChartResult<Vec<PriceTick>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.price_scale.ticks(PRICE_TICK_COUNT, self.plot.height)
    }

    /// Date axis ticks sampled every `max(1, n / 6)` bars.
    ///
    /// `bars` must be the sequence this geometry was fitted from; labels are
    /// the bar dates truncated to `MM-DD`.
    pub fn date_ticks(&self, bars: &[Bar]) -> ChartResult<Vec<DateTick>> {
        let Some(scale) = self.index_scale else {
            return Ok(Vec::new());
        };

        let step = scale.date_tick_step();
        let mut ticks = Vec::new();
        for (index, bar) in bars.iter().enumerate().step_by(step) {
            ticks.push(DateTick {
                label: bar.date.format("%m-%d").to_string(),
                x: scale.index_to_x(index, self.plot.width)?,
            });
        }
        Ok(ticks)
    }
}
