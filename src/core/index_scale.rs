use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fraction of the per-bar slot occupied by a candle body.
pub const BAR_WIDTH_RATIO: f64 = 0.7;
/// Candle body width bounds in pixels.
pub const BAR_WIDTH_MIN_PX: f64 = 4.0;
pub const BAR_WIDTH_MAX_PX: f64 = 12.0;

/// Horizontal axis model placing bar centers evenly across the plot width.
///
/// Bar `i` of `n` maps to `i * (width / n) + (width / n) / 2`, so the first
/// and last bars keep half a slot of clearance from the plot edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexScale {
    bar_count: usize,
}

impl IndexScale {
    pub fn new(bar_count: usize) -> ChartResult<Self> {
        if bar_count == 0 {
            return Err(ChartError::InvalidData(
                "index scale requires at least one bar".to_owned(),
            ));
        }
        Ok(Self { bar_count })
    }

    #[must_use]
    pub fn bar_count(self) -> usize {
        self.bar_count
    }

    /// Maps a bar index to the pixel X of its slot center.
    ///
    /// Out-of-range indices are rejected so callers can skip annotation
    /// records that no longer match the bar sequence.
    pub fn index_to_x(self, index: usize, plot_width: f64) -> ChartResult<f64> {
        validate_width(plot_width)?;
        if index >= self.bar_count {
            return Err(ChartError::InvalidData(format!(
                "bar index {index} out of range (bar count {})",
                self.bar_count
            )));
        }

        let slot = plot_width / (self.bar_count as f64);
        Ok((index as f64) * slot + slot / 2.0)
    }

    /// Candle body width for the current bar density, clamped to
    /// `[BAR_WIDTH_MIN_PX, BAR_WIDTH_MAX_PX]`.
    pub fn bar_width(self, plot_width: f64) -> ChartResult<f64> {
        validate_width(plot_width)?;
        let slot = plot_width / (self.bar_count as f64);
        Ok((slot * BAR_WIDTH_RATIO).clamp(BAR_WIDTH_MIN_PX, BAR_WIDTH_MAX_PX))
    }

    /// Sampling interval for date axis labels: roughly six labels across the
    /// series, never below one bar.
    #[must_use]
    pub fn date_tick_step(self) -> usize {
        (self.bar_count / 6).max(1)
    }
}

fn validate_width(plot_width: f64) -> ChartResult<()> {
    if !plot_width.is_finite() || plot_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "plot width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
