//! Explicit style configuration for chart rendering.
//!
//! The dashboard's colors are passed into the overlay builders as one value
//! instead of being read from ambient styling, so every recognized color key
//! is enumerated here.

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Colors used by the overlay renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    /// Card background behind the whole chart.
    pub background: Color,
    /// Bullish candles, swing-high accents, TP line.
    pub bull: Color,
    /// Bearish candles, swing-low accents, SL line.
    pub bear: Color,
    /// Horizontal grid lines.
    pub grid: Color,
    /// Axis labels and the entry zone label.
    pub text_secondary: Color,
    /// Hatching of bullish fair value gaps.
    pub fvg_bullish: Color,
    /// Hatching of bearish fair value gaps.
    pub fvg_bearish: Color,
    /// Take-profit band fill.
    pub tp_band: Color,
    /// Stop-loss band fill.
    pub sl_band: Color,
    /// Entry zone fill.
    pub entry_band: Color,
    /// Outline around swing point markers.
    pub marker_outline: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.06, 0.09, 0.16, 1.0),
            bull: Color::rgba(0.13, 0.77, 0.37, 1.0),
            bear: Color::rgba(0.94, 0.27, 0.27, 1.0),
            grid: Color::rgba(0.33, 0.38, 0.46, 1.0),
            text_secondary: Color::rgba(0.58, 0.64, 0.72, 1.0),
            fvg_bullish: Color::rgba(0.96, 0.62, 0.04, 1.0),
            fvg_bearish: Color::rgba(0.94, 0.27, 0.27, 1.0),
            tp_band: Color::rgba(0.13, 0.77, 0.37, 0.12),
            sl_band: Color::rgba(0.94, 0.27, 0.27, 0.12),
            entry_band: Color::rgba(0.58, 0.64, 0.72, 0.15),
            marker_outline: Color::rgba(1.0, 1.0, 1.0, 1.0),
        }
    }
}
