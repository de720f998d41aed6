use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer canvas size in pixels, before margins are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins reserved around the plot for axis labels and padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 60.0,
            bottom: 30.0,
            left: 10.0,
        }
    }
}

impl Margins {
    fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plot rectangle: the canvas net of margins.
///
/// All scale outputs are relative to this rectangle's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Resolves the plot rectangle for a canvas and margin set.
    ///
    /// Fails when the margins consume the whole canvas in either direction.
    pub fn resolve(canvas: CanvasSize, margins: Margins) -> ChartResult<Self> {
        if !canvas.is_valid() {
            return Err(ChartError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        let margins = margins.validate()?;

        let width = f64::from(canvas.width) - margins.left - margins.right;
        let height = f64::from(canvas.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area ({width}x{height})"
            )));
        }

        Ok(Self { width, height })
    }
}
