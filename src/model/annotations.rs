use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Side of a swing extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingKind {
    #[serde(rename = "swing_high")]
    SwingHigh,
    #[serde(rename = "swing_low")]
    SwingLow,
}

/// Market direction attached to gaps and structure breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
}

/// Structural break classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureKind {
    #[serde(rename = "BOS")]
    Bos,
    #[serde(rename = "CHoCH")]
    Choch,
}

impl StructureKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bos => "BOS",
            Self::Choch => "CHoCH",
        }
    }
}

/// Local price extremum over a neighborhood of bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub index: usize,
    pub level: f64,
    #[serde(rename = "type")]
    pub kind: SwingKind,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl SwingPoint {
    /// Whether the record can be mapped through a geometry fitted to
    /// `bar_count` bars.
    #[must_use]
    pub fn is_renderable(&self, bar_count: usize) -> bool {
        self.level.is_finite() && self.index < bar_count
    }
}

/// Three-bar price imbalance region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueGap {
    pub start_index: usize,
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
    #[serde(rename = "type")]
    pub bias: Direction,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl FairValueGap {
    #[must_use]
    pub fn is_renderable(&self, bar_count: usize) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && self.top >= self.bottom
            && self.start_index <= self.index
            && self.index < bar_count
    }
}

/// Break of structure / change of character signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureSignal {
    pub index: usize,
    pub level: f64,
    #[serde(rename = "type")]
    pub kind: StructureKind,
    pub direction: Direction,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl StructureSignal {
    #[must_use]
    pub fn is_renderable(&self, bar_count: usize) -> bool {
        self.level.is_finite() && self.index < bar_count
    }
}
