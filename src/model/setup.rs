use serde::{Deserialize, Serialize};

/// Proposed trade direction. `Wait` setups carry levels but no actionable
/// bias; they render exactly like the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Long,
    Short,
    Wait,
}

/// One trade execution plan per stock: entry band, protective stop,
/// profit target and the resulting risk/reward ratio. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeSetup {
    pub direction: TradeDirection,
    pub entry_zone: [f64; 2],
    pub sl: f64,
    pub tp: f64,
    pub rr: f64,
    #[serde(default)]
    pub latest_close: Option<f64>,
}

impl TradeSetup {
    #[must_use]
    pub fn entry_low(&self) -> f64 {
        self.entry_zone[0].min(self.entry_zone[1])
    }

    #[must_use]
    pub fn entry_high(&self) -> f64 {
        self.entry_zone[0].max(self.entry_zone[1])
    }

    /// Whether every level is finite enough to draw.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.entry_zone[0].is_finite()
            && self.entry_zone[1].is_finite()
            && self.sl.is_finite()
            && self.tp.is_finite()
    }
}
