use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::Bar;
use crate::model::{FairValueGap, StructureSignal, SwingPoint, TradeSetup};

/// Generation status recorded per stock in the dashboard index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Success,
    Failed,
}

/// One entry of `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub code: String,
    pub name: String,
    pub status: StockStatus,
}

/// The dashboard index file listing every analyzed stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StockIndex {
    pub stocks: Vec<StockEntry>,
}

impl StockIndex {
    /// Entries whose generation run succeeded, in file order.
    pub fn successes(&self) -> impl Iterator<Item = &StockEntry> {
        self.stocks
            .iter()
            .filter(|entry| entry.status == StockStatus::Success)
    }
}

/// One per-stock analysis payload (`<code>.json`).
///
/// Annotation collections are optional on the wire; absent means empty.
/// Individual annotation records that fail to deserialize are dropped at this
/// boundary instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockData {
    pub candles: Vec<Bar>,
    #[serde(default)]
    pub setup: Option<TradeSetup>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub swing_points: Vec<SwingPoint>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub fvg: Vec<FairValueGap>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub bos_choch: Vec<StructureSignal>,
}

/// Deserializes a list, keeping the records that match the expected shape and
/// dropping the rest.
fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let total = raw.len();
    let kept: Vec<T> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if kept.len() < total {
        tracing::debug!(
            dropped = total - kept.len(),
            total,
            "dropped malformed annotation records"
        );
    }
    Ok(kept)
}
