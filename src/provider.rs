//! Client for the upstream daily-OHLCV data provider.
//!
//! The provider answers dataset queries with `{ status, data, msg }` JSON;
//! each record carries `date`, `open`, `max`, `min`, `close` and
//! `Trading_Volume` fields that are normalized into [`Bar`] values here.
//! Numeric fields may arrive as strings and are parsed leniently.

use chrono::{Days, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::Bar;
use crate::error::{ChartError, ChartResult};

const DEFAULT_BASE_URL: &str = "https://api.finmindtrade.com/api/v4/data";
const DEFAULT_DATASET: &str = "TaiwanStockPrice";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub dataset: String,
}

impl ProviderConfig {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            dataset: dataset.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    status: i64,
    #[serde(default)]
    data: Option<Vec<Value>>,
    #[serde(default)]
    msg: Option<String>,
}

/// Thin query client for one provider dataset.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> ChartResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("smc-chart/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    /// Fetches daily bars for one instrument over an inclusive date range,
    /// sorted chronologically.
    pub async fn daily_bars(
        &self,
        data_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ChartResult<Vec<Bar>> {
        let start = start_date.to_string();
        let end = end_date.to_string();
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("dataset", self.config.dataset.as_str()),
                ("data_id", data_id),
                ("start_date", start.as_str()),
                ("end_date", end.as_str()),
            ])
            .send()
            .await?;
        let payload: ProviderResponse = response.json().await?;

        if payload.status != 200 {
            return Err(ChartError::ProviderApi(payload.msg.unwrap_or_else(|| {
                format!("provider returned status {}", payload.status)
            })));
        }
        let Some(records) = payload.data else {
            return Err(ChartError::ProviderApi(
                payload.msg.unwrap_or_else(|| "provider response has no data".to_owned()),
            ));
        };

        let mut bars = Vec::with_capacity(records.len());
        for record in &records {
            bars.push(normalize_record(record)?);
        }
        bars.sort_by_key(|bar| bar.date);
        Ok(bars)
    }
}

/// Inclusive `(start, end)` range covering the last `days` calendar days.
#[must_use]
pub fn last_days_range(days: u64) -> (NaiveDate, NaiveDate) {
    let end = Utc::now().date_naive();
    let start = end
        .checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN);
    (start, end)
}

/// Maps one raw provider record onto the canonical bar shape
/// (`max` -> high, `min` -> low, `Trading_Volume` -> volume).
fn normalize_record(record: &Value) -> ChartResult<Bar> {
    let fields = record.as_object().ok_or_else(|| {
        ChartError::ProviderApi("provider record is not an object".to_owned())
    })?;

    let date_text = fields
        .get("date")
        .and_then(Value::as_str)
        .ok_or_else(|| ChartError::ProviderApi("provider record has no date".to_owned()))?;
    let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| {
        ChartError::ProviderApi(format!("invalid provider record date `{date_text}`"))
    })?;

    Bar::new(
        date,
        parse_number(fields, "open")?,
        parse_number(fields, "max")?,
        parse_number(fields, "min")?,
        parse_number(fields, "close")?,
        parse_number(fields, "Trading_Volume")?.max(0.0).round() as u64,
    )
}

fn parse_number(fields: &Map<String, Value>, key: &str) -> ChartResult<f64> {
    if let Some(value) = fields.get(key) {
        if let Some(number) = value.as_f64() {
            return Ok(number);
        }
        if let Some(number) = value.as_str().and_then(|text| text.parse::<f64>().ok()) {
            return Ok(number);
        }
    }
    Err(ChartError::ProviderApi(format!(
        "missing numeric field `{key}` in provider record"
    )))
}

#[cfg(test)]
mod tests {
    use super::{last_days_range, normalize_record};

    #[test]
    fn last_days_range_spans_the_requested_window() {
        let (start, end) = last_days_range(90);
        assert!(start < end);
        assert_eq!((end - start).num_days(), 90);
    }

    #[test]
    fn record_fields_are_normalized_and_lenient() {
        let record = serde_json::json!({
            "date": "2024-03-01",
            "open": "100.5",
            "max": 110.0,
            "min": "99",
            "close": 105.25,
            "Trading_Volume": "12345"
        });
        let bar = normalize_record(&record).expect("record normalizes");
        assert_eq!(bar.high, 110.0);
        assert_eq!(bar.low, 99.0);
        assert_eq!(bar.volume, 12_345);
    }

    #[test]
    fn missing_field_is_rejected() {
        let record = serde_json::json!({
            "date": "2024-03-01",
            "open": 1.0,
            "max": 2.0,
            "min": 0.5,
            "close": 1.5
        });
        assert!(normalize_record(&record).is_err());
    }
}
