//! Loading of the generated dashboard files.
//!
//! One index file lists the analyzed stocks; one JSON payload per stock holds
//! its candles and annotations. The per-stock fetches run concurrently and a
//! single failing stock is dropped from the result instead of failing the
//! whole load. There is no retry or backoff; the caller's recovery path is a
//! fresh load.

use futures_util::future::join_all;
use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::model::{StockData, StockIndex};

/// Name of the dashboard index file relative to the base location.
pub const INDEX_FILE: &str = "index.json";

/// Read access to the generated dashboard files.
///
/// The seam keeps the aggregation logic independent of the transport, so
/// tests can feed it in-memory fixtures.
pub trait StaticFileSource {
    /// Fetches the raw bytes of one file, addressed relative to the source
    /// root (e.g. `index.json` or `2330.json`).
    async fn fetch(&self, path: &str) -> ChartResult<Vec<u8>>;
}

/// Aggregated dashboard payload: the index plus every stock that loaded.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub index: StockIndex,
    /// Per-stock payloads keyed by stock code, in index order.
    pub stocks: IndexMap<String, StockData>,
}

impl DashboardData {
    #[must_use]
    pub fn stock(&self, code: &str) -> Option<&StockData> {
        self.stocks.get(code)
    }
}

/// Loads the index and all successful stocks from `source`.
///
/// Index failures are fatal. Per-stock failures are logged and the stock is
/// omitted; ordering of the survivors follows the index file.
pub async fn load_dashboard<S: StaticFileSource>(source: &S) -> ChartResult<DashboardData> {
    let raw = source
        .fetch(INDEX_FILE)
        .await
        .map_err(|error| ChartError::IndexLoad(error.to_string()))?;
    let index: StockIndex =
        serde_json::from_slice(&raw).map_err(|error| ChartError::IndexLoad(error.to_string()))?;

    let codes: Vec<String> = index
        .successes()
        .map(|entry| entry.code.clone())
        .collect();
    let results = join_all(codes.iter().map(|code| fetch_stock(source, code))).await;

    let mut stocks = IndexMap::with_capacity(codes.len());
    for (code, result) in codes.into_iter().zip(results) {
        match result {
            Ok(data) => {
                stocks.insert(code, data);
            }
            Err(error) => {
                tracing::warn!(%code, %error, "stock excluded from dashboard");
            }
        }
    }

    tracing::info!(
        loaded = stocks.len(),
        indexed = index.stocks.len(),
        "dashboard load complete"
    );
    Ok(DashboardData { index, stocks })
}

async fn fetch_stock<S: StaticFileSource>(source: &S, code: &str) -> ChartResult<StockData> {
    let raw = source
        .fetch(&format!("{code}.json"))
        .await
        .map_err(|error| ChartError::StockLoad {
            code: code.to_owned(),
            reason: error.to_string(),
        })?;
    serde_json::from_slice(&raw).map_err(|error| ChartError::StockLoad {
        code: code.to_owned(),
        reason: error.to_string(),
    })
}

#[cfg(feature = "fetch")]
pub use http_source::HttpSource;

#[cfg(feature = "fetch")]
mod http_source {
    use super::StaticFileSource;
    use crate::error::ChartResult;

    /// [`StaticFileSource`] over HTTP, rooted at the directory the generator
    /// published to.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        base_url: String,
        http: reqwest::Client,
    }

    impl HttpSource {
        pub fn new(base_url: impl Into<String>) -> ChartResult<Self> {
            let http = reqwest::Client::builder()
                .user_agent(concat!("smc-chart/", env!("CARGO_PKG_VERSION")))
                .build()?;
            Ok(Self {
                base_url: base_url.into(),
                http,
            })
        }
    }

    impl StaticFileSource for HttpSource {
        async fn fetch(&self, path: &str) -> ChartResult<Vec<u8>> {
            let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
            let response = self.http.get(&url).send().await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
    }
}
