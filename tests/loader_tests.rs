use std::collections::HashMap;

use smc_chart::loader::{StaticFileSource, load_dashboard};
use smc_chart::{ChartError, ChartResult};

/// In-memory stand-in for the generated static files.
#[derive(Default)]
struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    fn with_file(mut self, path: &str, body: &str) -> Self {
        self.files.insert(path.to_owned(), body.as_bytes().to_vec());
        self
    }
}

impl StaticFileSource for MemorySource {
    async fn fetch(&self, path: &str) -> ChartResult<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ChartError::InvalidData(format!("404: {path}")))
    }
}

const INDEX_JSON: &str = r#"{ "stocks": [
    { "code": "1513", "name": "Alpha", "status": "success" },
    { "code": "2330", "name": "Beta", "status": "success" },
    { "code": "9999", "name": "Broken", "status": "failed" }
] }"#;

fn stock_json(open: f64) -> String {
    format!(
        r#"{{ "candles": [ {{ "date": "2024-03-13", "open": {open}, "high": {}, "low": {}, "close": {open}, "volume": 10 }} ] }}"#,
        open + 1.0,
        open - 1.0,
    )
}

#[tokio::test]
async fn loads_all_successful_stocks_in_index_order() {
    let source = MemorySource::default()
        .with_file("index.json", INDEX_JSON)
        .with_file("1513.json", &stock_json(100.0))
        .with_file("2330.json", &stock_json(50.0));

    let dashboard = load_dashboard(&source).await.expect("load succeeds");

    assert_eq!(dashboard.index.stocks.len(), 3);
    let codes: Vec<&str> = dashboard.stocks.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["1513", "2330"]);
    assert_eq!(dashboard.stock("1513").expect("stock").candles[0].open, 100.0);
}

#[tokio::test]
async fn missing_stock_file_is_tolerated() {
    // 2330.json is absent: the simulated 404 must only drop that stock.
    let source = MemorySource::default()
        .with_file("index.json", INDEX_JSON)
        .with_file("1513.json", &stock_json(100.0));

    let dashboard = load_dashboard(&source).await.expect("load still succeeds");

    assert!(dashboard.stock("2330").is_none());
    assert!(dashboard.stock("1513").is_some());
    assert_eq!(dashboard.stocks.len(), 1);
}

#[tokio::test]
async fn corrupt_stock_file_is_tolerated() {
    let source = MemorySource::default()
        .with_file("index.json", INDEX_JSON)
        .with_file("1513.json", "{ not json")
        .with_file("2330.json", &stock_json(50.0));

    let dashboard = load_dashboard(&source).await.expect("load still succeeds");

    assert!(dashboard.stock("1513").is_none());
    assert!(dashboard.stock("2330").is_some());
}

#[tokio::test]
async fn failed_status_stocks_are_not_fetched() {
    // 9999 is marked failed in the index; its file existing must not matter.
    let source = MemorySource::default()
        .with_file("index.json", INDEX_JSON)
        .with_file("1513.json", &stock_json(100.0))
        .with_file("2330.json", &stock_json(50.0))
        .with_file("9999.json", &stock_json(25.0));

    let dashboard = load_dashboard(&source).await.expect("load succeeds");
    assert!(dashboard.stock("9999").is_none());
}

#[tokio::test]
async fn missing_index_is_fatal() {
    let source = MemorySource::default().with_file("1513.json", &stock_json(100.0));

    let error = load_dashboard(&source).await.expect_err("load fails");
    assert!(matches!(error, ChartError::IndexLoad(_)));
}

#[tokio::test]
async fn corrupt_index_is_fatal() {
    let source = MemorySource::default().with_file("index.json", "[]");

    let error = load_dashboard(&source).await.expect_err("load fails");
    assert!(matches!(error, ChartError::IndexLoad(_)));
}
