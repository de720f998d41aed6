use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dashboard index could not be loaded: {0}")]
    IndexLoad(String),

    #[error("stock `{code}` could not be loaded: {reason}")]
    StockLoad { code: String, reason: String },

    #[error("provider api error: {0}")]
    ProviderApi(String),

    #[cfg(feature = "fetch")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
