//! Tracing setup helpers for applications embedding `smc-chart`.
//!
//! The library itself only emits `tracing` events (skipped records at debug,
//! excluded stocks at warn, load summaries at info) and never installs a
//! subscriber on its own. Hosts that do not already run one can opt into the
//! `telemetry` feature and call one of the initializers below.

/// Installs a compact default subscriber honoring `RUST_LOG`.
///
/// Falls back to the `info` level when the environment sets no filter.
/// Returns `false` when the `telemetry` feature is disabled or another
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Installs a compact default subscriber with an explicit fallback filter,
/// e.g. `"warn,smc_chart=debug"` to only surface this crate's skip logs.
///
/// `RUST_LOG` still wins when set. Returns `false` when the `telemetry`
/// feature is disabled or another subscriber is already installed.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
