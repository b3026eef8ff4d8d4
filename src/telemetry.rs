//! Opt-in tracing bootstrap for hosts embedding `ohlc-layout`.
//!
//! The layout core only emits `tracing` events; it never installs a
//! subscriber on its own. Hosts that do not bring their own subscriber can
//! call [`init_default_tracing`] once at startup.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Only active with the `telemetry` feature. Returns `false` when the feature
/// is disabled or another global subscriber is already installed, so calling
/// this from library tests is always safe.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ohlc_layout=debug,info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
