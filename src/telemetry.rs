//! Opt-in tracing bootstrap.
//!
//! The library only emits `tracing` events; it never installs a subscriber
//! on its own. Hosts either call [`init_default_tracing`] once at startup or
//! wire their own subscriber and filters.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, falling back to
/// warn-level output for this crate only.
///
/// Returns `false` without touching global state when the `telemetry`
/// feature is disabled or another subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,groupchart_rs=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
