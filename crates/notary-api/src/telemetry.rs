//! Telemetry initialization

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing with a compact console format.
///
/// The filter defaults to debug for our crates and tower-http; override with
/// `RUST_LOG`.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notary=debug,notary_api=debug,tower_http=debug".into()),
        )
        .with(console_fmt)
        .init();

    Ok(())
}
