use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a tracing subscriber for applications embedding the engine.
///
/// Honors `RUST_LOG`, defaulting to info-level engine output. Safe to call
/// more than once; later calls are no-ops because a global subscriber is
/// already set.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comanda=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
