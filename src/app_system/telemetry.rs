use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: compact output with uptime timestamps.
///
/// `RUST_LOG` wins when set, e.g. `RUST_LOG=storefront::clients=debug`;
/// otherwise `default_level` is used.
pub fn setup_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (tests, embedding apps) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
