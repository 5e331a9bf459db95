use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber shared by both binaries
///
/// Filtering comes from `RUST_LOG`, defaulting to warnings only so that log
/// lines stay out of the way of the console messages on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
