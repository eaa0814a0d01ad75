use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Logs go to stderr so the prompt and response printed on stdout stay
/// clean. Default to WARN; override with the RUST_LOG env var.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .ok();
}
