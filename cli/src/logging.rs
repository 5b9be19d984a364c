use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Installs the stderr subscriber. `--verbose` wins over `RUST_LOG`, which
/// wins over the configured level.
pub fn init(verbose: bool, configured: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_LEVEL)))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
