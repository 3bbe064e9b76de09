//! User-facing diagnostics: error message formatting and warnings.
//!
//! Everything goes through `tracing`, so `RUST_LOG` controls what reaches stderr.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Prefix an error message so it reads consistently in the anyhow chain.
pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("argspec-svg: {}", msg.as_ref())
}

/// Report something suspicious that does not stop rendering.
pub fn warn(msg: impl AsRef<str>) {
    tracing::warn!("{}", msg.as_ref());
}
