//! Logging setup shared by every app.
//!
//! Filter defaults to `info`; override with `RUST_LOG`
//! (e.g. `RUST_LOG=chococalc=trace`).

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber.
/// Safe to call more than once; later calls are ignored.
pub fn init(app_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(app = app_name, "logging initialised");
    }
}
