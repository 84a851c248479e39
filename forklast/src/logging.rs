//! Local diagnostics.
//!
//! Host-side records go through `HostClient::log`; this only sets up the
//! process-local `tracing` output on stderr.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `debug`.
pub fn init(debug: bool) {
    let fallback = if debug { "forklast=debug" } else { "forklast=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
