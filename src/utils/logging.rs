// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries, demos and benchmarks
// ============================================================================
//
// The library itself only emits events through the `tracing` facade; this
// helper is for the final executable. Filtering follows `RUST_LOG`, falling
// back to the given default directive (e.g. "arithmetic=debug").

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `RUST_LOG` or `default_directive`.
///
/// Returns `false` if a global subscriber was already installed; calling this
/// more than once is harmless.
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
