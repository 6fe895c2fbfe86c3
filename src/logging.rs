//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only command output.
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let fallback = if verbose {
            "reorder_editable=debug"
        } else {
            "reorder_editable=warn"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        // Another subscriber may already be installed (tests); keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
