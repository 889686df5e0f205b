//! Tracing subscriber setup for hosts and test runs.
//!
//! The library itself only emits `tracing` events. Hosts that don't install
//! their own subscriber can call [`init`] once at startup; the filter comes
//! from `MATRIX_CANVAS_LOG` (e.g. `matrix_canvas=debug`) and defaults to `info`.

use crate::constants::LOG_ENV_VAR;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a fmt subscriber. Safe to call more than once; later calls are no-ops,
/// as is the first call when another global subscriber is already set.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(true)
            .try_init();
    });
}

/// Subscriber writing to the test harness's captured output.
pub fn init_for_tests() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_test_writer()
            .try_init();
    });
}
