//! Log capture for test runs that exercise fake tables.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: fake-table mutations at `debug`,
/// lookups and query drains at `trace`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,fakeset_testing=debug,fakeset_core=trace";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Route fake-table events into the test harness's captured output.
///
/// Only the first call installs a subscriber; later calls from other tests are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().compact().with_target(true).with_test_writer())
        .try_init();
}
