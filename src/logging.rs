// Host-side logging: `env_logger` behind the `log` facade, set up once by
// each binary's `main`. `RUST_LOG` overrides the default filter.

use env_logger::{Builder, Env};

use crate::atoms::constants::DEFAULT_LOG_FILTER;

/// Install the host logger. A second call is a no-op.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_millis()
        .try_init();
}
