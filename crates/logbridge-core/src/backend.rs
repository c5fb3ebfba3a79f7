// Logging backend for the cdylib build.
//
// A dynamically loaded copy of this crate carries its own `log` facade, so it
// has to install a backend of its own. The host cannot configure it.

use std::io::Write;
use std::sync::Once;

use env_logger::{Builder, Env};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// env_logger with a timestamped `LEVEL [target] message` line format.
fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder
}

/// Install the backend once per module image. A logger that is already
/// installed (statically linked into a host that set one up) is kept.
pub fn init() {
    INIT.call_once(|| {
        if let Err(e) = builder().try_init() {
            log::debug!("[logbridge-core] keeping existing logger: {}", e);
        }
    });
}
