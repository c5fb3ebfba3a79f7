// ── logbridge-core ─────────────────────────────────────────────────────────
// The logging library both demos consume.
//
// Module layout:
//   manager: LogManager factory and CoreLogger (safe Rust API)
//   backend: env_logger setup used when loaded as a cdylib
//   ffi    : `extern "C"` method bodies matching the API archive's declarations

pub mod backend;
mod ffi;
mod manager;

pub use logbridge_abi::Logger;
pub use manager::{CoreLogger, LogManager};
