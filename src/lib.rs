// logbridge: static vs. dynamic logging demos and the SBOM merger.
//
// Layering:
//   atoms  : constants, error enum, plain data types (no I/O)
//   engine : the clients, the scoped loader, the SBOM merge
//   logging: host-side env_logger setup shared by the binaries

pub mod atoms;
pub mod engine;
pub mod logging;

pub use atoms::error::{BridgeError, BridgeResult};
