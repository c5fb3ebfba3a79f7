// ── logbridge Atoms: Constants ─────────────────────────────────────────────
// All named constants for the crate live here. The demos take no flags and
// read no config file, so this module is the whole configuration surface.

// ── Runtime archives ───────────────────────────────────────────────────────
// Looked up relative to the working directory by the dynamic demo.
pub const RUNTIME_LIBS_DIR: &str = "runtime-libs";

// Library stems; `libloading::library_filename` adds the platform prefix and
// extension (`liblogbridge_api.so`, `logbridge_api.dll`, …).
pub const API_ARCHIVE_STEM: &str = "logbridge_api";
pub const CORE_ARCHIVE_STEM: &str = "logbridge_core";

pub const BUILD_COMMAND: &str = "cargo build --release -p logbridge-api -p logbridge-core";
pub const BUILD_OUTPUT_DIR: &str = "target/release/";

// ── Demo messages ──────────────────────────────────────────────────────────

pub const STATIC_INFO_MESSAGE: &str = "Hello from STATIC logbridge app!";
pub const STATIC_WARN_MESSAGE: &str = "This is a warning message from static logbridge";
pub const STATIC_ERROR_MESSAGE: &str = "This is an error message from static logbridge";
pub const STATIC_DONE_MESSAGE: &str = "Static app: logger call completed.";

pub const DYNAMIC_INFO_MESSAGE: &str = "Hello from DYNAMIC logbridge app!";
pub const DYNAMIC_WARN_MESSAGE: &str = "This is a warning message from dynamic logbridge";
pub const DYNAMIC_ERROR_MESSAGE: &str = "This is an error message from dynamic logbridge";
pub const DYNAMIC_DONE_MESSAGE: &str = "Dynamic app: logger invocation done.";

// ── Logging ────────────────────────────────────────────────────────────────
// Host filter when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ── SBOM merge ─────────────────────────────────────────────────────────────
// Tool entry recorded in `metadata.tools`. The name is the dedup key.
pub const SBOM_TOOL_NAME: &str = "logbridge-sbom-merge";
pub const SBOM_TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SBOM_TOOL_AUTHOR: &str = "logbridge Contributors";

pub const SBOM_DEFAULT_COMPONENT_TYPE: &str = "library";
pub const SBOM_UNKNOWN: &str = "unknown";
pub const SBOM_DEFAULT_HASH_ALG: &str = "SHA-1";
pub const SBOM_FILE_PATH_PROPERTY: &str = "dynamic:filePath";
