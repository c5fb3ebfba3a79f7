// ── logbridge Atoms: Error Types ───────────────────────────────────────────
// Single canonical error enum, built with `thiserror`.
//
// Design rules:
//   • Variants are coarse-grained by failure class (I/O, load, resolution…).
//   • Resolution variants carry the qualified name or mangled symbol that
//     failed, so a version mismatch between archives is diagnosable.
//   • Missing archives are *not* errors: the dynamic client reports them and
//     returns normally.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Filesystem or stdout failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An archive exists but could not be loaded.
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// An archive could not be unloaded.
    #[error("Failed to close {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// No archive exports the declaration for this type.
    #[error("Type not found: {type_name} (symbol {symbol})")]
    TypeNotFound { type_name: String, symbol: String },

    /// The exported declaration names a different type.
    #[error("Type mismatch: requested {requested}, declaration names {found}")]
    TypeMismatch { requested: String, found: String },

    /// The declaration was built against another ABI version.
    #[error("ABI mismatch for {type_name}: archive declares v{found}, host expects v{expected}")]
    AbiMismatch { type_name: String, found: u32, expected: u32 },

    /// The type does not declare a method with this name and signature.
    #[error("Method not found: {type_name}::{method}({params})")]
    MethodNotFound { type_name: String, method: String, params: String },

    /// A declared method has no implementation symbol in any archive.
    #[error("Symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    /// A resolved function reported failure.
    #[error("Invocation failed: {0}")]
    Invocation(String),

    /// Malformed SBOM input.
    #[error("SBOM error: {0}")]
    Sbom(String),
}

// ── Convenience alias ──────────────────────────────────────────────────────

pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_errors_name_what_failed() {
        let e = BridgeError::MethodNotFound {
            type_name: "logbridge::Logger".into(),
            method: "info".into(),
            params: "str".into(),
        };
        assert_eq!(e.to_string(), "Method not found: logbridge::Logger::info(str)");

        let e = BridgeError::AbiMismatch { type_name: "logbridge::Logger".into(), found: 2, expected: 1 };
        assert!(e.to_string().contains("v2"));
    }

    #[test]
    fn io_errors_convert() {
        let e: BridgeError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(e, BridgeError::Io(_)));
    }
}
