// SBOM merge: fold libraries captured at runtime into a static CycloneDX SBOM.
//
// Module layout:
//   types: DynamicLibrary input, Component / ToolComponent output
//   merge: conversion, dedup, metadata stamping (pure)
//   (this file): reading and writing the JSON files

pub mod merge;
pub mod types;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::atoms::error::{BridgeError, BridgeResult};
pub use self::types::{Component, DynamicLibrary, MergeSummary};

fn load_json(path: &Path) -> BridgeResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| BridgeError::Sbom(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| BridgeError::Sbom(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a captured-library list; it must be a JSON array.
pub fn load_dynamic_libraries(path: &Path) -> BridgeResult<Vec<DynamicLibrary>> {
    let value = load_json(path)?;
    if !value.is_array() {
        return Err(BridgeError::Sbom(format!("{} should be a JSON array", path.display())));
    }
    Ok(serde_json::from_value(value)?)
}

fn component_count(sbom: &Value) -> usize {
    sbom.get("components").and_then(Value::as_array).map_or(0, Vec::len)
}

/// Merge `dynamic_libs` into `static_sbom` and write the result to `output`.
pub fn merge_files(static_sbom: &Path, dynamic_libs: &Path, output: &Path) -> BridgeResult<MergeSummary> {
    let sbom = load_json(static_sbom)?;
    let libraries = load_dynamic_libraries(dynamic_libs)?;
    let static_components = component_count(&sbom);

    let merged = merge::merge_sboms(sbom, &libraries, chrono::Utc::now())?;
    fs::write(output, serde_json::to_string_pretty(&merged)?)?;

    let summary = MergeSummary {
        static_components,
        dynamic_libraries: libraries.len(),
        final_components: component_count(&merged),
    };
    log::info!(
        "[sbom] Wrote {} ({} components)",
        output.display(),
        summary.final_components
    );
    Ok(summary)
}
