// sbom/merge.rs: pure merge logic, no file I/O
//
// Static components keep their position and content. Captured libraries are
// appended unless already present by bom-ref, purl, or name+version+group.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use super::types::*;
use crate::atoms::constants::*;
use crate::atoms::error::{BridgeError, BridgeResult};

// ── Conversion ─────────────────────────────────────────────────────────────

/// Build a CycloneDX component from a captured library.
pub fn component_from_dynamic(lib: &DynamicLibrary) -> Component {
    let name = lib.name.clone().unwrap_or_else(|| SBOM_UNKNOWN.to_string());
    let version = lib.version.clone().unwrap_or_else(|| SBOM_UNKNOWN.to_string());
    let purl = lib
        .purl
        .clone()
        .unwrap_or_else(|| format!("pkg:generic/{}@{}", name, version));

    let hashes = lib.hashes.as_ref().map(|hashes| {
        hashes
            .iter()
            .filter_map(|h| {
                let content = h.content.as_deref().filter(|c| !c.is_empty())?;
                Some(Hash {
                    alg: h.alg.clone().unwrap_or_else(|| SBOM_DEFAULT_HASH_ALG.to_string()),
                    content: content.to_string(),
                })
            })
            .collect()
    });

    let mut properties = lib.properties.clone();
    if let Some(path) = &lib.path {
        properties.push(json!({ "name": SBOM_FILE_PATH_PROPERTY, "value": path }));
    }

    Component {
        kind: lib.kind.clone().unwrap_or_else(|| SBOM_DEFAULT_COMPONENT_TYPE.to_string()),
        name,
        version,
        group: lib.group.clone().filter(|g| !g.is_empty()),
        bom_ref: purl.clone(),
        purl,
        hashes,
        properties,
    }
}

// ── Merge ──────────────────────────────────────────────────────────────────

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn same_coordinates(existing: &Value, component: &Component) -> bool {
    str_field(existing, "name") == Some(component.name.as_str())
        && str_field(existing, "version") == Some(component.version.as_str())
        && str_field(existing, "group").unwrap_or("") == component.group.as_deref().unwrap_or("")
}

/// Static components first, then every captured library not already present.
pub fn merge_components(
    static_components: Vec<Value>,
    libraries: &[DynamicLibrary],
) -> BridgeResult<Vec<Value>> {
    let mut seen_bom_refs: HashSet<String> = HashSet::new();
    let mut seen_purls: HashSet<String> = HashSet::new();

    for comp in &static_components {
        if let Some(r) = str_field(comp, "bom-ref").filter(|r| !r.is_empty()) {
            seen_bom_refs.insert(r.to_string());
        }
        if let Some(p) = str_field(comp, "purl").filter(|p| !p.is_empty()) {
            seen_purls.insert(p.to_string());
        }
    }

    let mut merged = static_components;
    for lib in libraries {
        let component = component_from_dynamic(lib);
        let duplicate = seen_bom_refs.contains(&component.bom_ref)
            || seen_purls.contains(&component.purl)
            || merged.iter().any(|existing| same_coordinates(existing, &component));

        if duplicate {
            log::debug!("[sbom] Skipping duplicate {}", component.bom_ref);
            continue;
        }

        if !component.bom_ref.is_empty() {
            seen_bom_refs.insert(component.bom_ref.clone());
        }
        if !component.purl.is_empty() {
            seen_purls.insert(component.purl.clone());
        }
        merged.push(serde_json::to_value(&component)?);
    }
    Ok(merged)
}

// ── Metadata ───────────────────────────────────────────────────────────────

fn tool_entry() -> BridgeResult<Value> {
    Ok(serde_json::to_value(ToolComponent {
        kind: "application",
        name: SBOM_TOOL_NAME,
        version: SBOM_TOOL_VERSION,
        author: SBOM_TOOL_AUTHOR,
    })?)
}

fn lists_tool(tools: &[Value]) -> bool {
    tools.iter().any(|t| str_field(t, "name") == Some(SBOM_TOOL_NAME))
}

/// Record this tool in `metadata.tools`, once.
///
/// CycloneDX 1.5 nests tools under `tools.components`; the legacy 1.4 form
/// is a bare array and is extended in place.
pub fn add_tool(metadata: &mut Map<String, Value>) -> BridgeResult<()> {
    let tools = metadata
        .entry("tools")
        .or_insert_with(|| Value::Object(Map::new()));

    let list = match tools {
        Value::Array(list) => list,
        Value::Object(obj) => {
            let components = obj
                .entry("components")
                .or_insert_with(|| Value::Array(Vec::new()));
            match components {
                Value::Array(list) => list,
                _ => return Err(BridgeError::Sbom("metadata.tools.components is not an array".into())),
            }
        }
        _ => return Err(BridgeError::Sbom("metadata.tools is neither an object nor an array".into())),
    };

    if !lists_tool(list.as_slice()) {
        list.push(tool_entry()?);
    }
    Ok(())
}

/// UTC, microsecond precision, `Z` suffix.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Merge captured libraries into `static_sbom`, stamping it with `now`.
pub fn merge_sboms(
    static_sbom: Value,
    libraries: &[DynamicLibrary],
    now: DateTime<Utc>,
) -> BridgeResult<Value> {
    let mut sbom = match static_sbom {
        Value::Object(map) => map,
        _ => return Err(BridgeError::Sbom("static SBOM must be a JSON object".into())),
    };

    let metadata = sbom
        .entry("metadata")
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(metadata) = metadata else {
        return Err(BridgeError::Sbom("metadata is not an object".into()));
    };
    add_tool(metadata)?;
    metadata.insert("timestamp".into(), Value::String(format_timestamp(now)));

    // Replaced in its own slot so the document keeps its key order.
    let slot = sbom.entry("components").or_insert(Value::Null);
    let static_components = match slot.take() {
        Value::Null => Vec::new(),
        Value::Array(list) => list,
        _ => return Err(BridgeError::Sbom("components is not an array".into())),
    };
    *slot = Value::Array(merge_components(static_components, libraries)?);

    Ok(Value::Object(sbom))
}

// ── Tests ──────────────────────────────────────────────────────────────────
