// sbom/types.rs: captured library entries and CycloneDX components
//
// Inputs deserialize leniently (every field optional); the static SBOM itself
// is never typed, so fields this tool does not know survive the merge.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One library observed at runtime, as produced by the capture step.
///
/// Scalar fields accept any JSON scalar: `"version": 3` reads as `"3"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DynamicLibrary {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    /// Maven group id, when the capture could infer one.
    #[serde(default, deserialize_with = "lenient_string")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub purl: Option<String>,
    #[serde(default, deserialize_with = "lenient_hashes")]
    pub hashes: Option<Vec<CapturedHash>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub properties: Vec<Value>,
    /// Filesystem path the library was loaded from.
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapturedHash {
    #[serde(default, deserialize_with = "lenient_string")]
    pub alg: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
}

// ── Lenient field readers ──────────────────────────────────────────────────

/// Text form of a scalar; `null` is absent. Arrays and objects keep their
/// JSON text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(de)?))
}

fn lenient_list<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Value>, D::Error> {
    match Value::deserialize(de)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

fn lenient_hashes<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Vec<CapturedHash>>, D::Error> {
    let Value::Array(items) = Value::deserialize(de)? else {
        return Ok(None);
    };
    let hashes = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(mut obj) => Some(CapturedHash {
                alg: obj.remove("alg").and_then(scalar_text),
                content: obj.remove("content").and_then(scalar_text),
            }),
            _ => None,
        })
        .collect();
    Ok(Some(hashes))
}

/// CycloneDX component built from a [`DynamicLibrary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub purl: String,
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Vec<Hash>>,
    pub properties: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hash {
    pub alg: String,
    pub content: String,
}

/// `metadata.tools.components` entry for this tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolComponent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

/// Counts reported after a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub static_components: usize,
    pub dynamic_libraries: usize,
    pub final_components: usize,
}
