use ifcguard_domain::model::{BuildingModel, Element};
use serde::Deserialize;

/// Schema identifier for snapshot files v1.
pub const SCHEMA_SNAPSHOT_V1: &str = "ifcguard.snapshot.v1";

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot schema: {found} (expected {SCHEMA_SNAPSHOT_V1})")]
    UnsupportedSchema { found: String },
}

/// On-disk snapshot shape. Permissive on purpose: only `elements` matters,
/// everything else is optional.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    elements: Vec<SnapshotElement>,
}

#[derive(Debug, Deserialize)]
struct SnapshotElement {
    ifc_type: String,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    global_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    overall_width: Option<f64>,
}

/// Parse snapshot text into a [`BuildingModel`].
///
/// A missing `schema` field is accepted for hand-written snapshots; a present
/// but unrecognized one is rejected. Elements without an `id` get a 1-based
/// ordinal assigned by position.
pub fn parse_snapshot(text: &str, fallback_source: &str) -> Result<BuildingModel, SnapshotError> {
    let file: SnapshotFile = serde_json::from_str(text)?;

    if let Some(schema) = &file.schema {
        if schema != SCHEMA_SNAPSHOT_V1 {
            return Err(SnapshotError::UnsupportedSchema {
                found: schema.clone(),
            });
        }
    }

    let elements = file
        .elements
        .into_iter()
        .enumerate()
        .map(|(idx, e)| Element {
            ifc_type: e.ifc_type,
            id: e.id.unwrap_or(idx as u64 + 1),
            global_id: e.global_id,
            name: e.name,
            long_name: e.long_name,
            overall_width: e.overall_width,
        })
        .collect();

    Ok(BuildingModel {
        source: file.source.unwrap_or_else(|| fallback_source.to_string()),
        elements,
    })
}
