use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema identifier for `ifcguard.toml` v1.
pub const SCHEMA_CONFIG_V1: &str = "ifcguard.config.v1";

/// `ifcguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IfcguardConfigV1 {
    /// Optional schema string for tooling (`ifcguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Project-wide minimum clear door width in millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_door_width_mm: Option<f64>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override default enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Per-check minimum width in millimetres (takes precedence over the
    /// project-wide setting).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width_mm: Option<f64>,

    /// Unrecognized per-check options are retained but not interpreted.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
