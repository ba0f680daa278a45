use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for ifcguard reports.
pub const SCHEMA_REPORT_V1: &str = "ifcguard.report.v1";

/// Per-record outcome. `warning` is reserved for degraded-input summaries
/// (for example a model with no doors at all).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

/// One row of the compliance report: a single inspected element, or the
/// per-check summary (`element_type = "Summary"`, always the last record a
/// check emits).
///
/// All fields serialize unconditionally (absent values as explicit nulls);
/// downstream report consumers rely on the fixed record shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    /// Source GlobalId of the element; absent for summary records.
    pub element_id: Option<String>,
    /// IFC entity type (`IfcDoor`, ...) or the literal `Summary`.
    pub element_type: String,
    /// Declared element name, or a synthesized fallback like `Door #142`.
    pub element_name: Option<String>,
    pub element_name_long: Option<String>,
    pub check_status: CheckStatus,
    /// Measured value as text, e.g. `1000.0` or `Unknown width`.
    pub actual_value: String,
    /// Requirement as text, e.g. `>= 900.0 mm`.
    pub required_value: String,
    /// Human-readable explanation; absent on pass.
    pub comment: Option<String>,
    /// Tool diagnostics (runtime errors); never set by domain checks.
    pub log: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Ifcguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct IfcguardData {
    /// Name of the model the snapshot was extracted from.
    pub source: String,

    pub elements_scanned: u32,
    pub doors_checked: u32,
    pub doors_compliant: u32,

    pub results_total: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows ifcguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = IfcguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub results: Vec<CheckResult>,
    pub data: TData,
}

pub type IfcguardReport = ReportEnvelope<IfcguardData>;
