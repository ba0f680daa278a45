//! Stable DTOs and IDs used across the ifcguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted check records and report envelope
//! - stable string IDs for checks and element types
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{
    CheckResult, CheckStatus, IfcguardData, IfcguardReport, ReportEnvelope, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
