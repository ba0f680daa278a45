use anyhow::Context;
use ifcguard_render::{
    RenderableData, RenderableReport, RenderableResult, RenderableStatus, RenderableVerdictStatus,
};
use ifcguard_types::{
    ids, CheckResult, CheckStatus, IfcguardData, IfcguardReport, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<IfcguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse ifcguard report")
}

pub fn serialize_report(report: &IfcguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &IfcguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        results: report
            .results
            .iter()
            .map(|r| RenderableResult {
                status: match r.check_status {
                    CheckStatus::Pass => RenderableStatus::Pass,
                    CheckStatus::Fail => RenderableStatus::Fail,
                    CheckStatus::Warning => RenderableStatus::Warning,
                },
                element_type: r.element_type.clone(),
                element_name: r.element_name.clone(),
                actual_value: r.actual_value.clone(),
                required_value: r.required_value.clone(),
                comment: r.comment.clone(),
                log: r.log.clone(),
            })
            .collect(),
        data: RenderableData {
            source: report.data.source.clone(),
            doors_checked: report.data.doors_checked,
            doors_compliant: report.data.doors_compliant,
        },
    }
}

/// Report emitted when the tool itself fails (unreadable snapshot, bad
/// config). The failure is carried in the `log` field of a single runtime
/// summary record so downstream consumers always see a well-formed report.
pub fn runtime_error_report(message: &str) -> IfcguardReport {
    let now = OffsetDateTime::now_utc();

    IfcguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "ifcguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        results: vec![CheckResult {
            element_id: None,
            element_type: ids::ELEMENT_TYPE_SUMMARY.to_string(),
            element_name: Some(ids::SUMMARY_NAME_TOOL_RUNTIME.to_string()),
            element_name_long: None,
            check_status: CheckStatus::Fail,
            actual_value: "Error".to_string(),
            required_value: "Successful run".to_string(),
            comment: None,
            log: Some(message.to_string()),
        }],
        data: IfcguardData {
            source: "unknown".to_string(),
            elements_scanned: 0,
            doors_checked: 0,
            doors_compliant: 0,
            results_total: 1,
        },
    }
}
