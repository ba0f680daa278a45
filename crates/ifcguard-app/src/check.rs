//! The `check` use case: evaluate a snapshot and produce a report.

use anyhow::Context;
use ifcguard_settings::{Overrides, ResolvedConfig};
use ifcguard_types::{IfcguardReport, ReportEnvelope, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Snapshot file contents.
    pub snapshot_text: &'a str,
    /// Display name of the snapshot (usually its path); used as the report
    /// source when the snapshot does not carry one.
    pub snapshot_name: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: IfcguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, parse the snapshot, evaluate, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ifcguard_settings::IfcguardConfigV1::default()
    } else {
        ifcguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = ifcguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model = ifcguard_snapshot::parse_snapshot(input.snapshot_text, input.snapshot_name)
        .context("parse snapshot")?;

    let domain_report = ifcguard_domain::evaluate(&model, &resolved.effective);
    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "ifcguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        results: domain_report.results,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
