use crate::{RenderableReport, RenderableStatus, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# ifcguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Source: `{}`\n- Doors: {} compliant / {} checked\n\n",
        verdict, report.data.source, report.data.doors_compliant, report.data.doors_checked
    ));

    if report.results.is_empty() {
        out.push_str("No results.\n");
        return out;
    }

    out.push_str("## Results\n\n");

    for r in &report.results {
        let status = match r.status {
            RenderableStatus::Pass => "PASS",
            RenderableStatus::Fail => "FAIL",
            RenderableStatus::Warning => "WARN",
        };

        out.push_str(&format!(
            "- [{}] `{}` {} — actual: {}, required: {}\n",
            status,
            r.element_type,
            r.element_name.as_deref().unwrap_or(""),
            r.actual_value,
            r.required_value
        ));

        if let Some(comment) = &r.comment {
            out.push_str(&format!("  - {}\n", comment));
        }
        if let Some(log) = &r.log {
            out.push_str(&format!("  - log: {}\n", log));
        }
    }

    out
}
