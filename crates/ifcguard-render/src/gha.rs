use crate::{RenderableReport, RenderableStatus};

/// Render non-passing results as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for r in &report.results {
        let level = match r.status {
            RenderableStatus::Pass => continue,
            RenderableStatus::Fail => "error",
            RenderableStatus::Warning => "warning",
        };

        let subject = r.element_name.as_deref().unwrap_or(&r.element_type);
        let detail = r
            .comment
            .as_deref()
            .or(r.log.as_deref())
            .unwrap_or(&r.actual_value);

        let message = format!("[{}] {}", subject, detail)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        out.push(format!("::{}::{}", level, message));
    }

    out
}
