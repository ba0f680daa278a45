use crate::checks;
use crate::model::BuildingModel;
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, StatusCounts};
use ifcguard_types::{ids, CheckResult, CheckStatus, IfcguardData, Verdict};

pub fn evaluate(model: &BuildingModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut results: Vec<CheckResult> = Vec::new();

    checks::run_all(model, cfg, &mut results);

    // Emission order is contractual: per-element records in model order, the
    // check's summary last. No re-sorting, no truncation.
    let verdict = compute_verdict(&results);
    let counts = StatusCounts::from_results(&results);

    let doors_checked = results
        .iter()
        .filter(|r| r.element_type == ids::ELEMENT_TYPE_DOOR)
        .count() as u32;
    let doors_compliant = results
        .iter()
        .filter(|r| {
            r.element_type == ids::ELEMENT_TYPE_DOOR && r.check_status == CheckStatus::Pass
        })
        .count() as u32;

    let data = IfcguardData {
        source: model.source.clone(),
        elements_scanned: model.elements.len() as u32,
        doors_checked,
        doors_compliant,
        results_total: results.len() as u32,
    };

    DomainReport {
        verdict,
        results,
        data,
        counts,
    }
}

/// The verdict is carried by the summary records: any failing summary fails
/// the run, a degraded-input summary downgrades it to warn, and an empty
/// catalog passes vacuously.
fn compute_verdict(results: &[CheckResult]) -> Verdict {
    let mut verdict = Verdict::Pass;
    for summary in results
        .iter()
        .filter(|r| r.element_type == ids::ELEMENT_TYPE_SUMMARY)
    {
        match summary.check_status {
            CheckStatus::Fail => return Verdict::Fail,
            CheckStatus::Warning => verdict = Verdict::Warn,
            CheckStatus::Pass => {}
        }
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{config_with_check, door, model, wall};

    #[test]
    fn failing_door_fails_the_verdict() {
        let model = model(vec![
            door(1, Some("Door-01"), Some(1000.0)),
            door(2, Some("Door-02"), Some(800.0)),
        ]);
        let cfg = config_with_check(ids::CHECK_DOORS_MIN_WIDTH, 900.0);

        let report = evaluate(&model, &cfg);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.counts.pass, 1);
        assert_eq!(report.counts.fail, 2, "failing door plus failing summary");
        assert_eq!(report.data.doors_checked, 2);
        assert_eq!(report.data.doors_compliant, 1);
        assert_eq!(report.data.results_total, 3);
    }

    #[test]
    fn doorless_model_warns() {
        let model = model(vec![wall(1)]);
        let cfg = config_with_check(ids::CHECK_DOORS_MIN_WIDTH, 900.0);

        let report = evaluate(&model, &cfg);
        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.counts.warning, 1);
        assert_eq!(report.data.elements_scanned, 1);
        assert_eq!(report.data.doors_checked, 0);
    }

    #[test]
    fn compliant_model_passes() {
        let model = model(vec![door(1, Some("Door-01"), Some(950.0))]);
        let cfg = config_with_check(ids::CHECK_DOORS_MIN_WIDTH, 900.0);

        let report = evaluate(&model, &cfg);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.doors_compliant, 1);
    }

    #[test]
    fn empty_catalog_passes_with_no_results() {
        let model = model(vec![door(1, Some("Door-01"), Some(100.0))]);
        let cfg = EffectiveConfig {
            checks: Default::default(),
        };

        let report = evaluate(&model, &cfg);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.results.is_empty());
        assert_eq!(report.data.results_total, 0);
    }
}
