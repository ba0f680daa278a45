use ifcguard_types::{CheckResult, CheckStatus, IfcguardData, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pass: u32,
    pub fail: u32,
    pub warning: u32,
}

impl StatusCounts {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut counts = StatusCounts::default();
        for r in results {
            match r.check_status {
                CheckStatus::Pass => counts.pass += 1,
                CheckStatus::Fail => counts.fail += 1,
                CheckStatus::Warning => counts.warning += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub results: Vec<CheckResult>,
    pub data: IfcguardData,
    pub counts: StatusCounts,
}
