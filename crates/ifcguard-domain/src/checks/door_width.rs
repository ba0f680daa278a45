//! `doors.min_width`: every IfcDoor must declare an OverallWidth of at least
//! the configured minimum.

use super::utils::format_mm;
use crate::model::BuildingModel;
use crate::policy::EffectiveConfig;
use ifcguard_types::{ids, CheckResult, CheckStatus};

pub fn run(model: &BuildingModel, cfg: &EffectiveConfig, out: &mut Vec<CheckResult>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DOORS_MIN_WIDTH) else {
        return;
    };
    let min_width_mm = policy.min_width_mm;

    let doors = model.by_type(ids::ELEMENT_TYPE_DOOR);

    let mut compliant_count: u32 = 0;
    let mut non_compliant_count: u32 = 0;

    for door in &doors {
        let width = door.overall_width;

        // A missing width is distinct from a present-but-too-small one; both
        // fail, with different comments.
        let (status, comment) = match width {
            Some(w) if w >= min_width_mm => {
                compliant_count += 1;
                (CheckStatus::Pass, None)
            }
            Some(w) => {
                non_compliant_count += 1;
                (
                    CheckStatus::Fail,
                    Some(format!(
                        "Door width {} mm is below required minimum {} mm",
                        format_mm(w),
                        format_mm(min_width_mm)
                    )),
                )
            }
            None => {
                non_compliant_count += 1;
                (
                    CheckStatus::Fail,
                    Some("Door width is not specified (OverallWidth is missing)".to_string()),
                )
            }
        };

        let element_name = door
            .declared_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Door #{}", door.id));

        out.push(CheckResult {
            element_id: door.global_id.clone(),
            element_type: ids::ELEMENT_TYPE_DOOR.to_string(),
            element_name: Some(element_name),
            element_name_long: None,
            check_status: status,
            actual_value: width
                .map(format_mm)
                .unwrap_or_else(|| "Unknown width".to_string()),
            required_value: format!(">= {} mm", format_mm(min_width_mm)),
            comment,
            log: None,
        });
    }

    let total_doors = doors.len() as u32;

    let (summary_status, summary_comment) = if total_doors == 0 {
        (
            CheckStatus::Warning,
            "Model contains no IfcDoor elements".to_string(),
        )
    } else if non_compliant_count == 0 {
        (
            CheckStatus::Pass,
            format!("All {total_doors} doors meet or exceed the minimum width"),
        )
    } else {
        (
            CheckStatus::Fail,
            format!(
                "{} of {} doors are below the required minimum width of {} mm or have no width set",
                non_compliant_count,
                total_doors,
                format_mm(min_width_mm)
            ),
        )
    };

    // Exactly one summary record per run, always last.
    out.push(CheckResult {
        element_id: None,
        element_type: ids::ELEMENT_TYPE_SUMMARY.to_string(),
        element_name: Some(ids::SUMMARY_NAME_DOORS_MIN_WIDTH.to_string()),
        element_name_long: None,
        check_status: summary_status,
        actual_value: format!("{compliant_count} / {total_doors} doors compliant"),
        required_value: format!("All doors width >= {} mm", format_mm(min_width_mm)),
        comment: Some(summary_comment),
        log: None,
    });
}
