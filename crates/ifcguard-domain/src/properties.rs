//! Property-based tests for the domain crate.
//!
//! These verify the structural invariants of a check run:
//! - output length is doors + 1 (the summary)
//! - the summary is always last
//! - per-door classification matches the threshold comparison
//! - door record order follows model order

use crate::engine::evaluate;
use crate::model::{BuildingModel, Element};
use crate::test_support::config_with_check;
use ifcguard_types::{ids, CheckStatus, Verdict};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        prop::string::string_regex("Door-[0-9]{1,3}")
            .unwrap()
            .prop_map(Some),
    ]
}

fn arb_width() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        (0.0f64..2500.0).prop_map(Some),
        // Cluster around the default threshold to exercise the boundary.
        (880.0f64..920.0).prop_map(Some),
    ]
}

fn arb_door(id: u64) -> impl Strategy<Value = Element> {
    (arb_name(), arb_width(), prop::option::of("[A-Za-z0-9$]{22}")).prop_map(
        move |(name, overall_width, global_id)| Element {
            ifc_type: "IfcDoor".to_string(),
            id,
            global_id,
            name,
            long_name: None,
            overall_width,
        },
    )
}

fn arb_doors() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(Just(()), 0..12).prop_flat_map(|slots| {
        slots
            .iter()
            .enumerate()
            .map(|(i, _)| arb_door(i as u64 + 1))
            .collect::<Vec<_>>()
    })
}

fn building(doors: Vec<Element>) -> BuildingModel {
    BuildingModel {
        source: "prop.ifc".to_string(),
        elements: doors,
    }
}

proptest! {
    #[test]
    fn output_length_is_doors_plus_one(doors in arb_doors(), min in 0.0f64..2000.0) {
        let n = doors.len();
        let report = evaluate(&building(doors), &config_with_check(ids::CHECK_DOORS_MIN_WIDTH, min));
        prop_assert_eq!(report.results.len(), n + 1);
    }

    #[test]
    fn summary_is_always_last_and_unique(doors in arb_doors(), min in 0.0f64..2000.0) {
        let report = evaluate(&building(doors), &config_with_check(ids::CHECK_DOORS_MIN_WIDTH, min));

        let summaries: Vec<usize> = report
            .results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.element_type == ids::ELEMENT_TYPE_SUMMARY)
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(summaries.len(), 1);
        prop_assert_eq!(summaries[0], report.results.len() - 1);
    }

    #[test]
    fn door_status_matches_threshold_comparison(doors in arb_doors(), min in 0.0f64..2000.0) {
        let expected: Vec<CheckStatus> = doors
            .iter()
            .map(|d| match d.overall_width {
                Some(w) if w >= min => CheckStatus::Pass,
                _ => CheckStatus::Fail,
            })
            .collect();

        let report = evaluate(&building(doors), &config_with_check(ids::CHECK_DOORS_MIN_WIDTH, min));

        for (record, expected_status) in report.results.iter().zip(expected.iter()) {
            prop_assert_eq!(&record.check_status, expected_status);
        }
    }

    #[test]
    fn passing_records_carry_no_comment(doors in arb_doors(), min in 0.0f64..2000.0) {
        let report = evaluate(&building(doors), &config_with_check(ids::CHECK_DOORS_MIN_WIDTH, min));

        for record in &report.results {
            if record.element_type == ids::ELEMENT_TYPE_DOOR {
                match record.check_status {
                    CheckStatus::Pass => prop_assert!(record.comment.is_none()),
                    _ => prop_assert!(record.comment.is_some()),
                }
            }
        }
    }

    #[test]
    fn door_records_preserve_model_order(doors in arb_doors(), min in 0.0f64..2000.0) {
        let guids: Vec<Option<String>> = doors.iter().map(|d| d.global_id.clone()).collect();
        let report = evaluate(&building(doors), &config_with_check(ids::CHECK_DOORS_MIN_WIDTH, min));

        let emitted: Vec<Option<String>> = report
            .results
            .iter()
            .filter(|r| r.element_type == ids::ELEMENT_TYPE_DOOR)
            .map(|r| r.element_id.clone())
            .collect();

        prop_assert_eq!(emitted, guids);
    }

    #[test]
    fn verdict_agrees_with_summary_status(doors in arb_doors(), min in 0.0f64..2000.0) {
        let report = evaluate(&building(doors), &config_with_check(ids::CHECK_DOORS_MIN_WIDTH, min));
        let summary = report.results.last().unwrap();

        let expected = match summary.check_status {
            CheckStatus::Fail => Verdict::Fail,
            CheckStatus::Warning => Verdict::Warn,
            CheckStatus::Pass => Verdict::Pass,
        };
        prop_assert_eq!(report.verdict, expected);
    }
}
