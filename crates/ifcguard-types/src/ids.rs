//! Stable identifiers for checks and report element types.
//!
//! `check_id` is a dotted namespace; element types mirror the IFC entity
//! names they were extracted from.

// Checks
pub const CHECK_DOORS_MIN_WIDTH: &str = "doors.min_width";

// Element types used in report records
pub const ELEMENT_TYPE_DOOR: &str = "IfcDoor";
pub const ELEMENT_TYPE_SUMMARY: &str = "Summary";

// Display names for summary records
pub const SUMMARY_NAME_DOORS_MIN_WIDTH: &str = "Door Accessibility Check";
pub const SUMMARY_NAME_TOOL_RUNTIME: &str = "Tool Runtime";
