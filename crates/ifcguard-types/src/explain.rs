//! Explain registry for checks.
//!
//! Maps check IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after snapshot examples.
    pub examples: ExamplePair,
}

/// Before and after snapshot examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Model data that would trigger a failure.
    pub before: &'static str,
    /// Model data that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_DOORS_MIN_WIDTH => Some(explain_doors_min_width()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_DOORS_MIN_WIDTH]
}

fn explain_doors_min_width() -> Explanation {
    Explanation {
        title: "Minimum Door Clear Width",
        description: "\
Verifies that every IfcDoor element declares an OverallWidth of at least the
configured minimum (900.0 mm by default).

Narrow doors are one of the most common accessibility defects in building
models:
- Wheelchair users typically need 850-915 mm of clear width to pass
- Accessibility codes (DIN 18040, ADA, BS 8300) all set a minimum door width
- A door with no OverallWidth at all cannot be verified and is reported as
  non-compliant rather than silently skipped",
        remediation: "\
Fix the model, not the report:
- Widen doors that fall below the minimum, or swap in a wider door type
- Fill in the OverallWidth attribute for doors where it is missing; the value
  must be the clear opening width in millimeters
- If your project legitimately uses a different threshold, set it in
  ifcguard.toml or pass --min-width on the command line",
        examples: ExamplePair {
            before: r#"{ "ifc_type": "IfcDoor", "name": "Door-02", "overall_width": 800.0 }
{ "ifc_type": "IfcDoor", "name": "Door-03" }"#,
            after: r#"{ "ifc_type": "IfcDoor", "name": "Door-02", "overall_width": 900.0 }
{ "ifc_type": "IfcDoor", "name": "Door-03", "overall_width": 1000.0 }"#,
        },
    }
}
