use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Default minimum clear door width in millimeters (DIN 18040 / ADA range).
pub const DEFAULT_MIN_DOOR_WIDTH_MM: f64 = 900.0;

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,

    /// Threshold for width checks. Deliberately unvalidated: any comparable
    /// f64 is accepted, including zero and negative values.
    pub min_width_mm: f64,

    /// Unrecognized per-check options, carried for forward compatibility and
    /// ignored by the engine.
    pub extra: BTreeMap<String, JsonValue>,
}

impl CheckPolicy {
    pub fn enabled(min_width_mm: f64) -> Self {
        Self {
            enabled: true,
            min_width_mm,
            extra: BTreeMap::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_width_mm: DEFAULT_MIN_DOOR_WIDTH_MM,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }

    /// Built-in defaults: every cataloged check enabled at its default
    /// threshold.
    pub fn default_checks() -> Self {
        let mut checks = BTreeMap::new();
        checks.insert(
            ifcguard_types::ids::CHECK_DOORS_MIN_WIDTH.to_string(),
            CheckPolicy::enabled(DEFAULT_MIN_DOOR_WIDTH_MM),
        );
        Self { checks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifcguard_types::ids;

    #[test]
    fn disabled_policies_are_invisible() {
        let mut cfg = EffectiveConfig::default_checks();
        assert!(cfg.check_policy(ids::CHECK_DOORS_MIN_WIDTH).is_some());

        cfg.checks
            .insert(ids::CHECK_DOORS_MIN_WIDTH.to_string(), CheckPolicy::disabled());
        assert!(cfg.check_policy(ids::CHECK_DOORS_MIN_WIDTH).is_none());
        assert!(cfg.check_policy("doors.unknown").is_none());
    }
}
