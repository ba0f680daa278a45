use crate::model::IfcguardConfigV1;
use ifcguard_domain::policy::{CheckPolicy, EffectiveConfig, DEFAULT_MIN_DOOR_WIDTH_MM};
use ifcguard_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Command-line minimum width; wins over everything in the config file.
    pub min_width_mm: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: IfcguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default_checks();

    // Project-wide width applies to every width-based check that has not set
    // its own value.
    let project_min = cfg.min_door_width_mm.unwrap_or(DEFAULT_MIN_DOOR_WIDTH_MM);
    if let Some(policy) = effective.checks.get_mut(ids::CHECK_DOORS_MIN_WIDTH) {
        policy.min_width_mm = project_min;
    }

    // Per-check overrides.
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(min) = cc.min_width_mm {
            entry.min_width_mm = min;
        }
        if !cc.extra.is_empty() {
            entry.extra = cc.extra.clone();
        }
    }

    // Command-line override wins last.
    if let Some(min) = overrides.min_width_mm {
        for policy in effective.checks.values_mut() {
            policy.min_width_mm = min;
        }
    }

    // Disabled checks are dropped so the engine never sees them.
    effective.checks.retain(|_, policy| policy.enabled);

    Ok(ResolvedConfig { effective })
}
