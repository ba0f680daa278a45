use crate::model::BuildingModel;
use crate::policy::EffectiveConfig;
use ifcguard_types::CheckResult;

mod door_width;
mod utils;


pub fn run_all(model: &BuildingModel, cfg: &EffectiveConfig, out: &mut Vec<CheckResult>) {
    door_width::run(model, cfg, out);
}
