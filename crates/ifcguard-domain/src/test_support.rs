use crate::model::{BuildingModel, Element};
use crate::policy::{CheckPolicy, EffectiveConfig};
use std::collections::BTreeMap;

pub fn door(id: u64, name: Option<&str>, width: Option<f64>) -> Element {
    Element {
        ifc_type: "IfcDoor".to_string(),
        id,
        global_id: Some(format!("GUID-{id:04}")),
        name: name.map(str::to_string),
        long_name: None,
        overall_width: width,
    }
}

pub fn wall(id: u64) -> Element {
    Element {
        ifc_type: "IfcWall".to_string(),
        id,
        global_id: Some(format!("GUID-{id:04}")),
        name: None,
        long_name: None,
        overall_width: None,
    }
}

pub fn model(elements: Vec<Element>) -> BuildingModel {
    BuildingModel {
        source: "test.ifc".to_string(),
        elements,
    }
}

pub fn config_with_check(check_id: &str, min_width_mm: f64) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(min_width_mm));
    EffectiveConfig { checks }
}
