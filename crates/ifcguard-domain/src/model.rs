/// A pre-extracted building model: a flat bag of typed elements.
///
/// Built by the snapshot adapter; the domain only reads it.
#[derive(Clone, Debug, Default)]
pub struct BuildingModel {
    /// Name of the model the elements were extracted from (e.g. `office.ifc`).
    pub source: String,

    /// All elements in snapshot order.
    pub elements: Vec<Element>,
}

#[derive(Clone, Debug, Default)]
pub struct Element {
    /// IFC entity type, e.g. `IfcDoor`.
    pub ifc_type: String,

    /// Source entity instance id, or the loader-assigned fallback ordinal.
    /// Stable for a given snapshot; used to synthesize names for unnamed
    /// elements.
    pub id: u64,

    pub global_id: Option<String>,
    pub name: Option<String>,
    pub long_name: Option<String>,

    /// Clear opening width in millimeters, if declared.
    pub overall_width: Option<f64>,
}

impl BuildingModel {
    /// Elements of the given IFC type, in snapshot order.
    ///
    /// A type with no matching elements yields the empty set; checks treat
    /// that as "nothing to inspect", never as an error.
    pub fn by_type(&self, ifc_type: &str) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.ifc_type == ifc_type)
            .collect()
    }
}

impl Element {
    /// Declared name if non-empty.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_type_preserves_order_and_filters() {
        let model = BuildingModel {
            source: "test.ifc".to_string(),
            elements: vec![
                Element {
                    ifc_type: "IfcWall".to_string(),
                    id: 1,
                    ..Element::default()
                },
                Element {
                    ifc_type: "IfcDoor".to_string(),
                    id: 2,
                    ..Element::default()
                },
                Element {
                    ifc_type: "IfcDoor".to_string(),
                    id: 3,
                    ..Element::default()
                },
            ],
        };

        let doors = model.by_type("IfcDoor");
        assert_eq!(doors.len(), 2);
        assert_eq!(doors[0].id, 2);
        assert_eq!(doors[1].id, 3);
        assert!(model.by_type("IfcWindow").is_empty());
    }

    #[test]
    fn declared_name_treats_empty_as_absent() {
        let mut element = Element {
            name: Some(String::new()),
            ..Element::default()
        };
        assert_eq!(element.declared_name(), None);

        element.name = Some("Door-01".to_string());
        assert_eq!(element.declared_name(), Some("Door-01"));

        element.name = None;
        assert_eq!(element.declared_name(), None);
    }
}
