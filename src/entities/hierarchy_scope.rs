//! Equipment hierarchy scope

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::entities::identifier::IdentifierType;
use crate::error::{Error, Result};
use crate::xml::Element;

/// Represents the equipment element level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EquipmentElementLevel {
    Other,
    Enterprise,
    Site,
    Area,
    ProcessCell,
    Unit,
    ProductionLine,
    WorkCell,
    ProductionUnit,
    StorageZone,
    StorageUnit,
    WorkCenter,
    WorkUnit,
    EquipmentModule,
    ControlModule,
}

const LEVEL_NAMES: &[(EquipmentElementLevel, &str)] = &[
    (EquipmentElementLevel::Other, "Other"),
    (EquipmentElementLevel::Enterprise, "Enterprise"),
    (EquipmentElementLevel::Site, "Site"),
    (EquipmentElementLevel::Area, "Area"),
    (EquipmentElementLevel::ProcessCell, "ProcessCell"),
    (EquipmentElementLevel::Unit, "Unit"),
    (EquipmentElementLevel::ProductionLine, "ProductionLine"),
    (EquipmentElementLevel::WorkCell, "WorkCell"),
    (EquipmentElementLevel::ProductionUnit, "ProductionUnit"),
    (EquipmentElementLevel::StorageZone, "StorageZone"),
    (EquipmentElementLevel::StorageUnit, "StorageUnit"),
    (EquipmentElementLevel::WorkCenter, "WorkCenter"),
    (EquipmentElementLevel::WorkUnit, "WorkUnit"),
    (EquipmentElementLevel::EquipmentModule, "EquipmentModule"),
    (EquipmentElementLevel::ControlModule, "ControlModule"),
];

static LEVEL_LOOKUP: Lazy<HashMap<&'static str, EquipmentElementLevel>> =
    Lazy::new(|| LEVEL_NAMES.iter().map(|(l, n)| (*n, *l)).collect());

impl EquipmentElementLevel {
    /// Parses a wire equipment-element-level value.
    pub fn from_wire(raw: &str) -> Result<Self> {
        LEVEL_LOOKUP
            .get(raw)
            .copied()
            .ok_or_else(|| Error::invalid_message("Invalid equipment element level"))
    }

    /// The wire form of the level
    pub fn to_wire(&self) -> &'static str {
        LEVEL_NAMES
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, n)| *n)
            .unwrap_or("Other")
    }
}

/// Indicates the scope of equipment within the plant hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyScope {
    equipment_identifier: IdentifierType,
    equipment_element_level: EquipmentElementLevel,
}

impl HierarchyScope {
    /// Create a hierarchy scope. The equipment identifier is required and
    /// must not be empty.
    pub fn new(
        equipment_identifier: IdentifierType,
        equipment_element_level: EquipmentElementLevel,
    ) -> Result<Self> {
        if equipment_identifier.value().is_empty() {
            return Err(Error::invalid_message(
                "Equipment ID must not be empty in hierarchy scope",
            ));
        }

        Ok(Self {
            equipment_identifier,
            equipment_element_level,
        })
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let equipment_id = proxy
            .child("EquipmentID")
            .map(IdentifierType::from_proxy)
            .ok_or_else(Self::missing)?;

        let level_element = proxy.child("EquipmentElementLevel").ok_or_else(Self::missing)?;
        let level = EquipmentElementLevel::from_wire(level_element.text().unwrap_or(""))?;

        Self::new(equipment_id, level)
    }

    fn missing() -> Error {
        Error::invalid_message("Failed to read HierarchyScope - something expected is missing")
    }

    /// Equipment ID
    pub fn equipment_identifier(&self) -> &IdentifierType {
        &self.equipment_identifier
    }

    /// Equipment element level
    pub fn equipment_element_level(&self) -> EquipmentElementLevel {
        self.equipment_element_level
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Element {
        let mut proxy = Element::new("HierarchyScope");
        proxy.add_child(self.equipment_identifier.to_proxy("EquipmentID"));
        proxy.add_child(Element::with_text(
            "EquipmentElementLevel",
            self.equipment_element_level.to_wire(),
        ));
        proxy
    }
}
