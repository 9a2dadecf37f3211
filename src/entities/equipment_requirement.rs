//! Equipment-related requirements

use crate::entities::quantity::QuantityValue;
use crate::error::Result;
use crate::xml::Element;

/// Represents an equipment-related requirement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EquipmentRequirement {
    /// Quantities
    pub quantities: Vec<QuantityValue>,
}

impl EquipmentRequirement {
    /// Create an empty requirement
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let mut quantities = Vec::new();
        for quantity_proxy in proxy.children_named("Quantity") {
            quantities.push(QuantityValue::from_proxy(quantity_proxy)?);
        }
        Ok(Self { quantities })
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Element {
        let mut proxy = Element::new("EquipmentRequirement");
        for quantity in &self.quantities {
            proxy.add_child(quantity.to_proxy());
        }
        proxy
    }
}
