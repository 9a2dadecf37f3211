//! Material-related requirements

use crate::entities::identifier::IdentifierType;
use crate::entities::material_use::MaterialUse;
use crate::entities::quantity::QuantityValue;
use crate::error::Result;
use crate::xml::Element;

/// Represents a material-related requirement
///
/// Assembly requirements nest the same type recursively to describe the
/// composition of a material; the depth is unbounded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialRequirement {
    /// Material definition identifiers
    pub material_definition_identifiers: Vec<IdentifierType>,
    /// Material lot identifiers
    pub material_lot_identifiers: Vec<IdentifierType>,
    /// How the material is to be used
    pub material_use: Option<MaterialUse>,
    /// Enclosed quantities
    pub quantities: Vec<QuantityValue>,
    /// Enclosed material requirements specifying the composition
    pub assembly_requirements: Vec<MaterialRequirement>,
}

impl MaterialRequirement {
    /// Create an empty requirement
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let mut requirement = Self::new();

        for id_proxy in proxy.children_named("MaterialDefinitionID") {
            requirement
                .material_definition_identifiers
                .push(IdentifierType::from_proxy(id_proxy));
        }

        for id_proxy in proxy.children_named("MaterialLotID") {
            requirement
                .material_lot_identifiers
                .push(IdentifierType::from_proxy(id_proxy));
        }

        if let Some(use_proxy) = proxy.child("MaterialUse") {
            requirement.material_use = Some(MaterialUse::from_proxy(use_proxy)?);
        }

        for quantity_proxy in proxy.children_named("Quantity") {
            requirement
                .quantities
                .push(QuantityValue::from_proxy(quantity_proxy)?);
        }

        for assembly_proxy in proxy.children_named("AssemblyRequirement") {
            requirement
                .assembly_requirements
                .push(MaterialRequirement::from_proxy(assembly_proxy)?);
        }

        Ok(requirement)
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Element {
        self.to_proxy_named("MaterialRequirement")
    }

    // Nested requirements appear under a different element name
    fn to_proxy_named(&self, element_name: &str) -> Element {
        let mut proxy = Element::new(element_name);

        for id in &self.material_definition_identifiers {
            proxy.add_child(id.to_proxy("MaterialDefinitionID"));
        }
        for id in &self.material_lot_identifiers {
            proxy.add_child(id.to_proxy("MaterialLotID"));
        }
        if let Some(material_use) = &self.material_use {
            proxy.add_child(material_use.to_proxy());
        }
        for quantity in &self.quantities {
            proxy.add_child(quantity.to_proxy());
        }
        for assembly in &self.assembly_requirements {
            proxy.add_child(assembly.to_proxy_named("AssemblyRequirement"));
        }

        proxy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_assembly_requirements_round_trip() {
        let requirement = MaterialRequirement {
            material_definition_identifiers: vec![IdentifierType::new("matte")],
            material_lot_identifiers: vec![IdentifierType::new("psc2-15")],
            material_use: Some(MaterialUse::Produced),
            quantities: vec![QuantityValue::from_double(41.9)],
            assembly_requirements: vec![
                MaterialRequirement {
                    material_definition_identifiers: vec![IdentifierType::new("Cu")],
                    ..MaterialRequirement::new()
                },
                MaterialRequirement {
                    material_definition_identifiers: vec![IdentifierType::new("S")],
                    assembly_requirements: vec![MaterialRequirement::new()],
                    ..MaterialRequirement::new()
                },
            ],
        };

        let read_back = MaterialRequirement::from_proxy(&requirement.to_proxy()).unwrap();
        assert_eq!(requirement, read_back);
        assert_eq!(
            "Cu",
            read_back.assembly_requirements[0].material_definition_identifiers[0].value()
        );
    }

    #[test]
    fn child_errors_propagate() {
        let mut proxy = Element::new("MaterialRequirement");
        proxy.add_child(Element::with_text("MaterialUse", "Recycled"));

        let err = MaterialRequirement::from_proxy(&proxy).unwrap_err();
        assert!(err.to_string().starts_with("Invalid material use value"));
    }
}
