//! Material use enumeration
//!
//! The wire form uses spaces where the member name uses word boundaries,
//! e.g. `Replaced Asset` for `ReplacedAsset`. Parsing substitutes spaces
//! with underscores and matches against the internal names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::xml::Element;

/// Specifies how material should be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MaterialUse {
    Other,
    Produced,
    Consumed,
    Consumable,
    ReplacedAsset,
    ReplacementAsset,
    Sample,
    ReturnedSample,
    Carrier,
    ReturnedCarrier,
}

// Internal names with underscores between words; the wire form replaces
// the underscores with spaces.
const MATERIAL_USE_NAMES: &[(MaterialUse, &str)] = &[
    (MaterialUse::Other, "Other"),
    (MaterialUse::Produced, "Produced"),
    (MaterialUse::Consumed, "Consumed"),
    (MaterialUse::Consumable, "Consumable"),
    (MaterialUse::ReplacedAsset, "Replaced_Asset"),
    (MaterialUse::ReplacementAsset, "Replacement_Asset"),
    (MaterialUse::Sample, "Sample"),
    (MaterialUse::ReturnedSample, "Returned_Sample"),
    (MaterialUse::Carrier, "Carrier"),
    (MaterialUse::ReturnedCarrier, "Returned_Carrier"),
];

static NAME_LOOKUP: Lazy<HashMap<&'static str, MaterialUse>> =
    Lazy::new(|| MATERIAL_USE_NAMES.iter().map(|(m, n)| (*n, *m)).collect());

impl MaterialUse {
    /// Parses a wire material-use value.
    pub fn from_wire(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::invalid_message(
                "Material use value cannot be an empty",
            ));
        }

        let name = raw.replace(' ', "_");
        match NAME_LOOKUP.get(name.as_str()) {
            Some(m) => Ok(*m),
            None => Err(Error::invalid_message(format!(
                "Invalid material use value \"{}\"",
                name
            ))),
        }
    }

    /// The wire form of the value
    pub fn to_wire(&self) -> String {
        let name = MATERIAL_USE_NAMES
            .iter()
            .find(|(m, _)| m == self)
            .map(|(_, n)| *n)
            .unwrap_or("Other");
        name.replace('_', " ")
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        Self::from_wire(proxy.text().unwrap_or(""))
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Element {
        Element::with_text("MaterialUse", self.to_wire())
    }
}
