//! Free-text identifiers

use crate::xml::Element;

/// An identifier value (`xsd:normalizedString` on the wire)
///
/// The value is never absent; an empty string is the minimum. Leading and
/// trailing whitespace is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierType {
    value: String,
}

impl IdentifierType {
    /// Create an identifier, normalizing surrounding whitespace
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: value.as_ref().trim().to_string(),
        }
    }

    /// Read from an XML proxy element; a missing value yields the empty
    /// identifier, never a failure.
    pub(crate) fn from_proxy(proxy: &Element) -> Self {
        Self::new(proxy.text().unwrap_or(""))
    }

    /// The actual identifier
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Generate an XML proxy element with the given name
    pub(crate) fn to_proxy(&self, element_name: &str) -> Element {
        Element::with_text(element_name, &self.value)
    }
}
