//! Quantity values
//!
//! The wire schema is loose about the string form of a quantity, so the
//! raw string is stored verbatim and only interpreted on demand. The
//! datatype tag is advisory; it is never validated against the content.
//! The scalar constructors are the safe way in: they encode the value and
//! set the matching tag in one step.

use crate::codec;
use crate::entities::data_type::DataType;
use crate::entities::identifier::IdentifierType;
use crate::error::{Error, Result};
use crate::xml::Element;

/// Represents a quantity value
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityValue {
    raw_quantity_string: String,
    data_type: Option<DataType>,
    /// Unit of measure
    pub unit_of_measure: Option<String>,
    /// Key to identify the quantity value
    pub key: Option<IdentifierType>,
}

impl QuantityValue {
    /// Create from a double; tags the datatype accordingly
    pub fn from_double(value: f64) -> Self {
        Self::tagged(codec::double_to_string(value), DataType::DoubleXml)
    }

    /// Create from a boolean; tags the datatype accordingly
    pub fn from_boolean(value: bool) -> Self {
        Self::tagged(codec::bool_to_string(value), DataType::BooleanXml)
    }

    /// Create from a 32-bit integer; tags the datatype accordingly
    pub fn from_int(value: i32) -> Self {
        Self::tagged(codec::int_to_string(value), DataType::IntXml)
    }

    /// Create from a 64-bit integer; tags the datatype accordingly
    pub fn from_long(value: i64) -> Self {
        Self::tagged(codec::long_to_string(value), DataType::LongXml)
    }

    /// Create from a raw string, leaving the datatype unset
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self {
            raw_quantity_string: value.into(),
            data_type: None,
            unit_of_measure: None,
            key: None,
        }
    }

    /// Create from a raw string with an explicit datatype tag
    pub fn from_raw_typed(value: impl Into<String>, data_type: DataType) -> Self {
        Self {
            data_type: Some(data_type),
            ..Self::from_raw(value)
        }
    }

    fn tagged(raw: String, data_type: DataType) -> Self {
        Self {
            raw_quantity_string: raw,
            data_type: Some(data_type),
            unit_of_measure: None,
            key: None,
        }
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let quantity_string = proxy
            .child("QuantityString")
            .ok_or_else(|| Error::invalid_message("Quantity value is required"))?;

        let data_type = match proxy.child("DataType") {
            Some(element) => Some(DataType::from_proxy(element)?),
            None => None,
        };

        Ok(Self {
            raw_quantity_string: quantity_string.text().unwrap_or("").to_string(),
            data_type,
            unit_of_measure: proxy
                .child("UnitOfMeasure")
                .and_then(|e| e.text())
                .map(str::to_string),
            key: proxy.child("Key").map(IdentifierType::from_proxy),
        })
    }

    /// Raw quantity string, exactly as constructed or read
    pub fn raw_quantity_string(&self) -> &str {
        &self.raw_quantity_string
    }

    /// Advisory datatype tag
    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    /// Attempts to interpret the quantity string as a double.
    pub fn parse_as_double(&self) -> Result<f64> {
        codec::double_from_string(&self.raw_quantity_string).map_err(Self::operation_failure)
    }

    /// Attempts to interpret the quantity string as a boolean.
    pub fn parse_as_boolean(&self) -> Result<bool> {
        codec::bool_from_string(&self.raw_quantity_string).map_err(Self::operation_failure)
    }

    /// Attempts to interpret the quantity string as a 32-bit integer.
    pub fn parse_as_int(&self) -> Result<i32> {
        codec::int_from_string(&self.raw_quantity_string).map_err(Self::operation_failure)
    }

    /// Attempts to interpret the quantity string as a 64-bit integer.
    pub fn parse_as_long(&self) -> Result<i64> {
        codec::long_from_string(&self.raw_quantity_string).map_err(Self::operation_failure)
    }

    // The raw string was accepted at construction time, so a failed
    // interpretation is an operation-level error, not an input error.
    fn operation_failure(err: Error) -> Error {
        match err {
            Error::Parse { type_name, input } => Error::Operation { type_name, input },
            other => other,
        }
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Element {
        let mut proxy = Element::new("Quantity");
        proxy.add_child(Element::with_text(
            "QuantityString",
            &self.raw_quantity_string,
        ));
        if let Some(data_type) = self.data_type {
            proxy.add_child(data_type.to_proxy());
        }
        if let Some(unit) = &self.unit_of_measure {
            proxy.add_child(Element::with_text("UnitOfMeasure", unit));
        }
        if let Some(key) = &self.key {
            proxy.add_child(key.to_proxy("Key"));
        }
        proxy
    }
}
