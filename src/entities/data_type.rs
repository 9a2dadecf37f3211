//! Quantity datatype tags
//!
//! One flat enumeration covers two external type vocabularies: the generic
//! XML-schema types and the UN/CEFACT business types. On the wire the
//! namespace-specific suffix of the member name is stripped, so parsing
//! tries the two vocabularies in sequence via static mapping tables. The
//! tables are case sensitive by necessity: `dateTime` (XML) and `DateTime`
//! (UN/CEFACT) are distinct members.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::xml::Element;

/// A quantity datatype. Some members come from UN/CEFACT, the rest from
/// the XML standard; `Other` belongs to neither vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DataType {
    Other,
    // UN/CEFACT business types
    AmountUnCefact,
    BinaryObjectUnCefact,
    CodeUnCefact,
    DateTimeUnCefact,
    IdentifierUnCefact,
    IndicatorUnCefact,
    MeasureUnCefact,
    NumericUnCefact,
    QuantityUnCefact,
    TextUnCefact,
    // XML-schema types
    StringXml,
    ByteXml,
    UnsignedByteXml,
    BinaryXml,
    IntegerXml,
    PositiveIntegerXml,
    NegativeIntegerXml,
    NonNegativeIntegerXml,
    NonPositiveIntegerXml,
    IntXml,
    UnsignedIntXml,
    LongXml,
    UnsignedLongXml,
    ShortXml,
    UnsignedShortXml,
    DecimalXml,
    FloatXml,
    DoubleXml,
    BooleanXml,
    TimeXml,
    TimeInstantXml,
    TimePeriodXml,
    DurationXml,
    DateXml,
    DateTimeXml,
    MonthXml,
    YearXml,
    CenturyXml,
    RecurringDayXml,
    RecurringDateXml,
    RecurringDurationXml,
    NameXml,
    QNameXml,
    NcNameXml,
    UriReferenceXml,
    LanguageXml,
    IdXml,
    IdRefXml,
    IdRefsXml,
    EntityXml,
    EntitiesXml,
    NotationXml,
    NmTokenXml,
    NmTokensXml,
    EnumerationXml,
    SvgXml,
}

/// Wire names of the XML-schema vocabulary
pub(crate) const XML_TYPES: &[(DataType, &str)] = &[
    (DataType::StringXml, "string"),
    (DataType::ByteXml, "byte"),
    (DataType::UnsignedByteXml, "unsignedByte"),
    (DataType::BinaryXml, "binary"),
    (DataType::IntegerXml, "integer"),
    (DataType::PositiveIntegerXml, "positiveInteger"),
    (DataType::NegativeIntegerXml, "negativeInteger"),
    (DataType::NonNegativeIntegerXml, "nonNegativeInteger"),
    (DataType::NonPositiveIntegerXml, "nonPositiveInteger"),
    (DataType::IntXml, "int"),
    (DataType::UnsignedIntXml, "unsignedInt"),
    (DataType::LongXml, "long"),
    (DataType::UnsignedLongXml, "unsignedLong"),
    (DataType::ShortXml, "short"),
    (DataType::UnsignedShortXml, "unsignedShort"),
    (DataType::DecimalXml, "decimal"),
    (DataType::FloatXml, "float"),
    (DataType::DoubleXml, "double"),
    (DataType::BooleanXml, "boolean"),
    (DataType::TimeXml, "time"),
    (DataType::TimeInstantXml, "timeInstant"),
    (DataType::TimePeriodXml, "timePeriod"),
    (DataType::DurationXml, "duration"),
    (DataType::DateXml, "date"),
    (DataType::DateTimeXml, "dateTime"),
    (DataType::MonthXml, "month"),
    (DataType::YearXml, "year"),
    (DataType::CenturyXml, "century"),
    (DataType::RecurringDayXml, "recurringDay"),
    (DataType::RecurringDateXml, "recurringDate"),
    (DataType::RecurringDurationXml, "recurringDuration"),
    (DataType::NameXml, "Name"),
    (DataType::QNameXml, "QName"),
    (DataType::NcNameXml, "NCName"),
    (DataType::UriReferenceXml, "uriReference"),
    (DataType::LanguageXml, "language"),
    (DataType::IdXml, "ID"),
    (DataType::IdRefXml, "IDREF"),
    (DataType::IdRefsXml, "IDREFS"),
    (DataType::EntityXml, "ENTITY"),
    (DataType::EntitiesXml, "ENTITIES"),
    (DataType::NotationXml, "NOTATION"),
    (DataType::NmTokenXml, "NMTOKEN"),
    (DataType::NmTokensXml, "NMTOKENS"),
    (DataType::EnumerationXml, "Enumeration"),
    (DataType::SvgXml, "SVG"),
];

/// Wire names of the UN/CEFACT vocabulary
pub(crate) const UN_CEFACT_TYPES: &[(DataType, &str)] = &[
    (DataType::AmountUnCefact, "Amount"),
    (DataType::BinaryObjectUnCefact, "BinaryObject"),
    (DataType::CodeUnCefact, "Code"),
    (DataType::DateTimeUnCefact, "DateTime"),
    (DataType::IdentifierUnCefact, "Identifier"),
    (DataType::IndicatorUnCefact, "Indicator"),
    (DataType::MeasureUnCefact, "Measure"),
    (DataType::NumericUnCefact, "Numeric"),
    (DataType::QuantityUnCefact, "Quantity"),
    (DataType::TextUnCefact, "Text"),
];

static XML_LOOKUP: Lazy<HashMap<&'static str, DataType>> =
    Lazy::new(|| XML_TYPES.iter().map(|(t, w)| (*w, *t)).collect());

static UN_CEFACT_LOOKUP: Lazy<HashMap<&'static str, DataType>> =
    Lazy::new(|| UN_CEFACT_TYPES.iter().map(|(t, w)| (*w, *t)).collect());

impl DataType {
    /// Parses a wire datatype value.
    ///
    /// `Other` matches literally; otherwise the XML vocabulary is tried
    /// first, then the UN/CEFACT vocabulary.
    pub fn from_wire(raw: &str) -> Result<Self> {
        if raw == "Other" {
            return Ok(DataType::Other);
        }
        if let Some(t) = XML_LOOKUP.get(raw) {
            return Ok(*t);
        }
        if let Some(t) = UN_CEFACT_LOOKUP.get(raw) {
            return Ok(*t);
        }
        Err(Error::invalid_message(format!(
            "Failed to parse datatype from \"{}\"",
            raw
        )))
    }

    /// The wire form of the datatype
    pub fn to_wire(&self) -> &'static str {
        if *self == DataType::Other {
            return "Other";
        }
        for (t, wire) in XML_TYPES.iter().chain(UN_CEFACT_TYPES.iter()) {
            if t == self {
                return wire;
            }
        }
        // Every member except Other belongs to exactly one table
        unreachable!("datatype {:?} missing from wire tables", self)
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        match proxy.text() {
            Some(value) => Self::from_wire(value),
            None => Err(Error::invalid_message(
                "If datatype element is present, it must have a value",
            )),
        }
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Element {
        Element::with_text("DataType", self.to_wire())
    }
}
