//! Production segment requirements
//!
//! A segment carries an optional time window. The window invariant
//! (earliest start not after latest end) is checked at both boundaries:
//! reading a violating message fails as an invalid message, serializing a
//! violating object fails as a date/time state error. The time setters
//! only enforce the UTC kind, so a window inverted through separate setter
//! calls is caught by the serialization check.

use crate::datetime::XsdDateTime;
use crate::entities::equipment_requirement::EquipmentRequirement;
use crate::entities::identifier::IdentifierType;
use crate::entities::material_requirement::MaterialRequirement;
use crate::error::{Error, Result};
use crate::xml::Element;

/// Represents a production segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentRequirement {
    /// Related process segment ID
    pub process_segment_identifier: Option<IdentifierType>,
    earliest_start_time: Option<XsdDateTime>,
    latest_end_time: Option<XsdDateTime>,
    /// Equipment requirements
    pub equipment_requirements: Vec<EquipmentRequirement>,
    /// Material requirements
    pub material_requirements: Vec<MaterialRequirement>,
    /// (Nested) segment requirements
    pub segment_requirements: Vec<SegmentRequirement>,
}

impl SegmentRequirement {
    /// Create an empty segment requirement
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let mut segment = Self::new();

        if let Some(id_proxy) = proxy.child("ProcessSegmentID") {
            segment.process_segment_identifier = Some(IdentifierType::from_proxy(id_proxy));
        }

        segment.earliest_start_time = Self::try_get_time(proxy, "EarliestStartTime")?;
        segment.latest_end_time = Self::try_get_time(proxy, "LatestEndTime")?;

        // Check if end is before start
        if let (Some(start), Some(end)) = (&segment.earliest_start_time, &segment.latest_end_time) {
            if start.naive() > end.naive() {
                return Err(Error::invalid_message(format!(
                    "Segment end must not be before start; start at {} UTC",
                    start.naive().format("%Y-%m-%d %H:%M:%S%.3f")
                )));
            }
        }

        for requirement_proxy in proxy.children_named("EquipmentRequirement") {
            segment
                .equipment_requirements
                .push(EquipmentRequirement::from_proxy(requirement_proxy)?);
        }

        for requirement_proxy in proxy.children_named("MaterialRequirement") {
            segment
                .material_requirements
                .push(MaterialRequirement::from_proxy(requirement_proxy)?);
        }

        for requirement_proxy in proxy.children_named("SegmentRequirement") {
            segment
                .segment_requirements
                .push(SegmentRequirement::from_proxy(requirement_proxy)?);
        }

        Ok(segment)
    }

    fn try_get_time(proxy: &Element, name: &str) -> Result<Option<XsdDateTime>> {
        match proxy.child(name) {
            Some(element) => {
                let parsed = XsdDateTime::from_wire(element.text().unwrap_or(""))?;
                Ok(Some(parsed.to_utc_if_possible()))
            }
            None => Ok(None),
        }
    }

    /// The earliest start time
    pub fn earliest_start_time(&self) -> Option<&XsdDateTime> {
        self.earliest_start_time.as_ref()
    }

    /// Set the earliest start time. Fails on an attempt to set a non-UTC
    /// value.
    pub fn set_earliest_start_time(&mut self, value: Option<XsdDateTime>) -> Result<()> {
        if let Some(time) = &value {
            time.expect_utc()?;
        }
        self.earliest_start_time = value;
        Ok(())
    }

    /// The latest end time
    pub fn latest_end_time(&self) -> Option<&XsdDateTime> {
        self.latest_end_time.as_ref()
    }

    /// Set the latest end time. Fails on an attempt to set a non-UTC
    /// value.
    pub fn set_latest_end_time(&mut self, value: Option<XsdDateTime>) -> Result<()> {
        if let Some(time) = &value {
            time.expect_utc()?;
        }
        self.latest_end_time = value;
        Ok(())
    }

    /// Generate an XML proxy element
    pub(crate) fn to_proxy(&self) -> Result<Element> {
        let mut proxy = Element::new("SegmentRequirement");

        if let Some(id) = &self.process_segment_identifier {
            proxy.add_child(id.to_proxy("ProcessSegmentID"));
        }

        // Children are serialized first; the window invariant is
        // re-checked before the time values are emitted
        let mut equipment_proxies = Vec::with_capacity(self.equipment_requirements.len());
        for requirement in &self.equipment_requirements {
            equipment_proxies.push(requirement.to_proxy());
        }
        let mut material_proxies = Vec::with_capacity(self.material_requirements.len());
        for requirement in &self.material_requirements {
            material_proxies.push(requirement.to_proxy());
        }
        let mut segment_proxies = Vec::with_capacity(self.segment_requirements.len());
        for requirement in &self.segment_requirements {
            segment_proxies.push(requirement.to_proxy()?);
        }

        // Making sure start is not after end
        if let (Some(start), Some(end)) = (&self.earliest_start_time, &self.latest_end_time) {
            if start.naive() > end.naive() {
                return Err(Error::date_time(format!(
                    "Start of segment must not be after end (starting at {} UTC)",
                    start.naive().format("%Y-%m-%d %H:%M:%S")
                )));
            }
        }

        if let Some(start) = &self.earliest_start_time {
            proxy.add_child(Element::with_text("EarliestStartTime", start.to_wire()?));
        }
        if let Some(end) = &self.latest_end_time {
            proxy.add_child(Element::with_text("LatestEndTime", end.to_wire()?));
        }

        for element in equipment_proxies {
            proxy.add_child(element);
        }
        for element in material_proxies {
            proxy.add_child(element);
        }
        for element in segment_proxies {
            proxy.add_child(element);
        }

        Ok(proxy)
    }
}
