//! The ProcessProductionSchedule message
//!
//! This is the root type of the object model; it is the only entity that
//! converts directly to and from XML bytes. Reading distinguishes two
//! failure layers: a violation reported by the entities passes through
//! verbatim, while lower-level failures (malformed XML, bad scalar
//! literals, bad date/times) are wrapped into one generic message-level
//! error with the original retained as the cause.

use std::collections::BTreeSet;

use crate::datetime::XsdDateTime;
use crate::entities::production_schedule::ProductionSchedule;
use crate::error::{Error, Result};
use crate::xml::{Element, SerializerCache};

const ROOT_TYPE: &str = "ProcessProductionSchedule";
const MISSING_STRUCTURE: &str =
    "Failed to read ProcessProductionSchedule - something required is missing";

/// Represents a ProcessProductionSchedule message
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessProductionSchedule {
    creation_date_time: XsdDateTime,
    /// Enclosed production schedules
    pub production_schedules: Vec<ProductionSchedule>,
}

impl ProcessProductionSchedule {
    /// Create an empty message stamped with the current time
    pub fn new() -> Self {
        Self {
            creation_date_time: XsdDateTime::now_utc(),
            production_schedules: Vec::new(),
        }
    }

    /// The creation time of the message
    pub fn creation_date_time(&self) -> &XsdDateTime {
        &self.creation_date_time
    }

    /// Set the creation time. Fails on an attempt to set a non-UTC value.
    pub fn set_creation_date_time(&mut self, value: XsdDateTime) -> Result<()> {
        value.expect_utc()?;
        self.creation_date_time = value;
        Ok(())
    }

    /// Deserialize a message from XML bytes
    pub fn from_xml_bytes(cache: &SerializerCache, bytes: &[u8]) -> Result<Self> {
        let serializer = cache.get(ROOT_TYPE, &BTreeSet::new());

        let read = || -> Result<Self> {
            let root = serializer.deserialize(bytes)?;
            Self::from_proxy(&root)
        };

        read().map_err(|err| match err {
            invalid @ Error::InvalidMessage(_) => invalid,
            other => Error::invalid_message_with_cause(
                "Failed to deserialise ProcessProductionSchedule from XML",
                other,
            ),
        })
    }

    fn from_proxy(proxy: &Element) -> Result<Self> {
        let creation_proxy = proxy
            .child("ApplicationArea")
            .and_then(|area| area.child("CreationDateTime"))
            .ok_or_else(|| Error::invalid_message(MISSING_STRUCTURE))?;
        let creation_date_time =
            XsdDateTime::from_wire(creation_proxy.text().unwrap_or(""))?.to_utc_if_possible();

        let data_area = proxy
            .child("DataArea")
            .ok_or_else(|| Error::invalid_message(MISSING_STRUCTURE))?;

        let mut production_schedules = Vec::new();
        for schedule_proxy in data_area.children_named("ProductionSchedule") {
            production_schedules.push(ProductionSchedule::from_proxy(schedule_proxy)?);
        }

        Ok(Self {
            creation_date_time,
            production_schedules,
        })
    }

    /// Serialize the message to XML bytes
    pub fn to_xml_bytes(&self, cache: &SerializerCache) -> Result<Vec<u8>> {
        let mut root = Element::new(ROOT_TYPE);
        root.set_attribute("releaseID", "1");

        let mut application_area = Element::new("ApplicationArea");
        application_area.add_child(Element::with_text(
            "CreationDateTime",
            self.creation_date_time.to_wire()?,
        ));
        root.add_child(application_area);

        let mut data_area = Element::new("DataArea");
        data_area.add_child(Element::new("Process"));

        let mut extra_types = BTreeSet::new();
        for schedule in &self.production_schedules {
            let (schedule_proxy, schedule_extras) = schedule.to_proxy()?;
            data_area.add_child(schedule_proxy);
            extra_types.extend(schedule_extras);
        }
        root.add_child(data_area);

        let serializer = cache.get(ROOT_TYPE, &extra_types);
        serializer.serialize(&root)
    }
}

impl Default for ProcessProductionSchedule {
    fn default() -> Self {
        Self::new()
    }
}
