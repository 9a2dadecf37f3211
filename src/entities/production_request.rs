//! Production requests
//!
//! A request may carry "scheduling parameters": an open-content payload
//! this model does not interpret. The payload travels as a raw node array
//! together with a type descriptor, because the serializer needs upfront
//! knowledge of every payload type a document may contain.

use std::collections::BTreeSet;

use crate::entities::hierarchy_scope::HierarchyScope;
use crate::entities::identifier::IdentifierType;
use crate::entities::segment_requirement::SegmentRequirement;
use crate::error::{Error, Result};
use crate::xml::{Element, ExtraType};

/// Sentinel used in diagnostics when a request has no identifier
const UNKNOWN_ID: &str = "[Unknown ID]";

/// Opaque scheduling-parameters payload of a production request
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingParameters {
    nodes: Vec<Element>,
    extra_type: ExtraType,
}

impl SchedulingParameters {
    /// Create a payload from caller-defined content. The extra type must
    /// describe the payload so the serializer can register it.
    pub fn new(extra_type: ExtraType, nodes: Vec<Element>) -> Self {
        Self { nodes, extra_type }
    }

    /// The raw payload nodes
    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    /// The type descriptor to register for serialization
    pub fn extra_type(&self) -> &ExtraType {
        &self.extra_type
    }
}

/// Represents a request for a certain production entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductionRequest {
    /// Identifier
    pub identifier: Option<IdentifierType>,
    /// Hierarchy scope
    pub hierarchy_scope: Option<HierarchyScope>,
    /// Enclosed segment requirements
    pub segment_requirements: Vec<SegmentRequirement>,
    /// Scheduling parameters
    pub scheduling_parameters: Option<SchedulingParameters>,
}

impl ProductionRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let identifier = proxy.child("ID").map(IdentifierType::from_proxy);
        let id_for_diagnostics = match &identifier {
            Some(id) => id.value().to_string(),
            None => UNKNOWN_ID.to_string(),
        };

        Self::read_contents(proxy, identifier).map_err(|err| match err {
            Error::InvalidMessage(inner) => {
                let message = format!(
                    "Failed to read ProductionRequest {}: {}",
                    id_for_diagnostics,
                    inner.message()
                );
                Error::invalid_message_with_cause(message, Error::InvalidMessage(inner))
            }
            other => other,
        })
    }

    fn read_contents(proxy: &Element, identifier: Option<IdentifierType>) -> Result<Self> {
        let mut request = Self {
            identifier,
            ..Self::new()
        };

        if let Some(scope_proxy) = proxy.child("HierarchyScope") {
            request.hierarchy_scope = Some(HierarchyScope::from_proxy(scope_proxy)?);
        }

        for segment_proxy in proxy.children_named("SegmentRequirement") {
            request
                .segment_requirements
                .push(SegmentRequirement::from_proxy(segment_proxy)?);
        }

        if let Some(parameters_proxy) = proxy.child("SchedulingParameters") {
            request.scheduling_parameters = Some(Self::read_parameters(parameters_proxy)?);
        }

        Ok(request)
    }

    // An open-content slot must hold element nodes; anything else has an
    // unexpected shape
    fn read_parameters(proxy: &Element) -> Result<SchedulingParameters> {
        if proxy.children().is_empty() && proxy.text().is_some() {
            return Err(Error::invalid_message(
                "Unexpected type of scheduling parameters",
            ));
        }

        Ok(SchedulingParameters::new(
            ExtraType::node_array(),
            proxy.children().to_vec(),
        ))
    }

    /// Generate an XML proxy element, reporting any extra types the
    /// serialization step must register
    pub(crate) fn to_proxy(&self) -> Result<(Element, BTreeSet<ExtraType>)> {
        let mut proxy = Element::new("ProductionRequest");
        let mut extra_types = BTreeSet::new();

        if let Some(identifier) = &self.identifier {
            proxy.add_child(identifier.to_proxy("ID"));
        }
        if let Some(scope) = &self.hierarchy_scope {
            proxy.add_child(scope.to_proxy());
        }
        for segment in &self.segment_requirements {
            proxy.add_child(segment.to_proxy()?);
        }
        if let Some(parameters) = &self.scheduling_parameters {
            let mut parameters_proxy = Element::new("SchedulingParameters");
            for node in parameters.nodes() {
                parameters_proxy.add_child(node.clone());
            }
            proxy.add_child(parameters_proxy);
            extra_types.insert(parameters.extra_type().clone());
        }

        Ok((proxy, extra_types))
    }
}
