//! Production schedules

use std::collections::BTreeSet;

use crate::entities::production_request::ProductionRequest;
use crate::error::Result;
use crate::xml::{Element, ExtraType};

/// Represents a production schedule, a collection of production requests
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductionSchedule {
    /// Enclosed production requests
    pub production_requests: Vec<ProductionRequest>,
}

impl ProductionSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from an XML proxy element
    pub(crate) fn from_proxy(proxy: &Element) -> Result<Self> {
        let mut production_requests = Vec::new();
        for request_proxy in proxy.children_named("ProductionRequest") {
            production_requests.push(ProductionRequest::from_proxy(request_proxy)?);
        }
        Ok(Self {
            production_requests,
        })
    }

    /// Generate an XML proxy element and the union of extra types the
    /// enclosed requests need registered
    pub(crate) fn to_proxy(&self) -> Result<(Element, BTreeSet<ExtraType>)> {
        let mut proxy = Element::new("ProductionSchedule");
        let mut extra_types = BTreeSet::new();

        for request in &self.production_requests {
            let (request_proxy, request_extras) = request.to_proxy()?;
            proxy.add_child(request_proxy);
            extra_types.extend(request_extras);
        }

        Ok((proxy, extra_types))
    }
}
