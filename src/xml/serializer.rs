//! Message serializer objects and their process-wide cache
//!
//! A serializer is configured for one root type plus the set of extra
//! payload types that may appear in open-content slots; it owns the
//! namespace declarations the document needs. Serializer construction is
//! cached per type-set, guarded by a mutual-exclusion lock.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::xml::document::Element;
use crate::{B2MML_EXTENSIONS_NAMESPACE, B2MML_NAMESPACE};

/// Describes a payload type that may appear in an open-content slot
///
/// The serializer must know every such type upfront, because each one
/// contributes a namespace declaration to the document root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtraType {
    name: String,
    prefix: String,
    namespace: String,
}

impl ExtraType {
    /// Create a descriptor for a caller-defined payload type
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            namespace: namespace.into(),
        }
    }

    /// Descriptor for a raw node-array payload, as produced by reading an
    /// open-content slot back from the wire
    pub fn node_array() -> Self {
        Self::new("XmlNodeArray", "ext", B2MML_EXTENSIONS_NAMESPACE)
    }

    /// Type name used in cache keys
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace prefix declared at the document root
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Namespace URI declared at the document root
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Converts between proxy trees and XML bytes for one root type
#[derive(Debug)]
pub struct XmlSerializer {
    root_type: String,
    extra_types: BTreeSet<ExtraType>,
}

impl XmlSerializer {
    fn new(root_type: &str, extra_types: &BTreeSet<ExtraType>) -> Self {
        Self {
            root_type: root_type.to_string(),
            extra_types: extra_types.clone(),
        }
    }

    /// Serialize a proxy tree to a UTF-8 document.
    ///
    /// The root element receives the message namespace plus one
    /// declaration per registered extra type.
    pub fn serialize(&self, root: &Element) -> Result<Vec<u8>> {
        let mut decorated = root.clone();
        decorated.set_attribute("xmlns", B2MML_NAMESPACE);
        for extra in &self.extra_types {
            decorated.set_attribute(format!("xmlns:{}", extra.prefix()), extra.namespace());
        }
        decorated.to_bytes()
    }

    /// Deserialize a document, checking that the root matches this
    /// serializer's root type.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<Element> {
        let root = Element::from_bytes(bytes)?;
        if root.local_name() != self.root_type {
            return Err(Error::xml(format!(
                "unexpected root element \"{}\", expected \"{}\"",
                root.local_name(),
                self.root_type
            )));
        }
        Ok(root)
    }
}

/// Process-wide cache of serializer objects
///
/// Construct once and pass by reference to wherever serialization or
/// deserialization occurs. Concurrent lookups are safe; a not-yet-cached
/// serializer is constructed while holding the lock, which blocks other
/// lookups but avoids duplicate construction.
#[derive(Debug, Default)]
pub struct SerializerCache {
    cache: Mutex<HashMap<String, Arc<XmlSerializer>>>,
}

impl SerializerCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or construct the serializer for a root type and extra-type
    /// set.
    pub fn get(&self, root_type: &str, extra_types: &BTreeSet<ExtraType>) -> Arc<XmlSerializer> {
        let key = Self::build_key(root_type, extra_types);

        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        cache
            .entry(key)
            .or_insert_with(|| Arc::new(XmlSerializer::new(root_type, extra_types)))
            .clone()
    }

    // The key must not depend on the order the extra types were collected
    // in, so the names are sorted before concatenation.
    fn build_key(root_type: &str, extra_types: &BTreeSet<ExtraType>) -> String {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        names.insert(root_type);
        for extra in extra_types {
            names.insert(extra.name());
        }

        let mut key = String::new();
        for name in names {
            key.push_str(name);
            key.push(';');
        }
        key
    }
}
