//! schedmsg: a typed object model for B2MML production-scheduling messages
//!
//! This library maps a subset of the B2MML `ProcessProductionSchedule`
//! message to domain entities and back. The root entity converts to and
//! from XML bytes through a cached serializer layer; everything below it
//! is plain data with structural recursion.
//!
//! # Example
//!
//! ```
//! use schedmsg::entities::ProcessProductionSchedule;
//! use schedmsg::SerializerCache;
//!
//! let cache = SerializerCache::new();
//! let message = ProcessProductionSchedule::new();
//!
//! let bytes = message.to_xml_bytes(&cache)?;
//! let read_back = ProcessProductionSchedule::from_xml_bytes(&cache, &bytes)?;
//! assert_eq!(message.creation_date_time(), read_back.creation_date_time());
//! # Ok::<(), schedmsg::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod datetime;
pub mod entities;
pub mod error;
pub mod xml;

pub use datetime::{TimeKind, XsdDateTime};
pub use error::{Error, Result};
pub use xml::{Element, ExtraType, SerializerCache, XmlSerializer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Namespace of the message schema
pub const B2MML_NAMESPACE: &str = "http://www.mesa.org/xml/B2MML-V0600";

/// Namespace of the schema extensions used for open-content payloads
pub const B2MML_EXTENSIONS_NAMESPACE: &str = "http://www.mesa.org/xml/B2MML-V0600-Extensions";
