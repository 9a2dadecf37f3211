//! Generic XML tree model and serialization engine
//!
//! The entity layer binds against this module only: an owned element tree
//! (name, attributes, children, text) plus a serializer that turns trees
//! into bytes and back. Schema knowledge lives in the entities, not here.

pub mod document;
pub mod serializer;

pub use document::Element;
pub use serializer::{ExtraType, SerializerCache, XmlSerializer};
