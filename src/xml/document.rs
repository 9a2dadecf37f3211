//! Owned XML element tree
//!
//! This module provides the generic tree representation the entity layer
//! reads from and writes to, together with the byte-level conversions on
//! top of quick-xml.

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// XML element in the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name as written, possibly prefixed
    name: String,
    /// Element attributes in document order
    attributes: IndexMap<String, String>,
    /// Text content (if any)
    text: Option<String>,
    /// Child elements
    children: Vec<Element>,
}

impl Element {
    /// Create a new element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a new element holding only text content
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.text = Some(text.into());
        element
    }

    /// Get the element name as written
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the local name of the element, without any namespace prefix
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Set an attribute value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get text content
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// All child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Find the first child element with the given local name
    pub fn child(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.local_name() == local_name)
    }

    /// Iterate over child elements with the given local name
    pub fn children_named<'a>(
        &'a self,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |e| e.local_name() == local_name)
    }

    /// Parse an XML document from bytes into its root element
    pub fn from_bytes(xml: &[u8]) -> Result<Element> {
        let mut reader = Reader::from_reader(xml);
        reader.trim_text(true);

        let mut element_stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    element_stack.push(Self::read_element(&e)?);
                }
                Ok(Event::End(_)) => {
                    if let Some(current) = element_stack.pop() {
                        match element_stack.last_mut() {
                            Some(parent) => parent.add_child(current),
                            None => root = Some(current),
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    let element = Self::read_element(&e)?;
                    match element_stack.last_mut() {
                        Some(parent) => parent.add_child(element),
                        None => root = Some(element),
                    }
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::xml(format!("invalid text content: {}", e)))?;
                    if let Some(current) = element_stack.last_mut() {
                        match &mut current.text {
                            Some(existing) => existing.push_str(&text),
                            None => current.text = Some(text.into_owned()),
                        }
                    }
                }
                Ok(Event::CData(t)) => {
                    let text = String::from_utf8_lossy(t.as_ref()).into_owned();
                    if let Some(current) = element_stack.last_mut() {
                        match &mut current.text {
                            Some(existing) => existing.push_str(&text),
                            None => current.text = Some(text),
                        }
                    }
                }
                Ok(Event::Eof) => break,
                // Declarations, comments and processing instructions carry
                // no message content
                Ok(_) => {}
                Err(e) => {
                    return Err(Error::xml(format!(
                        "parse error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
            }
            buf.clear();
        }

        root.ok_or_else(|| Error::xml("document has no root element"))
    }

    fn read_element(start: &BytesStart<'_>) -> Result<Element> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut element = Element::new(name);

        for attribute in start.attributes() {
            let attribute =
                attribute.map_err(|e| Error::xml(format!("invalid attribute: {}", e)))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| Error::xml(format!("invalid attribute value: {}", e)))?;
            element.set_attribute(key, value.into_owned());
        }

        Ok(element)
    }

    /// Serialize this element as a complete UTF-8 document
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| Error::xml(e.to_string()))?;
        self.write_into(&mut writer)?;
        Ok(writer.into_inner())
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| Error::xml(e.to_string()))?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::xml(e.to_string()))?;

        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| Error::xml(e.to_string()))?;
        }

        for child in &self.children {
            child.write_into(writer)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(|e| Error::xml(e.to_string()))?;
        Ok(())
    }
}
