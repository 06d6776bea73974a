//! Single-pass XML rendering of finalized documents

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::document::{Document, Element};
use crate::error::Result;

impl Document {
    /// Renders the whole tree to an XML string in one pass. No
    /// pretty-printing; element order is exactly the tree order, so the
    /// output is byte-identical across calls on an unchanged document.
    pub fn to_xml(&self) -> Result<String> {
        serialize_document(self)
    }
}

/// Serializes a finalized document to an XML string.
pub fn serialize_document(document: &Document) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, document.root())?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name);
    for (key, value) in &element.attrs {
        start.push_attribute((*key, value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name)))?;
    Ok(())
}
