//! Document tree model shared by the GVX/CVX/LVX format family

/// Document format variant.
///
/// All variants share the same envelope (source data, project information,
/// reference system); only the body sections differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// GNSS Vector Exchange
    Gvx,
    /// Classical Vector Exchange
    Cvx,
    /// Level Vector Exchange
    Lvx,
}

impl Format {
    /// Three-letter tag used as the root element name.
    pub fn code(self) -> &'static str {
        match self {
            Format::Gvx => "GVX",
            Format::Cvx => "CVX",
            Format::Lvx => "LVX",
        }
    }

    /// Schema version emitted as the root VERSION attribute.
    pub fn version(self) -> &'static str {
        "1.0"
    }
}

/// A named subtree of the document: attributes, optional text, ordered
/// children. Element and attribute names are schema constants, so they are
/// static strings; sibling order is the order of insertion and is part of
/// the output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes, text, or children.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Creates a leaf element carrying `text` when supplied. An absent value
    /// renders as an empty element, which is how optional fields are omitted.
    pub fn leaf(name: &'static str, text: Option<String>) -> Self {
        Self {
            text,
            ..Self::new(name)
        }
    }

    /// Appends an attribute.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        self.attrs.push((name, value.into()));
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Mutable access to the first direct child with the given name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Sets the text of the named direct child, if present.
    pub(crate) fn set_child_text(&mut self, name: &str, text: String) {
        if let Some(child) = self.child_mut(name) {
            child.text = Some(text);
        }
    }
}

/// A GVX-family document: the root element carries the format code as its
/// name and the schema version as an attribute. One document exists per
/// builder instance and is consumed exactly once by serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Creates an empty document for the given format variant.
    pub fn new(format: Format) -> Self {
        let mut root = Element::new(format.code());
        root.set_attr("VERSION", format.version());
        Self { root }
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_codes() {
        assert_eq!(Format::Gvx.code(), "GVX");
        assert_eq!(Format::Cvx.code(), "CVX");
        assert_eq!(Format::Lvx.code(), "LVX");
        assert_eq!(Format::Gvx.version(), "1.0");
    }

    #[test]
    fn test_document_root_carries_version_attribute() {
        let doc = Document::new(Format::Gvx);
        assert_eq!(doc.root().name, "GVX");
        assert_eq!(doc.root().attrs, vec![("VERSION", "1.0".to_string())]);
    }

    #[test]
    fn test_child_lookup_preserves_insertion_order() {
        let mut parent = Element::new("PARENT");
        parent.push(Element::leaf("A", Some("first".into())));
        parent.push(Element::leaf("B", None));
        parent.push(Element::leaf("A", Some("second".into())));

        assert_eq!(parent.children.len(), 3);
        assert_eq!(parent.child("A").unwrap().text.as_deref(), Some("first"));
        assert!(parent.child("B").unwrap().text.is_none());
        assert!(parent.child("MISSING").is_none());
    }
}
