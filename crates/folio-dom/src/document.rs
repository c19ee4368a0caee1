//! Page document: optional doctype plus the root element.

use crate::node::Element;
use crate::parse::{ParseError, XhtmlParser};
use crate::serialize::HtmlSerializer;

/// A parsed page skeleton.
#[derive(Debug, Clone)]
pub struct Document {
    doctype: Option<String>,
    root: Element,
}

impl Document {
    /// Create a document from a root element, without a doctype.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            doctype: None,
            root,
        }
    }

    /// Parse a page skeleton written as well-formed XHTML.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the markup is not well-formed or has no root element.
    pub fn parse(markup: &str) -> Result<Self, ParseError> {
        XhtmlParser::new().parse(markup)
    }

    pub(crate) fn from_parts(doctype: Option<String>, root: Element) -> Self {
        Self { doctype, root }
    }

    #[must_use]
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.element_by_id(id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.element_by_id_mut(id)
    }

    /// Serialize the document to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        HtmlSerializer::new().serialize(self)
    }
}
