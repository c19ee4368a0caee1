//! HTML serializer for rendered documents.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::fmt::Write;

use crate::document::Document;
use crate::node::{Element, Node};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text content is emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serialize a [`Document`] to HTML.
pub(crate) struct HtmlSerializer;

impl HtmlSerializer {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn serialize(&self, doc: &Document) -> String {
        let mut out = String::with_capacity(8192);
        if let Some(doctype) = doc.doctype() {
            let _ = writeln!(out, "<!DOCTYPE {doctype}>");
        }
        serialize_element(doc.root(), &mut out);
        out
    }
}

/// Serialize a single element recursively.
fn serialize_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());
    for (key, value) in element.attributes() {
        let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }

    let raw = RAW_TEXT_ELEMENTS.contains(&element.tag());
    for child in element.children() {
        match child {
            Node::Element(child) => serialize_element(child, out),
            Node::Text(text) if raw => out.push_str(text),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }

    let _ = write!(out, "</{}>", element.tag());
}

/// Escape text content.
fn escape_text(text: &str) -> String {
    escape_html(text, false)
}

/// Escape an attribute value.
fn escape_attr(text: &str) -> String {
    escape_html(text, true)
}

fn escape_html(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::{AttrValue, el};

    #[test]
    fn test_serialize_nested_elements() {
        let card = el(
            "div",
            [("class", AttrValue::from("news-card"))],
            [
                Node::from(el("div", [("class", AttrValue::from("news-date"))], [Node::from("2024-06-01")])),
                Node::from(el("h4", [("class", AttrValue::from("news-title"))], [Node::from("B")])),
            ],
        );
        let html = Document::new(card).to_html();
        assert_eq!(
            html,
            r#"<div class="news-card"><div class="news-date">2024-06-01</div><h4 class="news-title">B</h4></div>"#
        );
    }

    #[test]
    fn test_serialize_void_elements() {
        let img = el(
            "img",
            [
                ("src", AttrValue::from("a.jpg")),
                ("loading", AttrValue::from("lazy")),
            ],
            [],
        );
        assert_eq!(Document::new(img).to_html(), r#"<img src="a.jpg" loading="lazy">"#);
    }

    #[test]
    fn test_serialize_escapes_text_and_attributes() {
        let link = el(
            "a",
            [("href", AttrValue::from("?a=1&b=\"2\""))],
            [Node::from("a < b & c > d")],
        );
        assert_eq!(
            Document::new(link).to_html(),
            r#"<a href="?a=1&amp;b=&quot;2&quot;">a &lt; b &amp; c &gt; d</a>"#
        );
    }

    #[test]
    fn test_serialize_style_content_verbatim() {
        let doc = Document::parse("<style>nav > a { color: red; }</style>").unwrap();
        assert_eq!(doc.to_html(), "<style>nav > a { color: red; }</style>");
    }

    #[test]
    fn test_serialize_doctype_and_empty_elements() {
        let doc = Document::parse("<!DOCTYPE html><html><body><div id=\"newsList\"/></body></html>")
            .unwrap();
        assert_eq!(
            doc.to_html(),
            "<!DOCTYPE html>\n<html><body><div id=\"newsList\"></div></body></html>"
        );
    }
}
