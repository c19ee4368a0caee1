//! XHTML page skeleton parser.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::document::Document;
use crate::node::Element;

/// Error while parsing a page skeleton.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parse error")]
    Xml(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// The markup contains no element.
    #[error("page skeleton has no root element")]
    MissingRoot,
}

/// Parses well-formed XHTML into a [`Document`].
pub(crate) struct XhtmlParser;

impl XhtmlParser {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn parse(&self, markup: &str) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut doctype = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::DocType(e) => {
                    doctype = Some(reader.decoder().decode(&e)?.trim().to_owned());
                }
                Event::Start(e) => {
                    let mut root = self.start_element(&reader, &e)?;
                    let tag = root.tag().to_owned();
                    self.parse_children(&mut reader, &mut root, &tag)?;
                    return Ok(Document::from_parts(doctype, root));
                }
                Event::Empty(e) => {
                    let root = self.start_element(&reader, &e)?;
                    return Ok(Document::from_parts(doctype, root));
                }
                Event::Eof => return Err(ParseError::MissingRoot),
                // Prolog text, comments and processing instructions
                _ => {}
            }
            buf.clear();
        }
    }

    fn parse_children<R: BufRead>(
        &self,
        reader: &mut Reader<R>,
        parent: &mut Element,
        parent_tag: &str,
    ) -> Result<(), ParseError> {
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let mut child = self.start_element(reader, &e)?;
                    let tag = child.tag().to_owned();
                    self.parse_children(reader, &mut child, &tag)?;
                    parent.append(child);
                }
                Event::Empty(e) => {
                    let child = self.start_element(reader, &e)?;
                    parent.append(child);
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?.into_owned();
                    append_text(parent, &text);
                }
                Event::GeneralRef(e) => {
                    let entity = reader.decoder().decode(&e)?.into_owned();
                    append_text(parent, &decode_entity(&entity));
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e).into_owned();
                    append_text(parent, &text);
                }
                Event::End(e) => {
                    let end_name = e.name();
                    let end_tag = reader.decoder().decode(end_name.as_ref())?;
                    if end_tag == parent_tag {
                        return Ok(());
                    }
                }
                Event::Eof => return Ok(()),
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }
    }

    fn start_element<R: BufRead>(
        &self,
        reader: &Reader<R>,
        e: &BytesStart,
    ) -> Result<Element, ParseError> {
        let name = e.name();
        let tag = reader.decoder().decode(name.as_ref())?;
        let mut element = Element::new(tag);

        for attr in e.attributes().flatten() {
            let key = reader.decoder().decode(attr.key.as_ref())?;

            // XHTML namespace declarations are not page attributes
            if key.starts_with("xmlns") {
                continue;
            }

            let value = attr.unescape_value().map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                std::borrow::Cow::into_owned,
            );
            element.set_attribute(&key, value);
        }
        Ok(element)
    }
}

/// Append text, merging with a trailing text node.
fn append_text(parent: &mut Element, text: &str) {
    if !text.is_empty() {
        parent.push_text(text);
    }
}

/// Decode an entity reference, including the HTML names page skeletons use.
fn decode_entity(entity: &str) -> String {
    let named = match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        "nbsp" => Some('\u{00a0}'),
        "copy" => Some('\u{00a9}'),
        "reg" => Some('\u{00ae}'),
        "middot" => Some('\u{00b7}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ldquo" => Some('\u{201c}'),
        "rdquo" => Some('\u{201d}'),
        "hellip" => Some('\u{2026}'),
        _ => None,
    };
    if let Some(c) = named {
        return c.to_string();
    }

    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => numeric.parse::<u32>().ok(),
        };
        if let Some(c) = code.and_then(char::from_u32) {
            return c.to_string();
        }
    }

    // Unknown entity - keep the reference text
    format!("&{entity};")
}
