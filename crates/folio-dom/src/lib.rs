//! Element tree for Folio page rendering.
//!
//! This crate stands in for the host page: a page skeleton is parsed from
//! well-formed XHTML into a [`Document`], renderers locate their target
//! containers by id and rebuild them with [`el`], and the result is
//! serialized back to HTML.
//!
//! # Example
//!
//! ```
//! use folio_dom::{AttrValue, Document, Node, el};
//!
//! let mut doc = Document::parse(r#"<html><body><div id="news"></div></body></html>"#).unwrap();
//! let card = el("div", [("class", AttrValue::from("news-card"))], [Node::from("Hello")]);
//! if let Some(news) = doc.element_by_id_mut("news") {
//!     news.clear_children();
//!     news.append(card);
//! }
//! assert!(doc.to_html().contains(r#"<div class="news-card">Hello</div>"#));
//! ```

mod document;
mod node;
mod parse;
mod serialize;

pub use document::Document;
pub use node::{AttrValue, Element, Event, Listener, Node, el};
pub use parse::ParseError;
