//! Section renderers.
//!
//! Each renderer reads one slice of [`SiteData`] and fully replaces the
//! contents of its target containers. Renderers do not depend on each
//! other's output; a missing target is skipped.

mod education;
mod employment;
mod header;
mod news;
mod publications;

use folio_data::SiteData;
use folio_dom::{AttrValue, Document, Element, Node, el};

use crate::options::RenderOptions;

pub use education::render_education;
pub use employment::render_employment;
pub use header::{contact_rows, render_header};
pub use news::{NO_NEWS_MESSAGE, news_card, render_news, sorted_news};
pub use publications::{publication_block, render_publications, sorted_publications};

/// Run every section renderer against `doc`.
pub fn render_sections(doc: &mut Document, data: &SiteData, options: &RenderOptions) {
    render_header(doc, &data.person, &options.tags);
    render_news(doc, &data.news);
    render_education(doc, &data.education);
    render_employment(doc, &data.employment);
    render_publications(doc, &data.publications, &data.person, &options.doi_resolver);
}

/// Set the text of the element with `id`, if the page has one.
pub(crate) fn set_text(doc: &mut Document, id: &str, text: &str) {
    if let Some(target) = doc.element_by_id_mut(id) {
        target.set_text_content(text);
    }
}

/// Replace the children of the element with `id`, if the page has one.
pub(crate) fn replace_children(doc: &mut Document, id: &str, children: Vec<Element>) {
    if let Some(target) = doc.element_by_id_mut(id) {
        target.clear_children();
        for child in children {
            target.append(child);
        }
    }
}

/// `<tag class="...">text</tag>`
pub(crate) fn text_el(tag: &str, class: &str, text: &str) -> Element {
    el(tag, [("class", AttrValue::from(class))], [Node::from(text)])
}

/// Bulleted list, or `None` for an empty sequence.
pub(crate) fn bullet_list(items: &[String]) -> Option<Element> {
    if items.is_empty() {
        return None;
    }
    let rows = items
        .iter()
        .map(|item| Node::from(el("li", no_attrs(), [Node::from(item.as_str())])));
    Some(el("ul", no_attrs(), rows))
}

/// External link opening in a new browsing context.
pub(crate) fn external_link(class: &str, href: &str, label: &str) -> Element {
    el(
        "a",
        [
            ("class", AttrValue::from(class)),
            ("href", AttrValue::from(href)),
            ("target", AttrValue::from("_blank")),
            ("rel", AttrValue::from("noreferrer")),
        ],
        [Node::from(label)],
    )
}

pub(crate) fn no_attrs() -> [(&'static str, AttrValue); 0] {
    []
}
