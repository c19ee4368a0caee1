//! Education timeline.

use folio_data::EducationEntry;
use folio_dom::{AttrValue, Document, Element, Node, el};

use super::{bullet_list, replace_children, text_el};
use crate::targets;

fn education_row(entry: &EducationEntry) -> Element {
    let mut what = vec![
        Node::from(el("b", super::no_attrs(), [Node::from(entry.degree())])),
        Node::from(text_el("div", "meta", entry.place())),
    ];
    what.extend(bullet_list(&entry.details).map(Node::from));

    let grid = el(
        "div",
        [("class", AttrValue::from("edu-grid"))],
        [
            Node::from(text_el("div", "edu-when", entry.range())),
            Node::from(el("div", [("class", AttrValue::from("edu-what"))], what)),
        ],
    );
    el("div", [("class", AttrValue::from("edu-item"))], [Node::from(grid)])
}

/// Replace the education list with one row per entry, in input order.
pub fn render_education(doc: &mut Document, entries: &[EducationEntry]) {
    replace_children(
        doc,
        targets::EDUCATION_LIST,
        entries.iter().map(education_row).collect(),
    );
}
