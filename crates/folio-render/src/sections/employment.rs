//! Employment history.

use folio_data::EmploymentEntry;
use folio_dom::{AttrValue, Document, Element, Node, el};

use super::{bullet_list, no_attrs, replace_children, text_el};
use crate::targets;

fn employment_row(job: &EmploymentEntry) -> Element {
    let mut what = vec![
        Node::from(el("b", no_attrs(), [Node::from(job.title())])),
        Node::from(text_el("div", "meta", job.place())),
    ];
    what.extend(bullet_list(&job.bullets).map(Node::from));

    el(
        "div",
        [("class", AttrValue::from("item"))],
        [
            Node::from(text_el("div", "when", job.range())),
            Node::from(el("div", [("class", AttrValue::from("what"))], what)),
        ],
    )
}

/// Replace the employment list with one row per job, in input order.
pub fn render_employment(doc: &mut Document, jobs: &[EmploymentEntry]) {
    replace_children(
        doc,
        targets::EMPLOYMENT_LIST,
        jobs.iter().map(employment_row).collect(),
    );
}
