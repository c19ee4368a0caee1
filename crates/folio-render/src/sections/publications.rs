//! Publication list.

use std::cmp::Reverse;

use folio_data::{Person, Publication};
use folio_dom::{AttrValue, Document, Element, Node, el};

use super::{external_link, text_el};
use crate::targets;

/// Link target used when the person has no scholar profile.
const PLACEHOLDER_HREF: &str = "#";

/// Publications newest first by numeric year.
///
/// Missing or unparsable years count as 0 and so sort after every dated
/// entry. The sort is stable: equal years keep their input order.
pub fn sorted_publications(publications: &[Publication]) -> Vec<&Publication> {
    let mut sorted: Vec<&Publication> = publications.iter().collect();
    sorted.sort_by_key(|publication| Reverse(publication.year_key()));
    sorted
}

/// One publication block: title, `venue · year` line and links row.
pub fn publication_block(publication: &Publication, doi_resolver: &str) -> Element {
    let mut links = Vec::new();
    if let Some(pdf) = publication.links.pdf() {
        links.push(Node::from(external_link("taglink", pdf, "\u{1f4c4} PDF")));
    }
    if let Some(doi) = publication.doi() {
        let href = format!("{doi_resolver}{doi}");
        links.push(Node::from(external_link("taglink", &href, "\u{1f517} DOI")));
    }
    if let Some(code) = publication.links.code() {
        links.push(Node::from(external_link("taglink", code, "\u{1f4bb} Code")));
    }

    let venue = format!("{} \u{b7} {}", publication.venue(), publication.year_label());
    el(
        "div",
        [("class", AttrValue::from("pub"))],
        [
            Node::from(text_el("p", "title", publication.title())),
            Node::from(text_el("p", "venue", &venue)),
            Node::from(el("div", [("class", AttrValue::from("links"))], links)),
        ],
    )
}

/// Replace the publication list and point the scholar link at the
/// person's profile.
pub fn render_publications(
    doc: &mut Document,
    publications: &[Publication],
    person: &Person,
    doi_resolver: &str,
) {
    if let Some(root) = doc.element_by_id_mut(targets::PUBLICATION_LIST) {
        root.clear_children();
        for publication in sorted_publications(publications) {
            root.append(publication_block(publication, doi_resolver));
        }
    }

    if let Some(link) = doc.element_by_id_mut(targets::SCHOLAR_LINK) {
        let scholar = person.scholar();
        link.set_attribute(
            "href",
            if scholar.is_empty() {
                PLACEHOLDER_HREF
            } else {
                scholar
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use folio_data::{PublicationLinks, Year};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sections::test_support::{skeleton, target};

    const RESOLVER: &str = "https://doi.org/";

    fn publication(title: &str, year: Option<Year>) -> Publication {
        Publication {
            title: Some(title.to_owned()),
            year,
            ..Publication::default()
        }
    }

    fn text_year(year: &str) -> Option<Year> {
        Some(Year::Text(year.to_owned()))
    }

    fn titles(publications: &[Publication]) -> Vec<&str> {
        sorted_publications(publications)
            .into_iter()
            .map(Publication::title)
            .collect()
    }

    fn link_labels(block: &Element) -> Vec<String> {
        block
            .descendants_by_tag("a")
            .into_iter()
            .map(Element::text_content)
            .collect()
    }

    #[test]
    fn test_newer_year_first() {
        let publications = vec![
            publication("old", text_year("2019")),
            publication("new", text_year("2020")),
        ];
        assert_eq!(titles(&publications), vec!["new", "old"]);
    }

    #[test]
    fn test_undated_sort_last_in_input_order() {
        let publications = vec![
            publication("missing", None),
            publication("2018", Some(Year::Number(2018.0))),
            publication("garbage", text_year("forthcoming")),
            publication("2021", text_year("2021")),
        ];
        assert_eq!(
            titles(&publications),
            vec!["2021", "2018", "missing", "garbage"]
        );
    }

    #[test]
    fn test_venue_line_keeps_separator() {
        let block = publication_block(&Publication::default(), RESOLVER);
        let venue = block.child_elements().nth(1).unwrap();
        assert_eq!(venue.class_name(), "venue");
        assert_eq!(venue.text_content(), " \u{b7} ");

        let dated = Publication {
            venue: Some("ACL".to_owned()),
            year: Some(Year::Number(2023.0)),
            ..Publication::default()
        };
        let block = publication_block(&dated, RESOLVER);
        assert_eq!(
            block.child_elements().nth(1).unwrap().text_content(),
            "ACL \u{b7} 2023"
        );
    }

    #[test]
    fn test_no_doi_no_anchor() {
        let block = publication_block(&publication("P", None), RESOLVER);
        assert!(block.descendants_by_tag("a").is_empty());
        let links = block.child_elements().nth(2).unwrap();
        assert_eq!(links.class_name(), "links");
    }

    #[test]
    fn test_doi_anchor_uses_resolver() {
        let with_doi = Publication {
            doi: Some("10.1/xyz".to_owned()),
            ..Publication::default()
        };
        let block = publication_block(&with_doi, RESOLVER);
        let anchors = block.descendants_by_tag("a");
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].attribute("href"), Some("https://doi.org/10.1/xyz"));
        assert_eq!(anchors[0].attribute("rel"), Some("noreferrer"));
    }

    #[test]
    fn test_links_in_fixed_order() {
        let full = Publication {
            doi: Some("10.1/xyz".to_owned()),
            links: PublicationLinks {
                pdf: Some("paper.pdf".to_owned()),
                code: Some("https://github.com/x/y".to_owned()),
            },
            ..Publication::default()
        };
        assert_eq!(
            link_labels(&publication_block(&full, RESOLVER)),
            vec!["\u{1f4c4} PDF", "\u{1f517} DOI", "\u{1f4bb} Code"]
        );

        let code_only = Publication {
            links: PublicationLinks {
                pdf: None,
                code: Some("https://github.com/x/y".to_owned()),
            },
            ..Publication::default()
        };
        assert_eq!(
            link_labels(&publication_block(&code_only, RESOLVER)),
            vec!["\u{1f4bb} Code"]
        );
    }

    #[test]
    fn test_scholar_link_target() {
        let mut doc = skeleton();
        let person = Person {
            scholar: Some("https://scholar.example/ada".to_owned()),
            ..Person::default()
        };
        render_publications(&mut doc, &[], &person, RESOLVER);
        assert_eq!(
            target(&doc, "scholarLink").attribute("href"),
            Some("https://scholar.example/ada")
        );

        render_publications(&mut doc, &[], &Person::default(), RESOLVER);
        assert_eq!(target(&doc, "scholarLink").attribute("href"), Some("#"));
    }

    #[test]
    fn test_rerender_replaces_blocks() {
        let mut doc = skeleton();
        let person = Person::default();
        render_publications(
            &mut doc,
            &[publication("a", None), publication("b", None)],
            &person,
            RESOLVER,
        );
        render_publications(&mut doc, &[publication("c", None)], &person, RESOLVER);

        let list = target(&doc, "pubList");
        assert_eq!(list.child_elements().count(), 1);
        assert_eq!(list.descendants_by_tag("p")[0].text_content(), "c");
    }
}
