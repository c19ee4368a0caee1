//! Header and contact block.

use folio_data::Person;
use folio_dom::{AttrValue, Document, Element, Node, el};

use super::{no_attrs, replace_children, set_text};
use crate::targets;

/// One contact channel: icon, link target (may be empty) and label.
struct Channel<'a> {
    icon: &'static str,
    href: String,
    label: &'a str,
}

/// Contact channels in display order.
fn channels(person: &Person) -> [Channel<'_>; 4] {
    let email = person.email();
    [
        Channel {
            icon: "\u{2709}\u{fe0f}",
            href: if email.is_empty() {
                String::new()
            } else {
                format!("mailto:{email}")
            },
            label: email,
        },
        Channel {
            icon: "\u{1f4de}",
            href: String::new(),
            label: person.phone(),
        },
        Channel {
            icon: "\u{1f393}",
            href: person.scholar().to_owned(),
            label: "Google Scholar",
        },
        Channel {
            icon: "\u{1f4bb}",
            href: person.github().to_owned(),
            label: "GitHub",
        },
    ]
}

/// Rows of the contact block.
///
/// A channel without a label is left out. A channel with a target renders
/// as a link; absolute `http(s)` targets open in a new browsing context
/// without a referrer. `mailto:` and other non-http links carry neither
/// `target` nor `rel`.
pub fn contact_rows(person: &Person) -> Vec<Element> {
    channels(person)
        .into_iter()
        .filter(|channel| !channel.label.is_empty())
        .map(|channel| {
            let value = if channel.href.is_empty() {
                Node::from(channel.label)
            } else {
                let external = channel.href.starts_with("http");
                Node::from(el(
                    "a",
                    [
                        ("href", AttrValue::from(channel.href.as_str())),
                        ("target", AttrValue::from(external.then_some("_blank"))),
                        ("rel", AttrValue::from(external.then_some("noreferrer"))),
                    ],
                    [Node::from(channel.label)],
                ))
            };
            el(
                "div",
                no_attrs(),
                [Node::from(format!("{} ", channel.icon)), value],
            )
        })
        .collect()
}

/// Populate name, tagline, intro, avatar, contact block, tag pills and
/// footer name from the person.
pub fn render_header(doc: &mut Document, person: &Person, tags: &[String]) {
    set_text(doc, targets::PERSON_NAME, person.name());
    set_text(doc, targets::PERSON_TAGLINE, person.tagline());
    set_text(doc, targets::PERSON_NAME_SECONDARY, person.name());
    set_text(doc, targets::PERSON_TAGLINE_SECONDARY, person.tagline());
    set_text(doc, targets::INTRO_TEXT, person.intro());

    if let Some(avatar) = doc.element_by_id_mut(targets::AVATAR_IMG) {
        avatar.set_attribute("src", person.avatar());
        avatar.set_attribute("alt", format!("{} photo", person.name()).trim_start());
    }

    replace_children(doc, targets::CONTACT_BLOCK, contact_rows(person));

    let pills = tags
        .iter()
        .map(|tag| el("span", [("class", AttrValue::from("pill"))], [Node::from(tag.as_str())]))
        .collect();
    replace_children(doc, targets::PILL_ROW, pills);

    set_text(doc, targets::PERSON_NAME_FOOTER, person.name());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sections::test_support::{skeleton, target};

    fn tags() -> Vec<String> {
        vec!["NLP".to_owned(), "Data Science".to_owned()]
    }

    fn ada() -> Person {
        Person {
            name: Some("Ada Lovelace".to_owned()),
            tagline: Some("Analyst".to_owned()),
            intro: Some("Hello.".to_owned()),
            email: Some("a@b.com".to_owned()),
            phone: Some("+44 1".to_owned()),
            scholar: Some("https://scholar.example/ada".to_owned()),
            github: Some("https://github.com/ada".to_owned()),
            ..Person::default()
        }
    }

    #[test]
    fn test_header_fields_populated() {
        let mut doc = skeleton();
        render_header(&mut doc, &ada(), &tags());

        for id in ["personName", "personName2", "personNameFooter"] {
            assert_eq!(target(&doc, id).text_content(), "Ada Lovelace");
        }
        assert_eq!(target(&doc, "personTagline").text_content(), "Analyst");
        assert_eq!(target(&doc, "personTagline2").text_content(), "Analyst");
        assert_eq!(target(&doc, "introText").text_content(), "Hello.");
    }

    #[test]
    fn test_avatar_defaults_and_alt_text() {
        let mut doc = skeleton();
        render_header(&mut doc, &ada(), &tags());

        let avatar = target(&doc, "avatarImg");
        assert_eq!(avatar.attribute("src"), Some("assets/img/avatar.jpg"));
        assert_eq!(avatar.attribute("alt"), Some("Ada Lovelace photo"));
    }

    #[test]
    fn test_contact_rows_in_channel_order() {
        let rows = contact_rows(&ada());
        let texts: Vec<_> = rows.iter().map(Element::text_content).collect();
        assert_eq!(
            texts,
            vec![
                "\u{2709}\u{fe0f} a@b.com",
                "\u{1f4de} +44 1",
                "\u{1f393} Google Scholar",
                "\u{1f4bb} GitHub",
            ]
        );
    }

    #[test]
    fn test_email_row_links_to_mailto_without_new_context() {
        let rows = contact_rows(&ada());
        let link = rows[0].child_elements().next().unwrap();
        assert_eq!(link.attribute("href"), Some("mailto:a@b.com"));
        assert_eq!(link.attribute("target"), None);
        assert_eq!(link.attribute("rel"), None);
    }

    #[test]
    fn test_external_links_open_in_new_context() {
        let rows = contact_rows(&ada());
        let scholar = rows[2].child_elements().next().unwrap();
        assert_eq!(scholar.attribute("href"), Some("https://scholar.example/ada"));
        assert_eq!(scholar.attribute("target"), Some("_blank"));
        assert_eq!(scholar.attribute("rel"), Some("noreferrer"));
    }

    #[test]
    fn test_phone_row_is_plain_text() {
        let rows = contact_rows(&ada());
        assert_eq!(rows[1].child_elements().count(), 0);
    }

    #[test]
    fn test_empty_email_has_no_row() {
        let person = Person {
            email: Some(String::new()),
            ..Person::default()
        };
        let rows = contact_rows(&person);
        // Scholar and GitHub labels are fixed, so they render as plain text
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !row.text_content().contains('@')));
        assert!(rows.iter().all(|row| row.child_elements().count() == 0));
    }

    #[test]
    fn test_contact_block_rebuilt_each_call() {
        let mut doc = skeleton();
        render_header(&mut doc, &ada(), &tags());
        render_header(&mut doc, &ada(), &tags());

        let contact = target(&doc, "contactBlock");
        assert_eq!(contact.child_elements().count(), 4);
        assert!(!contact.text_content().contains("stale"));
    }

    #[test]
    fn test_pills_rendered() {
        let mut doc = skeleton();
        render_header(&mut doc, &ada(), &tags());

        let pills: Vec<_> = target(&doc, "pillRow")
            .child_elements()
            .map(|pill| (pill.class_name().to_owned(), pill.text_content()))
            .collect();
        assert_eq!(
            pills,
            vec![
                ("pill".to_owned(), "NLP".to_owned()),
                ("pill".to_owned(), "Data Science".to_owned()),
            ]
        );
    }

    #[test]
    fn test_missing_person_fields_render_empty() {
        let mut doc = skeleton();
        render_header(&mut doc, &Person::default(), &tags());

        assert_eq!(target(&doc, "personName").text_content(), "");
        assert_eq!(target(&doc, "avatarImg").attribute("alt"), Some("photo"));
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let mut doc = folio_dom::Document::parse("<html><body></body></html>").unwrap();
        render_header(&mut doc, &ada(), &tags());
        assert_eq!(doc.to_html(), "<html><body></body></html>");
    }
}
