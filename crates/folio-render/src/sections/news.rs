//! News feed.

use folio_data::NewsItem;
use folio_dom::{AttrValue, Document, Element, Node, el};

use super::{external_link, text_el};
use crate::targets;

/// Text shown instead of cards when there is no news.
pub const NO_NEWS_MESSAGE: &str = "No updates yet.";

/// News items newest first.
///
/// Dates compare as plain strings, so ISO 8601 dates order correctly and a
/// missing date sorts last. Items with equal dates keep their input order.
pub fn sorted_news(items: &[NewsItem]) -> Vec<&NewsItem> {
    let mut sorted: Vec<&NewsItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted
}

/// One news card: date label plus title, text, optional figure and
/// optional "Details" link.
pub fn news_card(item: &NewsItem) -> Element {
    let title = item.title();
    let mut main = vec![
        Node::from(text_el("h4", "news-title", title)),
        Node::from(text_el("p", "news-text", item.text())),
    ];

    if let Some(image) = item.image() {
        let img = el(
            "img",
            [
                ("class", AttrValue::from("news-img")),
                ("src", AttrValue::from(image)),
                ("alt", AttrValue::from(item.image_alt())),
                ("loading", AttrValue::from("lazy")),
            ],
            [],
        );
        main.push(Node::from(el(
            "div",
            [("class", AttrValue::from("news-figure"))],
            [Node::from(img)],
        )));
    }

    if let Some(link) = item.link() {
        main.push(Node::from(el(
            "div",
            [("class", AttrValue::from("news-actions"))],
            [Node::from(external_link("taglink", link, "\u{2197} Details"))],
        )));
    }

    el(
        "div",
        [("class", AttrValue::from("news-card"))],
        [
            Node::from(text_el("div", "news-date", item.date())),
            Node::from(el("div", [("class", AttrValue::from("news-main"))], main)),
        ],
    )
}

/// Replace the news list with one card per item, newest first, or with a
/// placeholder message when there are no items.
pub fn render_news(doc: &mut Document, items: &[NewsItem]) {
    let Some(root) = doc.element_by_id_mut(targets::NEWS_LIST) else {
        return;
    };
    root.clear_children();

    if items.is_empty() {
        root.set_text_content(NO_NEWS_MESSAGE);
        return;
    }

    for item in sorted_news(items) {
        root.append(news_card(item));
    }
}
