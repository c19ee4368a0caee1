//! Navigation highlighting.

use folio_dom::Document;

/// Page assumed when the path has no filename.
const DEFAULT_PAGE: &str = "index.html";

/// Section key of the home page, also used for unknown pages.
const HOME_KEY: &str = "home";

/// Attribute declaring a navigation link's section key.
const NAV_KEY_ATTR: &str = "data-nav";

/// Attribute marking the current navigation link.
const CURRENT_ATTR: &str = "aria-current";

/// Filename of a page path (`"cv/education.html"` gives `"education.html"`).
///
/// An empty path or one ending in `/` gives `index.html`.
pub fn page_filename(path: &str) -> &str {
    path.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PAGE)
}

/// Section key for a page filename; unknown pages belong to `home`.
pub fn section_key(filename: &str) -> &'static str {
    match filename {
        "education.html" => "education",
        "publications.html" => "publications",
        "employment.html" => "employment",
        _ => HOME_KEY,
    }
}

/// Mark the navigation link of the page at `page_path` as current.
///
/// Every `a` inside a `nav` first loses its marker; the ones whose
/// `data-nav` matches the page's section key then get `aria-current="true"`.
/// Returns the section key.
pub fn highlight_navigation(doc: &mut Document, page_path: &str) -> &'static str {
    let key = section_key(page_filename(page_path));
    doc.root_mut().for_each_within_mut("nav", "a", |link| {
        link.remove_attribute(CURRENT_ATTR);
        if link.attribute(NAV_KEY_ATTR) == Some(key) {
            link.set_attribute(CURRENT_ATTR, "true");
        }
    });
    tracing::debug!(page = page_path, section = key, "Navigation highlighted");
    key
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE: &str = r#"<html><body>
<nav>
  <a href="index.html" data-nav="home" aria-current="true">Home</a>
  <a href="education.html" data-nav="education">Education</a>
  <a href="employment.html" data-nav="employment">Employment</a>
  <a href="publications.html" data-nav="publications">Publications</a>
</nav>
<a id="outside" data-nav="education">Outside</a>
</body></html>"#;

    fn current_links(doc: &Document) -> Vec<String> {
        doc.root()
            .descendants_by_tag("a")
            .into_iter()
            .filter(|a| a.attribute("aria-current") == Some("true"))
            .map(|a| a.attribute("data-nav").unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn test_page_filename() {
        assert_eq!(page_filename("education.html"), "education.html");
        assert_eq!(page_filename("/site/publications.html"), "publications.html");
        assert_eq!(page_filename("/site/"), "index.html");
        assert_eq!(page_filename(""), "index.html");
    }

    #[test]
    fn test_section_key() {
        assert_eq!(section_key("index.html"), "home");
        assert_eq!(section_key("education.html"), "education");
        assert_eq!(section_key("employment.html"), "employment");
        assert_eq!(section_key("publications.html"), "publications");
        assert_eq!(section_key("about.html"), "home");
    }

    #[test]
    fn test_highlight_marks_matching_link_and_clears_stale() {
        let mut doc = Document::parse(PAGE).unwrap();

        let key = highlight_navigation(&mut doc, "education.html");

        assert_eq!(key, "education");
        assert_eq!(current_links(&doc), vec!["education"]);
        assert_eq!(doc.element_by_id("outside").unwrap().attribute("aria-current"), None);
    }

    #[test]
    fn test_highlight_unknown_page_defaults_to_home() {
        let mut doc = Document::parse(PAGE).unwrap();
        highlight_navigation(&mut doc, "/talks.html");
        assert_eq!(current_links(&doc), vec!["home"]);
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let mut doc = Document::parse(PAGE).unwrap();
        highlight_navigation(&mut doc, "publications.html");
        let first = doc.to_html();
        highlight_navigation(&mut doc, "publications.html");
        assert_eq!(doc.to_html(), first);
    }
}
