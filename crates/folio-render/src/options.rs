//! Render options shared by the section renderers.

/// Topical tags shown as pills when none are configured.
const DEFAULT_TAGS: &[&str] = &["NLP", "Machine Learning", "Deep Learning", "Data Science"];

/// Canonical DOI resolver.
const DEFAULT_DOI_RESOLVER: &str = "https://doi.org/";

/// Settings the renderers take from configuration rather than from the data document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tags rendered as pill badges in the header.
    pub tags: Vec<String>,
    /// Prefix turning a bare DOI identifier into a link.
    pub doi_resolver: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|&tag| tag.to_owned()).collect(),
            doi_resolver: DEFAULT_DOI_RESOLVER.to_owned(),
        }
    }
}
