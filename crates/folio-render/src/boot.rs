//! One-shot boot sequence for a single page view.

use chrono::Datelike;
use folio_data::{DataSource, LoadError, load_site_data};
use folio_dom::Document;

use crate::nav::highlight_navigation;
use crate::options::RenderOptions;
use crate::sections::{render_sections, set_text};
use crate::targets;

/// Progress of a [`Boot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    NotStarted,
    Loading,
    Rendering,
    Done,
    Failed,
}

/// Error returned by [`Boot::run`].
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    /// The site data document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `run` was called on a boot that already ran.
    #[error("Boot sequence already ran")]
    AlreadyRan,
}

/// Boot sequence for one page view.
///
/// Highlights navigation, loads the site data document once, runs every
/// section renderer and stamps the footer year. If loading fails the
/// remaining steps are skipped and the page's error box is made visible.
///
/// # Example
///
/// ```ignore
/// let source = FileSource::new("site/data/site.json");
/// let mut boot = Boot::new(&source, "index.html");
/// boot.run(&mut doc)?;
/// assert_eq!(boot.state(), BootState::Done);
/// ```
pub struct Boot<'a> {
    source: &'a dyn DataSource,
    page_path: String,
    options: RenderOptions,
    year: Option<i32>,
    state: BootState,
}

impl<'a> Boot<'a> {
    /// Create a boot for the page at `page_path` with default options.
    pub fn new(source: &'a dyn DataSource, page_path: impl Into<String>) -> Self {
        Self {
            source,
            page_path: page_path.into(),
            options: RenderOptions::default(),
            year: None,
            state: BootState::NotStarted,
        }
    }

    /// Replace the render options.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a fixed footer year instead of the local clock.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn state(&self) -> BootState {
        self.state
    }

    /// Run the sequence against `doc`.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::Load`] if the data document cannot be loaded and
    /// [`BootError::AlreadyRan`] if this boot has run before. The latter
    /// leaves `doc` untouched.
    pub fn run(&mut self, doc: &mut Document) -> Result<(), BootError> {
        if self.state != BootState::NotStarted {
            return Err(BootError::AlreadyRan);
        }

        highlight_navigation(doc, &self.page_path);

        self.state = BootState::Loading;
        let data = match load_site_data(self.source) {
            Ok(data) => data,
            Err(e) => {
                self.state = BootState::Failed;
                tracing::error!(
                    page = %self.page_path,
                    location = e.location(),
                    error = %e,
                    "Failed to load site data"
                );
                if let Some(error_box) = doc.element_by_id_mut(targets::ERROR_BOX) {
                    error_box.set_style_property("display", "block");
                }
                return Err(e.into());
            }
        };

        self.state = BootState::Rendering;
        render_sections(doc, &data, &self.options);

        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        set_text(doc, targets::YEAR, &year.to_string());

        self.state = BootState::Done;
        tracing::debug!(page = %self.page_path, "Page rendered");
        Ok(())
    }
}
