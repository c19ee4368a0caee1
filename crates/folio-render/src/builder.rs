//! Static site builder.
//!
//! Walks a site directory, boots every page skeleton against the site data
//! source and writes the rendered pages plus all other files to the output
//! directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_data::DataSource;
use folio_dom::{Document, ParseError};
use glob::{MatchOptions, Pattern};

use crate::boot::{Boot, BootError, BootState};
use crate::options::RenderOptions;

const PAGE_EXTENSION: &str = "html";

/// Configuration for static site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding page skeletons and static assets.
    pub source_dir: PathBuf,
    /// Directory the site is written to.
    pub output_dir: PathBuf,
    /// Glob patterns selecting page skeletons, relative to `source_dir`.
    /// `None` treats every `.html` file as a page.
    pub pages: Option<Vec<String>>,
    pub render: RenderOptions,
    /// Fixed footer year; the local clock is used when unset.
    pub year: Option<i32>,
}

impl BuildConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            pages: None,
            render: RenderOptions::default(),
            year: None,
        }
    }
}

/// Error returned by the static site builder.
///
/// A page whose data fails to load is not a build error; it is reported in
/// [`BuildReport`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid page skeleton {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid page pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),
}

impl BuildError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of booting one page.
#[derive(Debug)]
pub struct PageOutcome {
    /// Page path relative to the source directory, `/`-separated.
    pub page: String,
    pub state: BootState,
    pub error: Option<BootError>,
}

impl PageOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Vec<PageOutcome>,
    /// Number of non-page files copied.
    pub assets: usize,
}

impl BuildReport {
    /// Number of pages whose boot failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.pages.iter().filter(|page| !page.is_ok()).count()
    }
}

/// Builds a static profile site from a directory of page skeletons.
pub struct StaticSiteBuilder {
    source: Arc<dyn DataSource>,
    config: BuildConfig,
}

impl StaticSiteBuilder {
    pub fn new(source: Arc<dyn DataSource>, config: BuildConfig) -> Self {
        Self { source, config }
    }

    /// Render every page and copy every other file.
    ///
    /// Each page performs its own data load. A page whose load fails is
    /// still written, with its error box visible.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the source directory is missing, a pattern
    /// or skeleton is invalid, or a file cannot be read or written.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let source_dir = &self.config.source_dir;
        if !source_dir.is_dir() {
            return Err(BuildError::SourceNotFound(source_dir.clone()));
        }
        let patterns = self.page_patterns()?;

        let mut files = Vec::new();
        self.collect_files(source_dir, &mut files)?;
        files.sort();

        let mut report = BuildReport::default();
        for path in files {
            let relative = path.strip_prefix(source_dir).unwrap_or(path.as_path());
            let destination = self.config.output_dir.join(relative);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
            }

            let page = page_path(relative);
            if is_page(patterns.as_deref(), &page) {
                report.pages.push(self.render_page(&path, &destination, page)?);
            } else {
                fs::copy(&path, &destination).map_err(|e| BuildError::io(&path, e))?;
                report.assets += 1;
            }
        }

        tracing::info!(
            pages = report.pages.len(),
            failed = report.failed(),
            assets = report.assets,
            output = %self.config.output_dir.display(),
            "Site built"
        );
        Ok(report)
    }

    fn render_page(
        &self,
        path: &Path,
        destination: &Path,
        page: String,
    ) -> Result<PageOutcome, BuildError> {
        let markup = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        let mut doc = Document::parse(&markup).map_err(|e| BuildError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut boot =
            Boot::new(self.source.as_ref(), page.as_str()).with_options(self.config.render.clone());
        if let Some(year) = self.config.year {
            boot = boot.with_year(year);
        }
        let error = boot.run(&mut doc).err();

        fs::write(destination, doc.to_html()).map_err(|e| BuildError::io(destination, e))?;
        tracing::info!(page = %page, state = ?boot.state(), "Page written");

        Ok(PageOutcome {
            page,
            state: boot.state(),
            error,
        })
    }

    fn page_patterns(&self) -> Result<Option<Vec<Pattern>>, BuildError> {
        self.config
            .pages
            .as_ref()
            .map(|pages| pages.iter().map(|p| Pattern::new(p)).collect())
            .transpose()
            .map_err(BuildError::from)
    }

    /// Recursively collect files, skipping hidden entries and the output
    /// directory when it lives inside the source directory.
    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), BuildError> {
        let entries = fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| BuildError::io(dir, e))?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                if path != self.config.output_dir {
                    self.collect_files(&path, files)?;
                }
            } else {
                files.push(path);
            }
        }
        Ok(())
    }
}

/// `/`-separated page path relative to the source directory.
fn page_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_page(patterns: Option<&[Pattern]>, page: &str) -> bool {
    match patterns {
        Some(patterns) => {
            let options = MatchOptions {
                require_literal_separator: true,
                ..MatchOptions::default()
            };
            patterns.iter().any(|p| p.matches_with(page, options))
        }
        None => Path::new(page)
            .extension()
            .is_some_and(|ext| ext == PAGE_EXTENSION),
    }
}
