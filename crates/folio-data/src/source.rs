//! Data source trait and load errors.

use crate::model::SiteData;

/// Error loading the site data document.
///
/// This is the only failure the render pipeline models: the document is
/// unreachable, the transport reported a non-success status, or the body is
/// not valid JSON.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Transport answered with a non-success status.
    #[error("Failed to load {location}: HTTP {status}")]
    Status {
        /// Where the document was requested from.
        location: String,
        /// HTTP status code.
        status: u16,
    },

    /// Resource could not be reached or read.
    #[error("Failed to load {location}")]
    Unavailable {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Body is not a valid site data document.
    #[error("Failed to parse {location}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Create an unavailable error from any underlying error.
    pub fn unavailable(
        location: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unavailable {
            location: location.into(),
            source: Box::new(source),
        }
    }

    /// Location of the document that failed to load.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Status { location, .. }
            | Self::Unavailable { location, .. }
            | Self::Parse { location, .. } => location,
        }
    }
}

/// Source of the raw site data document.
///
/// Each `fetch()` performs one fresh read. Implementations must not cache:
/// the document is loaded once per page view and is expected to reflect the
/// latest deployed data.
pub trait DataSource: Send + Sync {
    /// Human-readable location used in errors and logs.
    fn location(&self) -> &str;

    /// Fetch the raw document bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the resource is unreachable or the transport
    /// reports a non-success status.
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// Fetch and parse the site data document.
///
/// # Errors
///
/// Returns [`LoadError`] if fetching fails or the body cannot be parsed.
pub fn load_site_data(source: &dyn DataSource) -> Result<SiteData, LoadError> {
    let body = source.fetch()?;
    let data: SiteData = serde_json::from_slice(&body).map_err(|e| LoadError::Parse {
        location: source.location().to_owned(),
        source: e,
    })?;

    tracing::debug!(
        location = source.location(),
        news = data.news.len(),
        education = data.education.len(),
        employment = data.employment.len(),
        publications = data.publications.len(),
        "Site data loaded"
    );
    Ok(data)
}
