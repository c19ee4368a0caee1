//! Mock data source for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem or network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::source::{DataSource, LoadError};

/// Location reported by the mock.
const MOCK_LOCATION: &str = "mock://data/site.json";

#[derive(Debug)]
enum MockResponse {
    Body(Vec<u8>),
    Status(u16),
}

/// Mock data source with a canned response.
///
/// Counts fetches so tests can check that a page view loads exactly once.
///
/// # Example
///
/// ```ignore
/// use folio_data::{MockSource, load_site_data};
///
/// let source = MockSource::with_body(r#"{"news": []}"#);
/// let data = load_site_data(&source).unwrap();
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockSource {
    response: MockResponse,
    fetches: AtomicUsize,
}

impl MockSource {
    /// Source that returns `body` on every fetch.
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Body(body.into().into_bytes()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source that returns the given JSON value.
    #[must_use]
    pub fn with_json(value: &serde_json::Value) -> Self {
        Self::with_body(value.to_string())
    }

    /// Source whose transport always answers with `status`.
    #[must_use]
    pub fn failing(status: u16) -> Self {
        Self {
            response: MockResponse::Status(status),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches performed so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DataSource for MockSource {
    fn location(&self) -> &str {
        MOCK_LOCATION
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Status(status) => Err(LoadError::Status {
                location: MOCK_LOCATION.to_owned(),
                status: *status,
            }),
        }
    }
}
