//! HTTP data source.

use std::time::Duration;

use ureq::Agent;

use crate::source::{DataSource, LoadError};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Site data document served over HTTP(S).
///
/// Requests carry `Cache-Control: no-cache` and `Pragma: no-cache` so
/// intermediaries revalidate instead of serving a stored copy.
pub struct HttpSource {
    agent: Agent,
    url: String,
}

impl HttpSource {
    /// Create a source with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a source whose requests fail after `timeout`.
    #[must_use]
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            url: url.into(),
        }
    }
}

impl DataSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .agent
            .get(&self.url)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .call()
            .map_err(|e| LoadError::unavailable(&self.url, e))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(LoadError::Status {
                location: self.url.clone(),
                status,
            });
        }

        response
            .into_body()
            .read_to_vec()
            .map_err(|e| LoadError::unavailable(&self.url, e))
    }
}
