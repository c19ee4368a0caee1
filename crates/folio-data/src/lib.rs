//! Site data model and loader for Folio.
//!
//! This crate provides the typed [`SiteData`] document and a [`DataSource`]
//! trait for fetching it. The document is loaded once per page view with
//! [`load_site_data`]; every source reads fresh and never caches.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`SiteData`] and its entities, with declared defaults for absent fields
//! - [`DataSource`] trait with a single `fetch()` method
//! - [`FileSource`] for a document on the local filesystem
//! - [`HttpSource`] for a document served over HTTP(S)
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use folio_data::{FileSource, load_site_data};
//!
//! let source = FileSource::new("site/data/site.json");
//! let data = load_site_data(&source)?;
//! println!("{} news items", data.news.len());
//! ```

mod fs;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod source;

pub use fs::FileSource;
pub use http::HttpSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use model::{
    EducationEntry, EmploymentEntry, NewsItem, Person, Publication, PublicationLinks, SiteData,
    Year,
};
pub use source::{DataSource, LoadError, load_site_data};
