//! Profile page rendering for Folio.
//!
//! Maps the site data document onto a page skeleton:
//!
//! - [`highlight_navigation`] marks the navigation entry of the current page
//! - [`sections`] holds the five section renderers (header/contact, news,
//!   education, employment, publications), each replacing the contents of
//!   its own target containers
//! - [`Boot`] runs the one-shot sequence for a single page view
//! - [`StaticSiteBuilder`] runs that sequence for every page of a site
//!   directory and writes the results

mod boot;
mod builder;
mod nav;
mod options;
pub mod sections;
pub mod targets;

pub use boot::{Boot, BootError, BootState};
pub use builder::{BuildConfig, BuildError, BuildReport, PageOutcome, StaticSiteBuilder};
pub use nav::{highlight_navigation, page_filename, section_key};
pub use options::RenderOptions;
pub use sections::render_sections;
