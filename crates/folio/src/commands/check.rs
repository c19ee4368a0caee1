//! `folio check` command implementation.

use clap::Args;
use folio_data::load_site_data;

use super::{SiteArgs, data_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Load and parse the site data document and report what it holds.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(None)?;
        let source = data_source(&config);

        output.heading(&format!("Checking {}", source.location()));
        let data = load_site_data(source.as_ref())?;

        let name = data.person.name();
        output.field("Person", if name.is_empty() { "(unnamed)" } else { name });
        output.field("News", data.news.len());
        output.field("Education", data.education.len());
        output.field("Employment", data.employment.len());
        output.field("Publications", data.publications.len());
        output.done("Site data loaded");
        Ok(())
    }
}
