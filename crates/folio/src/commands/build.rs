//! `folio build` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_render::{BuildConfig, RenderOptions, StaticSiteBuilder};

use super::{SiteArgs, data_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// Pages whose data load fails are still written with their error box
    /// visible; the command then fails once every page is written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(self.output_dir)?;
        let source = data_source(&config);

        output.heading("Building site");
        output.field("Source", config.site_resolved.source_dir.display());
        output.field("Data", source.location());
        output.field("Output", config.site_resolved.output_dir.display());

        let build_config = BuildConfig {
            source_dir: config.site_resolved.source_dir.clone(),
            output_dir: config.site_resolved.output_dir.clone(),
            pages: config.site_resolved.pages.clone(),
            render: RenderOptions {
                tags: config.profile.tags.clone(),
                doi_resolver: config.profile.doi_resolver.clone(),
            },
            year: None,
        };
        let report = StaticSiteBuilder::new(source, build_config).build()?;

        for page in report.pages.iter().filter(|page| !page.is_ok()) {
            output.page_failed(page);
        }

        let failed = report.failed();
        if failed > 0 {
            return Err(CliError::PagesFailed {
                failed,
                total: report.pages.len(),
            });
        }

        output.done(&format!(
            "Built {} pages and copied {} files to {}",
            report.pages.len(),
            report.assets,
            config.site_resolved.output_dir.display()
        ));
        Ok(())
    }
}
