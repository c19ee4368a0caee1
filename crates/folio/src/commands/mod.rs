//! CLI command implementations.

mod build;
mod check;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_data::{DataSource, FileSource, HttpSource};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site source directory with page skeletons (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Local site data document (overrides config).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Remote site data document (overrides config and --data).
    #[arg(long, env = "FOLIO_DATA_URL")]
    data_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration with these arguments applied on top.
    fn load_config(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            output_dir,
            data_path: self.data.clone(),
            data_url: self.data_url.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Data source selected by the configuration: the URL when set, otherwise
/// the local file.
fn data_source(config: &Config) -> Arc<dyn DataSource> {
    let source: Arc<dyn DataSource> = match &config.data_resolved.url {
        Some(url) => Arc::new(HttpSource::with_timeout(
            url.as_str(),
            config.data_resolved.timeout,
        )),
        None => Arc::new(FileSource::new(config.data_resolved.path.clone())),
    };
    tracing::debug!(location = source.location(), "Data source selected");
    source
}
