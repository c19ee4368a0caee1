//! CLI error types.

use folio_config::ConfigError;
use folio_data::LoadError;
use folio_render::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{failed} of {total} pages failed to load site data")]
    PagesFailed { failed: usize, total: usize },
}
