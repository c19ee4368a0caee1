//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `data.url`
//! - `profile.doi_resolver`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override data document path.
    pub data_path: Option<PathBuf>,
    /// Override data document URL.
    pub data_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

const DEFAULT_SOURCE_DIR: &str = "site";
const DEFAULT_OUTPUT_DIR: &str = "dist";
/// Data document path, relative to the source directory.
const DEFAULT_DATA_PATH: &str = "data/site.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_TAGS: &[&str] = &["NLP", "Machine Learning", "Deep Learning", "Data Science"];
const DEFAULT_DOI_RESOLVER: &str = "https://doi.org/";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Data source configuration as written in TOML.
    data: DataConfigRaw,
    /// Profile presentation settings.
    pub profile: ProfileConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved data source configuration (set after loading).
    #[serde(skip)]
    pub data_resolved: DataConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    pages: Option<Vec<String>>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Directory with page skeletons and static assets.
    pub source_dir: PathBuf,
    /// Directory the built site is written to.
    pub output_dir: PathBuf,
    /// Page skeleton patterns; `None` means every `.html` file.
    pub pages: Option<Vec<String>>,
}

/// Raw data configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DataConfigRaw {
    path: Option<String>,
    url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved data source configuration.
#[derive(Debug)]
pub struct DataConfig {
    /// Local data document.
    pub path: PathBuf,
    /// Remote data document; takes precedence over `path` when set.
    pub url: Option<String>,
    /// Request timeout for the remote document.
    pub timeout: Duration,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOURCE_DIR).join(DEFAULT_DATA_PATH),
            url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Profile presentation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Topical tags rendered as pills.
    pub tags: Vec<String>,
    /// Prefix prepended to bare DOI identifiers.
    pub doi_resolver: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|&tag| tag.to_owned()).collect(),
            doi_resolver: DEFAULT_DOI_RESOLVER.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`data.url`").
        field: String,
        /// Error message (e.g., "${`FOLIO_DATA_URL`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values. The result is
    /// validated once more after they are applied.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A new source directory moves the data document with it unless the
    /// data path is overridden too.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
            self.data_resolved.path =
                source_dir.join(self.data.path.as_deref().unwrap_or(DEFAULT_DATA_PATH));
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(data_path) = &settings.data_path {
            self.data_resolved.path.clone_from(data_path);
        }
        if let Some(data_url) = &settings.data_url {
            self.data_resolved.url = Some(data_url.clone());
        }
    }

    /// Search for a config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let source_dir = base.join(DEFAULT_SOURCE_DIR);
        Self {
            site: SiteConfigRaw::default(),
            data: DataConfigRaw::default(),
            profile: ProfileConfig::default(),
            site_resolved: SiteConfig {
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
                pages: None,
                source_dir: source_dir.clone(),
            },
            data_resolved: DataConfig {
                path: source_dir.join(DEFAULT_DATA_PATH),
                ..DataConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        tracing::debug!(path = %path.display(), "Configuration loaded");

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_data()?;
        self.validate_profile()?;
        Ok(())
    }

    fn validate_data(&self) -> Result<(), ConfigError> {
        if self.data_resolved.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "data.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if let Some(ref url) = self.data_resolved.url {
            require_http_url(url, "data.url")?;
        }
        Ok(())
    }

    fn validate_profile(&self) -> Result<(), ConfigError> {
        require_http_url(&self.profile.doi_resolver, "profile.doi_resolver")
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.data.url {
            self.data.url = Some(expand::expand_env(url, "data.url")?);
        }
        self.profile.doi_resolver =
            expand::expand_env(&self.profile.doi_resolver, "profile.doi_resolver")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    ///
    /// The data path is relative to the source directory. An empty
    /// `data.url` counts as unset.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        let source_dir = resolve(self.site.source_dir.as_deref(), DEFAULT_SOURCE_DIR);
        self.data_resolved = DataConfig {
            path: source_dir.join(self.data.path.as_deref().unwrap_or(DEFAULT_DATA_PATH)),
            url: self.data.url.clone().filter(|url| !url.is_empty()),
            timeout: Duration::from_secs(self.data.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        };

        if let Some(pages) = &self.site.pages
            && pages.is_empty()
        {
            return Err(ConfigError::Validation(
                "site.pages cannot be an empty list".to_owned(),
            ));
        }
        self.site_resolved = SiteConfig {
            output_dir: resolve(self.site.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
            pages: self.site.pages.clone(),
            source_dir,
        };

        Ok(())
    }
}
