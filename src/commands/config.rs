use crate::Result;
use crate::facts::DEFAULT_MAX_PAGES;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use directories::BaseDirs;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the working and user config directories
pub const CONFIG_FILE_NAME: &str = "devlevel.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout applied to every request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Maximum number of pages fetched for a paginated resource
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Value of the `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

const fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_user_agent() -> String {
    "devlevel".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit `config_path` must exist. Otherwise `devlevel.toml` is looked up in
    /// `working_dir`, then in the user's configuration directory, and the defaults are used when
    /// neither exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(working_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        Ok(Self::load_with_source(working_dir, config_path)?.0)
    }

    /// Like [`Self::load`], also reporting which file the configuration came from
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_with_source(working_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<(Self, Option<Utf8PathBuf>)> {
        if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading devlevel configuration file '{path}'"))?;
            return Ok((Self::parse(&text, path)?, Some(path.to_path_buf())));
        }

        for path in search_paths(working_dir) {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    let config = Self::parse(&text, &path)?;
                    return Ok((config, Some(path)));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).into_app_err_with(|| format!("reading devlevel configuration file '{path}'")),
            }
        }

        // No config file found, use defaults
        Ok((Self::default(), None))
    }

    fn parse(text: &str, path: &Utf8Path) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or malformed
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url).map_err(|e| app_err!("api_url '{}' is not a valid URL: {e}", self.api_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("api_url must use http or https, got '{}'", url.scheme()));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.max_pages == 0 {
            return Err(app_err!("max_pages must be at least 1"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(app_err!("user_agent must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            max_pages: default_max_pages(),
            user_agent: default_user_agent(),
        }
    }
}

/// Where to look for a configuration file when none is given explicitly, in order
fn search_paths(working_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut paths = vec![working_dir.join(CONFIG_FILE_NAME)];

    if let Some(dirs) = BaseDirs::new()
        && let Ok(config_dir) = Utf8PathBuf::from_path_buf(dirs.config_dir().join("devlevel"))
    {
        paths.push(config_dir.join(CONFIG_FILE_NAME));
    }

    paths
}
