//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding user configuration.
pub const USER_CONFIG_DIR: &str = ".varlink";

/// File name of the user configuration.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use varlink::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config().unwrap() {
///     println!("Loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `~/.varlink/config.yaml` if it exists.
    ///
    /// A missing home directory is treated like a missing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(path) = Self::user_config_path() else {
            log::debug!("No home directory; skipping user configuration");
            return Ok(None);
        };

        if !path.exists() {
            log::debug!("No user configuration at {}", path.display());
            return Ok(None);
        }

        Self::load_source(&path).map(Some)
    }

    /// Load an explicitly named configuration file.
    ///
    /// Unlike the user config, the file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_source(path: &Path) -> Result<ConfigSource> {
        let config = Self::load_file(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(ConfigSource {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidConfigFile {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::InvalidConfigFile {
            path: path.to_path_buf(),
            reason: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
