//! Configuration loading with path expansion

use std::fs;
use std::io;
use std::path::Path;

use super::types::{Config, ConfigFile};
use super::validation::ConfigValidator;
use crate::error::{Error, Result};
use crate::path;

/// Reads, parses, validates and expands a config file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config at `config_path`.
    ///
    /// Relative entries resolve against the directory containing the config
    /// file and `~/` against `home`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::ConfigParse`] / [`Error::ConfigInvalid`] for bad content, and
    /// [`Error::HomeDirUnavailable`] if `~/` is used without a home.
    pub fn load(config_path: &Path, home: Option<&Path>) -> Result<Config> {
        let config_path = std::path::absolute(config_path)
            .map_err(|e| Error::io("resolve config path", config_path, e))?;

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound { path: config_path });
            }
            Err(e) => return Err(Error::io("read config file", &config_path, e)),
        };

        let file: ConfigFile = serde_yml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: config_path.clone(),
            source,
        })?;

        ConfigValidator::validate(&file, &config_path)?;

        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("/"));
        let config = Self::expand(&file, base_dir, home)?;

        ConfigValidator::validate_resolved(&config, &config_path)?;
        Ok(config)
    }

    /// Expand every path in `file` against `base_dir` and `home`
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`] if `~/` is used without a home.
    pub fn expand(file: &ConfigFile, base_dir: &Path, home: Option<&Path>) -> Result<Config> {
        let source = path::expand(file.source.trim(), base_dir, home)?;
        let links = file
            .links
            .iter()
            .map(|link| path::expand(link.trim(), base_dir, home))
            .collect::<Result<Vec<_>>>()?;

        Ok(Config { source, links })
    }
}
