//! Configuration file discovery

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the per-project config file
pub const PROJECT_CONFIG_NAME: &str = ".agentlink.yaml";

/// Where a config file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Given explicitly with `--config` or `AGENTLINK_CONFIG`
    Explicit,
    /// `.agentlink.yaml` in the current directory
    Project,
    /// `~/.config/agentlink/config.yaml`
    Global,
}

impl ConfigScope {
    /// Label used in verbose output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Project => "project",
            Self::Global => "global",
        }
    }
}

/// A resolved config location. The file may not exist (global scope only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Absolute config path
    pub path: PathBuf,
    /// How it was found
    pub scope: ConfigScope,
}

impl ConfigLocation {
    /// Whether the config file exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Pick the config file to use.
    ///
    /// Precedence: explicit path, then `.agentlink.yaml` in `cwd`, then the
    /// global config under `home` (which may not exist yet).
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`] if the global config is needed
    /// but no home directory is known.
    pub fn discover(
        cli_path: Option<&Path>,
        cwd: &Path,
        home: Option<&Path>,
    ) -> Result<ConfigLocation> {
        if let Some(path) = cli_path {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            return Ok(ConfigLocation {
                path: crate::path::clean(&path),
                scope: ConfigScope::Explicit,
            });
        }

        let project = Self::project_config_path(cwd);
        if project.is_file() {
            return Ok(ConfigLocation {
                path: project,
                scope: ConfigScope::Project,
            });
        }

        let home = home.ok_or(Error::HomeDirUnavailable)?;
        Ok(ConfigLocation {
            path: Self::global_config_path(home),
            scope: ConfigScope::Global,
        })
    }

    /// Path of the project config in `dir`
    #[must_use]
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_NAME)
    }

    /// Directory holding the global config
    #[must_use]
    pub fn global_config_dir(home: &Path) -> PathBuf {
        home.join(".config").join("agentlink")
    }

    /// Path of the global config
    #[must_use]
    pub fn global_config_path(home: &Path) -> PathBuf {
        Self::global_config_dir(home).join("config.yaml")
    }
}
