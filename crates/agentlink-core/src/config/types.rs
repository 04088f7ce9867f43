//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration as written in the YAML file, before path expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path of the file the user edits
    #[serde(default)]
    pub source: String,

    /// Paths that should be symlinks to the source
    #[serde(default)]
    pub links: Vec<String>,
}

/// Validated configuration with every path absolute and cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file
    pub source: PathBuf,
    /// Links, in configuration order
    pub links: Vec<PathBuf>,
}

impl Config {
    /// Build a config from already-resolved paths
    #[must_use]
    pub fn new(
        source: impl Into<PathBuf>,
        links: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        Self {
            source: source.into(),
            links: links.into_iter().map(Into::into).collect(),
        }
    }
}
