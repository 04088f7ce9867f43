//! Configuration discovery, parsing and path expansion
//!
//! This module handles:
//! - Locating the config file (explicit, project, global)
//! - YAML parsing with serde
//! - Validation and error reporting
//! - `~` and relative path expansion
//! - Starter templates

mod discovery;
mod loader;
mod templates;
mod types;
mod validation;

pub use discovery::{ConfigDiscovery, ConfigLocation, ConfigScope, PROJECT_CONFIG_NAME};
pub use loader::ConfigLoader;
pub use templates::{
    DEFAULT_GLOBAL_CONFIG, PROJECT_CONFIG, write_global_config, write_project_config,
};
pub use types::{Config, ConfigFile};
pub use validation::ConfigValidator;

use std::path::PathBuf;

/// Home directory used for `~` expansion and the global config
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
