//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use agentlink_core::config::{
    self, Config, ConfigDiscovery, ConfigLoader, ConfigLocation, ConfigScope,
};
use agentlink_core::link::ManagerOptions;
use anyhow::{Context, bail};

use crate::output;

/// Execution options shared by every command
#[allow(clippy::struct_excessive_bools)]
pub struct CommandOptions<'a> {
    /// Enable verbose output
    pub verbose: bool,
    /// Preview changes without applying (dry-run)
    pub dry_run: bool,
    /// Override conflicting files
    pub force: bool,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Directory the command runs in
    pub cwd: &'a Path,
}

impl<'a> CommandOptions<'a> {
    /// Create new command options
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        verbose: bool,
        dry_run: bool,
        force: bool,
        config_path: Option<&'a Path>,
        cwd: &'a Path,
    ) -> Self {
        Self {
            verbose,
            dry_run,
            force,
            config_path,
            cwd,
        }
    }

    /// Manager policy for commands that may mutate links
    #[must_use]
    pub const fn manager_options(&self) -> ManagerOptions {
        ManagerOptions::new(self.dry_run, self.force, self.verbose)
    }

    /// Home directory for `~` expansion and the global config
    pub fn home() -> Option<PathBuf> {
        config::home_dir()
    }

    /// Resolve which config file this run uses
    pub fn locate_config(&self) -> anyhow::Result<ConfigLocation> {
        let home = Self::home();
        ConfigDiscovery::discover(self.config_path, self.cwd, home.as_deref())
            .context("Failed to locate config file")
    }

    /// Load an existing config, reporting a missing one with a hint
    pub fn load_existing_config(&self) -> anyhow::Result<(ConfigLocation, Config)> {
        let location = self.locate_config()?;
        if !location.exists() {
            Self::report_missing(&location);
            bail!("no config found");
        }
        let config = self.load(&location)?;
        Ok((location, config))
    }

    /// Load a config, creating the default global config if it is missing
    pub fn load_or_create_config(&self) -> anyhow::Result<(ConfigLocation, Config)> {
        let location = self.locate_config()?;
        if location.exists() {
            let config = self.load(&location)?;
            return Ok((location, config));
        }

        if location.scope != ConfigScope::Global {
            Self::report_missing(&location);
            bail!("no config found");
        }

        output::info(format!(
            "Creating default global config at {}",
            location.path.display()
        ));
        if !self.dry_run {
            config::write_global_config(&location.path).inspect_err(|e| {
                output::error(format!("Failed to create default config: {e}"));
            })?;
        }

        output::warning(format!(
            "Please edit {} to configure your source and links",
            location.path.display()
        ));
        bail!("created default config - please edit it first")
    }

    fn load(&self, location: &ConfigLocation) -> anyhow::Result<Config> {
        let home = Self::home();
        let config = ConfigLoader::load(&location.path, home.as_deref()).inspect_err(|e| {
            output::error(format!("Failed to load config: {e}"));
        })?;

        if self.verbose {
            output::info(format!(
                "Using {} config: {}",
                location.scope.as_str(),
                location.path.display()
            ));
        }
        Ok(config)
    }

    fn report_missing(location: &ConfigLocation) {
        match location.scope {
            ConfigScope::Project => {
                output::error("No .agentlink.yaml found in current directory");
                output::info("Run 'agentlink init' to create one");
            }
            ConfigScope::Explicit => {
                output::error(format!("No config found at {}", location.path.display()));
                output::info("Run 'agentlink init' to create one");
            }
            ConfigScope::Global => {
                output::error(format!(
                    "No global config found at {}",
                    location.path.display()
                ));
                output::info("Run 'agentlink sync' to create a default config");
            }
        }
    }
}
