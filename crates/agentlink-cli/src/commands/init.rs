use agentlink_core::config::{self, ConfigDiscovery};
use anyhow::{Context, bail};

use crate::commands::CommandOptions;
use crate::interactive::Confirmer;
use crate::output;

pub struct Init;

impl Init {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        let config_path = ConfigDiscovery::project_config_path(options.cwd);

        if config_path.exists() {
            if !options.force {
                output::error(".agentlink.yaml already exists (use --force to overwrite)");
                bail!("config file already exists");
            }
            output::warning("Overwriting existing .agentlink.yaml");
        }

        if !options.cwd.join(".git").exists() {
            if options.force {
                output::warning("No .git directory found, but continuing due to --force");
            } else if !Confirmer::confirm(
                "No .git directory found. Create .agentlink.yaml here anyway?",
            )? {
                output::info("Cancelled");
                return Ok(());
            }
        }

        if options.dry_run {
            output::info("Would create .agentlink.yaml");
            return Ok(());
        }

        config::write_project_config(&config_path)
            .inspect_err(|e| output::error(format!("Failed to create config file: {e}")))
            .context("Failed to write project config")?;

        output::ok(format!("Created {}", config_path.display()));
        output::info(
            "Edit the config file and run 'agentlink sync' after creating your source file",
        );
        Ok(())
    }
}
