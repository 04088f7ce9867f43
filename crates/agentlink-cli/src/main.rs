mod cli;
mod commands;
mod interactive;
mod logging;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandOptions;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    logging::init(cli.verbose);
    output::configure_color(cli.no_color);

    tracing::debug!(dry_run = cli.dry_run, force = cli.force, "starting agentlink");

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let options = CommandOptions::new(
        cli.verbose,
        cli.dry_run,
        cli.force,
        cli.config.as_deref(),
        &cwd,
    );

    match &cli.command {
        Commands::Init => {
            commands::Init::execute(&options).context("Failed to execute init command")?;
        }
        Commands::Sync => {
            commands::Sync::execute(&options).context("Failed to execute sync command")?;
        }
        Commands::Check => {
            commands::Check::execute(&options).context("Failed to execute check command")?;
        }
        Commands::Clean => {
            commands::Clean::execute(&options).context("Failed to execute clean command")?;
        }
        Commands::Doctor => {
            commands::Doctor::execute(&options).context("Failed to execute doctor command")?;
        }
    }

    Ok(())
}
