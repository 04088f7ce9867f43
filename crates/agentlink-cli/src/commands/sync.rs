use agentlink_core::link::{LinkAction, LinkEngine, RunReporter};
use anyhow::bail;

use crate::commands::CommandOptions;
use crate::output;

pub struct Sync;

impl Sync {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        let (_, config) = options.load_or_create_config()?;
        let engine = LinkEngine::new(options.manager_options());

        let report = match engine.sync(&config) {
            Ok(report) => report,
            Err(e) => {
                output::error(format!("Source validation failed: {e}"));
                return Err(e.into());
            }
        };

        output::ok(format!("Source: {}", config.source.display()));

        let source = config.source.display();
        for outcome in &report.outcomes {
            let link = outcome.link.display();
            match &outcome.result {
                Ok(LinkAction::Skip) => {
                    if options.verbose {
                        output::skip(format!("{link} already links to {source}"));
                    }
                }
                Ok(LinkAction::Create) => output::create(format!("{link} -> {source}")),
                Ok(LinkAction::Fix) => output::ok(format!("Fixed {link} -> {source}")),
                Ok(LinkAction::Replace) => output::ok(format!("Replaced {link} -> {source}")),
                Ok(LinkAction::FixBroken) => output::ok(format!("Fixed broken {link} -> {source}")),
                Err(e) => output::error(format!("Failed to process {link}: {e}")),
            }
        }

        if options.verbose || options.dry_run {
            output::info(RunReporter::sync_summary(&report, options.dry_run));
        }

        if report.has_errors() {
            bail!("sync completed with errors");
        }

        Ok(())
    }
}
