use agentlink_core::link::{CleanAction, CleanSkip, LinkEngine, RunReporter};
use anyhow::bail;

use crate::commands::CommandOptions;
use crate::output;

pub struct Clean;

impl Clean {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        let (_, config) = options.load_existing_config()?;
        let engine = LinkEngine::new(options.manager_options());

        output::info(format!(
            "Source: {} (will NOT be removed)",
            config.source.display()
        ));

        let report = engine.clean(&config);
        let source = config.source.display();

        for outcome in &report.outcomes {
            let link = outcome.link.display();
            match &outcome.result {
                Ok(CleanAction::Removed) => output::ok(format!("Removed {link}")),
                Ok(CleanAction::RemovedBroken) => {
                    output::ok(format!("Removed broken symlink {link}"));
                }
                Ok(CleanAction::Skipped(CleanSkip::Missing)) => {
                    if options.verbose {
                        output::skip(format!("{link} (already missing)"));
                    }
                }
                Ok(CleanAction::Skipped(CleanSkip::WrongTarget { target })) => {
                    output::warning(format!(
                        "Skipped {link} (points to {}, not {source})",
                        target.display()
                    ));
                }
                Ok(CleanAction::Skipped(CleanSkip::NotSymlink)) => {
                    output::warning(format!("Skipped {link} (not a symlink)"));
                }
                Ok(CleanAction::Skipped(CleanSkip::Changed)) => {
                    output::warning(format!("Skipped {link} (changed during clean)"));
                }
                Err(e) => output::error(format!("Failed to remove {link}: {e}")),
            }
        }

        output::info(RunReporter::clean_summary(&report, options.dry_run));

        if report.has_errors() {
            bail!("clean completed with errors");
        }
        Ok(())
    }
}
