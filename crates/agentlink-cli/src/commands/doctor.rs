use agentlink_core::doctor::{Doctor as Diagnostics, Outcome};
use anyhow::bail;
use colored::Colorize;

use crate::commands::CommandOptions;

pub struct Doctor;

impl Doctor {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        println!("Agentlink Doctor");
        println!("================\n");

        let home = CommandOptions::home();
        let report = Diagnostics::run(options.cwd, home.as_deref());

        for (section, checks) in report.sections() {
            println!("{section}:");
            for check in checks {
                let marker = match check.outcome {
                    Outcome::Pass => "✓".green(),
                    Outcome::Warn => "⚠".yellow(),
                    Outcome::Fail => "✗".red(),
                };
                println!("{marker} {}", check.message);
            }
            println!();
        }

        if report.has_failures() {
            println!("Some issues found. See messages above for details.");
            bail!("environment check found issues");
        }

        println!("Environment looks good!");
        Ok(())
    }
}
