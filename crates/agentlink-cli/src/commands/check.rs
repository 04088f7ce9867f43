use agentlink_core::link::{LinkEngine, LinkInfo, LinkStatus, ManagerOptions};
use anyhow::bail;

use crate::commands::CommandOptions;

pub struct Check;

impl Check {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        let (_, config) = options.load_existing_config()?;

        // Check is read-only and reports a symlinked source even with --force
        let engine = LinkEngine::new(ManagerOptions::new(false, false, options.verbose));
        let report = engine.check(&config);

        let source_status = match &report.source_error {
            Some(e) => format!("ERROR: {e}"),
            None => "OK".to_string(),
        };
        println!("Source: {} [{source_status}]", config.source.display());
        println!("Links:");

        let width = report
            .links
            .iter()
            .map(|info| info.path.display().to_string().len())
            .max()
            .unwrap_or(0);

        for info in &report.links {
            println!(
                "  {:<width$} -> {}",
                info.path.display().to_string(),
                Self::describe(info)
            );
        }

        if report.has_problems() {
            println!("\nFound problems. Run 'agentlink sync' to fix them.");
            bail!("configuration has problems");
        }

        println!("\nAll links are correctly configured ✓");
        Ok(())
    }

    fn describe(info: &LinkInfo) -> String {
        match info.status {
            LinkStatus::Ok => format!("{} ✓", info.expected.display()),
            LinkStatus::Missing => "missing".to_string(),
            LinkStatus::WrongTarget => format!(
                "{} (expected {}) ✗",
                info.target.as_deref().unwrap_or_else(|| std::path::Path::new("?")).display(),
                info.expected.display()
            ),
            LinkStatus::NotSymlink => "not a symlink ✗".to_string(),
            LinkStatus::Broken => match &info.error {
                Some(e) => format!("broken: {e} ✗"),
                None => "broken ✗".to_string(),
            },
        }
    }
}
