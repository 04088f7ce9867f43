//! Run summaries

use super::orchestrator::{CleanReport, SyncReport};

/// Renders one-line summaries of sync and clean runs
pub struct RunReporter;

impl RunReporter {
    /// Summary of a sync run
    #[must_use]
    pub fn sync_summary(report: &SyncReport, dry_run: bool) -> String {
        let mut line = if dry_run {
            format!(
                "Dry run completed - would create {}, fix {}, skip {}",
                report.created(),
                report.fixed(),
                report.skipped()
            )
        } else {
            format!(
                "Sync completed - created {}, fixed {}, skipped {}",
                report.created(),
                report.fixed(),
                report.skipped()
            )
        };

        let failed = report.failed();
        if failed > 0 {
            line.push_str(&format!(", failed {failed}"));
        }
        line
    }

    /// Summary of a clean run
    #[must_use]
    pub fn clean_summary(report: &CleanReport, dry_run: bool) -> String {
        let mut line = if dry_run {
            format!(
                "Dry run completed - would remove {} symlinks, skip {} items",
                report.removed(),
                report.skipped()
            )
        } else {
            format!(
                "Clean completed - removed {} symlinks, skipped {} items",
                report.removed(),
                report.skipped()
            )
        };

        let failed = report.failed();
        if failed > 0 {
            line.push_str(&format!(", failed {failed}"));
        }
        line
    }
}
