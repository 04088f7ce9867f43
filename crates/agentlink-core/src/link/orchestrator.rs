//! Batch orchestration - runs check, sync and clean over a whole config

use std::path::PathBuf;

use tracing::{debug, warn};

use super::actions::{CleanAction, CleanSkip, LinkAction};
use super::manager::{LinkManager, ManagerOptions};
use super::{LinkInfo, LinkStatus};
use crate::config::Config;
use crate::error::{Error, Result};

/// Result of processing one link
#[derive(Debug)]
pub struct LinkOutcome<A> {
    /// Link path
    pub link: PathBuf,
    /// What happened, or why it failed
    pub result: Result<A>,
}

/// Per-link outcomes of a sync or clean run, in configuration order
#[derive(Debug)]
pub struct LinkReport<A> {
    /// Source the links were reconciled against
    pub source: PathBuf,
    /// One entry per configured link
    pub outcomes: Vec<LinkOutcome<A>>,
}

/// Report produced by [`LinkEngine::sync`]
pub type SyncReport = LinkReport<LinkAction>;

/// Report produced by [`LinkEngine::clean`]
pub type CleanReport = LinkReport<CleanAction>;

impl<A> LinkReport<A> {
    const fn new(source: PathBuf) -> Self {
        Self {
            source,
            outcomes: Vec::new(),
        }
    }

    fn successes(&self) -> impl Iterator<Item = &A> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.link, e)))
    }

    /// Number of links that failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Whether any link failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.failures().next().is_some()
    }
}

impl SyncReport {
    /// Links created
    #[must_use]
    pub fn created(&self) -> usize {
        self.successes().filter(|a| **a == LinkAction::Create).count()
    }

    /// Links fixed, replaced or fixed from broken
    #[must_use]
    pub fn fixed(&self) -> usize {
        self.successes()
            .filter(|a| matches!(a, LinkAction::Fix | LinkAction::Replace | LinkAction::FixBroken))
            .count()
    }

    /// Links already correct
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.successes().filter(|a| **a == LinkAction::Skip).count()
    }
}

impl CleanReport {
    /// Entries removed
    #[must_use]
    pub fn removed(&self) -> usize {
        self.successes().filter(|a| a.is_removal()).count()
    }

    /// Entries left in place
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.successes().filter(|a| !a.is_removal()).count()
    }
}

/// Report produced by [`LinkEngine::check`]
#[derive(Debug)]
pub struct CheckReport {
    /// Configured source
    pub source: PathBuf,
    /// Source validation failure, if any
    pub source_error: Option<Error>,
    /// Classification of every link, in configuration order
    pub links: Vec<LinkInfo>,
}

impl CheckReport {
    /// Whether the source is invalid or any link is not `OK`
    #[must_use]
    pub fn has_problems(&self) -> bool {
        self.source_error.is_some() || self.links.iter().any(|info| !info.is_ok())
    }
}

/// Runs whole-config operations sequentially through a [`LinkManager`]
pub struct LinkEngine {
    manager: LinkManager,
}

impl LinkEngine {
    /// Create a new engine
    #[must_use]
    pub const fn new(options: ManagerOptions) -> Self {
        Self {
            manager: LinkManager::new(options),
        }
    }

    /// Underlying manager
    #[must_use]
    pub const fn manager(&self) -> &LinkManager {
        &self.manager
    }

    /// Validate the source and classify every link. Read-only.
    #[must_use]
    pub fn check(&self, config: &Config) -> CheckReport {
        let source_error = self.manager.validate_source(&config.source).err();
        let links = config
            .links
            .iter()
            .map(|link| self.manager.check_link(link, &config.source))
            .collect();

        CheckReport {
            source: config.source.clone(),
            source_error,
            links,
        }
    }

    /// Converge every link to the source.
    ///
    /// # Errors
    ///
    /// Returns the source validation error before any link is processed.
    /// Per-link failures are recorded in the report instead.
    pub fn sync(&self, config: &Config) -> Result<SyncReport> {
        self.manager.validate_source(&config.source)?;

        let mut report = SyncReport::new(config.source.clone());
        for link in &config.links {
            debug!(link = %link.display(), "processing link");
            let result = self.manager.fix_link(link, &config.source);
            report.outcomes.push(LinkOutcome {
                link: link.clone(),
                result,
            });
        }
        Ok(report)
    }

    /// Remove managed and broken links, leave everything else alone.
    ///
    /// The source is never validated or touched.
    #[must_use]
    pub fn clean(&self, config: &Config) -> CleanReport {
        let mut report = CleanReport::new(config.source.clone());

        for link in &config.links {
            debug!(link = %link.display(), "processing link");
            let info = self.manager.check_link(link, &config.source);

            let result = match info.status {
                LinkStatus::Ok => self
                    .manager
                    .remove_link(link, &config.source)
                    .map(|removed| CleanAction::removed_or_changed(removed, CleanAction::Removed)),
                LinkStatus::Broken => self
                    .manager
                    .remove_broken(link, &config.source)
                    .map(|removed| {
                        CleanAction::removed_or_changed(removed, CleanAction::RemovedBroken)
                    }),
                LinkStatus::Missing => Ok(CleanAction::Skipped(CleanSkip::Missing)),
                LinkStatus::WrongTarget => {
                    let target = info.target.unwrap_or_default();
                    warn!(
                        link = %link.display(),
                        target = %target.display(),
                        "skipping symlink that does not point to the source"
                    );
                    Ok(CleanAction::Skipped(CleanSkip::WrongTarget { target }))
                }
                LinkStatus::NotSymlink => {
                    warn!(link = %link.display(), "skipping entry that is not a symlink");
                    Ok(CleanAction::Skipped(CleanSkip::NotSymlink))
                }
            };

            report.outcomes.push(LinkOutcome {
                link: link.clone(),
                result,
            });
        }

        report
    }
}
