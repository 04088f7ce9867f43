//! Link classification and reconciliation
//!
//! This module implements the core of agentlink:
//! - `LinkManager` classifies a single link path against the source and
//!   performs the minimal mutation needed to converge it
//! - `LinkEngine` runs the check / sync / clean loops over a whole config
//! - `RunReporter` renders aggregate summaries
//!
//! Links are processed strictly in configuration order. A failure on one
//! link never stops the loop.

mod actions;
mod manager;
mod orchestrator;
mod reporting;

#[cfg(test)]
mod integration_tests;

use std::fmt;
use std::path::PathBuf;

pub use actions::{CleanAction, CleanSkip, LinkAction};
pub use manager::{LinkManager, ManagerOptions};
pub use orchestrator::{CheckReport, CleanReport, LinkEngine, LinkOutcome, LinkReport, SyncReport};
pub use reporting::RunReporter;

/// Classification of a link path relative to the expected source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStatus {
    /// Symlink resolving to the expected source
    Ok,
    /// Nothing exists at the link path
    Missing,
    /// Symlink resolving somewhere else
    WrongTarget,
    /// Something other than a symlink occupies the link path
    NotSymlink,
    /// The entry could not be classified (I/O error or dangling symlink)
    Broken,
}

impl LinkStatus {
    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Missing => "missing",
            Self::WrongTarget => "wrong target",
            Self::NotSymlink => "not a symlink",
            Self::Broken => "broken",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one link path.
///
/// Produced fresh on every check and never cached.
#[derive(Debug)]
pub struct LinkInfo {
    /// Link path as configured
    pub path: PathBuf,
    /// Expected source, cleaned
    pub expected: PathBuf,
    /// Raw target stored in the symlink, if one could be read
    pub target: Option<PathBuf>,
    /// Classification
    pub status: LinkStatus,
    /// Underlying error, only set for [`LinkStatus::Broken`]
    pub error: Option<std::io::Error>,
}

impl LinkInfo {
    /// Whether the link is already converged
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == LinkStatus::Ok
    }
}
