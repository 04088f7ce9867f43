//! Reconciliation outcomes

use std::fmt;
use std::path::PathBuf;

/// What `fix_link` did (or would do in dry-run) to converge a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkAction {
    /// Already correct, nothing touched
    Skip,
    /// Link did not exist and was created
    Create,
    /// Symlink with the wrong target was replaced
    Fix,
    /// Non-symlink entry was removed and replaced
    Replace,
    /// Broken entry was removed and replaced
    FixBroken,
}

impl LinkAction {
    /// Action label as reported to the user
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Create => "create",
            Self::Fix => "fix",
            Self::Replace => "replace",
            Self::FixBroken => "fix broken",
        }
    }

    /// Whether the action mutates the filesystem outside dry-run
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

impl fmt::Display for LinkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why clean left an entry alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanSkip {
    /// Nothing at the link path
    Missing,
    /// A symlink that is not ours
    WrongTarget {
        /// Raw target stored in the symlink
        target: PathBuf,
    },
    /// A regular file, directory or other entry
    NotSymlink,
    /// The entry changed between classification and removal
    Changed,
}

/// What clean did (or would do in dry-run) with one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanAction {
    /// Managed link removed
    Removed,
    /// Broken entry removed
    RemovedBroken,
    /// Entry left in place
    Skipped(CleanSkip),
}

impl CleanAction {
    /// `action` if the entry was removed, a [`CleanSkip::Changed`] skip otherwise
    #[must_use]
    pub fn removed_or_changed(removed: bool, action: Self) -> Self {
        if removed {
            action
        } else {
            Self::Skipped(CleanSkip::Changed)
        }
    }

    /// Whether an entry was (or would be) removed
    #[must_use]
    pub const fn is_removal(&self) -> bool {
        matches!(self, Self::Removed | Self::RemovedBroken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels() {
        assert_eq!(LinkAction::Skip.as_str(), "skip");
        assert_eq!(LinkAction::FixBroken.to_string(), "fix broken");
        assert!(!LinkAction::Skip.is_mutation());
        assert!(LinkAction::Replace.is_mutation());
    }

    #[test]
    fn test_clean_action_removal() {
        assert!(CleanAction::Removed.is_removal());
        assert!(CleanAction::RemovedBroken.is_removal());
        assert!(!CleanAction::Skipped(CleanSkip::Missing).is_removal());
    }

    #[test]
    fn test_declined_removal_is_a_skip() {
        assert_eq!(
            CleanAction::removed_or_changed(true, CleanAction::Removed),
            CleanAction::Removed
        );
        let declined = CleanAction::removed_or_changed(false, CleanAction::RemovedBroken);
        assert_eq!(declined, CleanAction::Skipped(CleanSkip::Changed));
        assert!(!declined.is_removal());
    }
}
