//! Error types for agentlink-core

use std::path::PathBuf;

/// Result type for agentlink-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required entry does not exist
    NotFound,
    /// An existing entry conflicts with the desired link and force is off
    Conflict,
    /// An underlying filesystem call failed
    Filesystem,
    /// The configured source cannot be linked to
    InvalidSource,
    /// The configuration file is missing, unreadable or invalid
    Config,
}

/// Errors that can occur in agentlink operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file does not exist
    #[error("source file {} does not exist", path.display())]
    SourceNotFound {
        /// Configured source path
        path: PathBuf,
    },

    /// The source file is itself a symlink and force is off
    #[error("source file {} is a symlink (use --force to override)", path.display())]
    SourceIsSymlink {
        /// Configured source path
        path: PathBuf,
    },

    /// The source exists but is not a regular file
    #[error("source file {} is not a regular file", path.display())]
    SourceNotRegular {
        /// Configured source path
        path: PathBuf,
    },

    /// A symlink exists at the link path but resolves elsewhere
    #[error(
        "symlink {} points to wrong target {} (expected {}), use --force to fix",
        link.display(),
        target.display(),
        expected.display()
    )]
    WrongTarget {
        /// Link path
        link: PathBuf,
        /// Raw target stored in the symlink
        target: PathBuf,
        /// Expected source path
        expected: PathBuf,
    },

    /// A non-symlink entry occupies the link path
    #[error("file {} exists and is not a symlink, use --force to replace", link.display())]
    NotSymlink {
        /// Link path
        link: PathBuf,
    },

    /// A filesystem operation failed
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        /// Short description of the attempted operation
        op: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No configuration file exists where one was expected
    #[error("no config found at {}", path.display())]
    ConfigNotFound {
        /// Expected config location
        path: PathBuf,
    },

    /// The configuration file could not be parsed
    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yml::Error,
    },

    /// The configuration parsed but failed validation
    #[error("invalid config in {}: {message}", path.display())]
    ConfigInvalid {
        /// Config file path
        path: PathBuf,
        /// What is wrong with it
        message: String,
    },

    /// The home directory could not be determined
    #[error("failed to get home directory")]
    HomeDirUnavailable,
}

impl Error {
    /// Build an [`Error::Io`] for the given operation and path
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. }
            | Self::SourceIsSymlink { .. }
            | Self::SourceNotRegular { .. } => ErrorKind::InvalidSource,
            Self::WrongTarget { .. } | Self::NotSymlink { .. } => ErrorKind::Conflict,
            Self::Io { source, .. } if matches!(source.kind(), std::io::ErrorKind::NotFound) => {
                ErrorKind::NotFound
            }
            Self::Io { .. } => ErrorKind::Filesystem,
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::HomeDirUnavailable => ErrorKind::Config,
        }
    }

    /// Whether re-running with force would get past this error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict)
    }
}
