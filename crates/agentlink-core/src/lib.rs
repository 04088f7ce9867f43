//! # agentlink-core
//!
//! Core library for agentlink.
//!
//! Different tools expect different instruction files (`AGENTS.md`,
//! `CLAUDE.md`, `GEMINI.md`, ...). This library keeps one real source
//! file and reconciles a declared set of symlinks against it: each link
//! is classified, then converged to a relative symlink pointing at the
//! source under an explicit dry-run / force policy.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error taxonomy shared by every module
pub mod error;

/// Lexical path helpers (cleaning, relative targets, `~` expansion)
pub mod path;

/// Link classification and reconciliation engine
pub mod link;

/// Configuration file discovery, parsing and expansion
pub mod config;

/// Environment diagnostics
pub mod doctor;

pub use error::{Error, ErrorKind, Result};
