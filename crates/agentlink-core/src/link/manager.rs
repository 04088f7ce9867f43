//! Single-link classification and reconciliation

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::actions::LinkAction;
use super::{LinkInfo, LinkStatus};
use crate::error::{Error, Result};
use crate::path;

/// Policy flags fixed for the lifetime of a [`LinkManager`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ManagerOptions {
    /// Classify but never mutate the filesystem
    pub dry_run: bool,
    /// Allow overriding wrong targets, non-symlink entries and a symlinked source
    pub force: bool,
    /// Only affects reporting
    pub verbose: bool,
}

impl ManagerOptions {
    /// Create a new set of options
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(dry_run: bool, force: bool, verbose: bool) -> Self {
        Self {
            dry_run,
            force,
            verbose,
        }
    }
}

/// Classifies and converges links to a source file.
///
/// Holds no state besides its options and can be reused for any number of
/// links.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkManager {
    options: ManagerOptions,
}

impl LinkManager {
    /// Create a new manager
    #[must_use]
    pub const fn new(options: ManagerOptions) -> Self {
        Self { options }
    }

    /// Options this manager was built with
    #[must_use]
    pub const fn options(&self) -> ManagerOptions {
        self.options
    }

    /// Check that the source exists and can be linked to.
    ///
    /// The source must be a regular file, or with force a symlink that
    /// resolves to one.
    ///
    /// # Errors
    ///
    /// Returns one of the `Source*` variants, or [`Error::Io`] when the
    /// source cannot be stat'ed.
    pub fn validate_source(&self, source: &Path) -> Result<()> {
        let metadata = match fs::symlink_metadata(source) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::SourceNotFound {
                    path: source.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::io("stat source file", source, e)),
        };

        if metadata.file_type().is_symlink() {
            if !self.options.force {
                return Err(Error::SourceIsSymlink {
                    path: source.to_path_buf(),
                });
            }
            // A symlinked source must still resolve to a regular file
            let target = match fs::metadata(source) {
                Ok(target) => target,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(Error::SourceNotFound {
                        path: source.to_path_buf(),
                    });
                }
                Err(e) => return Err(Error::io("resolve source symlink", source, e)),
            };
            if !target.is_file() {
                return Err(Error::SourceNotRegular {
                    path: source.to_path_buf(),
                });
            }
            return Ok(());
        }

        if !metadata.is_file() {
            return Err(Error::SourceNotRegular {
                path: source.to_path_buf(),
            });
        }

        Ok(())
    }

    /// Classify `link` against `expected`. Never mutates anything.
    #[must_use]
    pub fn check_link(&self, link: &Path, expected: &Path) -> LinkInfo {
        let mut info = LinkInfo {
            path: link.to_path_buf(),
            expected: path::clean(expected),
            target: None,
            status: LinkStatus::Missing,
            error: None,
        };

        let metadata = match fs::symlink_metadata(link) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(link = %link.display(), "link missing");
                return info;
            }
            Err(e) => return Self::broken(info, e),
        };

        if !metadata.file_type().is_symlink() {
            info.status = LinkStatus::NotSymlink;
            debug!(link = %link.display(), "link path is not a symlink");
            return info;
        }

        let raw_target = match fs::read_link(link) {
            Ok(target) => target,
            Err(e) => return Self::broken(info, e),
        };
        let resolved = path::resolve_link_target(link, &raw_target);
        info.target = Some(raw_target);

        // Dangling links are broken whatever they point at
        if let Err(e) = fs::metadata(link) {
            return Self::broken(info, e);
        }

        info.status = if resolved == info.expected {
            LinkStatus::Ok
        } else {
            LinkStatus::WrongTarget
        };
        debug!(
            link = %link.display(),
            resolved = %resolved.display(),
            status = %info.status,
            "classified link"
        );
        info
    }

    fn broken(mut info: LinkInfo, error: io::Error) -> LinkInfo {
        debug!(link = %info.path.display(), error = %error, "link is broken");
        info.status = LinkStatus::Broken;
        info.error = Some(error);
        info
    }

    /// Create a relative symlink at `link` pointing to `source`.
    ///
    /// Missing parent directories are created. In dry-run this is a no-op
    /// that reports success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the parent directory or the symlink cannot
    /// be created.
    pub fn create_link(&self, link: &Path, source: &Path) -> Result<()> {
        let dir = link.parent().unwrap_or_else(|| Path::new("."));
        let target = path::relative_to(source, dir).ok_or_else(|| {
            Error::io(
                "compute relative target for",
                link,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cannot express {} relative to {}", source.display(), dir.display()),
                ),
            )
        })?;

        if self.options.dry_run {
            debug!(
                link = %link.display(),
                target = %target.display(),
                "dry run: would create symlink"
            );
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|e| Error::io("create parent directory for", link, e))?;
        make_symlink(&target, link).map_err(|e| Error::io("create symlink", link, e))?;

        info!(link = %link.display(), target = %target.display(), "created symlink");
        Ok(())
    }

    /// Remove `link` only if it is a managed link (classified `OK`).
    ///
    /// Returns whether the link was removed, or would be in dry-run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when removal fails.
    pub fn remove_link(&self, link: &Path, expected: &Path) -> Result<bool> {
        let info = self.check_link(link, expected);
        if info.status != LinkStatus::Ok {
            debug!(link = %link.display(), status = %info.status, "not a managed link, leaving it");
            return Ok(false);
        }
        self.remove_entry(link, "remove symlink")?;
        Ok(true)
    }

    /// Remove `link` only if it is classified `Broken`.
    ///
    /// Returns whether the entry was removed, or would be in dry-run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when removal fails.
    pub fn remove_broken(&self, link: &Path, expected: &Path) -> Result<bool> {
        let info = self.check_link(link, expected);
        if info.status != LinkStatus::Broken {
            return Ok(false);
        }
        self.remove_entry(link, "remove broken symlink")?;
        Ok(true)
    }

    /// Converge `link` to a symlink pointing at `source`.
    ///
    /// | status      | force off      | force on      |
    /// |-------------|----------------|---------------|
    /// | OK          | skip           | skip          |
    /// | Missing     | create         | create        |
    /// | WrongTarget | conflict error | fix           |
    /// | NotSymlink  | conflict error | replace       |
    /// | Broken      | fix broken     | fix broken    |
    ///
    /// # Errors
    ///
    /// Returns a conflict error ([`Error::WrongTarget`], [`Error::NotSymlink`])
    /// without touching the filesystem, or [`Error::Io`] when a mutation fails.
    pub fn fix_link(&self, link: &Path, source: &Path) -> Result<LinkAction> {
        let info = self.check_link(link, source);

        match info.status {
            LinkStatus::Ok => Ok(LinkAction::Skip),
            LinkStatus::Missing => {
                self.create_link(link, source)?;
                Ok(LinkAction::Create)
            }
            LinkStatus::WrongTarget => {
                if !self.options.force {
                    return Err(Error::WrongTarget {
                        link: link.to_path_buf(),
                        target: info.target.unwrap_or_default(),
                        expected: source.to_path_buf(),
                    });
                }
                self.remove_entry(link, "remove wrong symlink")?;
                self.create_link(link, source)?;
                Ok(LinkAction::Fix)
            }
            LinkStatus::NotSymlink => {
                if !self.options.force {
                    return Err(Error::NotSymlink {
                        link: link.to_path_buf(),
                    });
                }
                self.remove_tree(link)?;
                self.create_link(link, source)?;
                Ok(LinkAction::Replace)
            }
            LinkStatus::Broken => {
                self.remove_entry(link, "remove broken symlink")?;
                self.create_link(link, source)?;
                Ok(LinkAction::FixBroken)
            }
        }
    }

    fn remove_entry(&self, link: &Path, op: &'static str) -> Result<()> {
        if self.options.dry_run {
            debug!(link = %link.display(), "dry run: would {op}");
            return Ok(());
        }
        fs::remove_file(link).map_err(|e| Error::io(op, link, e))?;
        info!(link = %link.display(), "{op}");
        Ok(())
    }

    fn remove_tree(&self, link: &Path) -> Result<()> {
        if self.options.dry_run {
            debug!(link = %link.display(), "dry run: would remove existing entry");
            return Ok(());
        }
        let is_dir = fs::symlink_metadata(link)
            .map_err(|e| Error::io("stat existing entry", link, e))?
            .is_dir();
        let removed = if is_dir {
            fs::remove_dir_all(link)
        } else {
            fs::remove_file(link)
        };
        removed.map_err(|e| Error::io("remove existing file", link, e))?;
        info!(link = %link.display(), "removed existing entry");
        Ok(())
    }
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
