//! Lexical path handling
//!
//! Every comparison the link engine makes is done on cleaned absolute
//! paths, never on filesystem identity. Nothing here touches the disk.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Lexically clean a path.
///
/// Removes `.` components and redundant separators, and folds `..` into
/// the preceding component. A `..` directly under the root is dropped; a
/// leading `..` on a relative path is kept. An empty result becomes `.`.
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Compute `target` relative to the directory `base`.
///
/// Both paths are cleaned first. Returns `None` when one path is absolute
/// and the other is not, since no relative path can connect them.
#[must_use]
pub fn relative_to(target: &Path, base: &Path) -> Option<PathBuf> {
    let target = clean(target);
    let base = clean(base);

    if target.is_absolute() != base.is_absolute() {
        return None;
    }

    let target_parts: Vec<_> = target.components().collect();
    let base_parts: Vec<_> = base.components().filter(|c| *c != Component::CurDir).collect();

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    // A relative base that still has `..` left over cannot be undone
    if base_parts[common..]
        .iter()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part);
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

/// Resolve a raw symlink target against the directory holding the link.
///
/// Absolute targets are only cleaned; relative targets are joined to the
/// link's parent directory first.
#[must_use]
pub fn resolve_link_target(link: &Path, raw_target: &Path) -> PathBuf {
    if raw_target.is_absolute() {
        return clean(raw_target);
    }
    let dir = link.parent().unwrap_or_else(|| Path::new("."));
    clean(&dir.join(raw_target))
}

/// Expand a configured path.
///
/// A `~/` prefix is replaced with `home`; a relative result is joined to
/// `base_dir`. The returned path is always cleaned.
///
/// # Errors
///
/// Returns [`Error::HomeDirUnavailable`] when the path starts with `~/`
/// and no home directory is known.
pub fn expand(raw: &str, base_dir: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let path = if let Some(rest) = raw.strip_prefix("~/") {
        home.ok_or(Error::HomeDirUnavailable)?.join(rest)
    } else {
        PathBuf::from(raw)
    };

    if path.is_absolute() {
        Ok(clean(&path))
    } else {
        Ok(clean(&base_dir.join(path)))
    }
}
