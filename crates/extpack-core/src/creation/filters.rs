//! Exclusion rules and entry name computation.
//!
//! Exclusion patterns are plain substrings. Files are tested against their
//! full relative path, directories against their bare name. The two rules
//! differ on purpose: pruning a directory only happens on an exact name
//! match, while any file whose path mentions a pattern is dropped.

use crate::PackError;
use crate::Result;
use std::path::Component;
use std::path::Path;

/// Returns the first pattern contained in `relative_path`, if any.
///
/// # Examples
///
/// ```
/// use extpack_core::creation::filters;
///
/// let patterns = vec![".git".to_string(), "*.pyc".to_string()];
/// assert_eq!(
///     filters::matching_pattern("lib/.git/config", &patterns),
///     Some(".git")
/// );
/// // `*` is literal
/// assert_eq!(filters::matching_pattern("lib/cache.pyc", &patterns), None);
/// ```
#[must_use]
pub fn matching_pattern<'a>(relative_path: &str, patterns: &'a [String]) -> Option<&'a str> {
    patterns
        .iter()
        .map(String::as_str)
        .find(|pattern| relative_path.contains(pattern))
}

/// Checks whether a file's relative path contains any exclusion pattern.
///
/// # Examples
///
/// ```
/// use extpack_core::creation::filters;
///
/// let patterns = vec![".DS_Store".to_string()];
/// assert!(filters::is_excluded("icons/.DS_Store", &patterns));
/// assert!(!filters::is_excluded("icons/icon48.png", &patterns));
/// ```
#[must_use]
pub fn is_excluded(relative_path: &str, patterns: &[String]) -> bool {
    matching_pattern(relative_path, patterns).is_some()
}

/// Checks whether a directory should be pruned from the walk.
///
/// Only an exact match of the bare directory name counts. A directory such
/// as `lib/.github` is still descended into even though `.git` is a
/// substring of its name; its files are then caught by [`is_excluded`].
#[must_use]
pub fn is_excluded_dir_name(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| pattern == name)
}

/// Computes the archive entry name of a relative path.
///
/// Normal components are joined with `/` regardless of platform. Leading
/// `./` components are dropped.
///
/// # Errors
///
/// Returns an error if the path is absolute, contains `..`, is empty, or is
/// not valid UTF-8.
///
/// # Examples
///
/// ```
/// use extpack_core::creation::filters;
/// use std::path::Path;
///
/// let name = filters::archive_entry_name(Path::new("lib/vendor/a.js")).unwrap();
/// assert_eq!(name, "lib/vendor/a.js");
///
/// assert!(filters::archive_entry_name(Path::new("../secret")).is_err());
/// ```
pub fn archive_entry_name(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    PackError::InvalidArchive(format!(
                        "path is not valid UTF-8: {}",
                        relative.display()
                    ))
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(PackError::InvalidArchive(format!(
                    "entry path must be relative and stay inside the root: {}",
                    relative.display()
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(PackError::InvalidArchive(format!(
            "empty entry path: {}",
            relative.display()
        )));
    }

    Ok(parts.join("/"))
}
