//! Directory tree walking with exclusion filtering.
//!
//! The walk is depth-first. At each level the files come before the
//! subdirectories and both are sorted by name, so repeated runs over the same
//! tree produce the same entry order.

use crate::PackError;
use crate::Result;
use crate::creation::filters;
use std::cmp::Ordering;
use std::path::Path;
use std::path::PathBuf;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// An entry produced while walking a declared directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkedEntry {
    /// Regular file that passed every exclusion rule.
    File {
        /// Filesystem path of the file.
        path: PathBuf,
        /// Name of the entry inside the archive.
        entry_name: String,
        /// File size in bytes.
        size: u64,
    },

    /// File or directory removed by an exclusion pattern.
    Excluded {
        /// Relative path of the excluded entry.
        entry_name: String,
        /// Whether the entry is a pruned directory.
        is_dir: bool,
        /// Pattern that caused the exclusion.
        pattern: String,
    },

    /// Special file, directory symlink or dangling symlink; never packaged.
    Unsupported {
        /// Relative path of the skipped entry.
        entry_name: String,
    },
}

impl WalkedEntry {
    /// Returns the archive-relative name of the entry.
    #[must_use]
    pub fn entry_name(&self) -> &str {
        match self {
            Self::File { entry_name, .. }
            | Self::Excluded { entry_name, .. }
            | Self::Unsupported { entry_name } => entry_name,
        }
    }
}

/// Walks one declared directory and applies the exclusion rules.
///
/// # Examples
///
/// ```no_run
/// use extpack_core::creation::walker::DirectoryWalker;
/// use extpack_core::creation::walker::WalkedEntry;
/// use std::path::Path;
///
/// let patterns = vec![".git".to_string()];
/// for entry in DirectoryWalker::new(Path::new("."), Path::new("lib"), &patterns) {
///     if let WalkedEntry::File { entry_name, .. } = entry? {
///         println!("would add {entry_name}");
///     }
/// }
/// # Ok::<(), extpack_core::PackError>(())
/// ```
pub struct DirectoryWalker<'a> {
    root: PathBuf,
    patterns: &'a [String],
    inner: walkdir::IntoIter,
}

impl<'a> DirectoryWalker<'a> {
    /// Creates a walker over `root/dir`.
    ///
    /// Entry names are computed relative to `root`, so they keep the `dir`
    /// prefix (`lib/vendor.js`, not `vendor.js`).
    #[must_use]
    pub fn new(root: &Path, dir: &Path, patterns: &'a [String]) -> Self {
        let inner = WalkDir::new(root.join(dir))
            .follow_links(false)
            .sort_by(files_first)
            .into_iter();

        Self {
            root: root.to_path_buf(),
            patterns,
            inner,
        }
    }

    fn classify(&mut self, entry: &DirEntry) -> Result<Option<WalkedEntry>> {
        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .map_err(|_| PackError::Walk {
                path: entry.path().to_path_buf(),
                reason: format!("not under packaging root {}", self.root.display()),
            })?;
        let entry_name = filters::archive_entry_name(relative)?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            // The declared directory itself is never pruned
            if entry.depth() == 0 {
                return Ok(None);
            }
            let name = entry.file_name().to_string_lossy();
            if filters::is_excluded_dir_name(&name, self.patterns) {
                self.inner.skip_current_dir();
                return Ok(Some(WalkedEntry::Excluded {
                    entry_name,
                    is_dir: true,
                    pattern: name.into_owned(),
                }));
            }
            return Ok(None);
        }

        if !file_type.is_file() && !file_type.is_symlink() {
            return Ok(Some(WalkedEntry::Unsupported { entry_name }));
        }

        if let Some(pattern) = filters::matching_pattern(&entry_name, self.patterns) {
            return Ok(Some(WalkedEntry::Excluded {
                pattern: pattern.to_string(),
                entry_name,
                is_dir: false,
            }));
        }

        let metadata = if file_type.is_symlink() {
            // Links to regular files are packaged under the link's name;
            // directory links are never descended into
            match std::fs::metadata(entry.path()) {
                Ok(target) if target.is_file() => target,
                _ => return Ok(Some(WalkedEntry::Unsupported { entry_name })),
            }
        } else {
            entry.metadata().map_err(|e| PackError::Walk {
                path: entry.path().to_path_buf(),
                reason: format!("cannot read metadata: {e}"),
            })?
        };

        Ok(Some(WalkedEntry::File {
            path: entry.path().to_path_buf(),
            entry_name,
            size: metadata.len(),
        }))
    }
}

impl Iterator for DirectoryWalker<'_> {
    type Item = Result<WalkedEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                    return Some(Err(PackError::Walk {
                        path,
                        reason: e.to_string(),
                    }));
                }
            };

            match self.classify(&entry) {
                Ok(Some(walked)) => return Some(Ok(walked)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Orders files before directories, then by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn patterns() -> Vec<String> {
        vec![".git".to_string(), ".DS_Store".to_string(), "dist".to_string()]
    }

    fn walk(root: &Path, dir: &str, patterns: &[String]) -> Vec<WalkedEntry> {
        DirectoryWalker::new(root, Path::new(dir), patterns)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    fn added(entries: &[WalkedEntry]) -> Vec<&str> {
        entries
            .iter()
            .filter(|e| matches!(e, WalkedEntry::File { .. }))
            .map(WalkedEntry::entry_name)
            .collect()
    }

    #[test]
    fn test_walk_keeps_directory_prefix() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib/nested")).unwrap();
        fs::write(temp.path().join("lib/vendor.js"), "v").unwrap();
        fs::write(temp.path().join("lib/nested/util.js"), "u").unwrap();

        let entries = walk(temp.path(), "lib", &patterns());
        assert_eq!(added(&entries), vec!["lib/vendor.js", "lib/nested/util.js"]);
    }

    #[test]
    fn test_walk_files_before_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib/a")).unwrap();
        fs::create_dir_all(temp.path().join("lib/b")).unwrap();
        fs::write(temp.path().join("lib/z.js"), "z").unwrap();
        fs::write(temp.path().join("lib/a/1.js"), "1").unwrap();
        fs::write(temp.path().join("lib/b/2.js"), "2").unwrap();
        fs::write(temp.path().join("lib/m.js"), "m").unwrap();

        let entries = walk(temp.path(), "lib", &patterns());
        assert_eq!(
            added(&entries),
            vec!["lib/m.js", "lib/z.js", "lib/a/1.js", "lib/b/2.js"]
        );
    }

    #[test]
    fn test_walk_prunes_excluded_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib/.git/objects")).unwrap();
        fs::write(temp.path().join("lib/vendor.js"), "v").unwrap();
        fs::write(temp.path().join("lib/.git/config"), "c").unwrap();
        fs::write(temp.path().join("lib/.git/objects/ab"), "o").unwrap();

        let entries = walk(temp.path(), "lib", &patterns());
        assert_eq!(added(&entries), vec!["lib/vendor.js"]);
        assert!(entries.contains(&WalkedEntry::Excluded {
            entry_name: "lib/.git".to_string(),
            is_dir: true,
            pattern: ".git".to_string(),
        }));
        // Pruned directories are not descended into
        assert!(!entries.iter().any(|e| e.entry_name() == "lib/.git/config"));
    }

    #[test]
    fn test_walk_excludes_files_by_substring() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("icons")).unwrap();
        fs::write(temp.path().join("icons/icon16.png"), "i").unwrap();
        fs::write(temp.path().join("icons/.DS_Store"), "d").unwrap();

        let entries = walk(temp.path(), "icons", &patterns());
        assert_eq!(added(&entries), vec!["icons/icon16.png"]);
        assert!(entries.contains(&WalkedEntry::Excluded {
            entry_name: "icons/.DS_Store".to_string(),
            is_dir: false,
            pattern: ".DS_Store".to_string(),
        }));
    }

    #[test]
    fn test_walk_substring_directory_descended_but_files_excluded() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib/.github")).unwrap();
        fs::write(temp.path().join("lib/.github/ci.yml"), "ci").unwrap();
        fs::write(temp.path().join("lib/ok.js"), "ok").unwrap();

        let entries = walk(temp.path(), "lib", &patterns());
        assert_eq!(added(&entries), vec!["lib/ok.js"]);
        // The directory was walked, its file excluded by the path rule
        assert!(entries.contains(&WalkedEntry::Excluded {
            entry_name: "lib/.github/ci.yml".to_string(),
            is_dir: false,
            pattern: ".git".to_string(),
        }));
    }

    #[test]
    fn test_walk_declared_root_named_like_pattern() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("dist/app.js"), "a").unwrap();

        // The root itself is not pruned but every file path contains "dist"
        let entries = walk(temp.path(), "dist", &patterns());
        assert!(added(&entries).is_empty());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_walk_reports_file_size() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::write(temp.path().join("lib/data.bin"), [0u8; 42]).unwrap();

        let entries = walk(temp.path(), "lib", &[]);
        assert!(matches!(
            &entries[0],
            WalkedEntry::File { size: 42, entry_name, .. } if entry_name == "lib/data.bin"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_packages_file_symlink() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::create_dir_all(temp.path().join("vendor")).unwrap();
        fs::write(temp.path().join("lib/a.js"), "a").unwrap();
        fs::write(temp.path().join("vendor/real.js"), "real").unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("vendor/real.js"),
            temp.path().join("lib/linked.js"),
        )
        .unwrap();

        let entries = walk(temp.path(), "lib", &[]);
        assert_eq!(added(&entries), vec!["lib/a.js", "lib/linked.js"]);
        assert!(matches!(
            &entries[1],
            WalkedEntry::File { size: 4, entry_name, path }
                if entry_name == "lib/linked.js" && path.ends_with("lib/linked.js")
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_file_symlink_still_excluded() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::write(temp.path().join("real.js"), "r").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.js"), temp.path().join("lib/.DS_Store"))
            .unwrap();

        let entries = walk(temp.path(), "lib", &patterns());
        assert!(added(&entries).is_empty());
        assert_eq!(
            entries,
            vec![WalkedEntry::Excluded {
                entry_name: "lib/.DS_Store".to_string(),
                is_dir: false,
                pattern: ".DS_Store".to_string(),
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_directory_symlink() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::create_dir_all(temp.path().join("shared")).unwrap();
        fs::write(temp.path().join("shared/util.js"), "u").unwrap();
        std::os::unix::fs::symlink(temp.path().join("shared"), temp.path().join("lib/shared"))
            .unwrap();

        let entries = walk(temp.path(), "lib", &[]);
        assert!(added(&entries).is_empty());
        assert_eq!(
            entries,
            vec![WalkedEntry::Unsupported {
                entry_name: "lib/shared".to_string(),
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_dangling_symlink_unsupported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::write(temp.path().join("lib/real.js"), "r").unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("lib/gone.js"),
            temp.path().join("lib/broken.js"),
        )
        .unwrap();

        let entries = walk(temp.path(), "lib", &[]);
        assert_eq!(added(&entries), vec!["lib/real.js"]);
        assert!(entries.contains(&WalkedEntry::Unsupported {
            entry_name: "lib/broken.js".to_string(),
        }));
    }

    #[test]
    fn test_walk_missing_directory_errors() {
        let temp = TempDir::new().unwrap();
        let result: Result<Vec<_>> =
            DirectoryWalker::new(temp.path(), Path::new("missing"), &[]).collect();
        assert!(matches!(result, Err(PackError::Walk { .. })));
    }
}
