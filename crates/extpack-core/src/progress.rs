//! Progress reporting hooks for packaging runs.

use std::path::Path;

/// Why a declared asset was not packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKind {
    /// A declared file does not exist.
    File,
    /// A declared path exists but is not a regular file.
    NotAFile,
    /// A declared directory does not exist or is not a directory.
    Directory,
}

/// Callback trait for observing a packaging run.
///
/// The builder never prints; everything a user sees while an archive is
/// being built goes through an implementation of this trait.
///
/// # Examples
///
/// ```
/// use extpack_core::BuildProgress;
/// use std::path::Path;
///
/// struct Counter {
///     added: usize,
/// }
///
/// impl BuildProgress for Counter {
///     fn on_file_added(&mut self, _entry_name: &str, _declared: bool) {
///         self.added += 1;
///     }
/// }
/// ```
pub trait BuildProgress {
    /// Called once the archive version is known.
    fn on_version(&mut self, _version: &str) {}

    /// Called when the output directory had to be created.
    fn on_output_dir_created(&mut self, _path: &Path) {}

    /// Called before the archive file is opened.
    fn on_archive_start(&mut self, _path: &Path) {}

    /// Called after a file has been written into the archive.
    ///
    /// `declared` is `true` for individually declared files and `false` for
    /// files found while walking a declared directory.
    fn on_file_added(&mut self, _entry_name: &str, _declared: bool) {}

    /// Called when the walk of a declared directory starts.
    fn on_directory_start(&mut self, _dir: &Path) {}

    /// Called when a walked file or directory matches an exclusion pattern.
    fn on_excluded(&mut self, _entry_name: &str, _pattern: &str) {}

    /// Called when a declared asset is missing.
    fn on_missing(&mut self, _path: &Path, _kind: MissingKind) {}

    /// Called when a walked entry is a special file or a symlink that does
    /// not point to a regular file.
    fn on_unsupported(&mut self, _entry_name: &str) {}

    /// Called once the archive has been published.
    fn on_complete(&mut self, _archive_path: &Path) {}
}

/// No-op implementation of `BuildProgress`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl BuildProgress for NoopProgress {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_progress() {
        let mut progress = NoopProgress;
        progress.on_version("1.0");
        progress.on_file_added("manifest.json", true);
        progress.on_missing(Path::new("README.md"), MissingKind::File);
        progress.on_complete(Path::new("dist/a.zip"));
    }
}
