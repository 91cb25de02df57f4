//! Configuration for extension packaging.

use crate::PackError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Configuration for a packaging run.
///
/// Describes where the extension lives, which of its files end up in the
/// distribution archive, and where that archive is written. All relative
/// paths are resolved against [`root`](Self::root).
///
/// # Examples
///
/// ```
/// use extpack_core::PackageConfig;
///
/// // The extension's fixed file set
/// let config = PackageConfig::default();
/// assert_eq!(
///     config.archive_file_name("2.3.0"),
///     "ixl-score-extension-2.3.0-latest.zip"
/// );
///
/// // A custom file set for tests or other extensions
/// let custom = PackageConfig::default()
///     .with_root("/tmp/ext")
///     .with_include_files(vec!["manifest.json".into()])
///     .with_include_dirs(vec![])
///     .with_compression_level(9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Directory every other path is relative to.
    ///
    /// Default: `.` (the current working directory).
    pub root: PathBuf,

    /// Location of the extension manifest, relative to `root`.
    ///
    /// Default: `manifest.json`.
    pub manifest_path: PathBuf,

    /// Directory the archive is written into, relative to `root`.
    ///
    /// Default: `dist`.
    pub output_dir: PathBuf,

    /// Leading part of the archive file name.
    ///
    /// The full name is `<prefix>-<version>-latest.zip`.
    ///
    /// Default: `ixl-score-extension`.
    pub archive_prefix: String,

    /// Individual files to package, in order.
    ///
    /// Missing files are skipped with a warning.
    pub include_files: Vec<PathBuf>,

    /// Directories to package recursively, in order.
    ///
    /// Missing directories are skipped with a warning.
    pub include_dirs: Vec<PathBuf>,

    /// Literal substrings that exclude walked entries.
    ///
    /// A file is excluded when its relative path contains any pattern. A
    /// directory is not descended into when its name equals a pattern.
    /// `*` has no special meaning.
    pub exclude_patterns: Vec<String>,

    /// Deflate compression level (1-9).
    ///
    /// `None` uses the zip library default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest_path: PathBuf::from("manifest.json"),
            output_dir: PathBuf::from("dist"),
            archive_prefix: "ixl-score-extension".to_string(),
            include_files: [
                "manifest.json",
                "popup.html",
                "popup.js",
                "content.js",
                "background.js",
                "styles.css",
                "README.md",
                "LICENSE",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            include_dirs: vec![PathBuf::from("lib"), PathBuf::from("icons")],
            exclude_patterns: [
                ".git",
                ".DS_Store",
                "__pycache__",
                "*.pyc",
                "create_distribution.py",
                ".gitignore",
                "dist",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            compression_level: Some(6),
        }
    }
}

impl PackageConfig {
    /// Creates a new `PackageConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the packaging root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the manifest location.
    #[must_use]
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the archive name prefix.
    #[must_use]
    pub fn with_archive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.archive_prefix = prefix.into();
        self
    }

    /// Sets the individually packaged files.
    #[must_use]
    pub fn with_include_files(mut self, files: Vec<PathBuf>) -> Self {
        self.include_files = files;
        self
    }

    /// Sets the recursively packaged directories.
    #[must_use]
    pub fn with_include_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.include_dirs = dirs;
        self
    }

    /// Sets the exclude patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the compression level is not in the range 1-9.
    /// Set the field directly and call `validate()` for non-panicking
    /// validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but not in range 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(PackError::InvalidCompressionLevel { level });
        }
        Ok(())
    }

    /// Returns the archive file name for `version`.
    #[must_use]
    pub fn archive_file_name(&self, version: &str) -> String {
        format!("{}-{version}-latest.zip", self.archive_prefix)
    }

    /// Returns the full path of the archive for `version`.
    #[must_use]
    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.output_dir_path().join(self.archive_file_name(version))
    }

    /// Returns the manifest location resolved against `root`.
    #[must_use]
    pub fn manifest_location(&self) -> PathBuf {
        self.resolve(&self.manifest_path)
    }

    /// Returns the output directory resolved against `root`.
    #[must_use]
    pub fn output_dir_path(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Resolves a configured path against `root`.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
