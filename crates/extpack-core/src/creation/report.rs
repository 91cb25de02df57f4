//! Packaging run reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of a successful packaging run.
///
/// # Examples
///
/// ```
/// use extpack_core::BuildReport;
///
/// let mut report = BuildReport::default();
/// report.bytes_written = 1000;
/// report.archive_size = 2560;
///
/// assert_eq!(report.size_kb(), 2.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Final location of the archive.
    pub archive_path: PathBuf,

    /// Version embedded in the archive name.
    pub version: String,

    /// Entry names in the order they were written.
    pub entries: Vec<String>,

    /// Number of files written to the archive.
    pub files_added: usize,

    /// Number of walked entries removed by exclusion patterns, counting a
    /// pruned directory once regardless of its contents.
    pub excluded: usize,

    /// Number of declared files and directories that were missing.
    pub missing: usize,

    /// Total bytes of packaged file contents (uncompressed).
    pub bytes_written: u64,

    /// Size of the archive file on disk.
    pub archive_size: u64,

    /// Whether the output directory was created by this run.
    pub output_dir_created: bool,

    /// Duration of the packaging run.
    pub duration: Duration,

    /// Warnings generated during the run.
    pub warnings: Vec<String>,
}

impl BuildReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the archive size in kilobytes (1 KB = 1024 bytes).
    #[must_use]
    pub fn size_kb(&self) -> f64 {
        self.archive_size as f64 / 1024.0
    }

    /// Returns the compression percentage (space saved).
    ///
    /// Returns 0.0 if nothing was written or the archive is larger than its
    /// contents, which is common for tiny inputs.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 || self.archive_size >= self.bytes_written {
            return 0.0;
        }
        (1.0 - self.archive_size as f64 / self.bytes_written as f64) * 100.0
    }
}
