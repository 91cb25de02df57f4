//! Archive listing implementation.

use crate::PackError;
use crate::Result;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

/// A single entry in an archive's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Whether the entry is a directory record.
    pub is_dir: bool,
}

/// Table of contents of a zip archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveListing {
    /// Path of the archive that was read.
    pub path: PathBuf,
    /// Size of the archive file in bytes.
    pub archive_size: u64,
    /// Entries in central directory order.
    pub entries: Vec<ListedEntry>,
}

impl ArchiveListing {
    /// Returns the entry names in archive order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Returns whether the archive has an entry called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Sum of the uncompressed entry sizes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|entry| entry.size).sum()
    }
}

/// Lists a zip archive's contents without extracting.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a readable zip
/// archive.
///
/// # Examples
///
/// ```no_run
/// use extpack_core::list_archive;
///
/// let listing = list_archive("dist/ixl-score-extension-2.3.0-latest.zip")?;
/// for name in listing.names() {
///     println!("  {name}");
/// }
/// # Ok::<(), extpack_core::PackError>(())
/// ```
pub fn list_archive<P: AsRef<Path>>(archive_path: P) -> Result<ArchiveListing> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path)?;
    let archive_size = file.metadata()?.len();

    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| PackError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| PackError::InvalidArchive(format!("failed to read ZIP entry: {e}")))?;

        entries.push(ListedEntry {
            name: entry.name().to_string(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            is_dir: entry.is_dir(),
        });
    }

    Ok(ArchiveListing {
        path: archive_path.to_path_buf(),
        archive_size,
        entries,
    })
}
