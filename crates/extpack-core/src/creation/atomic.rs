//! Atomic archive publication.
//!
//! Archives are written to a hidden temporary file next to their final
//! location and renamed into place only after the zip container has been
//! finalized. A failed run leaves any previous archive untouched and removes
//! the temporary file when it is dropped.

use crate::PackError;
use crate::Result;
use std::path::Path;
use tempfile::NamedTempFile;

/// Creates the staging file an archive is written to.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created in `dir`.
pub fn staging_file(dir: &Path) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix(".extpack-")
        .suffix(".zip.partial")
        .tempfile_in(dir)?;
    Ok(file)
}

/// Moves a finished staging file to `target`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the data cannot be synced or the rename fails.
pub fn publish(staging: NamedTempFile, target: &Path) -> Result<()> {
    staging.as_file().sync_all()?;

    // Temporary files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staging
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    staging
        .persist(target)
        .map_err(|e| PackError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_publish_replaces_target() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.zip");
        fs::write(&target, "old").unwrap();

        let mut staging = staging_file(temp.path()).unwrap();
        staging.write_all(b"new").unwrap();
        publish(staging, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_dropped_staging_leaves_nothing() {
        let temp = TempDir::new().unwrap();
        {
            let mut staging = staging_file(temp.path()).unwrap();
            staging.write_all(b"partial").unwrap();
        }
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_published_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.zip");
        publish(staging_file(temp.path()).unwrap(), &target).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_staging_in_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(staging_file(&temp.path().join("missing")).is_err());
    }
}
