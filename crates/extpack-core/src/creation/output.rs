//! Output directory preparation.

use crate::Result;
use std::io;
use std::path::Path;

/// Ensures the output directory exists.
///
/// Missing parents are created too. Returns `true` if the directory was
/// created by this call and `false` if it was already present.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or `path` exists but
/// is not a directory.
///
/// # Examples
///
/// ```no_run
/// use extpack_core::creation::output::prepare_output_dir;
///
/// if prepare_output_dir("dist")? {
///     println!("Created directory: dist");
/// }
/// # Ok::<(), extpack_core::PackError>(())
/// ```
pub fn prepare_output_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("output path exists but is not a directory: {}", path.display()),
        )
        .into());
    }

    std::fs::create_dir_all(path)?;
    tracing::debug!(path = %path.display(), "created output directory");
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");

        assert!(prepare_output_dir(&dist).unwrap());
        assert!(dist.is_dir());
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");

        assert!(prepare_output_dir(&dist).unwrap());
        assert!(!prepare_output_dir(&dist).unwrap());
        assert!(!prepare_output_dir(&dist).unwrap());
        assert!(dist.is_dir());
    }

    #[test]
    fn test_prepare_creates_parents() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("build/out/dist");

        assert!(prepare_output_dir(&nested).unwrap());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_prepare_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("dist");
        std::fs::write(&file, "not a directory").unwrap();

        let err = prepare_output_dir(&file).unwrap_err();
        match err {
            crate::PackError::Io(io_err) => {
                assert_eq!(io_err.kind(), io::ErrorKind::NotADirectory);
                assert!(io_err.to_string().contains("not a directory"));
                assert!(io_err.to_string().contains("dist"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // The file is left in place
        assert!(file.is_file());
    }
}
