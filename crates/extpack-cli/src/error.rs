//! Error conversion utilities for CLI.
//!
//! Converts extpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance, and maps them to
//! process exit codes.

use anyhow::anyhow;
use extpack_core::PackError;
use std::io;
use std::path::Path;
use std::process::ExitCode;

/// Exit status when the archive could not be built.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when the command was run outside an extension directory.
pub const EXIT_USAGE: u8 = 2;

/// Returns the process exit code for a packaging error.
pub fn exit_code(err: &PackError) -> ExitCode {
    match err {
        PackError::ManifestNotFound { .. } => ExitCode::from(EXIT_USAGE),
        _ => ExitCode::from(EXIT_FAILURE),
    }
}

/// Converts `PackError` to user-friendly anyhow error with context
pub fn convert_pack_error(err: PackError) -> anyhow::Error {
    match err {
        PackError::ManifestNotFound { path } => {
            anyhow!(
                "{} not found\n\
                 HINT: Run extpack from the extension directory (the one containing manifest.json).",
                path.display()
            )
        }
        PackError::Io(io_err) if io_err.kind() == io::ErrorKind::NotADirectory => {
            anyhow!(
                "Cannot create distribution: {io_err}\n\
                 HINT: Move or delete that file so the output directory can be created."
            )
        }
        PackError::Io(io_err) => {
            anyhow!(
                "I/O error while creating distribution: {io_err}\n\
                 HINT: Check that the output directory is writable and the disk is not full."
            )
        }
        PackError::InvalidArchive(reason) => {
            anyhow!("Archive could not be written: {reason}")
        }
        PackError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level: {level}\n\
                 HINT: Use --compression-level with a value between 1 and 9."
            )
        }
        PackError::Walk { path, reason } => {
            anyhow!(
                "Cannot read directory '{}': {reason}\n\
                 HINT: Check the directory permissions.",
                path.display()
            )
        }
        _ => anyhow::Error::from(err).context("Error creating distribution"),
    }
}

/// Adds context to an error about an existing archive
pub fn add_archive_context<T>(result: Result<T, PackError>, archive: &Path) -> anyhow::Result<T> {
    result.map_err(|err| match err {
        PackError::InvalidArchive(reason) => anyhow!(
            "Invalid archive '{}': {reason}\n\
             HINT: The archive may be corrupted or not a zip file.",
            archive.display()
        ),
        PackError::Io(io_err) => anyhow!(
            "I/O error while reading '{}': {io_err}",
            archive.display()
        ),
        other => anyhow::Error::from(other)
            .context(format!("Error reading archive '{}'", archive.display())),
    })
}
