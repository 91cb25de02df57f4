//! Build command implementation

use crate::cli::BuildArgs;
use crate::error::convert_pack_error;
use crate::error::exit_code;
use crate::output::OutputFormatter;
use anyhow::Result;
use extpack_core::PackError;
use extpack_core::PackageConfig;
use extpack_core::list_archive;
use extpack_core::package;
use std::process::ExitCode;

/// Packages the extension in the current directory.
///
/// Packaging failures are reported through the formatter and turned into an
/// exit code; only output failures are returned as errors.
pub fn execute(args: &BuildArgs, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    let mut config = PackageConfig::default();
    if args.compression_level.is_some() {
        config.compression_level = args.compression_level;
    }

    formatter.format_banner();

    let mut progress = formatter.build_progress();
    let report = match package(&config, progress.as_mut()) {
        Ok(report) => report,
        Err(err) => return Ok(report_failure(err, formatter)),
    };

    // Read the table of contents back from the published archive
    let listing = match list_archive(&report.archive_path) {
        Ok(listing) => listing,
        Err(err) => return Ok(report_failure(err, formatter)),
    };

    formatter.format_build_result(&report, &listing)?;
    Ok(ExitCode::SUCCESS)
}

fn report_failure(err: PackError, formatter: &dyn OutputFormatter) -> ExitCode {
    let code = exit_code(&err);
    let precondition = matches!(err, PackError::ManifestNotFound { .. });
    let err = convert_pack_error(err);

    tracing::debug!("build failed: {err:#}");
    if precondition {
        formatter.format_error("build", &err);
    } else {
        formatter.format_build_failed(&err);
    }
    code
}
