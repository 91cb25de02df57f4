//! High-level packaging API.

use crate::BuildProgress;
use crate::BuildReport;
use crate::PackError;
use crate::PackageConfig;
use crate::Result;
use crate::creation::build_archive;
use crate::manifest::resolve_version;

/// Packages the extension described by `config`.
///
/// Checks that the manifest exists, resolves the version from it and builds
/// the archive. An unreadable manifest or one without a version still
/// produces an archive, named with the `unknown` version.
///
/// # Errors
///
/// Returns [`PackError::ManifestNotFound`] without touching the filesystem if
/// the manifest is absent, or any error from [`build_archive`].
///
/// # Examples
///
/// ```no_run
/// use extpack_core::NoopProgress;
/// use extpack_core::PackageConfig;
/// use extpack_core::package;
///
/// let report = package(&PackageConfig::default(), &mut NoopProgress)?;
/// println!("{} ({} files)", report.archive_path.display(), report.files_added);
/// # Ok::<(), extpack_core::PackError>(())
/// ```
pub fn package(config: &PackageConfig, progress: &mut dyn BuildProgress) -> Result<BuildReport> {
    let manifest = config.manifest_location();
    if !manifest.exists() {
        return Err(PackError::ManifestNotFound { path: manifest });
    }

    let version = resolve_version(&manifest);
    tracing::info!(%version, "packaging extension");
    progress.on_version(&version);

    build_archive(config, &version, progress)
}
