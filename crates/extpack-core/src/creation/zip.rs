//! ZIP archive creation.
//!
//! Declared files are written first, in declaration order, followed by the
//! contents of each declared directory. Entry names are the paths relative
//! to the packaging root.

use crate::PackageConfig;
use crate::Result;
use crate::creation::atomic;
use crate::creation::filters;
use crate::creation::output::prepare_output_dir;
use crate::creation::report::BuildReport;
use crate::creation::walker::DirectoryWalker;
use crate::creation::walker::WalkedEntry;
use crate::progress::BuildProgress;
use crate::progress::MissingKind;
use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::DateTime;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds the distribution archive for `version`.
///
/// The archive is written to `<output_dir>/<prefix>-<version>-latest.zip`,
/// replacing any previous archive of the same name. It is staged in a
/// temporary file and only moved into place once complete.
///
/// Missing declared files and directories are recorded as warnings, not
/// errors.
///
/// # Examples
///
/// ```no_run
/// use extpack_core::NoopProgress;
/// use extpack_core::PackageConfig;
/// use extpack_core::creation::zip::build_archive;
///
/// let config = PackageConfig::default();
/// let report = build_archive(&config, "2.3.0", &mut NoopProgress)?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), extpack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The output directory or archive cannot be created
/// - A file cannot be read or a directory cannot be walked
/// - The zip container cannot be finalized
pub fn build_archive(
    config: &PackageConfig,
    version: &str,
    progress: &mut dyn BuildProgress,
) -> Result<BuildReport> {
    config.validate()?;
    let start = Instant::now();

    let output_dir = config.output_dir_path();
    let output_dir_created = prepare_output_dir(&output_dir)?;
    if output_dir_created {
        progress.on_output_dir_created(&output_dir);
    }

    let archive_path = config.archive_path(version);
    progress.on_archive_start(&archive_path);
    tracing::debug!(archive = %archive_path.display(), "creating archive");

    let mut report = BuildReport {
        version: version.to_string(),
        output_dir_created,
        ..BuildReport::default()
    };

    let staging = atomic::staging_file(&output_dir)?;
    let mut builder = ZipBuilder::new(staging, config);

    for file in &config.include_files {
        builder.add_declared_file(file, &mut report, progress)?;
    }
    for dir in &config.include_dirs {
        builder.add_declared_dir(dir, &mut report, progress)?;
    }

    let staging = builder.finish()?;
    atomic::publish(staging, &archive_path)?;

    report.archive_size = std::fs::metadata(&archive_path)?.len();
    report.duration = start.elapsed();
    progress.on_complete(&archive_path);
    report.archive_path = archive_path;

    Ok(report)
}

/// Writes packaged files into a zip container.
struct ZipBuilder<'a, W: Write + Seek> {
    zip: ZipWriter<W>,
    config: &'a PackageConfig,
    options: SimpleFileOptions,
    seen: HashSet<String>,
}

impl<'a, W: Write + Seek> ZipBuilder<'a, W> {
    fn new(writer: W, config: &'a PackageConfig) -> Self {
        // Fixed timestamps keep archives byte-identical across runs
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(config.compression_level.map(i64::from))
            .last_modified_time(DateTime::default());

        Self {
            zip: ZipWriter::new(writer),
            config,
            options,
            seen: HashSet::new(),
        }
    }

    fn add_declared_file(
        &mut self,
        file: &Path,
        report: &mut BuildReport,
        progress: &mut dyn BuildProgress,
    ) -> Result<()> {
        let path = self.config.resolve(file);
        let kind = match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => None,
            Ok(_) => Some(MissingKind::NotAFile),
            Err(e) if e.kind() == ErrorKind::NotFound => Some(MissingKind::File),
            Err(e) => return Err(e.into()),
        };

        if let Some(kind) = kind {
            let message = match kind {
                MissingKind::NotAFile => format!("Not a regular file: {}", file.display()),
                _ => format!("File not found: {}", file.display()),
            };
            tracing::debug!("{message}");
            report.missing += 1;
            report.add_warning(message);
            progress.on_missing(file, kind);
            return Ok(());
        }

        let entry_name = filters::archive_entry_name(file)?;
        if self.add_file(&path, entry_name.clone(), report)? {
            progress.on_file_added(&entry_name, true);
        }
        Ok(())
    }

    fn add_declared_dir(
        &mut self,
        dir: &Path,
        report: &mut BuildReport,
        progress: &mut dyn BuildProgress,
    ) -> Result<()> {
        if !self.config.resolve(dir).is_dir() {
            let message = format!("Directory not found: {}", dir.display());
            tracing::debug!("{message}");
            report.missing += 1;
            report.add_warning(message);
            progress.on_missing(dir, MissingKind::Directory);
            return Ok(());
        }

        progress.on_directory_start(dir);
        let config = self.config;
        let walker = DirectoryWalker::new(&config.root, dir, &config.exclude_patterns);

        for entry in walker {
            match entry? {
                WalkedEntry::File {
                    path, entry_name, ..
                } => {
                    if self.add_file(&path, entry_name.clone(), report)? {
                        progress.on_file_added(&entry_name, false);
                    }
                }
                WalkedEntry::Excluded {
                    entry_name,
                    pattern,
                    ..
                } => {
                    tracing::debug!(entry = %entry_name, %pattern, "excluded");
                    report.excluded += 1;
                    progress.on_excluded(&entry_name, &pattern);
                }
                WalkedEntry::Unsupported { entry_name } => {
                    report.add_warning(format!("Skipped symlink or special file: {entry_name}"));
                    progress.on_unsupported(&entry_name);
                }
            }
        }

        Ok(())
    }

    /// Adds one file. Returns `false` if an entry with the same name was
    /// already written.
    fn add_file(
        &mut self,
        path: &Path,
        entry_name: String,
        report: &mut BuildReport,
    ) -> Result<bool> {
        if self.seen.contains(&entry_name) {
            report.add_warning(format!("Skipped duplicate entry: {entry_name}"));
            return Ok(false);
        }

        let mut file = File::open(path)?;
        let options = file_options(self.options, &file)?;

        self.zip.start_file(entry_name.as_str(), options)?;
        let bytes = std::io::copy(&mut file, &mut self.zip)?;
        tracing::debug!(entry = %entry_name, bytes, "added");

        report.files_added += 1;
        report.bytes_written += bytes;
        report.entries.push(entry_name.clone());
        self.seen.insert(entry_name);
        Ok(true)
    }

    fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

#[cfg(unix)]
fn file_options(options: SimpleFileOptions, file: &File) -> Result<SimpleFileOptions> {
    use std::os::unix::fs::PermissionsExt;
    let mode = file.metadata()?.permissions().mode();
    Ok(options.unix_permissions(mode))
}

#[cfg(not(unix))]
fn file_options(options: SimpleFileOptions, _file: &File) -> Result<SimpleFileOptions> {
    Ok(options)
}
