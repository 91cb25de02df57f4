//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use extpack_core::ArchiveListing;
use extpack_core::BuildProgress;
use extpack_core::BuildReport;
use extpack_core::NoopProgress;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    size: u64,
    compressed_size: u64,
}

impl OutputFormatter for JsonFormatter {
    fn format_banner(&self) {}

    fn build_progress(&self) -> Box<dyn BuildProgress> {
        Box::new(NoopProgress)
    }

    fn format_build_result(&self, report: &BuildReport, listing: &ArchiveListing) -> Result<()> {
        #[derive(Serialize)]
        struct BuildOutput<'a> {
            archive_path: String,
            version: &'a str,
            files_added: usize,
            excluded: usize,
            missing: usize,
            bytes_written: u64,
            archive_size: u64,
            size_kb: f64,
            compression_percentage: f64,
            output_dir_created: bool,
            duration_ms: u128,
            entries: Vec<&'a str>,
            warnings: &'a [String],
        }

        let data = BuildOutput {
            archive_path: report.archive_path.display().to_string(),
            version: &report.version,
            files_added: report.files_added,
            excluded: report.excluded,
            missing: report.missing,
            bytes_written: report.bytes_written,
            archive_size: report.archive_size,
            size_kb: report.size_kb(),
            compression_percentage: report.compression_percentage(),
            output_dir_created: report.output_dir_created,
            duration_ms: report.duration.as_millis(),
            entries: listing.names().collect(),
            warnings: &report.warnings,
        };

        Self::output(&JsonOutput::success("build", data))
    }

    fn format_build_failed(&self, error: &anyhow::Error) {
        self.format_error("build", error);
    }

    fn format_listing(&self, listing: &ArchiveListing, _long: bool) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput<'a> {
            archive_path: String,
            archive_size: u64,
            total_size: u64,
            entries: Vec<EntryOutput<'a>>,
        }

        let data = ListOutput {
            archive_path: listing.path.display().to_string(),
            archive_size: listing.archive_size,
            total_size: listing.total_size(),
            entries: listing
                .entries
                .iter()
                .map(|entry| EntryOutput {
                    name: &entry.name,
                    size: entry.size,
                    compressed_size: entry.compressed_size,
                })
                .collect(),
        };

        Self::output(&JsonOutput::success("list", data))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use extpack_core::ListedEntry;

    #[test]
    fn test_entry_output_structure() {
        let entry = ListedEntry {
            name: "lib/vendor.js".to_string(),
            size: 10,
            compressed_size: 8,
            is_dir: false,
        };
        let output = EntryOutput {
            name: &entry.name,
            size: entry.size,
            compressed_size: entry.compressed_size,
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["name"], "lib/vendor.js");
        assert_eq!(json["size"], 10);
        assert_eq!(json["compressed_size"], 8);
    }
}
