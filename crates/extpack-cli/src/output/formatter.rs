//! Output formatter trait for CLI results.

use anyhow::Result;
use extpack_core::ArchiveListing;
use extpack_core::BuildProgress;
use extpack_core::BuildReport;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Print the header shown before a build starts
    fn format_banner(&self);

    /// Progress observer used while the archive is built
    fn build_progress(&self) -> Box<dyn BuildProgress>;

    /// Format a successful build together with the archive's contents
    fn format_build_result(&self, report: &BuildReport, listing: &ArchiveListing) -> Result<()>;

    /// Format a build that failed after it started
    fn format_build_failed(&self, error: &anyhow::Error);

    /// Format the contents of an archive
    fn format_listing(&self, listing: &ArchiveListing, long: bool) -> Result<()>;

    /// Format error message
    fn format_error(&self, operation: &str, error: &anyhow::Error);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
