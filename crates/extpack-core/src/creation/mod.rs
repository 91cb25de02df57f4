//! Archive creation module.
//!
//! This module turns a [`PackageConfig`](crate::PackageConfig) and a version
//! string into a published zip archive.

pub mod atomic;
pub mod filters;
pub mod output;
pub mod walker;

pub mod report;
pub mod zip;

// Re-exports for public API
pub use output::prepare_output_dir;
pub use report::BuildReport;
pub use walker::DirectoryWalker;
pub use walker::WalkedEntry;
pub use self::zip::build_archive;
