//! Deterministic packaging of browser extension assets.
//!
//! `extpack-core` reads an extension's version from its `manifest.json`,
//! collects a declared set of files and directories, drops anything matching
//! an exclusion pattern and writes the result to
//! `dist/<prefix>-<version>-latest.zip`. Archives are staged in a temporary
//! file and renamed into place, so a failed run never publishes a truncated
//! archive.
//!
//! # Examples
//!
//! ```no_run
//! use extpack_core::NoopProgress;
//! use extpack_core::PackageConfig;
//! use extpack_core::list_archive;
//! use extpack_core::package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackageConfig::default();
//! let report = package(&config, &mut NoopProgress)?;
//!
//! for entry in list_archive(&report.archive_path)?.names() {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod creation;
pub mod error;
pub mod inspection;
pub mod manifest;
pub mod progress;

// Re-export main API types
pub use api::package;
pub use config::PackageConfig;
pub use creation::BuildReport;
pub use creation::build_archive;
pub use creation::prepare_output_dir;
pub use error::PackError;
pub use error::Result;
pub use inspection::ArchiveListing;
pub use inspection::ListedEntry;
pub use inspection::list_archive;
pub use manifest::UNKNOWN_VERSION;
pub use manifest::resolve_version;
pub use progress::BuildProgress;
pub use progress::MissingKind;
pub use progress::NoopProgress;
