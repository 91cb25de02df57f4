//! Version resolution from the extension manifest.

use crate::PackError;
use crate::Result;
use serde_json::Value;
use std::path::Path;

/// Version used when the manifest cannot provide one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Reads the `version` field of a JSON manifest.
///
/// String values are returned verbatim, numbers and booleans as their JSON
/// text. The value is never validated against a versioning scheme.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not valid JSON
/// - The `version` field is absent, `null`, an array or an object
///
/// # Examples
///
/// ```no_run
/// use extpack_core::manifest::read_version;
///
/// let version = read_version("manifest.json")?;
/// println!("packaging {version}");
/// # Ok::<(), extpack_core::PackError>(())
/// ```
pub fn read_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PackError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_str(&contents).map_err(|source| PackError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    match document.get("version") {
        Some(Value::String(version)) => Ok(version.clone()),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
        _ => Err(PackError::MissingVersion {
            path: path.to_path_buf(),
        }),
    }
}

/// Resolves the version to embed in the archive name.
///
/// Never fails: any problem reading the manifest is logged and
/// [`UNKNOWN_VERSION`] is returned instead.
///
/// # Examples
///
/// ```
/// use extpack_core::manifest::UNKNOWN_VERSION;
/// use extpack_core::manifest::resolve_version;
///
/// let version = resolve_version("/nonexistent/manifest.json");
/// assert_eq!(version, UNKNOWN_VERSION);
/// ```
pub fn resolve_version<P: AsRef<Path>>(path: P) -> String {
    match read_version(path) {
        Ok(version) => version,
        Err(err) => {
            tracing::warn!("falling back to version '{UNKNOWN_VERSION}': {err}");
            UNKNOWN_VERSION.to_string()
        }
    }
}
