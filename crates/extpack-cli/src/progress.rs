//! Console progress lines for packaging runs.

use crate::output::display_path;
use console::Term;
use console::style;
use extpack_core::BuildProgress;
use extpack_core::MissingKind;
use std::path::Path;

/// Prints one line per packaging step to stdout.
pub struct ConsoleProgress {
    term: Term,
    verbose: bool,
    use_colors: bool,
}

impl ConsoleProgress {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self {
            term: Term::stdout(),
            verbose,
            use_colors: console::colors_enabled(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn warning(&self, text: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {text}", style("Warning:").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("Warning: {text}"));
        }
    }
}

impl BuildProgress for ConsoleProgress {
    fn on_version(&mut self, version: &str) {
        self.line(&format!("Creating distribution for version: {version}"));
    }

    fn on_output_dir_created(&mut self, path: &Path) {
        self.line(&format!("Created directory: {}", display_path(path)));
    }

    fn on_archive_start(&mut self, path: &Path) {
        self.line(&format!(
            "Creating distribution file: {}",
            display_path(path)
        ));
    }

    fn on_file_added(&mut self, entry_name: &str, declared: bool) {
        self.line(&added_message(entry_name, declared));
    }

    fn on_directory_start(&mut self, dir: &Path) {
        self.line(&format!("Adding directory: {}", display_path(dir)));
    }

    fn on_excluded(&mut self, entry_name: &str, pattern: &str) {
        if self.verbose {
            self.line(&format!("  Excluded: {entry_name} (matches '{pattern}')"));
        }
    }

    fn on_missing(&mut self, path: &Path, kind: MissingKind) {
        self.warning(&missing_message(path, kind));
    }

    fn on_unsupported(&mut self, entry_name: &str) {
        self.warning(&format!("Skipped symlink or special file: {entry_name}"));
    }
}

fn added_message(entry_name: &str, declared: bool) -> String {
    if declared {
        format!("Adding file: {entry_name}")
    } else {
        format!("  Adding: {entry_name}")
    }
}

fn missing_message(path: &Path, kind: MissingKind) -> String {
    let path = display_path(path);
    match kind {
        MissingKind::File => format!("File not found: {path}"),
        MissingKind::NotAFile => format!("Not a regular file: {path}"),
        MissingKind::Directory => format!("Directory not found: {path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_message() {
        assert_eq!(added_message("manifest.json", true), "Adding file: manifest.json");
        assert_eq!(added_message("lib/vendor.js", false), "  Adding: lib/vendor.js");
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(
            missing_message(Path::new("README.md"), MissingKind::File),
            "File not found: README.md"
        );
        assert_eq!(
            missing_message(Path::new("icons"), MissingKind::Directory),
            "Directory not found: icons"
        );
        assert_eq!(
            missing_message(Path::new("LICENSE"), MissingKind::NotAFile),
            "Not a regular file: LICENSE"
        );
    }

    #[test]
    fn test_progress_callbacks() {
        let mut progress = ConsoleProgress::new(true);
        progress.on_version("1.0");
        progress.on_file_added("manifest.json", true);
        progress.on_excluded("lib/.git", ".git");
        progress.on_missing(Path::new("README.md"), MissingKind::File);
    }
}
