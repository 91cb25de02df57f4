//! Output formatting module.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use human::HumanFormatter;
use json::JsonFormatter;
use std::path::Component;
use std::path::Path;

/// Creates an output formatter based on CLI flags
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(verbose, quiet))
    }
}

/// Renders a path for display, dropping a leading `./`
pub fn display_path(path: &Path) -> String {
    let mut components = path.components();
    if path.components().next() == Some(Component::CurDir) && path.components().count() > 1 {
        components.next();
    }
    components.as_path().display().to_string()
}
