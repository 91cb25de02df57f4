//! Human-readable output formatter with colors and styling.

use super::display_path;
use super::formatter::OutputFormatter;
use crate::progress::ConsoleProgress;
use anyhow::Result;
use console::Term;
use console::style;
use extpack_core::ArchiveListing;
use extpack_core::BuildProgress;
use extpack_core::BuildReport;
use extpack_core::NoopProgress;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_heading(&self, symbol: &str, text: &str) {
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} {}",
                style(symbol).green().bold(),
                style(text).bold()
            ));
        } else {
            let _ = self.term.write_line(text);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_banner(&self) {
        if self.quiet {
            return;
        }

        self.write_heading("🚀", "Extension Distribution Creator");
        let _ = self.term.write_line(&"=".repeat(50));
    }

    fn build_progress(&self) -> Box<dyn BuildProgress> {
        if self.quiet {
            Box::new(NoopProgress)
        } else {
            Box::new(ConsoleProgress::new(self.verbose))
        }
    }

    fn format_build_result(&self, report: &BuildReport, listing: &ArchiveListing) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line("");
        self.write_heading("✓", "Distribution created successfully!");
        let _ = self.term.write_line(&format!(
            "  File: {}",
            display_path(&report.archive_path)
        ));
        let _ = self
            .term
            .write_line(&format!("  Size: {:.1} KB", report.size_kb()));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Files added: {}", report.files_added));
            let _ = self
                .term
                .write_line(&format!("  Excluded: {}", report.excluded));
            let _ = self.term.write_line(&format!(
                "  Uncompressed: {}",
                Self::format_size(report.bytes_written)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        if report.has_warnings() {
            let _ = self
                .term
                .write_line(&format!("  Warnings: {}", report.warnings.len()));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line("Contents:");
        for name in listing.names() {
            let _ = self.term.write_line(&format!("  {name}"));
        }

        let _ = self.term.write_line("");
        self.write_heading("🎉", "Distribution ready for download!");
        let _ = self
            .term
            .write_line("You can now share this zip file with users.");

        Ok(())
    }

    fn format_build_failed(&self, error: &anyhow::Error) {
        self.format_error("build", error);

        if self.quiet {
            return;
        }

        let _ = self.term.write_line("");
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} {}",
                style("✗").red().bold(),
                style("Failed to create distribution.").red()
            ));
        } else {
            let _ = self.term.write_line("Failed to create distribution.");
        }
    }

    fn format_listing(&self, listing: &ArchiveListing, long: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if !long {
            for name in listing.names() {
                let _ = self.term.write_line(name);
            }
            return Ok(());
        }

        for entry in &listing.entries {
            let _ = self.term.write_line(&format!(
                "{:>10} {:>10}  {}",
                Self::format_size(entry.size),
                Self::format_size(entry.compressed_size),
                entry.name
            ));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} files, {} ({} on disk)",
            listing.entries.len(),
            Self::format_size(listing.total_size()),
            Self::format_size(listing.archive_size)
        ));

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
