// src/report.rs
// =============================================================================
// Aggregates the results of a run and renders them.
//
// The report only keeps what went wrong: valid outcomes are counted through
// total_links and otherwise dropped. Broken links stay in the order they were
// checked, which is file order, so the text output is grouped by file.
// =============================================================================

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::{Category, Link, LinkForm, ValidationOutcome};

// One invalid outcome together with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    pub file: PathBuf,
    /// The target as written, trimmed
    pub target: String,
    pub text: String,
    pub form: LinkForm,
    pub category: Category,
    pub reason: String,
}

// A documentation file whose contents could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableFile {
    pub file: PathBuf,
    pub error: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    pub files_scanned: usize,
    /// Every extracted link, skipped ones included
    pub total_links: usize,
    pub broken: Vec<BrokenLink>,
    pub unreadable_files: Vec<UnreadableFile>,
}

// JSON shape: the report plus the overall verdict
#[derive(Serialize)]
struct JsonReport<'a> {
    success: bool,
    #[serde(flatten)]
    report: &'a Report,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, link_count: usize) {
        self.files_scanned += 1;
        self.total_links += link_count;
    }

    // Records an outcome; valid ones are only counted, not stored
    pub fn record_outcome(&mut self, file: &Path, link: &Link, outcome: ValidationOutcome) {
        if outcome.valid {
            return;
        }

        self.broken.push(BrokenLink {
            file: file.to_path_buf(),
            target: link.target.trim().to_string(),
            text: link.text.clone(),
            form: link.form,
            category: outcome.category,
            reason: outcome.reason,
        });
    }

    pub fn record_unreadable(&mut self, file: &Path, error: impl ToString) {
        self.unreadable_files.push(UnreadableFile {
            file: file.to_path_buf(),
            error: error.to_string(),
        });
    }

    // True iff no broken link was recorded. Unreadable files do not count.
    pub fn is_success(&self) -> bool {
        self.broken.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            success: self.is_success(),
            report: self,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "\n=== Link Validation Results ===");
        let _ = writeln!(out, "Files scanned: {}", self.files_scanned);
        let _ = writeln!(out, "Total links checked: {}", self.total_links);
        let _ = writeln!(out, "Broken links found: {}", self.broken.len());

        if !self.broken.is_empty() {
            let _ = writeln!(out, "\n=== Broken Links ===");
            for broken in &self.broken {
                let _ = writeln!(out, "❌ {}", broken.file.display());
                let _ = writeln!(out, "   Link: {}", broken.target);
                let _ = writeln!(out, "   Text: '{}'", broken.text);
                let _ = writeln!(out, "   Error: {}", broken.reason);
                let _ = writeln!(out, "   Type: {}", broken.category);
                let _ = writeln!(out);
            }
        }

        if !self.unreadable_files.is_empty() {
            let _ = writeln!(out, "\n=== Unreadable Files ===");
            for unreadable in &self.unreadable_files {
                let _ = writeln!(out, "⚠️  {}: {}", unreadable.file.display(), unreadable.error);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(text: &str, target: &str) -> Link {
        Link {
            text: text.to_string(),
            target: target.to_string(),
            form: LinkForm::Inline,
        }
    }

    #[test]
    fn test_empty_report_is_successful() {
        let report = Report::new();
        assert!(report.is_success());
        assert_eq!(report.total_links, 0);
    }

    #[test]
    fn test_valid_outcomes_are_not_stored() {
        let mut report = Report::new();
        report.record_file(1);
        report.record_outcome(
            Path::new("a.md"),
            &link("x", "b.md"),
            ValidationOutcome::valid(Category::Local, "file exists"),
        );
        assert!(report.is_success());
        assert!(report.broken.is_empty());
        assert_eq!(report.total_links, 1);
    }

    #[test]
    fn test_broken_link_is_recorded_in_order() {
        let mut report = Report::new();
        report.record_file(2);
        report.record_outcome(
            Path::new("a.md"),
            &link("first", " ./missing.md "),
            ValidationOutcome::invalid(Category::Local, "File not found: /d/missing.md"),
        );
        report.record_outcome(
            Path::new("a.md"),
            &link("second", "https://example.com/dead"),
            ValidationOutcome::invalid(Category::External, "HTTP 404"),
        );

        assert!(!report.is_success());
        assert_eq!(report.broken.len(), 2);
        assert_eq!(report.broken[0].target, "./missing.md");
        assert_eq!(report.broken[1].category, Category::External);
    }

    #[test]
    fn test_unreadable_files_do_not_fail_the_run() {
        let mut report = Report::new();
        report.record_unreadable(Path::new("bad.md"), "stream did not contain valid UTF-8");
        assert!(report.is_success());
        assert!(report.render_text().contains("bad.md: stream did not contain valid UTF-8"));
    }

    #[test]
    fn test_render_text() {
        let mut report = Report::new();
        report.record_file(3);
        report.record_outcome(
            Path::new("docs/index.md"),
            &link("x", "./missing.md"),
            ValidationOutcome::invalid(Category::Local, "File not found: /docs/missing.md"),
        );

        let text = report.render_text();
        assert!(text.contains("Total links checked: 3"));
        assert!(text.contains("Broken links found: 1"));
        assert!(text.contains("   Link: ./missing.md\n"));
        assert!(text.contains("   Text: 'x'\n"));
        assert!(text.contains("   Error: File not found: /docs/missing.md\n"));
        assert!(text.contains("   Type: local\n"));
    }

    #[test]
    fn test_json_includes_success_flag() {
        let mut report = Report::new();
        report.record_outcome(
            Path::new("a.md"),
            &link("x", "https://example.com"),
            ValidationOutcome::invalid(Category::External, "Timeout"),
        );
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["broken"][0]["category"], "external");
        assert_eq!(json["broken"][0]["form"], "inline");
    }
}
