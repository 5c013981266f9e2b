// src/checker/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// Two independent passes run over the WHOLE file content (not line by line):
// - Inline links:          [display text](target)
// - Reference definitions: [label]: target
//
// We deliberately use regular expressions instead of a full CommonMark parser.
// Existing reports depend on the exact matching behavior, including its known
// imprecision:
// - A line that satisfies both patterns is extracted twice.
// - Prose that looks like "[word]: rest of line" is indistinguishable from a
//   real reference definition and is extracted as a link (false positive).
//
// Rust concepts:
// - Lazy statics: each Regex is compiled once, on first use
// - captures_iter: iterate over every match together with its groups
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// [text](target) - text may be empty and cannot contain ']',
// target cannot contain ')'
static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("inline link regex is valid"));

// [label]: target - label cannot be empty or contain ']'.
// `\s*` may cross a newline; the target runs to the end of the line.
static REFERENCE_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]:\s*(.+)").expect("reference regex is valid"));

// Which syntax produced a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkForm {
    Inline,
    ReferenceDefinition,
}

// One link found inside a documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Display text, or the label for reference definitions
    pub text: String,
    /// Target exactly as written (inline) or stripped (reference definitions)
    pub target: String,
    pub form: LinkForm,
}

// Runs both extraction passes and returns every link found
//
// Inline links come first, followed by reference definitions, each in the
// order they appear in the content. Never fails: malformed markdown simply
// yields fewer matches.
pub fn extract_links(content: &str) -> Vec<Link> {
    let mut links = extract_inline_links(content);
    links.extend(extract_reference_definitions(content));
    links
}

// Pass 1: [display text](target)
pub fn extract_inline_links(content: &str) -> Vec<Link> {
    INLINE_LINK
        .captures_iter(content)
        .map(|caps| Link {
            text: caps[1].to_string(),
            target: caps[2].to_string(),
            form: LinkForm::Inline,
        })
        .collect()
}

// Pass 2: [label]: target
pub fn extract_reference_definitions(content: &str) -> Vec<Link> {
    REFERENCE_DEFINITION
        .captures_iter(content)
        .map(|caps| Link {
            text: caps[1].to_string(),
            target: caps[2].trim().to_string(),
            form: LinkForm::ReferenceDefinition,
        })
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Lazy<Regex>?
//    - Compiling a regex is relatively expensive
//    - Lazy runs the closure the first time the static is used, then caches it
//    - Every later call to extract_links reuses the compiled regex
//
// 2. What does caps[1] mean?
//    - caps holds the capture groups of one match
//    - caps[0] is the whole match, caps[1] the first (...) group, and so on
//    - Indexing panics if the group did not participate; both groups here
//      are mandatory, so they always exist
//
// 3. Why return Vec<Link> instead of an iterator?
//    - The regex borrows the content; collecting gives the caller owned data
//    - Files are small, so the extra allocation does not matter
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_inline_link() {
        let links = extract_links("Check out [Rust](https://www.rust-lang.org)!");
        assert_eq!(
            links,
            vec![Link {
                text: "Rust".to_string(),
                target: "https://www.rust-lang.org".to_string(),
                form: LinkForm::Inline,
            }]
        );
    }

    #[test]
    fn test_inline_keeps_every_target_kind() {
        let markdown = r#"
- [site](https://example.com)
- [mail](mailto:test@example.com)
- [local](./docs/README.md#setup)
- [](#top)
        "#;
        let targets: Vec<String> = extract_inline_links(markdown)
            .into_iter()
            .map(|l| l.target)
            .collect();
        assert_eq!(
            targets,
            vec![
                "https://example.com",
                "mailto:test@example.com",
                "./docs/README.md#setup",
                "#top"
            ]
        );
    }

    #[test]
    fn test_inline_text_may_span_lines() {
        let links = extract_inline_links("see [the\nguide](guide.md)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "the\nguide");
    }

    #[test]
    fn test_reference_definition() {
        let links = extract_reference_definitions("[docs]:   https://docs.rs  \n");
        assert_eq!(
            links,
            vec![Link {
                text: "docs".to_string(),
                target: "https://docs.rs".to_string(),
                form: LinkForm::ReferenceDefinition,
            }]
        );
    }

    #[test]
    fn test_reference_definition_matches_prose() {
        // Known false positive: prose shaped like a definition is extracted
        let links = extract_reference_definitions("[Note]: this is just a sentence.");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "Note");
        assert_eq!(links[0].target, "this is just a sentence.");
    }

    #[test]
    fn test_reference_target_can_start_on_next_line() {
        let links = extract_reference_definitions("[label]:\n  other.md\n");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "other.md");
    }

    #[test]
    fn test_both_passes_run_independently() {
        let markdown = "[a](one.md)\n[b]: two.md\n";
        let links = extract_links(markdown);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].form, LinkForm::Inline);
        assert_eq!(links[1].form, LinkForm::ReferenceDefinition);
    }

    #[test]
    fn test_line_matching_both_patterns_is_extracted_twice() {
        let links = extract_links("[x]: [y](z.md)");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "z.md");
        assert_eq!(links[1].target, "[y](z.md)");
    }

    #[test]
    fn test_no_links() {
        assert!(extract_links("# Title\n\nPlain text, [not a link] here.").is_empty());
    }
}
