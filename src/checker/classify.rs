// src/checker/classify.rs
// =============================================================================
// This module decides what kind of check a link target needs.
//
// Every target falls into exactly one bucket:
// - Skip:     empty, mailto: or javascript: (nothing we can verify)
// - External: http:// or https:// (verified over the network)
// - Local:    anything else (verified against the filesystem)
//
// The checks run in a fixed order. An empty target short-circuits before any
// scheme test, and scheme tests are plain prefix matches on the trimmed
// target.
//
// Each bucket carries only what its checker needs, already split into the
// path/URL part and the fragment (#...), so nothing downstream re-parses the
// raw string.
// =============================================================================

use serde::Serialize;

// Why a target was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    Mailto,
    Javascript,
}

// A local target, split at the first '#'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTarget {
    /// Everything before the first '#'. Empty for fragment-only links.
    pub path: String,
    pub fragment: Option<String>,
}

// An external target, split at the first '#'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTarget {
    pub url: String,
    pub fragment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedTarget {
    Skip(SkipReason),
    Local(LocalTarget),
    External(ExternalTarget),
}

// The category reported for a checked link. Skipped links never reach a
// checker, so they have no category here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Local,
    External,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Local => "local",
            Category::External => "external",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Classifies a raw target string
//
// Example:
//   "  https://example.com/a#b " -> External { url: "https://example.com/a", fragment: Some("b") }
//   "../guide.md"                -> Local { path: "../guide.md", fragment: None }
//   "mailto:a@b.com"             -> Skip(Mailto)
pub fn classify(raw_target: &str) -> ClassifiedTarget {
    let target = raw_target.trim();

    if target.is_empty() {
        return ClassifiedTarget::Skip(SkipReason::Empty);
    }
    if target.starts_with("mailto:") {
        return ClassifiedTarget::Skip(SkipReason::Mailto);
    }
    if target.starts_with("javascript:") {
        return ClassifiedTarget::Skip(SkipReason::Javascript);
    }

    let (base, fragment) = split_fragment(target);

    if target.starts_with("http://") || target.starts_with("https://") {
        ClassifiedTarget::External(ExternalTarget {
            url: base.to_string(),
            fragment,
        })
    } else {
        ClassifiedTarget::Local(LocalTarget {
            path: base.to_string(),
            fragment,
        })
    }
}

// Splits "a/b.md#c#d" into ("a/b.md", Some("c#d"))
fn split_fragment(target: &str) -> (&str, Option<String>) {
    match target.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment.to_string())),
        None => (target, None),
    }
}
