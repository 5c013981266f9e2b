// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts links from markdown text
// - classify: Decides whether a target is skipped, local or external
// - local:    Resolves local targets against the filesystem
// - http:     Probes external targets over HTTP
// - outcome:  The result type shared by local and http
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::classify()` instead of
// `checker::classify::classify()`.
// =============================================================================

mod classify;
mod http;
mod local;
mod markdown;
mod outcome;

pub use classify::{classify, Category, ClassifiedTarget, ExternalTarget, LocalTarget};
pub use http::ExternalChecker;
pub use local::check_local;
pub use markdown::{extract_links, Link, LinkForm};
pub use outcome::ValidationOutcome;
