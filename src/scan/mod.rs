// src/scan/mod.rs
// =============================================================================
// This module finds the documentation files to check.
//
// Features:
// - Recursive walk of the documentation root
// - Only files whose name ends in ".md" are yielded
// - Lazy: files are produced one at a time as the walk proceeds
// - Pre-flight check that the root exists before anything is scanned
// =============================================================================

mod walk;

// Re-export the scanner entry point
pub use walk::markdown_files;
