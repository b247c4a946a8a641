//! Exact-line rewriting of Markdown and MDX documents.
//!
//! This module handles:
//! - Matching and replacing whole lines in a single document
//! - Walking a directory tree and rewriting qualifying documents in place

pub mod lines;
pub mod walker;

pub use lines::{FileRewrite, LineSubstitution, check_old_line, split_lines};
pub use walker::{DOCUMENT_EXTENSIONS, RewriteSummary, is_target_document, rewrite, rewrite_file};
