//! Docswap - CLI tool for swapping an exact line across Markdown and MDX documents.
//!
//! This library provides the core functionality for docswap, including:
//! - Configuration file parsing and cascade discovery
//! - Exact-line matching and replacement within a document
//! - Directory traversal that rewrites qualifying documents in place
//!
//! # Example
//!
//! ```no_run
//! use docswap_cli::rewrite::{LineSubstitution, rewrite};
//! use std::path::Path;
//!
//! let substitution = LineSubstitution::new("import X;", "import X2;");
//! let summary = rewrite(Path::new("docs"), &substitution).unwrap();
//!
//! println!("Rewrote {} documents", summary.files_rewritten);
//! ```

pub mod config;
pub mod error;
pub mod rewrite;

pub use error::{DocswapError, Result};
