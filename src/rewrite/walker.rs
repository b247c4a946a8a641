use crate::error::{DocswapError, Result};
use crate::rewrite::lines::LineSubstitution;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// File name suffixes that mark a document as a rewrite target.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

/// Counters for a single rewrite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
	/// Qualifying documents that were read.
	pub files_scanned: usize,

	/// Documents written back because at least one line matched.
	pub files_rewritten: usize,

	/// Total lines replaced across all documents.
	pub lines_replaced: usize,
}

/// Check whether a file name ends with one of the document suffixes.
///
/// The comparison is a case-sensitive suffix match on the whole name.
pub fn is_target_document(file_name: &str) -> bool {
	DOCUMENT_EXTENSIONS
		.iter()
		.any(|suffix| file_name.ends_with(suffix))
}

/// Walk `root_directory` and apply `substitution` to every document.
///
/// The first traversal, read, decode or write error aborts the walk.
/// Documents rewritten before the error stay rewritten.
pub fn rewrite(root_directory: &Path, substitution: &LineSubstitution) -> Result<RewriteSummary> {
	let mut summary = RewriteSummary::default();

	for entry in WalkDir::new(root_directory).follow_links(false) {
		let entry = entry.map_err(|source| DocswapError::Walk { source })?;

		if !is_regular_file(&entry) {
			continue;
		}

		if !is_target_document(&entry.file_name().to_string_lossy()) {
			continue;
		}

		summary.files_scanned += 1;
		if let Some(replaced) = rewrite_file(entry.path(), substitution)? {
			summary.files_rewritten += 1;
			summary.lines_replaced += replaced;
		}
	}

	tracing::info!(
		root = %root_directory.display(),
		files_scanned = summary.files_scanned,
		files_rewritten = summary.files_rewritten,
		lines_replaced = summary.lines_replaced,
		"rewrite complete"
	);

	Ok(summary)
}

/// Read, substitute and, if anything matched, overwrite one document.
///
/// Returns the number of replaced lines, or `None` when the file was left
/// untouched.
pub fn rewrite_file(path: &Path, substitution: &LineSubstitution) -> Result<Option<usize>> {
	let bytes = std::fs::read(path).map_err(|source| DocswapError::ReadFailed {
		path: path.to_path_buf(),
		source,
	})?;
	let content = String::from_utf8(bytes).map_err(|source| DocswapError::Decode {
		path: path.to_path_buf(),
		source,
	})?;

	let Some(rewrite) = substitution.apply(&content) else {
		tracing::debug!(path = %path.display(), "no matching lines");
		return Ok(None);
	};

	std::fs::write(path, rewrite.content).map_err(|source| DocswapError::WriteFailed {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(path = %path.display(), replaced = rewrite.replaced, "rewrote document");
	Ok(Some(rewrite.replaced))
}

// Symlinks are not followed during the walk. A link that does not point at a
// directory counts as a file, so a dangling link fails on read.
fn is_regular_file(entry: &DirEntry) -> bool {
	let file_type = entry.file_type();
	file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}
