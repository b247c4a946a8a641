use crate::error::{DocswapError, Result};

/// An exact-line substitution.
///
/// A line matches when its content, with leading and trailing whitespace
/// removed, equals `old_line` exactly. `old_line` itself is compared as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSubstitution {
	/// The line to search for.
	pub old_line: String,

	/// The line written in place of every match.
	pub new_line: String,
}

/// A document after at least one line was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
	/// The full rebuilt document.
	pub content: String,

	/// Number of lines that were replaced.
	pub replaced: usize,
}

impl LineSubstitution {
	pub fn new(old_line: impl Into<String>, new_line: impl Into<String>) -> Self {
		LineSubstitution {
			old_line: old_line.into(),
			new_line: new_line.into(),
		}
	}

	/// Reject an `old_line` that can never match a single line.
	pub fn validate(&self) -> Result<()> {
		check_old_line(&self.old_line)?;

		if strip(&self.old_line) != self.old_line {
			tracing::warn!(
				old_line = %self.old_line,
				"old-line has surrounding whitespace and will not match any stripped line"
			);
		}

		Ok(())
	}

	/// Check whether a single line (terminator included or not) matches.
	///
	/// Stripping removes Unicode whitespace plus the ASCII separators
	/// `\x1c`..=`\x1f`, which `str::trim` alone would keep.
	pub fn matches(&self, line: &str) -> bool {
		strip(line) == self.old_line
	}

	/// Apply this substitution to a whole document.
	///
	/// Returns `None` when nothing matched, so the caller can leave the file
	/// alone. Lines end at `\n`, `\r\n` or a lone `\r`. Unmatched lines keep
	/// their original terminator; every replaced line ends with a single `\n`.
	pub fn apply(&self, content: &str) -> Option<FileRewrite> {
		let mut rebuilt = String::with_capacity(content.len());
		let mut replaced = 0;

		for line in split_lines(content) {
			if self.matches(line) {
				rebuilt.push_str(&self.new_line);
				rebuilt.push('\n');
				replaced += 1;
			} else {
				rebuilt.push_str(line);
			}
		}

		if replaced == 0 {
			return None;
		}

		Some(FileRewrite {
			content: rebuilt,
			replaced,
		})
	}
}

/// Split a document into lines, each keeping its terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing piece without a
/// terminator is yielded as the last line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
	let mut rest = content;
	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}

		let bytes = rest.as_bytes();
		let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
			Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
			Some(i) => i + 1,
			None => rest.len(),
		};

		let (line, tail) = rest.split_at(end);
		rest = tail;
		Some(line)
	})
}

fn strip(line: &str) -> &str {
	line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// An `old_line` spanning several lines can never equal one stripped line.
pub fn check_old_line(old_line: &str) -> Result<()> {
	if old_line.contains(['\n', '\r']) {
		return Err(DocswapError::InvalidLine {
			name: "old-line".to_string(),
			reason: "must not contain a line break".to_string(),
		});
	}
	Ok(())
}
