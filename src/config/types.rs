use crate::error::{DocswapError, Result};
use crate::rewrite::{LineSubstitution, check_old_line};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration from a `.docswap.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// If true, stop the directory cascade at this file.
	#[serde(default)]
	pub root: bool,

	/// Directory tree to rewrite. Relative paths are resolved against the
	/// directory holding the config file.
	#[serde(default)]
	pub root_directory: Option<PathBuf>,

	/// Exact line to search for.
	#[serde(default)]
	pub old_line: Option<String>,

	/// Line written in place of every match.
	#[serde(default)]
	pub new_line: Option<String>,
}

impl Config {
	/// Validate the values this file sets.
	pub fn validate(&self) -> Result<()> {
		if let Some(ref old_line) = self.old_line {
			check_old_line(old_line)?;
		}
		Ok(())
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl LoadedConfig {
	/// The configured root directory, resolved against this file's directory.
	pub fn resolved_root_directory(&self) -> Option<PathBuf> {
		let dir = self.config.root_directory.as_ref()?;
		if dir.is_absolute() {
			return Some(dir.clone());
		}
		let base = self.path.parent().unwrap_or_else(|| Path::new("."));
		Some(base.join(dir))
	}
}

/// A value together with the config file that set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
	pub value: T,
	pub source: PathBuf,
}

/// Merged configuration from every file in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	pub root_directory: Option<Sourced<PathBuf>>,
	pub old_line: Option<Sourced<String>>,
	pub new_line: Option<Sourced<String>>,
}

/// Values given on the command line. Each one beats the merged config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub root_directory: Option<PathBuf>,
	pub old_line: Option<String>,
	pub new_line: Option<String>,
}

/// Fully resolved input for a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub root_directory: PathBuf,
	pub substitution: LineSubstitution,
}

impl MergedConfig {
	/// Combine with command-line overrides and check nothing is missing.
	pub fn resolve(&self, overrides: Overrides) -> Result<Settings> {
		let root_directory = overrides
			.root_directory
			.or_else(|| self.root_directory.as_ref().map(|s| s.value.clone()))
			.ok_or_else(|| missing("root-directory", "root"))?;

		let old_line = overrides
			.old_line
			.or_else(|| self.old_line.as_ref().map(|s| s.value.clone()))
			.ok_or_else(|| missing("old-line", "old"))?;

		let new_line = overrides
			.new_line
			.or_else(|| self.new_line.as_ref().map(|s| s.value.clone()))
			.ok_or_else(|| missing("new-line", "new"))?;

		let substitution = LineSubstitution::new(old_line, new_line);
		substitution.validate()?;

		Ok(Settings {
			root_directory,
			substitution,
		})
	}
}

fn missing(name: &str, flag: &str) -> DocswapError {
	DocswapError::MissingSetting {
		name: name.to_string(),
		flag: flag.to_string(),
	}
}
