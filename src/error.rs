use std::path::PathBuf;

/// Library-level structured errors for docswap.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum DocswapError {
	#[error("Failed to traverse directory tree")]
	Walk {
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to read document: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Document is not valid UTF-8: {path}")]
	Decode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write document: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid {name}: {reason}")]
	InvalidLine { name: String, reason: String },

	#[error("Missing required setting: {name} (pass --{flag} or set it in .docswap.toml)")]
	MissingSetting { name: String, flag: String },
}

/// Result type alias using DocswapError.
pub type Result<T> = std::result::Result<T, DocswapError>;
