use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, Sourced};
use crate::error::Result;
use std::path::Path;

/// Name of the config file looked up in each directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".docswap.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.docswap.toml`
/// 2. Continue up the directory tree
/// 3. Stop after a file with `root = true`
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;
			tracing::debug!(path = %config_path.display(), root = is_root, "loaded config");

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		current_dir = dir.parent();
	}

	Ok(configs)
}

/// Merge multiple configs into a single effective config.
///
/// For every field the first config in cascade order that sets it wins.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		if merged.root_directory.is_none()
			&& let Some(dir) = loaded.resolved_root_directory()
		{
			merged.root_directory = Some(Sourced {
				value: dir,
				source: loaded.path.clone(),
			});
		}

		if merged.old_line.is_none()
			&& let Some(ref line) = loaded.config.old_line
		{
			merged.old_line = Some(Sourced {
				value: line.clone(),
				source: loaded.path.clone(),
			});
		}

		if merged.new_line.is_none()
			&& let Some(ref line) = loaded.config.new_line
		{
			merged.new_line = Some(Sourced {
				value: line.clone(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Load a single explicitly named config file, skipping discovery.
pub fn load_config_file(path: &Path) -> Result<MergedConfig> {
	let config = parse_config_file(path)?;
	let loaded = LoadedConfig {
		config,
		path: path.to_path_buf(),
	};
	Ok(merge_configs(std::slice::from_ref(&loaded)))
}
