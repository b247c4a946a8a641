use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

use docswap_cli::config::{
	CONFIG_FILE_NAME, MergedConfig, Overrides, Sourced, discover_configs, generate_init_template,
	load_config_file, load_merged_config,
};
use docswap_cli::rewrite::rewrite;

#[derive(Parser)]
#[command(name = "docswap")]
#[command(
	author,
	version,
	about = "CLI tool for swapping an exact line across Markdown and MDX documents"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Directory tree to rewrite
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Exact line to search for (surrounding whitespace in documents is ignored)
	#[arg(long, value_name = "LINE", allow_hyphen_values = true)]
	old: Option<String>,

	/// Line written in place of every match
	#[arg(long, value_name = "LINE", allow_hyphen_values = true)]
	new: Option<String>,

	/// Load only this config file instead of discovering .docswap.toml files
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Create a template .docswap.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .docswap.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log verbosity (-v for a summary, -vv for every document)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective settings with the file each one came from
	Show,
	/// Check all config files for errors without touching any document
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config.as_deref()),
				ConfigAction::Validate => handle_config_validate(cli.config.as_deref()),
			},
		};
	}

	// Handle the rewrite itself
	let overrides = Overrides {
		root_directory: cli.root,
		old_line: cli.old,
		new_line: cli.new,
	};
	handle_rewrite(cli.config.as_deref(), overrides)
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		_ => Level::DEBUG,
	};

	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.init();
}

fn load_config(explicit: Option<&Path>) -> Result<MergedConfig> {
	if let Some(path) = explicit {
		return load_config_file(path)
			.with_context(|| format!("Failed to load {}", path.display()));
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_merged_config(&cwd).context("Failed to load configuration")
}

fn handle_rewrite(explicit_config: Option<&Path>, overrides: Overrides) -> Result<ExitCode> {
	let config = load_config(explicit_config)?;
	let settings = config.resolve(overrides)?;

	rewrite(&settings.root_directory, &settings.substitution).with_context(|| {
		format!(
			"Rewrite aborted under {}",
			settings.root_directory.display()
		)
	})?;

	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(explicit_config: Option<&Path>) -> Result<ExitCode> {
	let sources: Vec<PathBuf> = match explicit_config {
		Some(path) => vec![path.to_path_buf()],
		None => {
			let cwd = std::env::current_dir().context("Failed to get current directory")?;
			discover_configs(&cwd)
				.context("Failed to discover config files")?
				.into_iter()
				.map(|loaded| loaded.path)
				.collect()
		}
	};

	if sources.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):");
	for path in &sources {
		println!("  {}", path.display());
	}
	println!();

	let config = load_config(explicit_config)?;
	println!("Effective settings:");
	print_setting(
		"root-directory",
		config
			.root_directory
			.as_ref()
			.map(|s| (s.value.display().to_string(), &s.source)),
	);
	print_setting("old-line", config.old_line.as_ref().map(as_display));
	print_setting("new-line", config.new_line.as_ref().map(as_display));

	Ok(ExitCode::SUCCESS)
}

fn as_display(sourced: &Sourced<String>) -> (String, &PathBuf) {
	(sourced.value.clone(), &sourced.source)
}

fn print_setting(name: &str, value: Option<(String, &PathBuf)>) {
	match value {
		Some((value, source)) => {
			println!("  {name}: {value}");
			println!("    # from {}", source.display());
		}
		None => println!("  {name}: (not set)"),
	}
}

fn handle_config_validate(explicit_config: Option<&Path>) -> Result<ExitCode> {
	if let Some(path) = explicit_config {
		return match load_config_file(path) {
			Ok(_) => {
				println!("Configuration file is valid: {}", path.display());
				Ok(ExitCode::SUCCESS)
			}
			Err(e) => {
				eprintln!("Configuration error: {}", e);
				Ok(ExitCode::FAILURE)
			}
		};
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!("  {}", loaded.path.display());
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
