#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

const OLD_IMPORT: &str = r#"import FeedbackComponent from "@site/src/components/FeedbackComponent";"#;
const NEW_IMPORT: &str =
	r#"import FeedbackComponent from "@site/src/components/FeedbackComponent.md";"#;

fn docswap_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("docswap").unwrap()
}

fn swap_in(root: &Path) -> assert_cmd::Command {
	let mut cmd = docswap_cmd();
	cmd.arg("--root")
		.arg(root)
		.args(["--old", "import X;", "--new", "import X2;"])
		.current_dir(root);
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	docswap_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("swapping an exact line"));
}

#[test]
fn test_version_flag() {
	docswap_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("docswap"));
}

#[test]
fn test_missing_settings_fail() {
	let temp_dir = tempfile::tempdir().unwrap();

	docswap_cmd()
		.args(["--old", "import X;"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Missing required setting"));
}

// ============================================================================
// Rewrite tests
// ============================================================================

#[test]
fn test_rewrites_matching_line() {
	let temp_dir = tempfile::tempdir().unwrap();
	let doc = temp_dir.path().join("a.md");
	fs::write(&doc, "import X;\nbody\n").unwrap();

	swap_in(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::is_empty());

	assert_eq!(fs::read_to_string(&doc).unwrap(), "import X2;\nbody\n");
}

#[test]
fn test_wrong_extension_untouched() {
	let temp_dir = tempfile::tempdir().unwrap();
	let other = temp_dir.path().join("b.txt");
	let upper = temp_dir.path().join("c.MD");
	fs::write(&other, "import X;\n").unwrap();
	fs::write(&upper, "import X;\n").unwrap();

	swap_in(temp_dir.path()).assert().success();

	assert_eq!(fs::read_to_string(&other).unwrap(), "import X;\n");
	assert_eq!(fs::read_to_string(&upper).unwrap(), "import X;\n");
}

#[test]
fn test_recurses_into_subdirectories() {
	let temp_dir = tempfile::tempdir().unwrap();
	let sub = temp_dir.path().join("sub");
	fs::create_dir(&sub).unwrap();
	fs::write(sub.join("c.mdx"), "---\ntitle: C\n---\n\timport X;\n\n# C\n").unwrap();

	swap_in(temp_dir.path()).assert().success();

	assert_eq!(
		fs::read_to_string(sub.join("c.mdx")).unwrap(),
		"---\ntitle: C\n---\nimport X2;\n\n# C\n"
	);
}

#[test]
fn test_second_run_changes_nothing() {
	let temp_dir = tempfile::tempdir().unwrap();
	let doc = temp_dir.path().join("a.md");
	fs::write(&doc, "import X;\nimport X;\nbody\n").unwrap();

	swap_in(temp_dir.path()).assert().success();
	let after_first = fs::read_to_string(&doc).unwrap();

	swap_in(temp_dir.path())
		.arg("-v")
		.assert()
		.success()
		.stderr(predicate::str::contains("files_rewritten=0"));

	assert_eq!(after_first, "import X2;\nimport X2;\nbody\n");
	assert_eq!(fs::read_to_string(&doc).unwrap(), after_first);
}

#[test]
fn test_verbose_logs_rewritten_documents() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join("a.md"), "import X;\n").unwrap();
	fs::write(temp_dir.path().join("b.md"), "nothing\n").unwrap();

	swap_in(temp_dir.path())
		.arg("-vv")
		.assert()
		.success()
		.stderr(predicate::str::contains("rewrote document"))
		.stderr(predicate::str::contains("no matching lines"))
		.stderr(predicate::str::contains("files_rewritten=1"));
}

#[test]
fn test_invalid_utf8_aborts() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join("broken.md"), [0xc3, 0x28, b'\n']).unwrap();

	swap_in(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_missing_root_fails() {
	let temp_dir = tempfile::tempdir().unwrap();

	docswap_cmd()
		.args(["--root", "no-such-dir", "--old", "a", "--new", "b"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Rewrite aborted"));
}

#[test]
fn test_multiline_old_line_rejected() {
	let temp_dir = tempfile::tempdir().unwrap();

	docswap_cmd()
		.arg("--root")
		.arg(temp_dir.path())
		.args(["--old", "a\nb", "--new", "c"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("must not contain a line break"));
}

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_rewrite_from_config_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let docs = temp_dir.path().join("docs");
	fs::create_dir(&docs).unwrap();
	fs::write(
		docs.join("intro.mdx"),
		format!("{OLD_IMPORT}\n\n<FeedbackComponent/>\n"),
	)
	.unwrap();

	fs::write(
		temp_dir.path().join(".docswap.toml"),
		format!("root = true\nroot-directory = \"docs\"\nold-line = '{OLD_IMPORT}'\nnew-line = '{NEW_IMPORT}'\n"),
	)
	.unwrap();

	docswap_cmd()
		.current_dir(temp_dir.path())
		.assert()
		.success();

	assert_eq!(
		fs::read_to_string(docs.join("intro.mdx")).unwrap(),
		format!("{NEW_IMPORT}\n\n<FeedbackComponent/>\n")
	);
}

#[test]
fn test_cli_overrides_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let doc = temp_dir.path().join("a.md");
	fs::write(&doc, "old\n").unwrap();

	fs::write(
		temp_dir.path().join(".docswap.toml"),
		"root = true\nroot-directory = \".\"\nold-line = \"old\"\nnew-line = \"from-config\"\n",
	)
	.unwrap();

	docswap_cmd()
		.args(["--new", "from-cli"])
		.current_dir(temp_dir.path())
		.assert()
		.success();

	assert_eq!(fs::read_to_string(&doc).unwrap(), "from-cli\n");
}

#[test]
fn test_explicit_config_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	let doc = temp_dir.path().join("a.md");
	fs::write(&doc, "old\n").unwrap();

	let config_path = temp_dir.path().join("swap.toml");
	fs::write(
		&config_path,
		"root-directory = \".\"\nold-line = \"old\"\nnew-line = \"new\"\n",
	)
	.unwrap();

	docswap_cmd()
		.arg("--config")
		.arg(&config_path)
		.current_dir(temp_dir.path())
		.assert()
		.success();

	assert_eq!(fs::read_to_string(&doc).unwrap(), "new\n");
}

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".docswap.toml");

	docswap_cmd()
		.arg("--init")
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .docswap.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("root = true"));
	assert!(content.contains("old-line"));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".docswap.toml"), "# existing").unwrap();

	docswap_cmd()
		.arg("--init")
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".docswap.toml");
	fs::write(&config_path, "# existing").unwrap();

	docswap_cmd()
		.args(["--init", "--force"])
		.current_dir(temp_dir.path())
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("root = true"));
}

#[test]
fn test_config_validate_no_config() {
	let temp_dir = tempfile::tempdir().unwrap();

	docswap_cmd()
		.args(["config", "validate"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("No configuration files found"));
}

#[test]
fn test_config_validate_invalid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".docswap.toml"), "invalid toml [[[").unwrap();

	docswap_cmd()
		.args(["config", "validate"])
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_show_displays_sources() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".docswap.toml"),
		"root = true\nold-line = \"import X;\"\n",
	)
	.unwrap();

	docswap_cmd()
		.args(["config", "show"])
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("old-line: import X;"))
		.stdout(predicate::str::contains("new-line: (not set)"))
		.stdout(predicate::str::contains(".docswap.toml"));
}
