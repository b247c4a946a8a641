/// Generate a template `.docswap.toml` for `docswap --init`.
pub fn generate_init_template() -> String {
	r#"# docswap configuration
#
# Settings in the nearest .docswap.toml win; files further up the directory
# tree fill in anything left unset. Command-line flags beat every file.

# Stop looking in parent directories after this file.
root = true

# Directory tree to rewrite, relative to this file.
root-directory = "docs"

# Every line in a .md or .mdx file whose content (ignoring surrounding
# whitespace) equals old-line is replaced by new-line.
old-line = 'import FeedbackComponent from "@site/src/components/FeedbackComponent";'
new-line = 'import FeedbackComponent from "@site/src/components/FeedbackComponent.md";'
"#
	.to_string()
}
