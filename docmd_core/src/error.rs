use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocmdError {
	#[error(transparent)]
	#[diagnostic(code(docmd::io_error))]
	Io(#[from] std::io::Error),

	#[error("source directory not found: `{path}`")]
	#[diagnostic(
		code(docmd::missing_source_dir),
		help("create the directory, set `source_dir` in docmd.toml or pass `--source`")
	)]
	MissingSourceDir { path: String },

	#[error("failed to create output directory `{path}`")]
	#[diagnostic(
		code(docmd::create_output_dir),
		help("check that the parent directory exists and is writable")
	)]
	CreateOutputDir {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write `{path}`")]
	#[diagnostic(code(docmd::write_file))]
	WriteFile {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(docmd::config_parse),
		help("check that docmd.toml is valid TOML with `source_dir`, `output_dir` and `[exclude]` keys")
	)]
	ConfigParse(String),

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(docmd::exclude_pattern),
		help("exclude patterns follow .gitignore syntax")
	)]
	InvalidExcludePattern { pattern: String, reason: String },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(docmd::symlink_cycle),
		help("remove the circular symlink or exclude this path")
	)]
	SymlinkCycle { path: String },
}

pub type DocmdResult<T> = Result<T, DocmdError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
