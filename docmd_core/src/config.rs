use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocmdError;
use crate::DocmdResult;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default directory scanned for source files, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "Classes";

/// Default directory the markdown is written to, relative to the project
/// root.
pub const DEFAULT_OUTPUT_DIR: &str = "docs/generated";

/// Default extension of scanned source files.
pub const DEFAULT_EXTENSION: &str = "php";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["docmd.toml", ".docmd.toml", ".config/docmd.toml"];

/// Configuration loaded from a `docmd.toml` file.
///
/// ```toml
/// source_dir = "src/Classes"
/// output_dir = "docs/api"
/// extension = "php"
///
/// [exclude]
/// patterns = ["Tests/", "*Fixture.php"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DocmdConfig {
	/// Directory scanned recursively for source files.
	#[serde(default = "default_source_dir")]
	pub source_dir: PathBuf,
	/// Directory the generated markdown is written to. Created when missing.
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	/// Extension of the files to scan, with or without the leading dot.
	#[serde(default = "default_extension")]
	pub extension: String,
	/// Maximum file size in bytes to scan. Larger files are skipped.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
	/// Exclusion configuration using gitignore-style patterns.
	#[serde(default)]
	pub exclude: ExcludeConfig,
}

/// Configuration for excluding files and directories from scanning.
///
/// Patterns follow gitignore syntax and are matched relative to the source
/// directory. Supports negation (`!pattern`), directory markers (trailing
/// `/`), and all standard gitignore wildcards.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

impl Default for DocmdConfig {
	fn default() -> Self {
		Self {
			source_dir: default_source_dir(),
			output_dir: default_output_dir(),
			extension: default_extension(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			exclude: ExcludeConfig::default(),
		}
	}
}

fn default_source_dir() -> PathBuf {
	PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_output_dir() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_extension() -> String {
	DEFAULT_EXTENSION.to_string()
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

impl DocmdConfig {
	/// Resolve the config file path in `root`, following
	/// [`CONFIG_FILE_CANDIDATES`] order.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from `root`, or `None` when the project has no config
	/// file.
	pub fn load(root: &Path) -> DocmdResult<Option<DocmdConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: DocmdConfig =
			toml::from_str(&content).map_err(|e| DocmdError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// The configured extension without a leading dot.
	pub fn normalized_extension(&self) -> &str {
		self.extension.trim_start_matches('.')
	}
}
