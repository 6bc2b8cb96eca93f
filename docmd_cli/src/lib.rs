use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate markdown documentation from `/** ... */` documentation blocks.",
	long_about = "docmd scans a source tree for documentation blocks, recovers the namespace, \
	              type and method declarations they document, and writes one markdown page per \
	              type together with a namespace index (index.md) and a flat API reference \
	              (api-reference.md).\n\nRun it without arguments from the project root. \
	              Settings are read from docmd.toml when present; the flags below override them."
)]
pub struct DocmdCli {
	/// Path to the project root directory. Defaults to the current directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Directory to scan for source files, relative to the project root.
	#[arg(long, short)]
	pub source: Option<PathBuf>,

	/// Directory to write the markdown files to, relative to the project
	/// root.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
