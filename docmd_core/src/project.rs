use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::DocmdError;
use crate::DocmdResult;
use crate::config::DocmdConfig;
use crate::extractor::scan_source;
use crate::model::DeclarationRecord;
use crate::model::DocSet;
use crate::render::RenderedDocument;
use crate::render::render_documentation;

/// Resolved settings for one generator run. Paths are already joined onto
/// the project root.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
	/// Directory scanned recursively for source files.
	pub source_dir: PathBuf,
	/// Directory the markdown documents are written to.
	pub output_dir: PathBuf,
	/// Extension of scanned files, without the leading dot.
	pub extension: String,
	/// Files larger than this many bytes are skipped.
	pub max_file_size: u64,
	/// Gitignore-style patterns, relative to `source_dir`, to skip.
	pub exclude_patterns: Vec<String>,
}

impl GenerateOptions {
	/// Build options from an optional [`DocmdConfig`], falling back to the
	/// defaults for a project without one.
	pub fn from_config(root: &Path, config: Option<&DocmdConfig>) -> Self {
		let defaults = DocmdConfig::default();
		let config = config.unwrap_or(&defaults);

		Self {
			source_dir: root.join(&config.source_dir),
			output_dir: root.join(&config.output_dir),
			extension: config.normalized_extension().to_string(),
			max_file_size: config.max_file_size,
			exclude_patterns: config.exclude.patterns.clone(),
		}
	}

	/// Load the project config in `root` (if any) and build options from it.
	pub fn load(root: &Path) -> DocmdResult<Self> {
		let config = DocmdConfig::load(root)?;
		Ok(Self::from_config(root, config.as_ref()))
	}
}

/// Progress notifications emitted by [`generate`], in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateEvent<'a> {
	/// Scanning is about to start.
	ScanStarted { extension: &'a str },
	/// Every file has been scanned.
	ScanFinished { declarations: usize },
	/// Rendering and writing is about to start.
	GenerateStarted,
	/// A document was written to disk.
	DocumentWritten { path: &'a Path },
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
	/// Number of declarations found across all scanned files.
	pub declarations: usize,
	/// Every file written, in write order.
	pub written: Vec<PathBuf>,
	/// The output directory, canonicalized when possible.
	pub output_dir: PathBuf,
}

/// Run the whole pipeline: discover, scan, render and write.
///
/// The source directory is validated and fully scanned before the output
/// directory is touched, so a missing input leaves no partial output behind.
pub fn generate(
	options: &GenerateOptions,
	mut on_event: impl FnMut(GenerateEvent<'_>),
) -> DocmdResult<GenerateReport> {
	on_event(GenerateEvent::ScanStarted {
		extension: &options.extension,
	});
	let docs = scan_project(options)?;
	on_event(GenerateEvent::ScanFinished {
		declarations: docs.len(),
	});

	on_event(GenerateEvent::GenerateStarted);
	let documents = render_documentation(&docs);
	ensure_output_dir(&options.output_dir)?;

	let mut written = Vec::with_capacity(documents.len());
	for document in &documents {
		let path = write_document(&options.output_dir, document)?;
		on_event(GenerateEvent::DocumentWritten { path: &path });
		written.push(path);
	}

	let output_dir = options
		.output_dir
		.canonicalize()
		.unwrap_or_else(|_| options.output_dir.clone());

	Ok(GenerateReport {
		declarations: docs.len(),
		written,
		output_dir,
	})
}

/// Scan every matching file under the source directory and collect their
/// declarations in file order.
pub fn scan_project(options: &GenerateOptions) -> DocmdResult<DocSet> {
	let files = collect_source_files(options)?;

	files.iter().try_fold(DocSet::default(), |docs, path| {
		Ok(docs.with(scan_file(path, options.max_file_size)?))
	})
}

/// Read one file and extract its declaration. Oversized files are skipped.
pub fn scan_file(path: &Path, max_file_size: u64) -> DocmdResult<Option<DeclarationRecord>> {
	let size = std::fs::metadata(path)?.len();
	if size > max_file_size {
		tracing::warn!(
			path = %path.display(),
			size,
			limit = max_file_size,
			"skipping file larger than the size limit"
		);
		return Ok(None);
	}

	let bytes = std::fs::read(path)?;
	let content = normalize_line_endings(&String::from_utf8_lossy(&bytes));
	let declaration = scan_source(&content, path);

	match &declaration {
		Some(declaration) => {
			tracing::debug!(
				path = %path.display(),
				name = %declaration.fully_qualified_name(),
				members = declaration.members.len(),
				"found declaration"
			);
		}
		None => tracing::debug!(path = %path.display(), "no type declaration"),
	}

	Ok(declaration)
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}

/// Collect every file under the source directory whose extension matches,
/// sorted for a deterministic scan order.
pub fn collect_source_files(options: &GenerateOptions) -> DocmdResult<Vec<PathBuf>> {
	let root = &options.source_dir;
	if !root.is_dir() {
		return Err(DocmdError::MissingSourceDir {
			path: root.display().to_string(),
		});
	}

	let exclude = build_exclude_matcher(root, &options.exclude_patterns)?;
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();

	walk_dir(
		root,
		&options.extension,
		&exclude,
		&mut files,
		&mut visited_dirs,
	)?;
	// Sort for deterministic ordering.
	files.sort();
	Ok(files)
}

/// Build a `Gitignore` matcher from the configured exclude patterns.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> DocmdResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			DocmdError::InvalidExcludePattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			}
		})?;
	}
	builder.build().map_err(|e| {
		DocmdError::InvalidExcludePattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		}
	})
}

fn walk_dir(
	dir: &Path,
	extension: &str,
	exclude: &Gitignore,
	files: &mut Vec<PathBuf>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> DocmdResult<()> {
	// Detect symlink cycles by tracking canonical paths.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Err(DocmdError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		let is_dir = path.is_dir();

		if exclude.matched(&path, is_dir).is_ignore() {
			continue;
		}

		if is_dir {
			walk_dir(&path, extension, exclude, files, visited_dirs)?;
		} else if has_extension(&path, extension) {
			files.push(path);
		}
	}

	Ok(())
}

/// Case-insensitive extension check.
fn has_extension(path: &Path, extension: &str) -> bool {
	path.is_file()
		&& path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Create the output directory and any missing parents. On Unix the created
/// directories are `rwxr-xr-x`.
pub fn ensure_output_dir(path: &Path) -> DocmdResult<()> {
	let mut builder = std::fs::DirBuilder::new();
	builder.recursive(true);

	#[cfg(unix)]
	{
		use std::os::unix::fs::DirBuilderExt;
		builder.mode(0o755);
	}

	builder.create(path).map_err(|source| {
		DocmdError::CreateOutputDir {
			path: path.display().to_string(),
			source,
		}
	})
}

/// Write one document into `output_dir`, replacing any existing file.
pub fn write_document(output_dir: &Path, document: &RenderedDocument) -> DocmdResult<PathBuf> {
	let path = output_dir.join(&document.file_name);
	std::fs::write(&path, &document.content).map_err(|source| {
		DocmdError::WriteFile {
			path: path.display().to_string(),
			source,
		}
	})?;

	tracing::debug!(path = %path.display(), "wrote document");
	Ok(path)
}

