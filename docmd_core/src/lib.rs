//! `docmd_core` is the core library for the docmd documentation generator. It
//! scans source files for `/** ... */` documentation blocks, recovers the
//! namespace, type and member declarations they document, and renders the
//! result as a set of cross-linked markdown pages.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source tree
//!   → Project driver (walks the source directory, filters by extension)
//!   → Lexer (classifies every byte of a file into tokens)
//!   → Extractor (one forward pass, builds a DeclarationRecord per file)
//!   → Doc block parser (description + tags, on demand while rendering)
//!   → Renderer (per-declaration pages, index.md, api-reference.md)
//!   → Project driver (creates the output directory, writes the pages)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `docmd.toml`.
//! - [`project`]: File discovery, scanning and writing.
//! - [`docblock`]: Documentation block parsing.
//! - [`render`]: Markdown rendering.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docmd_core::project::GenerateOptions;
//! use docmd_core::project::generate;
//! use std::path::Path;
//!
//! let options = GenerateOptions::load(Path::new(".")).unwrap();
//! let report = generate(&options, |_| {}).unwrap();
//! println!("{} classes documented", report.declarations);
//! ```

pub use error::*;
pub use extractor::*;
pub use model::*;

pub mod config;
pub mod docblock;
#[allow(unused_assignments)]
mod error;
mod extractor;
pub mod lexer;
mod model;
pub mod project;
pub mod render;
pub mod tokens;

#[cfg(test)]
mod __fixtures;
