use std::path::Path;

use crate::lexer::tokenize;
use crate::model::DeclarationRecord;
use crate::model::MemberRecord;
use crate::tokens::Token;
use crate::tokens::TokenKind;
use crate::tokens::TokenStream;

/// Where a documentation block gets attached once its target is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocTarget {
	Type,
	Member,
}

/// The state carried through one forward pass over a file's tokens.
#[derive(Debug, Default)]
struct ScanState<'a> {
	/// The most recently declared namespace.
	namespace: String,
	/// A documentation block waiting for the next type declaration.
	pending_type_doc: Option<&'a str>,
	/// A documentation block waiting for the next member declaration.
	pending_member_doc: Option<&'a str>,
	/// The first type declaration of the file.
	declaration: Option<DeclarationRecord>,
	/// Set once a later type declaration is seen. Members after it belong to
	/// that type, not the recorded one.
	finished: bool,
}

impl ScanState<'_> {
	fn inside_type(&self) -> bool {
		self.declaration.is_some() && !self.finished
	}
}

/// Tokenize `content` and extract its declaration.
pub fn scan_source(content: &str, source_path: &Path) -> Option<DeclarationRecord> {
	let tokens = tokenize(content);
	extract_declaration(&tokens, source_path)
}

/// Walk a file's tokens once and build the record for its first type
/// declaration. Returns `None` when the file declares no named type.
pub fn extract_declaration(
	tokens: &TokenStream<'_>,
	source_path: &Path,
) -> Option<DeclarationRecord> {
	let mut state = ScanState::default();

	for (index, token) in tokens.iter().enumerate() {
		match token.kind {
			TokenKind::Namespace => {
				if let Some(namespace) = read_namespace(tokens, index + 1) {
					state.namespace = namespace;
				}
			}
			TokenKind::DocBlock => {
				match doc_target(tokens, index + 1) {
					Some(DocTarget::Type) => state.pending_type_doc = Some(token.text),
					Some(DocTarget::Member) => state.pending_member_doc = Some(token.text),
					None => {
						tracing::trace!(
							offset = token.offset,
							path = %source_path.display(),
							"dropping unattached documentation block"
						);
					}
				}
			}
			TokenKind::ClassLike => {
				let Some(type_name) = next_name(tokens, index + 1) else {
					continue;
				};

				if state.declaration.is_some() {
					state.finished = true;
					continue;
				}

				state.declaration = Some(DeclarationRecord {
					namespace: state.namespace.clone(),
					type_name: type_name.to_string(),
					documentation: state.pending_type_doc.take().map(ToString::to_string),
					members: Vec::new(),
					source_path: source_path.to_path_buf(),
				});
			}
			TokenKind::Function => {
				// Blocks on free functions must not leak onto the next method.
				if !state.inside_type() {
					state.pending_member_doc = None;
					continue;
				}

				let Some(name) = next_name(tokens, index + 1) else {
					continue;
				};
				let documentation = state.pending_member_doc.take().map(ToString::to_string);

				if let Some(declaration) = state.declaration.as_mut() {
					declaration.members.push(MemberRecord {
						name: name.to_string(),
						documentation,
					});
				}
			}
			_ => {}
		}
	}

	state.declaration
}

/// Concatenate the identifiers and separators following a `namespace`
/// keyword until the statement ends.
fn read_namespace(tokens: &TokenStream<'_>, from: usize) -> Option<String> {
	let start = tokens.next_significant(from, is_trivia)?;
	let mut namespace = String::new();

	for token in &tokens[start..] {
		match token.kind {
			TokenKind::Semicolon | TokenKind::OpenBrace => break,
			TokenKind::NamespaceSeparator => namespace.push_str(token.text),
			kind if kind.is_word() => namespace.push_str(token.text),
			_ => {}
		}
	}

	Some(namespace.trim().to_string())
}

/// Decide what the documentation block right before `from` documents.
/// Modifiers such as `final` or `static` are looked through.
fn doc_target(tokens: &TokenStream<'_>, from: usize) -> Option<DocTarget> {
	let index = tokens.next_significant(from, |token| {
		matches!(token.kind, TokenKind::Whitespace | TokenKind::Modifier)
	})?;

	match tokens[index].kind {
		TokenKind::ClassLike => Some(DocTarget::Type),
		TokenKind::Visibility | TokenKind::Function => Some(DocTarget::Member),
		_ => None,
	}
}

/// The name following a `class` or `function` keyword. Anonymous classes and
/// closures have none.
fn next_name<'a>(tokens: &TokenStream<'a>, from: usize) -> Option<&'a str> {
	let index = tokens.next_significant(from, |token| is_trivia(token) || token.text == "&")?;
	let token = tokens[index];

	token.kind.is_word().then_some(token.text)
}

fn is_trivia(token: &Token<'_>) -> bool {
	matches!(token.kind, TokenKind::Whitespace | TokenKind::Comment)
}
