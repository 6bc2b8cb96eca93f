use std::fmt::Display;

use derive_more::Deref;

/// The classification of a lexical unit in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// A plain name, e.g. `Foo` or `getBar`.
	Identifier,
	/// `namespace`
	Namespace,
	/// `class` | `interface` | `trait` | `enum`
	ClassLike,
	/// `function`
	Function,
	/// `public` | `protected` | `private`
	Visibility,
	/// `abstract` | `final` | `static` | `readonly`
	Modifier,
	/// `/** ... */`
	DocBlock,
	/// `/* ... */`, `// ...` or `# ...`
	Comment,
	/// `$name`
	Variable,
	/// A single or double quoted string.
	Literal,
	/// `\`
	NamespaceSeparator,
	/// `;`
	Semicolon,
	/// `{`
	OpenBrace,
	/// `::` | `->` | `?->`
	MemberAccess,
	/// Spaces, tabs and line breaks.
	Whitespace,
	/// Anything the scanner does not classify.
	Other,
}

impl TokenKind {
	/// Classify a bare word. Keywords are case-insensitive.
	pub fn from_word(word: &str) -> Self {
		const CLASS_LIKE: [&str; 4] = ["class", "interface", "trait", "enum"];
		const VISIBILITY: [&str; 3] = ["public", "protected", "private"];
		const MODIFIERS: [&str; 4] = ["abstract", "final", "static", "readonly"];

		let is_any = |keywords: &[&str]| keywords.iter().any(|k| word.eq_ignore_ascii_case(k));

		if word.eq_ignore_ascii_case("namespace") {
			Self::Namespace
		} else if word.eq_ignore_ascii_case("function") {
			Self::Function
		} else if is_any(&CLASS_LIKE) {
			Self::ClassLike
		} else if is_any(&VISIBILITY) {
			Self::Visibility
		} else if is_any(&MODIFIERS) {
			Self::Modifier
		} else {
			Self::Identifier
		}
	}

	/// Whether tokens of this kind spell a name (identifiers and keywords).
	pub fn is_word(self) -> bool {
		matches!(
			self,
			Self::Identifier
				| Self::Namespace
				| Self::ClassLike
				| Self::Function
				| Self::Visibility
				| Self::Modifier
		)
	}

	pub fn is_keyword(self) -> bool {
		self.is_word() && self != Self::Identifier
	}
}

/// A classified slice of the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	pub kind: TokenKind,
	/// The raw text, borrowed from the source.
	pub text: &'a str,
	/// Byte offset of the token in the source.
	pub offset: usize,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
		Self { kind, text, offset }
	}
}

impl Display for Token<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text)
	}
}

/// Every token of one file, in source order. Concatenating the token texts
/// reproduces the file exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct TokenStream<'a>(Vec<Token<'a>>);

impl<'a> TokenStream<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self {
		Self(tokens)
	}

	/// Index of the first token at or after `from` whose kind is not skipped
	/// by `skip`.
	pub fn next_significant(&self, from: usize, skip: impl Fn(&Token<'a>) -> bool) -> Option<usize> {
		self.0
			.iter()
			.enumerate()
			.skip(from)
			.find(|(_, token)| !skip(token))
			.map(|(index, _)| index)
	}
}

impl Display for TokenStream<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for token in &self.0 {
			write!(f, "{token}")?;
		}
		Ok(())
	}
}
