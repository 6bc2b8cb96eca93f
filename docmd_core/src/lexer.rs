use logos::Lexer;
use logos::Logos;

use crate::tokens::Token;
use crate::tokens::TokenKind;
use crate::tokens::TokenStream;

/// Raw tokens produced by logos. Keywords are lexed as plain words and
/// classified afterwards so that they can be matched case-insensitively.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	/// `/* ... */`. The flag is `true` for documentation blocks.
	#[token("/*", block_comment)]
	BlockComment(bool),
	#[regex(r"//[^\n]*", allow_greedy = true)]
	LineComment,
	/// `#` comments. `#[` opens an attribute instead.
	#[regex(r"#([^\[\n][^\n]*)?", allow_greedy = true)]
	HashComment,
	#[token("#[")]
	AttributeOpen,
	#[token("'", |lex| skip_quoted(lex, '\''))]
	SingleQuotedString,
	#[token("\"", |lex| skip_quoted(lex, '"'))]
	DoubleQuotedString,
	/// `<<<LABEL`, `<<<"LABEL"` or `<<<'LABEL'` up to the closing label.
	#[token("<<<", heredoc)]
	Heredoc,
	#[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
	Word,
	#[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
	Variable,
	#[token("\\")]
	Backslash,
	#[token(";")]
	Semicolon,
	#[token("{")]
	BraceOpen,
	#[token("::")]
	#[token("->")]
	#[token("?->")]
	MemberAccess,
	#[token("&")]
	Ampersand,
	#[regex(r"[ \t\r\n\x0C]+")]
	Whitespace,
}

/// Consume a block comment up to and including `*/`, or to the end of input
/// when the comment is never closed.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
	let remainder = lex.remainder();
	let len = remainder.find("*/").map_or(remainder.len(), |end| end + 2);
	lex.bump(len);
	is_doc_block(lex.slice())
}

/// A documentation block opens with `/**` followed by whitespace, so `/**/`
/// and `/***` stay ordinary comments.
fn is_doc_block(comment: &str) -> bool {
	comment
		.strip_prefix("/**")
		.and_then(|rest| rest.chars().next())
		.is_some_and(char::is_whitespace)
}

/// Consume a quoted string body up to the closing quote, honouring
/// backslash escapes.
fn skip_quoted(lex: &mut Lexer<'_, RawToken>, quote: char) {
	let remainder = lex.remainder();
	let mut escaped = false;
	let mut len = remainder.len();

	for (index, ch) in remainder.char_indices() {
		if escaped {
			escaped = false;
		} else if ch == '\\' {
			escaped = true;
		} else if ch == quote {
			len = index + ch.len_utf8();
			break;
		}
	}

	lex.bump(len);
}

/// Consume a heredoc or nowdoc from its opening label to the closing label,
/// which may be indented. Rejects a `<<<` that is not followed by a label on
/// its own line, and runs to the end of input when the label never closes.
fn heredoc(lex: &mut Lexer<'_, RawToken>) -> bool {
	let remainder = lex.remainder();
	let header = remainder.trim_start_matches([' ', '\t']);
	let mut offset = remainder.len() - header.len();

	let quote = header.chars().next().filter(|&ch| matches!(ch, '\'' | '"'));
	let header = match quote {
		Some(quote) => {
			offset += quote.len_utf8();
			&header[quote.len_utf8()..]
		}
		None => header,
	};

	let label_len = header
		.find(|ch: char| !is_label_char(ch))
		.unwrap_or(header.len());
	let label = &header[..label_len];
	if label.is_empty() || label.starts_with(|ch: char| ch.is_ascii_digit()) {
		return false;
	}
	offset += label_len;

	if let Some(quote) = quote {
		if !header[label_len..].starts_with(quote) {
			return false;
		}
		offset += quote.len_utf8();
	}

	let rest = &remainder[offset..];
	let Some(body) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
		return false;
	};
	let mut position = remainder.len() - body.len();

	loop {
		let line = &remainder[position..];
		let indented = line.trim_start_matches([' ', '\t']);
		let closes = indented
			.strip_prefix(label)
			.is_some_and(|after| !after.starts_with(is_label_char));

		if closes {
			lex.bump(position + (line.len() - indented.len()) + label.len());
			return true;
		}

		match line.find('\n') {
			Some(end) => position += end + 1,
			None => {
				lex.bump(remainder.len());
				return true;
			}
		}
	}
}

fn is_label_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_' || !ch.is_ascii()
}

fn classify(raw: &RawToken, text: &str) -> TokenKind {
	match raw {
		RawToken::BlockComment(true) => TokenKind::DocBlock,
		RawToken::BlockComment(false) | RawToken::LineComment | RawToken::HashComment => {
			TokenKind::Comment
		}
		RawToken::SingleQuotedString | RawToken::DoubleQuotedString | RawToken::Heredoc => {
			TokenKind::Literal
		}
		RawToken::Word => TokenKind::from_word(text),
		RawToken::Variable => TokenKind::Variable,
		RawToken::Backslash => TokenKind::NamespaceSeparator,
		RawToken::Semicolon => TokenKind::Semicolon,
		RawToken::BraceOpen => TokenKind::OpenBrace,
		RawToken::MemberAccess => TokenKind::MemberAccess,
		RawToken::Whitespace => TokenKind::Whitespace,
		RawToken::AttributeOpen | RawToken::Ampersand => TokenKind::Other,
	}
}

/// Tokenize one source file. Never fails: bytes logos does not recognize
/// become [`TokenKind::Other`] tokens, so the stream always covers the whole
/// input.
pub fn tokenize(source: &str) -> TokenStream<'_> {
	let mut tokens: Vec<Token<'_>> = RawToken::lexer(source)
		.spanned()
		.map(|(result, span)| {
			let text = &source[span.clone()];
			let kind = match result {
				Ok(raw) => classify(&raw, text),
				Err(()) => TokenKind::Other,
			};
			Token::new(kind, text, span.start)
		})
		.collect();

	// `Foo::class`, `$obj->function`, `App\Enum\Status` and
	// `function namespace()` use keywords as plain names.
	for index in 0..tokens.len() {
		if tokens[index].kind.is_keyword() && is_qualified_name(&tokens, index) {
			tokens[index].kind = TokenKind::Identifier;
		}
	}

	TokenStream::new(tokens)
}

fn is_qualified_name(tokens: &[Token<'_>], index: usize) -> bool {
	let after_qualifier = tokens[..index]
		.iter()
		.rev()
		.find(|token| token.kind != TokenKind::Whitespace && token.text != "&")
		.is_some_and(|token| {
			matches!(
				token.kind,
				TokenKind::MemberAccess | TokenKind::NamespaceSeparator | TokenKind::Function
			)
		});
	let before_separator = tokens
		.get(index + 1)
		.is_some_and(|token| token.kind == TokenKind::NamespaceSeparator);

	after_qualifier || before_separator
}
