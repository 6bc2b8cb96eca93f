use std::sync::LazyLock;

use regex::Regex;

/// `@name value`. A tag line without a value does not match.
static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^@(\w+)\s+(.*)$").unwrap_or_else(|e| panic!("invalid tag pattern: {e}"))
});

/// Tag values keyed by tag name. Names keep the order they were first seen
/// in and each name keeps its values in source order, so repeated tags such
/// as `@param` stay multi-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocTags {
	entries: Vec<(String, Vec<String>)>,
}

impl DocTags {
	/// All values recorded for `name`, in source order.
	pub fn get(&self, name: &str) -> Option<&[String]> {
		self.entries
			.iter()
			.find(|(tag, _)| tag == name)
			.map(|(_, values)| values.as_slice())
	}

	/// The first value recorded for `name`.
	pub fn first(&self, name: &str) -> Option<&str> {
		self.get(name)
			.and_then(|values| values.first())
			.map(String::as_str)
	}

	pub fn insert(&mut self, name: &str, value: impl Into<String>) {
		let value = value.into();
		match self.entries.iter_mut().find(|(tag, _)| tag == name) {
			Some((_, values)) => values.push(value),
			None => self.entries.push((name.to_string(), vec![value])),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.entries
			.iter()
			.map(|(tag, values)| (tag.as_str(), values.as_slice()))
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}

/// The structured content of one documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocBlock {
	/// Free text before the first tag line, joined with newlines.
	pub description: String,
	pub tags: DocTags,
}

/// Parse a raw documentation block, delimiters included.
///
/// Every line is stripped of a leading `/**`, a trailing `*/` and one leading
/// `*` before being trimmed; lines that end up empty are skipped. The first
/// line starting with `@` ends the description for good: later lines are only
/// ever read as tags, and tag lines without a value are ignored.
pub fn parse_doc_block(raw: &str) -> ParsedDocBlock {
	let mut description: Vec<&str> = Vec::new();
	let mut tags = DocTags::default();
	let mut in_description = true;

	for line in raw.lines() {
		let line = strip_decoration(line);
		if line.is_empty() {
			continue;
		}

		if line.starts_with('@') {
			in_description = false;
			if let Some(captures) = TAG_LINE.captures(line) {
				tags.insert(&captures[1], captures[2].trim_end());
			}
		} else if in_description {
			description.push(line);
		}
	}

	ParsedDocBlock {
		description: description.join("\n"),
		tags,
	}
}

fn strip_decoration(line: &str) -> &str {
	let line = line.trim();
	let line = line.strip_prefix("/**").unwrap_or(line);
	let line = line.strip_suffix("*/").unwrap_or(line).trim();
	let line = line.strip_prefix('*').unwrap_or(line);
	line.trim()
}
