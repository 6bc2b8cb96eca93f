use crate::docblock::ParsedDocBlock;
use crate::docblock::parse_doc_block;
use crate::model::DeclarationRecord;
use crate::model::MemberRecord;

/// File name of the namespace index page.
pub const INDEX_FILE_NAME: &str = "index.md";

/// File name of the flattened API reference page.
pub const API_REFERENCE_FILE_NAME: &str = "api-reference.md";

/// A rendered markdown document and the file name it is written to,
/// relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
	pub file_name: String,
	pub content: String,
}

/// Render every output document: one page per declaration, followed by the
/// index and the API reference.
pub fn render_documentation(declarations: &[DeclarationRecord]) -> Vec<RenderedDocument> {
	let mut documents: Vec<RenderedDocument> = declarations
		.iter()
		.map(|declaration| {
			RenderedDocument {
				file_name: declaration.output_file_name(),
				content: render_declaration_page(declaration),
			}
		})
		.collect();

	documents.push(RenderedDocument {
		file_name: INDEX_FILE_NAME.to_string(),
		content: render_index(declarations),
	});
	documents.push(RenderedDocument {
		file_name: API_REFERENCE_FILE_NAME.to_string(),
		content: render_api_reference(declarations),
	});

	documents
}

/// Render the page for a single declaration.
pub fn render_declaration_page(declaration: &DeclarationRecord) -> String {
	let mut output = format!("# {}\n\n", declaration.type_name);
	output.push_str(&format!(
		"**Namespace:** `{}`\n\n",
		declaration.namespace_label()
	));
	output.push_str(&format!(
		"**Full Class Name:** `{}`\n\n",
		declaration.fully_qualified_name()
	));

	if let Some(raw) = &declaration.documentation {
		let parsed = parse_doc_block(raw);
		output.push_str("## Description\n\n");
		if !parsed.description.is_empty() {
			output.push_str(&parsed.description);
			output.push_str("\n\n");
		}

		if !parsed.tags.is_empty() {
			output.push_str("## Tags\n\n");
			for (tag, values) in parsed.tags.iter() {
				for value in values {
					output.push_str(&format!("- **@{tag}** {value}\n"));
				}
			}
			output.push('\n');
		}
	}

	if !declaration.members.is_empty() {
		output.push_str("## Methods\n\n");
		for member in &declaration.members {
			output.push_str(&render_member(member));
		}
	}

	output
}

fn render_member(member: &MemberRecord) -> String {
	let mut output = format!("### `{}()`\n\n", member.name);

	if let Some(raw) = &member.documentation {
		let ParsedDocBlock { description, tags } = parse_doc_block(raw);

		if !description.is_empty() {
			output.push_str(&description);
			output.push_str("\n\n");
		}

		if let Some(params) = tags.get("param") {
			output.push_str("**Parameters:**\n\n");
			for param in params {
				output.push_str(&format!("- `{param}`\n"));
			}
			output.push('\n');
		}

		if let Some(returns) = tags.first("return") {
			output.push_str(&format!("**Returns:** `{returns}`\n\n"));
		}

		if let Some(throws) = tags.get("throws") {
			output.push_str("**Throws:**\n\n");
			for exception in throws {
				output.push_str(&format!("- `{exception}`\n"));
			}
			output.push('\n');
		}
	}

	output.push_str("---\n\n");
	output
}

/// Group declarations by namespace label. Groups keep the order their
/// namespace was first seen in and members keep scan order.
pub fn group_by_namespace(
	declarations: &[DeclarationRecord],
) -> Vec<(&str, Vec<&DeclarationRecord>)> {
	let mut groups: Vec<(&str, Vec<&DeclarationRecord>)> = Vec::new();

	for declaration in declarations {
		let label = declaration.namespace_label();
		match groups.iter_mut().find(|(namespace, _)| *namespace == label) {
			Some((_, members)) => members.push(declaration),
			None => groups.push((label, vec![declaration])),
		}
	}

	groups
}

/// Render the index page linking every declaration page, grouped by
/// namespace.
pub fn render_index(declarations: &[DeclarationRecord]) -> String {
	let mut output = String::from("# API Documentation\n\n");
	output.push_str("Auto-generated documentation from PHPDoc comments.\n\n");
	output.push_str("## Available Classes\n\n");

	for (namespace, members) in group_by_namespace(declarations) {
		output.push_str(&format!("### {namespace}\n\n"));
		for declaration in members {
			output.push_str(&format!(
				"- [{}](./{})\n",
				declaration.type_name,
				declaration.output_file_name()
			));
		}
		output.push('\n');
	}

	output
}

/// Render the flattened reference of every declaration and its member
/// names.
pub fn render_api_reference(declarations: &[DeclarationRecord]) -> String {
	let mut output = String::from("# Complete API Reference\n\n");
	output.push_str("Complete overview of all classes, methods, and their documentation.\n\n");

	for declaration in declarations {
		output.push_str(&format!("## {}\n\n", declaration.fully_qualified_name()));

		if let Some(raw) = &declaration.documentation {
			let parsed = parse_doc_block(raw);
			if !parsed.description.is_empty() {
				output.push_str(&parsed.description);
				output.push_str("\n\n");
			}
		}

		if !declaration.members.is_empty() {
			output.push_str("**Methods:**\n\n");
			for member in &declaration.members {
				output.push_str(&format!("- `{}()`\n", member.name));
			}
			output.push('\n');
		}

		output.push_str("---\n\n");
	}

	output
}
