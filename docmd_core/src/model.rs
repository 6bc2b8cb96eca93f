use std::path::PathBuf;

use derive_more::Deref;

/// Separator between namespace segments and the type name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Label used for declarations outside any namespace.
pub const GLOBAL_NAMESPACE: &str = "Global";

/// A documented member (method-like entity) of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
	pub name: String,
	/// The raw documentation block, including its `/**` and `*/` delimiters.
	pub documentation: Option<String>,
}

/// One documented type extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationRecord {
	/// The namespace in effect at the declaration. Empty for the global
	/// namespace.
	pub namespace: String,
	pub type_name: String,
	/// The raw type-level documentation block.
	pub documentation: Option<String>,
	/// Members in source declaration order.
	pub members: Vec<MemberRecord>,
	/// The file this declaration was found in.
	pub source_path: PathBuf,
}

impl DeclarationRecord {
	/// `Namespace\TypeName`, or just `TypeName` in the global namespace.
	pub fn fully_qualified_name(&self) -> String {
		if self.namespace.is_empty() {
			self.type_name.clone()
		} else {
			format!("{}{NAMESPACE_SEPARATOR}{}", self.namespace, self.type_name)
		}
	}

	/// The namespace as shown in rendered output.
	pub fn namespace_label(&self) -> &str {
		if self.namespace.is_empty() {
			GLOBAL_NAMESPACE
		} else {
			&self.namespace
		}
	}

	/// The page file name: `Vendor\Foo\Bar` becomes `Vendor_Foo_Bar.md`.
	pub fn output_file_name(&self) -> String {
		format!(
			"{}.md",
			self.fully_qualified_name().replace(NAMESPACE_SEPARATOR, "_")
		)
	}
}

/// All declarations found in a scan, in scan order. Built once by the scan
/// phase and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct DocSet(Vec<DeclarationRecord>);

impl DocSet {
	/// Append the declaration found in one file, if any.
	#[must_use]
	pub fn with(mut self, declaration: Option<DeclarationRecord>) -> Self {
		self.0.extend(declaration);
		self
	}
}
