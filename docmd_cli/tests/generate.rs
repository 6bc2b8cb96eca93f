mod common;

use docmd_core::AnyEmptyResult;

#[test]
fn generate_writes_pages_index_and_reference() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), "Classes")?;

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Scanning php files..."))
		.stdout(predicates::str::contains("   Found 2 classes"))
		.stdout(predicates::str::contains("Generating documentation..."))
		.stdout(predicates::str::contains(
			"Documentation generated successfully in",
		))
		.stdout(predicates::str::contains("Done!"));

	let output = tmp.path().join("docs/generated");
	assert!(output.join("index.md").is_file());
	assert!(output.join("api-reference.md").is_file());
	assert!(output.join("Helper.md").is_file());

	let page =
		std::fs::read_to_string(output.join("Vendor_Skeleton_Controller_ExampleController.md"))?;
	assert!(page.starts_with("# ExampleController\n"));
	assert!(page.contains("### `showAction()`"));
	assert!(page.contains("- `int $id`"));
	assert!(page.contains("**Returns:** `string`"));

	let index = std::fs::read_to_string(output.join("index.md"))?;
	assert!(index.contains("### Vendor\\Skeleton\\Controller"));
	assert!(index.contains("- [ExampleController](./Vendor_Skeleton_Controller_ExampleController.md)"));
	assert!(index.contains("- [Helper](./Helper.md)"));

	Ok(())
}

#[test]
fn generate_prints_absolute_output_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), "Classes")?;

	let assert = common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let expected = tmp
		.path()
		.join("docs/generated")
		.canonicalize()?
		.display()
		.to_string();
	let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
	assert!(
		stdout.contains(&format!("Documentation generated successfully in {expected}")),
		"unexpected stdout: {stdout}"
	);

	Ok(())
}

#[test]
fn generate_runs_in_current_directory_without_arguments() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), "Classes")?;

	common::docmd_cmd()
		.current_dir(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("   Found 2 classes"));

	assert!(tmp.path().join("docs/generated/index.md").is_file());

	Ok(())
}

#[test]
fn generate_fails_without_source_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("source directory not found"));

	assert!(!tmp.path().join("docs").exists());

	Ok(())
}

#[test]
fn generate_with_empty_source_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("Classes"))?;

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("   Found 0 classes"));

	let output = tmp.path().join("docs/generated");
	let index = std::fs::read_to_string(output.join("index.md"))?;
	assert!(index.ends_with("## Available Classes\n\n"));
	assert!(output.join("api-reference.md").is_file());

	Ok(())
}

#[test]
fn generate_twice_produces_identical_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), "Classes")?;
	let index_path = tmp.path().join("docs/generated/index.md");

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();
	let first = std::fs::read_to_string(&index_path)?;

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();
	let second = std::fs::read_to_string(&index_path)?;

	assert_eq!(first, second);

	Ok(())
}

#[test]
fn generate_overrides_source_and_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), "src")?;

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--source")
		.arg("src")
		.arg("--output")
		.arg("api")
		.assert()
		.success()
		.stdout(predicates::str::contains("   Found 2 classes"));

	assert!(tmp.path().join("api/index.md").is_file());
	assert!(!tmp.path().join("docs").exists());

	Ok(())
}

#[test]
fn generate_verbose_lists_written_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), "Classes")?;

	common::docmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--verbose")
		.assert()
		.success()
		.stdout(predicates::str::contains("   Wrote "))
		.stdout(predicates::str::contains("api-reference.md"));

	Ok(())
}
