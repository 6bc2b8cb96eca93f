#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub const CONTROLLER_SOURCE: &str = r"<?php

namespace Vendor\Skeleton\Controller;

/**
 * Example controller.
 */
class ExampleController
{
    /**
     * Show a single item.
     *
     * @param int $id
     * @return string
     */
    public function showAction(int $id): string
    {
        return (string) $id;
    }
}
";

pub const HELPER_SOURCE: &str = r"<?php

/** A helper without a namespace. */
class Helper
{
}
";

pub fn docmd_cmd() -> Command {
	let mut cmd = Command::cargo_bin("docmd").unwrap_or_else(|e| panic!("missing binary: {e}"));
	cmd.env("NO_COLOR", "1").env_remove("DOCMD_LOG");
	cmd
}

/// Write the two sample sources under `root/<source_dir>`.
pub fn write_sources(root: &Path, source_dir: &str) -> std::io::Result<()> {
	let controllers = root.join(source_dir).join("Controller");
	std::fs::create_dir_all(&controllers)?;
	std::fs::write(controllers.join("ExampleController.php"), CONTROLLER_SOURCE)?;
	std::fs::write(root.join(source_dir).join("Helper.php"), HELPER_SOURCE)?;
	Ok(())
}
