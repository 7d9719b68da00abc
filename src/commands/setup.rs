use anyhow::Result;
use std::path::PathBuf;

use vcsetup::paths;
use vcsetup::platform::Platform;
use vcsetup::setup;

pub fn execute(root: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let root = paths::project_root(root)?;
    let platform = Platform::host();

    if dry_run {
        setup::print_plan(&root, &platform);
        return Ok(());
    }

    setup::run(&root, &platform)
}
