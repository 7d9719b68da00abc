//! Single source of truth for the project filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O beyond project-root
//! resolution; everything else is pure path arithmetic over a `root` parameter.
//!
//! ```text
//! project/
//! ├── vcpkg/                   # vcpkg source checkout (git submodule)
//! │   ├── bootstrap-vcpkg.sh   # bootstrap-vcpkg.bat on Windows
//! │   └── vcpkg                # vcpkg.exe on Windows, produced by bootstrap
//! ├── build/                   # CMake build tree, created if absent
//! └── tools/
//!     └── vcsetup              # this binary
//! ```

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::platform::Platform;

/// vcpkg submodule checkout: `{root}/vcpkg/`
pub fn vcpkg_dir(root: &Path) -> PathBuf {
    root.join("vcpkg")
}

/// CMake build tree: `{root}/build/`
pub fn build_dir(root: &Path) -> PathBuf {
    root.join("build")
}

/// Platform-specific bootstrap script inside the vcpkg checkout
pub fn bootstrap_script(root: &Path, platform: &Platform) -> PathBuf {
    vcpkg_dir(root).join(platform.bootstrap_script)
}

/// Platform-specific vcpkg executable inside the vcpkg checkout
pub fn vcpkg_executable(root: &Path, platform: &Platform) -> PathBuf {
    vcpkg_dir(root).join(platform.vcpkg_exe)
}

/// Resolve the project root.
///
/// With an explicit override the path only has to exist. Otherwise the root
/// is the parent of the directory holding this executable, matching the
/// `tools/` layout above.
pub fn project_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        return root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()));
    }

    let exe = env::current_exe().context("Failed to locate own executable")?;
    let tool_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    let root = tool_dir.parent().unwrap_or(tool_dir);
    Ok(root.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vcpkg_executable_matches_platform_convention() {
        let root = Path::new("/tmp/project");
        assert_eq!(
            vcpkg_executable(root, &Platform::from_os("windows")),
            PathBuf::from("/tmp/project/vcpkg/vcpkg.exe")
        );
        assert_eq!(
            vcpkg_executable(root, &Platform::from_os("linux")),
            PathBuf::from("/tmp/project/vcpkg/vcpkg")
        );
    }

    #[test]
    fn test_bootstrap_script_matches_platform_convention() {
        let root = Path::new("/tmp/project");
        assert_eq!(
            bootstrap_script(root, &Platform::from_os("windows")),
            PathBuf::from("/tmp/project/vcpkg/bootstrap-vcpkg.bat")
        );
        assert_eq!(
            bootstrap_script(root, &Platform::from_os("macos")),
            PathBuf::from("/tmp/project/vcpkg/bootstrap-vcpkg.sh")
        );
    }

    #[test]
    fn test_build_dir_under_root() {
        let root = Path::new("/tmp/project");
        assert_eq!(build_dir(root), PathBuf::from("/tmp/project/build"));
    }

    #[test]
    fn test_project_root_override() {
        let tmp = tempfile::tempdir().unwrap();
        let resolved = project_root(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(resolved, tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_project_root_override_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("no-such-dir");
        assert!(project_root(Some(missing)).is_err());
    }
}
