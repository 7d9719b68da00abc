use std::env;
use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::paths;
use crate::platform::Platform;

/// Snapshot of the external tools the project consumes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub tools: Vec<ToolInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl Environment {
    /// Detect host identity and the tools setup depends on.
    ///
    /// `git` and `cmake` are resolved on PATH; `vcpkg` is project-local and
    /// probed at its bootstrapped location inside the vcpkg checkout.
    pub fn detect(root: &Path, platform: &Platform) -> Self {
        let tools = vec![
            probe_path_tool("git", &["--version"]),
            probe_path_tool("cmake", &["--version"]),
            probe_vcpkg(root, platform),
        ];

        Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            tools,
        }
    }
}

fn probe_path_tool(name: &str, version_args: &[&str]) -> ToolInfo {
    let mut info = ToolInfo {
        name: name.to_string(),
        available: false,
        version: None,
        path: None,
    };

    if let Ok(path) = which::which(name) {
        info.available = true;
        info.path = Some(path.display().to_string());
        info.version = first_output_line(Command::new(name).args(version_args));
    }

    info
}

fn probe_vcpkg(root: &Path, platform: &Platform) -> ToolInfo {
    let exe = paths::vcpkg_executable(root, platform);
    let mut info = ToolInfo {
        name: "vcpkg".to_string(),
        available: false,
        version: None,
        path: None,
    };

    if exe.exists() {
        info.available = true;
        info.path = Some(exe.display().to_string());
        info.version = first_output_line(
            Command::new(&exe)
                .arg("version")
                .current_dir(paths::vcpkg_dir(root)),
        );
    }

    info
}

fn first_output_line(command: &mut Command) -> Option<String> {
    let output = command.output().ok()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
