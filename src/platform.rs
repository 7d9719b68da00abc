//! Host platform configuration, resolved once at startup.
//!
//! Everything that differs between Windows and the rest (script names,
//! executable names, how a script is launched) lives here so the setup
//! steps never branch on the OS themselves.

use std::path::Path;

/// Platform-specific names for the vcpkg toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub windows: bool,
    /// File name of the vcpkg bootstrap script inside the vcpkg checkout
    pub bootstrap_script: &'static str,
    /// File name of the vcpkg executable produced by the bootstrap
    pub vcpkg_exe: &'static str,
}

impl Platform {
    /// Resolve the platform the tool is running on.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Resolve from an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        if os == "windows" {
            Platform {
                windows: true,
                bootstrap_script: "bootstrap-vcpkg.bat",
                vcpkg_exe: "vcpkg.exe",
            }
        } else {
            Platform {
                windows: false,
                bootstrap_script: "bootstrap-vcpkg.sh",
                vcpkg_exe: "vcpkg",
            }
        }
    }

    /// Program and arguments for launching a bootstrap script.
    /// Batch files are not directly spawnable, so Windows goes through `cmd /C`.
    pub fn script_invocation(&self, script: &Path) -> (String, Vec<String>) {
        let script = script.to_string_lossy().into_owned();
        if self.windows {
            ("cmd".to_string(), vec!["/C".to_string(), script])
        } else {
            (script, Vec::new())
        }
    }
}
