//! The bootstrap orchestrator.
//!
//! A fixed sequence of setup steps run against the project root: sync
//! submodules, bootstrap vcpkg, ensure the build directory, verify the
//! vcpkg executable, install dependencies. The first failing step aborts
//! the run; there are no retries and no rollback.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::paths;
use crate::platform::Platform;
use crate::process::{self, CommandOutput};

/// Run the full setup sequence. Stops at the first failure.
pub fn run(root: &Path, platform: &Platform) -> Result<()> {
    print_banner(root);

    println!("{}", "Step 1: Syncing git submodules...".bold());
    sync_submodules(root)?;
    println!("{} Submodules synced\n", "✓".green().bold());

    println!("{}", "Step 2: Bootstrapping vcpkg...".bold());
    bootstrap_vcpkg(root, platform)?;
    println!("{} vcpkg bootstrapped\n", "✓".green().bold());

    println!("{}", "Step 3: Preparing build directory...".bold());
    ensure_build_dir(root)?;
    println!();

    println!("{}", "Step 4: Verifying vcpkg executable...".bold());
    verify_vcpkg(root, platform)?;
    println!();

    println!(
        "{}",
        "Step 4.1: Installing vcpkg dependencies (this can take a while)...".bold()
    );
    install_dependencies(root, platform)?;
    println!("{} Dependencies installed\n", "✓".green().bold());

    print_next_steps(platform);
    Ok(())
}

/// Print the step plan without spawning anything or touching the filesystem.
pub fn print_plan(root: &Path, platform: &Platform) {
    let vcpkg = paths::vcpkg_dir(root);
    println!("{}", "Setup plan".bold());
    println!("Project root: {}\n", root.display());
    println!("  1.   git submodule update --init --recursive  (in {})", root.display());
    println!("  2.   {}  (in {})", platform.bootstrap_script, vcpkg.display());
    println!("  3.   create {} if absent", paths::build_dir(root).display());
    println!(
        "  4.   verify {}, then {} version",
        paths::vcpkg_executable(root, platform).display(),
        platform.vcpkg_exe
    );
    println!("  4.1  {} install  (in {})", platform.vcpkg_exe, vcpkg.display());
    println!("  5.   print next-step guidance");
}

/// Step 1: `git submodule update --init --recursive` at the project root.
pub fn sync_submodules(root: &Path) -> Result<()> {
    let output = process::run(
        "git",
        &["submodule", "update", "--init", "--recursive"],
        Some(root),
    )?;
    expect_success(output, "Submodule sync failed")
}

/// Step 2: run the platform's bootstrap script inside the vcpkg checkout.
pub fn bootstrap_vcpkg(root: &Path, platform: &Platform) -> Result<()> {
    let vcpkg = paths::vcpkg_dir(root);
    let script = paths::bootstrap_script(root, platform);

    if !script.exists() {
        anyhow::bail!(
            "Bootstrap script not found: {} (did the submodule sync run?)",
            script.display()
        );
    }

    #[cfg(unix)]
    make_executable(&script)?;

    let (program, args) = platform.script_invocation(&script);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = process::run(&program, &args, Some(&vcpkg))?;
    expect_success(output, "vcpkg bootstrap failed")
}

/// Step 3: create the build directory if it does not exist yet.
/// Existing contents are left untouched.
pub fn ensure_build_dir(root: &Path) -> Result<()> {
    let build = paths::build_dir(root);

    if build.exists() {
        println!("Build directory already exists: {}", build.display());
    } else {
        fs::create_dir_all(&build)
            .with_context(|| format!("Failed to create build directory: {}", build.display()))?;
        println!(
            "{} Created build directory: {}",
            "✓".green().bold(),
            build.display()
        );
    }

    Ok(())
}

/// Step 4: the bootstrapped executable must exist before install can run.
/// The `vcpkg version` display is informational; its exit status does not
/// affect the run.
pub fn verify_vcpkg(root: &Path, platform: &Platform) -> Result<()> {
    let exe = paths::vcpkg_executable(root, platform);

    if !exe.exists() {
        anyhow::bail!(
            "vcpkg executable not found: {} (bootstrap did not produce it)",
            exe.display()
        );
    }
    println!("{} Found vcpkg executable: {}", "✓".green().bold(), exe.display());

    let exe = exe.to_string_lossy();
    if let Ok(output) = process::run(&exe, &["version"], Some(&paths::vcpkg_dir(root))) {
        if output.success() && !output.stdout.trim().is_empty() {
            println!("{}", output.stdout.trim_end());
        }
    }

    Ok(())
}

/// Step 4.1: `vcpkg install` inside the vcpkg checkout.
pub fn install_dependencies(root: &Path, platform: &Platform) -> Result<()> {
    let exe = paths::vcpkg_executable(root, platform);
    let exe = exe.to_string_lossy();
    let output = process::run(&exe, &["install"], Some(&paths::vcpkg_dir(root)))?;
    expect_success(output, "vcpkg install failed")
}

/// Echo captured stdout on success; surface both streams and fail the step
/// on a non-zero exit.
fn expect_success(output: CommandOutput, what: &str) -> Result<()> {
    if output.success() {
        if !output.stdout.trim().is_empty() {
            println!("{}", output.stdout.trim_end());
        }
        return Ok(());
    }

    if !output.stdout.trim().is_empty() {
        eprintln!("{}", output.stdout.trim_end());
    }
    if !output.stderr.trim().is_empty() {
        eprintln!("{}", output.stderr.trim_end());
    }
    anyhow::bail!("{} (exit {})", what, output.code_display())
}

#[cfg(unix)]
fn make_executable(script: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(script, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to mark {} executable", script.display()))
}

fn print_banner(root: &Path) {
    println!("{}", "🚀 Project Setup".bold().blue());
    println!("{}", "Preparing your development environment...\n".dimmed());
    println!("Project root: {}", root.display());
    println!("Platform: {} {}\n", std::env::consts::OS, std::env::consts::ARCH);
}

fn print_next_steps(platform: &Platform) {
    println!("{}", "🎉 Project setup complete!".bold().green());
    println!("\n{}", "Next steps:".bold());

    if platform.windows {
        println!("  1. Configure: cmake --preset windows");
        println!("  2. Build:     cmake --build build --config Debug");
        println!("     (or)       cmake --build build --config Release");
        println!("  3. Run:       .\\build\\Debug\\my_app.exe");
        println!("  4. Test:      .\\build\\Debug\\my_app.exe --tests");
    } else {
        println!("  1. Configure: cmake --preset linux");
        println!("  2. Build:     cmake --build build");
        println!("  3. Run:       ./build/my_app");
        println!("  4. Test:      ./build/my_app --tests");
    }
}
