use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::*;
use serde::Serialize;

use vcsetup::environment::{Environment, ToolInfo};
use vcsetup::paths;
use vcsetup::platform::Platform;

#[derive(Serialize)]
struct HealthCheck {
    status: String, // "healthy", "incomplete", "critical"
    os: String,
    arch: String,
    tools: Vec<ToolInfo>,
    vcpkg_bootstrapped: bool,
    build_dir_exists: bool,
    recommendations: Vec<String>,
}

pub fn execute(root: Option<PathBuf>, json_output: bool) -> Result<i32> {
    let root = paths::project_root(root)?;
    let platform = Platform::host();

    if !json_output {
        println!("🏥 Checking project environment...");
    }

    let env = Environment::detect(&root, &platform);
    let health = analyze(env, &root);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        display_health(&health, &root);
    }

    let exit_code = match health.status.as_str() {
        "healthy" => 0,
        "incomplete" => 2,
        _ => 1,
    };
    Ok(exit_code)
}

fn analyze(env: Environment, root: &Path) -> HealthCheck {
    let build_dir_exists = paths::build_dir(root).exists();
    let vcpkg_bootstrapped = env
        .tools
        .iter()
        .any(|t| t.name == "vcpkg" && t.available);

    let mut recommendations = Vec::new();
    for tool in &env.tools {
        if !tool.available {
            recommendations.push(match tool.name.as_str() {
                "git" => "Install git: https://git-scm.com/downloads".to_string(),
                "cmake" => "Install cmake: https://cmake.org/download".to_string(),
                "vcpkg" => "Run `vcsetup` to bootstrap vcpkg".to_string(),
                other => format!("Install {other}"),
            });
        }
    }
    if !build_dir_exists {
        recommendations.push("Run `vcsetup` to create the build directory".to_string());
    }

    // git and cmake are hard requirements; the rest setup can produce.
    let missing_required = env
        .tools
        .iter()
        .any(|t| !t.available && matches!(t.name.as_str(), "git" | "cmake"));

    let status = if missing_required {
        "critical"
    } else if !vcpkg_bootstrapped || !build_dir_exists {
        "incomplete"
    } else {
        "healthy"
    };

    HealthCheck {
        status: status.to_string(),
        os: env.os,
        arch: env.arch,
        tools: env.tools,
        vcpkg_bootstrapped,
        build_dir_exists,
        recommendations,
    }
}

fn display_health(health: &HealthCheck, root: &Path) {
    println!("\nProject: {}", root.display());
    println!("System: {} {}\n", health.os, health.arch);

    for tool in &health.tools {
        let status = if tool.available {
            format!(
                "{} {}",
                "✓".green().bold(),
                tool.version.as_deref().unwrap_or("installed").dimmed()
            )
        } else {
            format!("{} not found", "✗".red().bold())
        };
        println!("   {:<8} {}", tool.name, status);
    }

    let build_status = if health.build_dir_exists {
        format!("{} present", "✓".green().bold())
    } else {
        format!("{} missing", "✗".red().bold())
    };
    println!("   {:<8} {}", "build/", build_status);

    if !health.recommendations.is_empty() {
        println!("\nRecommendations:");
        for (i, rec) in health.recommendations.iter().enumerate() {
            println!("   {}. {}", i + 1, rec);
        }
    }

    match health.status.as_str() {
        "healthy" => println!("\n{}", "✅ Environment is ready".green().bold()),
        "incomplete" => println!("\n{}", "⚠️  Setup has not completed yet".yellow().bold()),
        _ => println!("\n{}", "❌ Required tools are missing".red().bold()),
    }
}
