//! Subprocess invocation with explicit results.
//!
//! A non-zero exit is not an error here: callers get the captured output
//! and exit status back and decide at the step boundary. Only a failure to
//! spawn the child at all is an `Err`. The working directory is always an
//! explicit parameter; this module never touches the process-wide cwd.

use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

/// Captured outcome of a finished child process.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code for display; children killed by a signal have none.
    pub fn code_display(&self) -> String {
        match self.status.code() {
            Some(code) => code.to_string(),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Run a command to completion, capturing stdout and stderr.
///
/// The command line is echoed before execution so the user can see what the
/// tool is driving.
pub fn run(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
    let rendered = render(program, args);
    println!("Running: {rendered}");

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .with_context(|| format!("Failed to run command: {rendered}"))?;

    Ok(CommandOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_captures_stdout_on_success() {
        let output = run("sh", &["-c", "echo hello"], None).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_not_an_error() {
        let output = run("sh", &["-c", "echo oops >&2; exit 2"], None).unwrap();
        assert!(!output.success());
        assert_eq!(output.status.code(), Some(2));
        assert_eq!(output.stderr.trim(), "oops");
        assert_eq!(output.code_display(), "2");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        assert!(run("vcsetup-no-such-program", &[], None).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_working_directory_is_respected() {
        let tmp = tempfile::tempdir().unwrap();
        let output = run("sh", &["-c", "pwd"], Some(tmp.path())).unwrap();
        assert!(output.success());
        assert_eq!(
            output.stdout.trim(),
            tmp.path().canonicalize().unwrap().to_string_lossy()
        );
    }
}
