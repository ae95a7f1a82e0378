//! External process invocation.
//!
//! Commands are built as an argument vector and spawned directly, never through
//! a shell, so dependency and branch names reach git untouched. The exit status
//! is the only signal inspected; output goes straight to the terminal.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn git() -> Self {
        Self::new("git")
    }

    pub fn cmake() -> Self {
        Self::new("cmake")
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands. Swapped out in tests to record invocations.
pub trait CommandRunner {
    /// Runs `command` to completion and reports whether it exited successfully.
    fn run(&self, command: &ExternalCommand) -> bool;
}

/// Spawns real processes and waits on them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand) -> bool {
        tracing::debug!(command = %command, cwd = ?command.cwd, "spawning");

        let mut process = Command::new(&command.program);
        process.args(&command.args);
        if let Some(dir) = &command.cwd {
            process.current_dir(dir);
        }

        match process.status() {
            Ok(status) => {
                tracing::debug!(%status, "process exited");
                status.success()
            }
            Err(e) => {
                tracing::warn!("failed to start '{}': {}", command.program, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let cmd = ExternalCommand::cmake().args(["-S", ".", "-G", "Unix Makefiles"]);
        assert_eq!(cmd.to_string(), "cmake -S . -G \"Unix Makefiles\"");
    }

    #[test]
    fn test_builder_keeps_argument_vector() {
        let cmd = ExternalCommand::git()
            .arg("checkout")
            .arg("feature; rm -rf /")
            .current_dir(Path::new("deps"));
        assert_eq!(cmd.args, vec!["checkout", "feature; rm -rf /"]);
        assert_eq!(cmd.cwd.as_deref(), Some(Path::new("deps")));
    }

    #[test]
    fn test_missing_program_reports_failure() {
        let cmd = ExternalCommand::new("magnet-definitely-not-installed-binary");
        assert!(!SystemRunner.run(&cmd));
    }
}
