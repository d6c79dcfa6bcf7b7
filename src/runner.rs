//! Execution of external commands.
//!
//! A command never fails outward: spawn errors and non-zero exit statuses are
//! folded into a [`CommandResult`] and the reason is handed to the reporter.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::report::Reporter;

/// Outcome of a single external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}

impl From<bool> for CommandResult {
    fn from(success: bool) -> Self {
        Self { success }
    }
}

/// An external program invocation scoped to a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl ShellCommand {
    pub fn new<S: Into<String>, P: AsRef<Path>>(program: S, current_dir: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.as_ref().to_path_buf(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
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
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands.
pub trait CommandRunner {
    /// Runs `command` to completion. Never returns an error.
    fn run(&self, command: &ShellCommand, reporter: &dyn Reporter) -> CommandResult;
}

/// Runs commands as child processes of the current process.
///
/// There is no timeout: a hanging command (for example a stalled dependency
/// install) blocks the run until it exits.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand, reporter: &dyn Reporter) -> CommandResult {
        debug!("Running '{}' in {}", command, command.current_dir.display());

        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.current_dir)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => CommandResult::ok(),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let reason = stderr.lines().last().unwrap_or_default().trim();
                reporter.failure(&format!(
                    "'{}' exited with {}{}",
                    command,
                    output.status,
                    if reason.is_empty() { String::new() } else { format!(": {}", reason) }
                ));
                CommandResult::failed()
            }
            Err(e) => {
                reporter.failure(&format!("Could not start '{}': {}", command, e));
                CommandResult::failed()
            }
        }
    }
}
