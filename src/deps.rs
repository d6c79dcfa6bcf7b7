//! Dependency installation and update in the new project.

use std::path::Path;

use crate::constants::PACKAGE_MANAGER;
use crate::report::Reporter;
use crate::runner::{CommandResult, CommandRunner, ShellCommand};
use crate::sequence::{run_sequence, Policy, SequenceOutcome, Step};

/// A package manager invocation with its progress wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyStep {
    pub args: Vec<String>,
    /// e.g. "Installing dependencies"
    pub progress: String,
    /// e.g. "Dependencies installed successfully"
    pub done: String,
    /// e.g. "Error installing dependencies"
    pub error: String,
}

impl DependencyStep {
    fn new(args: &[&str], progress: &str, done: &str, error: &str) -> Self {
        Self {
            args: args.iter().map(|arg| arg.to_string()).collect(),
            progress: progress.to_string(),
            done: done.to_string(),
            error: error.to_string(),
        }
    }
}

/// `npm install`, `npm update --save`, `npm update --save-dev`.
pub fn default_steps() -> Vec<DependencyStep> {
    vec![
        DependencyStep::new(
            &["install"],
            "Installing dependencies...",
            "Dependencies installed successfully",
            "Error installing dependencies",
        ),
        DependencyStep::new(
            &["update", "--save"],
            "Updating dependencies...",
            "Dependencies updated successfully",
            "Error updating dependencies",
        ),
        DependencyStep::new(
            &["update", "--save-dev"],
            "Updating dev dependencies...",
            "Dev dependencies updated successfully",
            "Error updating dev dependencies",
        ),
    ]
}

pub struct DependencyUpdater<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    program: String,
    steps: Vec<DependencyStep>,
}

impl<'a> DependencyUpdater<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a dyn Reporter) -> Self {
        Self::with_steps(runner, reporter, PACKAGE_MANAGER, default_steps())
    }

    pub fn with_steps<S: Into<String>>(
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
        program: S,
        steps: Vec<DependencyStep>,
    ) -> Self {
        Self { runner, reporter, program: program.into(), steps }
    }

    /// Runs every step in `project_dir`, stopping at the first failure.
    pub fn update<P: AsRef<Path>>(&self, project_dir: P) -> SequenceOutcome {
        let project_dir = project_dir.as_ref();
        let steps = self
            .steps
            .iter()
            .map(|step| Step::new(step.args.join(" "), move || self.run_step(project_dir, step)))
            .collect();

        run_sequence(Policy::StopOnError, steps)
    }

    fn run_step(&self, project_dir: &Path, step: &DependencyStep) -> CommandResult {
        self.reporter.start(&step.progress);
        let command =
            ShellCommand::new(self.program.as_str(), project_dir).args(step.args.iter().cloned());
        let result = self.runner.run(&command, self.reporter);
        if result.success {
            self.reporter.success(&step.done);
        } else {
            self.reporter.failure(&step.error);
        }
        result
    }
}
