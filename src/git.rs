//! Repository initialization, ignore file and custom hooks.
//!
//! Every step here is best-effort: failures are reported and the next step is
//! attempted anyway.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{GITIGNORE, GITIGNORE_FILE, POST_MERGE_HOOK, PRE_COMMIT_HOOK, VCS};
use crate::report::Reporter;
use crate::runner::{CommandResult, CommandRunner, ShellCommand};
use crate::sequence::{run_sequence, Policy, SequenceOutcome, Step};

/// Hooks the bootstrapper knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookName {
    PreCommit,
    PostMerge,
}

impl HookName {
    pub fn file_name(&self) -> &'static str {
        match self {
            HookName::PreCommit => "pre-commit",
            HookName::PostMerge => "post-merge",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A hook script written verbatim to `.git/hooks/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHookSpec {
    pub name: HookName,
    pub script: String,
}

impl GitHookSpec {
    pub fn new<S: Into<String>>(name: HookName, script: S) -> Self {
        Self { name, script: script.into() }
    }
}

/// Static content written by the bootstrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitAssets {
    pub ignore: String,
    pub hooks: Vec<GitHookSpec>,
}

impl Default for GitAssets {
    fn default() -> Self {
        Self {
            ignore: GITIGNORE.to_string(),
            hooks: vec![
                GitHookSpec::new(HookName::PreCommit, PRE_COMMIT_HOOK),
                GitHookSpec::new(HookName::PostMerge, POST_MERGE_HOOK),
            ],
        }
    }
}

pub struct GitBootstrapper<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    assets: GitAssets,
}

impl<'a> GitBootstrapper<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
        assets: GitAssets,
    ) -> Self {
        Self { runner, reporter, assets }
    }

    /// Runs `git init` in `project_dir` and writes the ignore file.
    ///
    /// The ignore file is written even if `git init` fails.
    pub fn init<P: AsRef<Path>>(&self, project_dir: P) -> SequenceOutcome {
        let project_dir = project_dir.as_ref();
        self.reporter.start("Initializing git repository...");

        let outcome = run_sequence(
            Policy::ContinueOnError,
            vec![
                Step::new("git init", || self.init_repository(project_dir)),
                Step::new(GITIGNORE_FILE, || self.write_ignore(project_dir)),
            ],
        );

        if outcome.all_succeeded() {
            self.reporter.success("Git repository initialized successfully");
        } else {
            self.reporter.failure("Error initializing git repository");
        }
        outcome
    }

    /// Writes each hook script and marks it executable. A failing hook does
    /// not prevent the others from being installed.
    ///
    /// `.git/hooks` is never created here, so every hook fails when `git init`
    /// did not produce a repository.
    pub fn install_hooks<P: AsRef<Path>>(&self, project_dir: P) -> SequenceOutcome {
        let hooks_dir = project_dir.as_ref().join(".git").join("hooks");
        let hooks_dir = hooks_dir.as_path();

        let steps = self
            .assets
            .hooks
            .iter()
            .map(|hook| {
                Step::new(hook.name.file_name(), move || self.install_hook(hooks_dir, hook))
            })
            .collect();

        run_sequence(Policy::ContinueOnError, steps)
    }

    fn init_repository(&self, project_dir: &Path) -> CommandResult {
        self.runner.run(&ShellCommand::new(VCS, project_dir).arg("init"), self.reporter)
    }

    fn write_ignore(&self, project_dir: &Path) -> CommandResult {
        let path = project_dir.join(GITIGNORE_FILE);
        debug!("Writing {}", path.display());
        match fs::write(&path, &self.assets.ignore) {
            Ok(()) => CommandResult::ok(),
            Err(e) => {
                self.reporter.failure(&format!("Error writing {}: {}", path.display(), e));
                CommandResult::failed()
            }
        }
    }

    fn install_hook(&self, hooks_dir: &Path, hook: &GitHookSpec) -> CommandResult {
        self.reporter.start(&format!("Creating {} hook...", hook.name));

        let hook_path = hooks_dir.join(hook.name.file_name());
        if let Err(e) = fs::write(&hook_path, &hook.script) {
            debug!("Failed to write {}: {}", hook_path.display(), e);
            self.reporter.failure(&format!("Error creating {} hook", hook.name));
            return CommandResult::failed();
        }

        if !self.make_executable(hooks_dir, hook.name).success {
            self.reporter.failure(&format!("Error creating {} hook", hook.name));
            return CommandResult::failed();
        }

        self.reporter.success(&format!("{} hook created successfully", hook.name));
        CommandResult::ok()
    }

    #[cfg(unix)]
    fn make_executable(&self, hooks_dir: &Path, hook: HookName) -> CommandResult {
        let command = ShellCommand::new("chmod", hooks_dir).args(["+x", hook.file_name()]);
        self.runner.run(&command, self.reporter)
    }

    #[cfg(not(unix))]
    fn make_executable(&self, _hooks_dir: &Path, hook: HookName) -> CommandResult {
        debug!("No executable bit to set on {} hook", hook);
        CommandResult::ok()
    }
}

/// Location of a hook script inside a project.
pub fn hook_path<P: AsRef<Path>>(project_dir: P, hook: HookName) -> PathBuf {
    project_dir.as_ref().join(".git").join("hooks").join(hook.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assets() {
        let assets = GitAssets::default();
        assert!(assets.ignore.contains("node_modules"));
        let names: Vec<_> = assets.hooks.iter().map(|hook| hook.name).collect();
        assert_eq!(names, vec![HookName::PreCommit, HookName::PostMerge]);
        assert!(assets.hooks[0].script.contains("npm run precommit"));
        assert!(assets.hooks[1].script.contains("npm install"));
    }

    #[test]
    fn test_hook_path() {
        assert_eq!(
            hook_path("my_app", HookName::PostMerge),
            PathBuf::from("my_app/.git/hooks/post-merge")
        );
    }
}
