//! Core bootstrap orchestration.
//! Combines all components to turn a template and a set of answers into a
//! ready-to-use project directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::deps::DependencyUpdater;
use crate::env::seed_env_file;
use crate::error::{Error, Result};
use crate::git::{GitAssets, GitBootstrapper};
use crate::materializer::{MaterializeOptions, MaterializeSummary, Materializer};
use crate::prompt::ProjectAnswers;
use crate::report::Reporter;
use crate::runner::{CommandResult, CommandRunner};
use crate::sequence::SequenceOutcome;
use crate::template::TemplateNode;

/// Stages of a run, in the order they are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreateDestinationDir,
    MaterializeTemplate,
    InitGit,
    SeedEnvFile,
    UpdateDependencies,
    InstallGitHooks,
    PrintNextSteps,
    Terminal,
}

/// What happened during a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub project_dir: PathBuf,
    pub materialized: MaterializeSummary,
    pub git: SequenceOutcome,
    pub env: CommandResult,
    /// `None` when the user did not ask for a dependency update.
    pub dependencies: Option<SequenceOutcome>,
    /// `None` when the user did not ask for custom hooks.
    pub hooks: Option<SequenceOutcome>,
}

pub struct Orchestrator<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    base_dir: PathBuf,
    git_assets: GitAssets,
    options: MaterializeOptions,
}

impl<'a> Orchestrator<'a> {
    /// Creates projects under `base_dir`, copying templates verbatim.
    pub fn new<P: AsRef<Path>>(
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
        base_dir: P,
    ) -> Self {
        Self {
            runner,
            reporter,
            base_dir: base_dir.as_ref().to_path_buf(),
            git_assets: GitAssets::default(),
            options: MaterializeOptions::verbatim(),
        }
    }

    pub fn with_git_assets(mut self, git_assets: GitAssets) -> Self {
        self.git_assets = git_assets;
        self
    }

    pub fn with_materialize_options(mut self, options: MaterializeOptions) -> Self {
        self.options = options;
        self
    }

    /// Bootstraps `answers.name()` from the template at `template_root`.
    ///
    /// # Errors
    /// * `Error::DestinationExistsError` if the project directory is already present;
    ///   nothing is written in that case
    /// * `Error::TemplateError` if the template cannot be read
    /// * `Error::MaterializeError` if copying stops partway; the partial project
    ///   is left on disk
    ///
    /// Failures of git, env and dependency steps are reported but never returned.
    pub fn run<P: AsRef<Path>>(
        &self,
        answers: &ProjectAnswers,
        template_root: P,
    ) -> Result<RunReport> {
        let template_root = template_root.as_ref();
        let project_dir = self.base_dir.join(answers.name());
        let materializer = Materializer::new(self.options.clone())?;

        let tree = TemplateNode::load(template_root, materializer.skip_set())?;

        enter(Stage::CreateDestinationDir);
        self.reporter.start("Creating Project...");
        create_destination(&project_dir)?;
        self.reporter.success("Project created successfully");

        enter(Stage::MaterializeTemplate);
        let materialized = materializer.materialize(&tree, &project_dir)?;

        enter(Stage::InitGit);
        let git = GitBootstrapper::new(self.runner, self.reporter, self.git_assets.clone());
        let git_outcome = git.init(&project_dir);

        enter(Stage::SeedEnvFile);
        let env = seed_env_file(template_root, &project_dir, self.reporter);

        let dependencies = if answers.wants_dependency_update() {
            enter(Stage::UpdateDependencies);
            Some(DependencyUpdater::new(self.runner, self.reporter).update(&project_dir))
        } else {
            None
        };

        let hooks = if answers.wants_git_hooks() {
            enter(Stage::InstallGitHooks);
            Some(git.install_hooks(&project_dir))
        } else {
            None
        };

        enter(Stage::PrintNextSteps);
        self.reporter.info(&next_steps(answers.name()));

        enter(Stage::Terminal);
        Ok(RunReport { project_dir, materialized, git: git_outcome, env, dependencies, hooks })
    }
}

fn enter(stage: Stage) {
    debug!("Entering stage {:?}", stage);
}

/// Creates the project directory, refusing to reuse an existing one.
pub fn create_destination<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    let project_dir = project_dir.as_ref();
    fs::create_dir(project_dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => {
            Error::DestinationExistsError { path: project_dir.display().to_string() }
        }
        _ => Error::IoError(e),
    })
}

/// Closing instructions printed after every run.
pub fn next_steps(project_name: &str) -> String {
    format!(
        "
    run the following commands to start your project:
    cd {}
    npm install
    npm run dev
  ",
        project_name
    )
}
