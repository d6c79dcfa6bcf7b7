//! User input and interaction handling.
//! Collects the project name and the two bootstrap preferences, either
//! interactively or from a JSON document.

use std::io::Read;
use std::sync::OnceLock;

use dialoguer::{Confirm, Input};
use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::constants::PROJECT_NAME_PATTERN;
use crate::error::{Error, Result};

pub const NAME_PROMPT: &str = "Project name:";
pub const GIT_HOOKS_PROMPT: &str = "Do you want to use custom git hooks?";
pub const UPDATE_DEPENDENCIES_PROMPT: &str = "Do you want to update your dependencies?";

fn name_regex() -> &'static Regex {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    NAME_RE.get_or_init(|| Regex::new(PROJECT_NAME_PATTERN).expect("valid project name pattern"))
}

/// Checks a project name against the allowed character set.
///
/// Only ASCII letters, digits, hyphens and underscores are accepted, which also
/// rules out path separators and leading dots.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name_regex().is_match(name) {
        Ok(())
    } else {
        Err(Error::ValidationError(
            "Project name may only include letters, numbers, underscores and hyphens".to_string(),
        ))
    }
}

/// Answers collected once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    name: String,
    wants_git_hooks: bool,
    wants_dependency_update: bool,
}

impl ProjectAnswers {
    pub fn new<S: Into<String>>(
        name: S,
        wants_git_hooks: bool,
        wants_dependency_update: bool,
    ) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;
        Ok(Self { name, wants_git_hooks, wants_dependency_update })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wants_git_hooks(&self) -> bool {
        self.wants_git_hooks
    }

    pub fn wants_dependency_update(&self) -> bool {
        self.wants_dependency_update
    }

    /// Parses answers from JSON such as
    /// `{"name": "my_app", "git_hooks": true, "update_dependencies": false}`.
    pub fn from_json(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct RawAnswers {
            name: String,
            #[serde(default)]
            git_hooks: bool,
            #[serde(default)]
            update_dependencies: bool,
        }

        let raw: RawAnswers = serde_json::from_str(content.trim())?;
        Self::new(raw.name, raw.git_hooks, raw.update_dependencies)
    }
}

/// Reads answers as JSON from stdin.
pub fn answers_from_stdin() -> Result<ProjectAnswers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    ProjectAnswers::from_json(&buffer)
}

/// Terminal interaction used by [`collect_answers`].
pub trait Prompter {
    /// Asks for free text. `validate` may be used to re-ask inline.
    fn text(&self, prompt: &str, validate: &dyn Fn(&str) -> Result<()>) -> Result<String>;
    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
    /// Shows a validation message before asking again.
    fn warn(&self, message: &str);
}

/// Prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, validate: &dyn Fn(&str) -> Result<()>) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input.as_str()).map_err(|e| e.to_string()))
            .interact_text()?;
        Ok(input)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Asks the three questions in order, re-asking the name until it is valid.
pub fn collect_answers(prompt: &dyn Prompter) -> Result<ProjectAnswers> {
    let name = loop {
        let input = prompt.text(NAME_PROMPT, &validate_project_name)?;
        match validate_project_name(&input) {
            Ok(()) => break input,
            Err(e) => {
                debug!("Rejected project name '{}'", input);
                prompt.warn(&e.to_string());
            }
        }
    };

    let wants_git_hooks = prompt.confirm(GIT_HOOKS_PROMPT, false)?;
    let wants_dependency_update = prompt.confirm(UPDATE_DEPENDENCIES_PROMPT, false)?;

    ProjectAnswers::new(name, wants_git_hooks, wants_dependency_update)
}
