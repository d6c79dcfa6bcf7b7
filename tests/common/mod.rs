#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use appseed::error::Result;
use appseed::prompt::Prompter;
use appseed::report::Reporter;
use appseed::runner::{CommandResult, CommandRunner, ShellCommand, SystemRunner};

/// Records every command. Commands listed as failing return `success=false`,
/// programs listed as executing are really run, everything else succeeds.
/// A successful fake `git init` leaves an empty `.git/hooks` behind.
#[derive(Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<ShellCommand>>,
    failing: Vec<String>,
    executing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    pub fn executing(mut self, program: &str) -> Self {
        self.executing.push(program.to_string());
        self
    }

    pub fn invoked(&self) -> Vec<String> {
        self.commands.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn commands(&self) -> Vec<ShellCommand> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ShellCommand, reporter: &dyn Reporter) -> CommandResult {
        self.commands.borrow_mut().push(command.clone());

        let line = command.to_string();
        if self.failing.contains(&line) {
            reporter.failure(&format!("'{}' exited with exit status: 1", line));
            return CommandResult::failed();
        }
        if self.executing.contains(&command.program) {
            return SystemRunner::new().run(command, reporter);
        }
        if line == "git init" {
            fs::create_dir_all(command.current_dir.join(".git").join("hooks")).unwrap();
        }
        CommandResult::ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    Success(String),
    Failure(String),
    Info(String),
}

#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Failure(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Success(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn start(&self, message: &str) {
        self.events.borrow_mut().push(Event::Start(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.events.borrow_mut().push(Event::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.events.borrow_mut().push(Event::Failure(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.events.borrow_mut().push(Event::Info(message.to_string()));
    }
}

/// Replays canned answers. Text answers are returned as-is, so validation
/// is left to the caller.
pub struct ScriptedPrompter {
    texts: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    pub prompts: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(texts: &[&str], confirms: &[bool]) -> Self {
        Self {
            texts: RefCell::new(texts.iter().map(|text| text.to_string()).collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
            prompts: RefCell::new(Vec::new()),
            warnings: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, _validate: &dyn Fn(&str) -> Result<()>) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.texts.borrow_mut().pop_front().expect("no scripted text left"))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(default))
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

/// Writes `files` (relative path, content) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).map(|m| m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}
