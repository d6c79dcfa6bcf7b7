//! appseed bootstraps a new project from a template directory.
//! It copies the template, initializes a git repository, seeds the
//! environment file and optionally installs hooks and updates dependencies.

/// Command-line interface module for the appseed application
pub mod cli;

/// Built-in ignore file, hook scripts and other static content
pub mod constants;

/// Dependency install/update chain (stops at the first failure)
pub mod deps;

/// `.env` seeding from the template's `.env.example`
pub mod env;

/// Error types and handling for the appseed application
pub mod error;

/// Repository initialization, `.gitignore` and custom hooks
pub mod git;

/// Skip patterns for template entries
pub mod ignore;

/// Copies a template tree into the destination
pub mod materializer;

/// Core bootstrap orchestration
/// Sequences every step of a run
pub mod orchestrator;

/// User input and interaction handling
pub mod prompt;

/// Progress reporting
pub mod report;

/// External command execution
pub mod runner;

/// Best-effort and fail-fast step sequencing
pub mod sequence;

/// Template discovery and loading
pub mod template;
