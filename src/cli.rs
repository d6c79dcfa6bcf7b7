//! Command-line interface implementation for appseed.
//! The tool is interactive; flags only tune logging, the template location
//! and where answers come from.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{TEMPLATES_DIR, TEMPLATES_ENV};

/// Command-line arguments structure for appseed.
#[derive(Parser, Debug)]
#[command(author, version, about = "appseed: bootstrap a new project from a template", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding the available templates. The first one (by name) is used.
    ///
    /// Defaults to `templates/` next to the executable, then `./templates`.
    /// `cargo install` ships neither, so installed binaries need this flag or
    /// the environment variable.
    #[arg(short, long, value_name = "DIR", env = TEMPLATES_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// Read answers as JSON from stdin instead of prompting,
    /// e.g. {"name": "my_app", "git_hooks": true, "update_dependencies": false}
    #[arg(short, long)]
    pub stdin: bool,
}

impl Args {
    /// Template registry root: the flag or environment value if given, else
    /// `templates/` next to the executable, else `./templates`.
    pub fn templates_root(&self) -> PathBuf {
        if let Some(dir) = &self.templates_dir {
            return dir.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR)))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from(TEMPLATES_DIR))
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
