//! Recreates a loaded template tree under a destination directory.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use globset::GlobSet;
use log::debug;
use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::ignore::default_skip_set;
use crate::template::TemplateNode;

/// Rules applied while copying a template.
#[derive(Debug, Clone)]
pub struct MaterializeOptions {
    /// Template entries left out entirely.
    pub skip: GlobSet,
    /// Placeholder token to replacement, applied to UTF-8 file contents.
    pub substitutions: HashMap<String, String>,
}

impl MaterializeOptions {
    /// Verbatim copy: nothing skipped or substituted.
    pub fn verbatim() -> Self {
        Self { skip: GlobSet::empty(), substitutions: HashMap::new() }
    }

    /// Default skip patterns, no substitutions.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self { skip: default_skip_set()?, substitutions: HashMap::new() })
    }

    pub fn substitute<K: Into<String>, V: Into<String>>(mut self, token: K, value: V) -> Self {
        self.substitutions.insert(token.into(), value.into());
        self
    }
}

/// Number of entries written by a materialization pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeSummary {
    pub files: usize,
    pub directories: usize,
}

pub struct Materializer {
    options: MaterializeOptions,
    pattern: Option<Regex>,
}

impl Materializer {
    pub fn new(options: MaterializeOptions) -> Result<Self> {
        let pattern = substitution_pattern(&options.substitutions)?;
        Ok(Self { options, pattern })
    }

    pub fn skip_set(&self) -> &GlobSet {
        &self.options.skip
    }

    /// Loads the template at `template_root` and writes it under `destination`.
    pub fn materialize_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        template_root: P,
        destination: Q,
    ) -> Result<MaterializeSummary> {
        let tree = TemplateNode::load(template_root, &self.options.skip)?;
        self.materialize(&tree, destination)
    }

    /// Writes `tree` under `destination`.
    ///
    /// Stops at the first entry that cannot be written. Entries written before
    /// the failure are left in place.
    pub fn materialize<P: AsRef<Path>>(
        &self,
        tree: &TemplateNode,
        destination: P,
    ) -> Result<MaterializeSummary> {
        let destination = destination.as_ref();
        let mut summary = MaterializeSummary::default();
        match tree {
            TemplateNode::Directory { children, .. } => {
                create_dir(destination)?;
                for child in children {
                    self.write_node(child, destination, &mut summary)?;
                }
            }
            file => self.write_node(file, destination, &mut summary)?,
        }
        debug!(
            "Materialized {} file(s) and {} directory(ies) into {}",
            summary.files,
            summary.directories,
            destination.display()
        );
        Ok(summary)
    }

    fn write_node(
        &self,
        node: &TemplateNode,
        destination: &Path,
        summary: &mut MaterializeSummary,
    ) -> Result<()> {
        match node {
            TemplateNode::Directory { relative_path, children } => {
                create_dir(&destination.join(relative_path))?;
                summary.directories += 1;
                for child in children {
                    self.write_node(child, destination, summary)?;
                }
            }
            TemplateNode::File { relative_path, content, permissions } => {
                let target = destination.join(relative_path);
                debug!("Writing file: {}", target.display());

                let content = self.render(content);
                fs::write(&target, &*content).map_err(|source| {
                    Error::MaterializeError { path: target.clone(), source }
                })?;
                fs::set_permissions(&target, permissions.clone())
                    .map_err(|source| Error::MaterializeError { path: target.clone(), source })?;
                summary.files += 1;
            }
        }
        Ok(())
    }

    fn render<'a>(&self, content: &'a [u8]) -> Cow<'a, [u8]> {
        let (Some(pattern), Ok(text)) = (&self.pattern, std::str::from_utf8(content)) else {
            return Cow::Borrowed(content);
        };

        let substitutions = &self.options.substitutions;
        match pattern.replace_all(text, |caps: &Captures| substitutions[&caps[0]].clone()) {
            Cow::Borrowed(_) => Cow::Borrowed(content),
            Cow::Owned(rendered) => Cow::Owned(rendered.into_bytes()),
        }
    }
}

fn create_dir(path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path)
        .map_err(|source| Error::MaterializeError { path: path.to_path_buf(), source })
}

// Longest tokens first so a token that prefixes another never shadows it.
fn substitution_pattern(substitutions: &HashMap<String, String>) -> Result<Option<Regex>> {
    if substitutions.is_empty() {
        return Ok(None);
    }
    let mut tokens: Vec<&String> = substitutions.keys().collect();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation =
        tokens.iter().map(|token| regex::escape(token)).collect::<Vec<_>>().join("|");

    Regex::new(&alternation)
        .map(Some)
        .map_err(|e| Error::TemplateError(format!("invalid substitution tokens: {}", e)))
}
