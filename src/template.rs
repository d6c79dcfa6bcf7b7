//! Template discovery and loading.
//! A template is a directory on disk; it is read completely into a
//! [`TemplateNode`] tree before anything is written to the destination.

use std::fs::{self, Permissions};
use std::path::{Path, PathBuf};

use globset::GlobSet;
use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One entry of a template tree. Paths are relative to the template root.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateNode {
    File { relative_path: PathBuf, content: Vec<u8>, permissions: Permissions },
    Directory { relative_path: PathBuf, children: Vec<TemplateNode> },
}

impl TemplateNode {
    /// Reads the template rooted at `root`, leaving out entries matched by `skip`.
    ///
    /// The returned node is the root directory itself, with an empty relative path.
    pub fn load<P: AsRef<Path>>(root: P, skip: &GlobSet) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateError(format!(
                "template directory '{}' does not exist",
                root.display()
            )));
        }
        debug!("Loading template from {}", root.display());
        let children = load_children(root, Path::new(""), skip)?;
        Ok(TemplateNode::Directory { relative_path: PathBuf::new(), children })
    }

    pub fn relative_path(&self) -> &Path {
        match self {
            TemplateNode::File { relative_path, .. } => relative_path,
            TemplateNode::Directory { relative_path, .. } => relative_path,
        }
    }

    /// Number of files and directories below this node, excluding itself.
    pub fn count(&self) -> (usize, usize) {
        match self {
            TemplateNode::File { .. } => (0, 0),
            TemplateNode::Directory { children, .. } => {
                children.iter().fold((0, 0), |(files, dirs), child| match child {
                    TemplateNode::File { .. } => (files + 1, dirs),
                    TemplateNode::Directory { .. } => {
                        let (child_files, child_dirs) = child.count();
                        (files + child_files, dirs + 1 + child_dirs)
                    }
                })
            }
        }
    }
}

fn load_children(dir: &Path, relative: &Path, skip: &GlobSet) -> Result<Vec<TemplateNode>> {
    let mut children = Vec::new();

    let entries =
        WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name();
    for entry in entries {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = relative.join(entry.file_name());

        if skip.is_match(&relative_path) {
            debug!("Skipping template entry {}", relative_path.display());
            continue;
        }

        let node = if entry.file_type().is_dir() {
            let grandchildren = load_children(entry.path(), &relative_path, skip)?;
            TemplateNode::Directory { relative_path, children: grandchildren }
        } else {
            let content = fs::read(entry.path())?;
            let permissions = fs::metadata(entry.path())?.permissions();
            TemplateNode::File { relative_path, content, permissions }
        };
        children.push(node);
    }

    Ok(children)
}

/// The set of templates available to the tool.
///
/// Only the first template is ever used; selection among several is left
/// to callers that want it.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<PathBuf>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<PathBuf>) -> Self {
        Self { templates }
    }

    /// Lists every subdirectory of `root`, sorted by name.
    pub fn discover<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateError(format!(
                "templates directory '{}' does not exist",
                root.display()
            )));
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            if entry.path().is_dir() {
                templates.push(entry.into_path());
            }
        }
        debug!("Found {} template(s) in {}", templates.len(), root.display());

        Ok(Self::new(templates))
    }

    pub fn templates(&self) -> &[PathBuf] {
        &self.templates
    }

    /// Returns the template to use for this run: always the first one.
    pub fn select(&self) -> Result<&Path> {
        self.templates
            .first()
            .map(PathBuf::as_path)
            .ok_or_else(|| Error::TemplateError("no templates available".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::GlobSet;
    use tempfile::TempDir;

    #[test]
    fn test_count_nested_tree() {
        let tree = TemplateNode::Directory {
            relative_path: PathBuf::new(),
            children: vec![
                TemplateNode::Directory {
                    relative_path: PathBuf::from("src"),
                    children: vec![TemplateNode::Directory {
                        relative_path: PathBuf::from("src/pages"),
                        children: Vec::new(),
                    }],
                },
            ],
        };
        assert_eq!(tree.count(), (0, 2));
    }

    #[test]
    fn test_load_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = TemplateNode::load(temp_dir.path().join("missing"), &GlobSet::empty());
        assert!(matches!(result, Err(Error::TemplateError(_))));
    }

    #[test]
    fn test_select_empty_registry() {
        let registry = TemplateRegistry::default();
        assert!(registry.select().is_err());
    }
}
