//! Skip patterns for template entries.
//! Paths matching any pattern are left out of the template tree, similar to
//! .gitignore functionality.

use crate::constants::DEFAULT_SKIP_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles glob patterns into a set matched against template-relative paths.
///
/// # Errors
/// * `Error::IgnorePatternError` if any pattern is invalid
///
/// # Example
/// ```
/// let skip = appseed::ignore::build_skip_set(&["**/*.log"]).unwrap();
/// assert!(skip.is_match("logs/debug.log"));
/// ```
pub fn build_skip_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        debug!("Adding skip pattern '{}'", pattern);
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnorePatternError(format!("'{}' is not a valid pattern: {}", pattern, e))
        })?);
    }

    builder.build().map_err(|e| Error::IgnorePatternError(e.to_string()))
}

/// Skip set built from [`DEFAULT_SKIP_PATTERNS`].
pub fn default_skip_set() -> Result<GlobSet> {
    build_skip_set(&DEFAULT_SKIP_PATTERNS)
}
