//! Resource resolution for named data sources.
//!
//! # Responsibility
//! - Map a source name (e.g. `brickset.json`) to a file path under one
//!   configured base directory.
//!
//! # Invariants
//! - Names are non-empty relative paths.
//! - Names never escape the base directory (`..`, absolute and prefixed
//!   components are rejected).

use crate::repo::json_repo::{RepoError, RepoResult};
use std::path::{Component, Path, PathBuf};

/// Directory bundled with this crate holding the default data files.
pub const BUNDLED_RESOURCES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");

/// Resolves data source names relative to a fixed base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    base_dir: PathBuf,
}

impl ResourceLocator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Locator for the resources shipped alongside the crate.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_RESOURCES_DIR)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the file path for `name`.
    ///
    /// # Errors
    /// - `RepoError::InvalidSourceName` when `name` is blank, absolute, or
    ///   contains a parent-directory component.
    pub fn resolve(&self, name: &str) -> RepoResult<PathBuf> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RepoError::InvalidSourceName(
                "source name cannot be empty".to_string(),
            ));
        }

        let relative = Path::new(trimmed);
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(RepoError::InvalidSourceName(format!(
                "source name must be a relative path inside the resource directory, got `{trimmed}`"
            )));
        }

        Ok(self.base_dir.join(relative))
    }
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::bundled()
    }
}
