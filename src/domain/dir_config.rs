//! Per-directory column caps for the grid listing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::config::FacadConfig;

/// Column cap used when no directory-specific entry applies.
pub const DEFAULT_MAX_COLUMNS: usize = 4;

const BUILTIN: &[(&str, usize)] = &[("/dev", 6), ("/proc", 5)];

#[derive(Debug, Clone)]
pub struct ColumnPolicy {
    default: usize,
    overrides: BTreeMap<PathBuf, usize>,
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self {
            default: DEFAULT_MAX_COLUMNS,
            overrides: BUILTIN.iter().map(|(path, cols)| (PathBuf::from(path), *cols)).collect(),
        }
    }
}

impl ColumnPolicy {
    /// Built-in caps with the user's default and per-path entries layered on top.
    pub fn from_config(config: &FacadConfig) -> Self {
        let mut policy = Self::default();
        if let Some(default) = config.max_columns {
            policy.default = default;
        }
        for (path, columns) in &config.columns {
            policy.overrides.insert(PathBuf::from(path), *columns);
        }
        policy
    }

    /// Maximum number of grid columns for the directory at `path`.
    pub fn max_columns(&self, path: &Path) -> usize {
        self.overrides.get(path).copied().unwrap_or(self.default)
    }

    /// Cap for listings not tied to one directory, such as file targets.
    pub fn default_columns(&self) -> usize {
        self.default
    }
}
