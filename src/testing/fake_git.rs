use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, GitStatusMap};
use crate::ports::GitPort;

/// In-memory `GitPort` that records the directories it was asked about.
#[derive(Default)]
pub struct FakeGit {
    branch: Option<String>,
    statuses: GitStatusMap,
    failing: bool,
    pub queried: Mutex<Vec<PathBuf>>,
}

impl FakeGit {
    /// A fake that behaves like a directory outside any repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    pub fn with_status(mut self, path: &str, status: char) -> Self {
        self.statuses.insert(path, status);
        self
    }

    /// Every call fails with a git error.
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    fn check(&self, dir: &Path, command: &str) -> Result<(), AppError> {
        self.queried.lock().unwrap().push(dir.to_path_buf());
        if self.failing {
            return Err(AppError::git(command, "simulated failure"));
        }
        Ok(())
    }
}

impl GitPort for FakeGit {
    fn current_branch(&self, dir: &Path) -> Result<Option<String>, AppError> {
        self.check(dir, "current_branch")?;
        Ok(self.branch.clone())
    }

    fn statuses(&self, dir: &Path) -> Result<GitStatusMap, AppError> {
        self.check(dir, "statuses")?;
        Ok(self.statuses.clone())
    }
}
