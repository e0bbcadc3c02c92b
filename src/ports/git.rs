use crate::domain::{AppError, GitStatusMap};
use std::path::Path;

pub trait GitPort {
    /// Short name of the branch checked out in the work tree containing `dir`.
    /// `Ok(None)` outside a repository.
    fn current_branch(&self, dir: &Path) -> Result<Option<String>, AppError>;

    /// Working-tree statuses of paths below `dir`, keyed relative to `dir`.
    /// Empty outside a repository.
    fn statuses(&self, dir: &Path) -> Result<GitStatusMap, AppError>;
}
