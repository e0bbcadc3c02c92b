use crate::domain::{AppError, GitStatusMap};
use crate::ports::GitPort;
use git2::{ErrorCode, Repository, RepositoryOpenFlags, Status, StatusOptions};
use std::ffi::OsStr;
use std::path::{Component, Path};

/// `GitPort` backed by libgit2. Discovery honors `GIT_DIR` and
/// `GIT_CEILING_DIRECTORIES` the same way the git CLI does.
#[derive(Debug, Clone, Default)]
pub struct Git2RepositoryAdapter;

impl Git2RepositoryAdapter {
    pub fn new() -> Self {
        Self
    }

    fn discover(&self, dir: &Path) -> Result<Option<Repository>, AppError> {
        let ceilings = std::iter::empty::<&OsStr>();
        match Repository::open_ext(dir, RepositoryOpenFlags::FROM_ENV, ceilings) {
            Ok(repo) => Ok(Some(repo)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(AppError::git("git2::Repository::open_ext", e)),
        }
    }
}

impl GitPort for Git2RepositoryAdapter {
    fn current_branch(&self, dir: &Path) -> Result<Option<String>, AppError> {
        let Some(repo) = self.discover(dir)? else {
            return Ok(None);
        };

        match repo.head() {
            Ok(head) => {
                if repo.head_detached().unwrap_or(false) {
                    return Ok(Some("HEAD".to_string()));
                }
                Ok(head.shorthand().map(str::to_string))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head_ref = repo
                    .find_reference("HEAD")
                    .map_err(|e| AppError::git("git2::Repository::find_reference(HEAD)", e))?;
                Ok(head_ref
                    .symbolic_target()
                    .map(|target| target.strip_prefix("refs/heads/").unwrap_or(target).to_string()))
            }
            Err(e) => Err(AppError::git("git2::Repository::head", e)),
        }
    }

    fn statuses(&self, dir: &Path) -> Result<GitStatusMap, AppError> {
        let mut map = GitStatusMap::new();
        let Some(repo) = self.discover(dir)? else {
            return Ok(map);
        };
        let Some(workdir) = repo.workdir() else {
            return Ok(map);
        };

        let prefix = relative_prefix(&workdir.canonicalize()?, &dir.canonicalize()?);
        let Some(prefix) = prefix else {
            return Ok(map);
        };

        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(false).include_ignored(false);
        if !prefix.is_empty() {
            // Directory names are literal paths, not glob patterns.
            options.pathspec(prefix.as_str()).disable_pathspec_match(true);
        }

        let statuses = repo
            .statuses(Some(&mut options))
            .map_err(|e| AppError::git("git2::Repository::statuses", e))?;

        for entry in statuses.iter() {
            let (Some(path), Some(status)) = (entry.path(), status_char(entry.status())) else {
                continue;
            };
            let relative = if prefix.is_empty() {
                Some(path)
            } else {
                path.strip_prefix(prefix.as_str()).and_then(|rest| rest.strip_prefix('/'))
            };
            if let Some(relative) = relative {
                map.insert(relative, status);
            }
        }

        Ok(map)
    }
}

/// `/`-joined path of `dir` below `workdir`; `None` when `dir` is outside it.
fn relative_prefix(workdir: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(workdir).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Single-character status in the style of `git status -s`: `U` untracked,
/// otherwise the index column if set, else the work-tree column. Ignored files
/// are never requested and map to `None`.
pub fn status_char(status: Status) -> Option<char> {
    if status.is_conflicted() || status.is_wt_new() {
        return Some('U');
    }

    let index = [
        (Status::INDEX_NEW, 'A'),
        (Status::INDEX_MODIFIED, 'M'),
        (Status::INDEX_DELETED, 'D'),
        (Status::INDEX_RENAMED, 'R'),
        (Status::INDEX_TYPECHANGE, 'T'),
    ];
    let worktree = [
        (Status::WT_MODIFIED, 'M'),
        (Status::WT_DELETED, 'D'),
        (Status::WT_RENAMED, 'R'),
        (Status::WT_TYPECHANGE, 'T'),
    ];

    index
        .iter()
        .chain(worktree.iter())
        .find(|(flag, _)| status.contains(*flag))
        .map(|(_, code)| *code)
}
