pub mod analytics;
pub mod grid;
pub mod long;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::GitPort;

/// What to print for each directory target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Grid,
    Long,
    Analytics,
}

/// A checked command-line target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Canonical path of a directory.
    Directory(PathBuf),
    /// Anything else, kept as given.
    File(PathBuf),
}

impl Target {
    pub fn resolve(raw: &Path) -> Result<Self, AppError> {
        let metadata = fs::metadata(raw).map_err(|err| access_error(raw, err))?;
        if metadata.is_dir() {
            let canonical = raw.canonicalize().map_err(|err| access_error(raw, err))?;
            Ok(Target::Directory(canonical))
        } else {
            Ok(Target::File(raw.to_path_buf()))
        }
    }
}

fn access_error(raw: &Path, err: io::Error) -> AppError {
    let target = raw.display().to_string();
    if err.kind() == io::ErrorKind::NotFound {
        AppError::TargetNotFound(target)
    } else {
        AppError::TargetAccess { target, source: err }
    }
}

/// Print every target. File targets come first as one grid, then each
/// directory, separated by blank lines.
pub fn execute<G: GitPort, W: Write>(
    ctx: &AppContext<G>,
    targets: &[Target],
    mode: Mode,
    out: &mut W,
) -> Result<(), AppError> {
    let files: Vec<PathBuf> = targets
        .iter()
        .filter_map(|target| match target {
            Target::File(path) => Some(path.clone()),
            Target::Directory(_) => None,
        })
        .collect();
    let dirs: Vec<&Path> = targets
        .iter()
        .filter_map(|target| match target {
            Target::Directory(path) => Some(path.as_path()),
            Target::File(_) => None,
        })
        .collect();

    let mut printed = false;
    if !files.is_empty() {
        grid::execute_files(ctx, &files, out)?;
        printed = true;
    }

    for dir in &dirs {
        if printed {
            writeln!(out)?;
        }
        match mode {
            Mode::Grid => grid::execute(ctx, dir, out)?,
            Mode::Long => long::execute(ctx, dir, dirs.len() > 1 || !files.is_empty(), out)?,
            Mode::Analytics => analytics::execute(dir, out)?,
        }
        printed = true;
    }

    out.flush()?;
    Ok(())
}
