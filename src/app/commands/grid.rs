//! Default grid listing.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::adapters::filesystem::DirectoryScanner;
use crate::app::AppContext;
use crate::domain::git_status::annotate;
use crate::domain::{AppError, FileCard, layout};
use crate::ports::GitPort;

/// List `dir` (canonical) under its header.
pub fn execute<G: GitPort, W: Write>(
    ctx: &AppContext<G>,
    dir: &Path,
    out: &mut W,
) -> Result<(), AppError> {
    let mut cards = DirectoryScanner::new(ctx.resolver()).scan(dir)?;
    cards.sort_by(FileCard::grid_cmp);

    let branch = if ctx.config().git { annotate_from_git(ctx.git(), dir, &mut cards) } else { None };

    writeln!(out, "{}", layout::header(dir, branch.as_deref()))?;
    write_grid(&cards, ctx.term_width(), ctx.columns().max_columns(dir), out)
}

/// List file targets as one headerless grid, each shown under the path it was
/// given on the command line. Emojis and ordering use the file name alone.
pub fn execute_files<G: GitPort, W: Write>(
    ctx: &AppContext<G>,
    files: &[PathBuf],
    out: &mut W,
) -> Result<(), AppError> {
    let scanner = DirectoryScanner::new(ctx.resolver());
    let mut cards = Vec::with_capacity(files.len());
    for file in files {
        let shown = file.display().to_string();
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| shown.clone());
        match scanner.card(file, &name, false) {
            Ok(card) => cards.push((card, shown)),
            Err(err) => warn!("Unable to get info for {}: {}", shown, err),
        }
    }
    cards.sort_by(|(a, _), (b, _)| a.grid_cmp(b));

    let cards: Vec<FileCard> = cards
        .into_iter()
        .map(|(card, shown)| FileCard { name: shown, ..card })
        .collect();

    write_grid(&cards, ctx.term_width(), ctx.columns().default_columns(), out)
}

/// Attach statuses to `cards` and return the branch. Git failures only lose the
/// annotations.
fn annotate_from_git<G: GitPort>(git: &G, dir: &Path, cards: &mut [FileCard]) -> Option<String> {
    let branch = match git.current_branch(dir) {
        Ok(branch) => branch,
        Err(err) => {
            debug!("Skipping git annotations for {}: {}", dir.display(), err);
            return None;
        }
    };
    branch.as_ref()?;

    match git.statuses(dir) {
        Ok(statuses) => annotate(cards, &statuses),
        Err(err) => debug!("Skipping git statuses for {}: {}", dir.display(), err),
    }
    branch
}

fn write_grid<W: Write>(
    cards: &[FileCard],
    term_width: usize,
    max_columns: usize,
    out: &mut W,
) -> Result<(), AppError> {
    let grid = layout::plan(cards, term_width, max_columns);
    for line in layout::render(cards, &grid) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
