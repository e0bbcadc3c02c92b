//! Long listing (`-l`).

use std::io::Write;
use std::path::Path;

use crate::adapters::filesystem::long_entries;
use crate::app::AppContext;
use crate::domain::format::bold;
use crate::domain::{AppError, LongEntry};
use crate::ports::GitPort;

/// One row per entry of `dir`, preceded by the bold path when `with_header`.
pub fn execute<G: GitPort, W: Write>(
    ctx: &AppContext<G>,
    dir: &Path,
    with_header: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let mut entries = long_entries(dir, ctx.resolver())?;
    entries.sort_by(LongEntry::listing_cmp);

    if with_header {
        writeln!(out, "{}", bold(&dir.display().to_string()))?;
    }
    for entry in &entries {
        writeln!(out, "{}", entry.render())?;
    }
    Ok(())
}
