//! Directory analytics (`-a`).

use std::io::Write;
use std::path::Path;

use crate::adapters::filesystem::analyze;
use crate::domain::AppError;

/// Print the analytics report for `dir`.
pub fn execute<W: Write>(dir: &Path, out: &mut W) -> Result<(), AppError> {
    let stats = analyze(dir)?;
    for line in stats.render(dir) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
