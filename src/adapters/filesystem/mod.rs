//! File-system adapters: directory scanning for the three listing views.

mod analytics;
mod long_listing;
mod scanner;

pub use analytics::analyze;
pub use long_listing::long_entries;
pub use scanner::{DirectoryScanner, entry_kind, is_device_dir, read_head};

use std::fs::{self, ReadDir};
use std::path::Path;

use crate::domain::AppError;

/// Open `dir` for reading, reporting failures against the directory itself.
pub(crate) fn open_dir(dir: &Path) -> Result<ReadDir, AppError> {
    fs::read_dir(dir)
        .map_err(|source| AppError::TargetAccess { target: dir.display().to_string(), source })
}

/// Unix mode bits, or zero where the platform has none.
pub(crate) fn mode_of(metadata: &fs::Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode()
    }
    #[cfg(not(unix))]
    {
        let _ = metadata;
        0
    }
}
