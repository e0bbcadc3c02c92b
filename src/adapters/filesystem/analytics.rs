use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::open_dir;
use crate::domain::{AppError, DirAnalytics};

/// Walk `dir` without following symlinks and aggregate its statistics.
/// Entries that cannot be read are logged and skipped.
pub fn analyze(dir: &Path) -> Result<DirAnalytics, AppError> {
    // Fail on the root itself the same way the listings do.
    drop(open_dir(dir)?);

    let mut stats = DirAnalytics::default();
    let walker = WalkDir::new(dir).min_depth(1).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Error scanning {}: {}", dir.display(), err);
                continue;
            }
        };

        let display_path = display_path(dir, entry.path());
        let file_type = entry.file_type();

        if file_type.is_dir() {
            stats.record_dir(&display_path, entry.depth());
        } else if file_type.is_file() {
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    warn!("Unable to get info for {}: {}", display_path, err);
                    continue;
                }
            };
            stats.record_file(&display_path, metadata.len(), allocated_size(&metadata));
            if entry.depth() == 1 {
                let name = entry.file_name().to_string_lossy();
                let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                stats.record_top_level_file(&name, metadata.len(), modified);
            }
        }
    }

    debug!(
        "Analyzed {}: {} files, {} directories, depth {}",
        dir.display(),
        stats.files,
        stats.directories,
        stats.max_depth
    );
    Ok(stats)
}

/// Bytes allocated on disk; falls back to the apparent size off Unix.
fn allocated_size(metadata: &Metadata) -> u64 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        metadata.blocks() * 512
    }
    #[cfg(not(unix))]
    {
        metadata.len()
    }
}

/// `./`-prefixed path of `path` below `root`.
fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    format!("./{}", relative.display())
}
