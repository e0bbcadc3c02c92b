use std::fs;
use std::path::Path;
use std::time::SystemTime;

use tracing::warn;

use super::scanner::{DirectoryScanner, is_device_dir};
use super::{mode_of, open_dir};
use crate::domain::{AppError, EmojiResolver, LongEntry};

/// Long-listing rows for every entry of `dir`, unsorted.
pub fn long_entries(dir: &Path, resolver: &EmojiResolver) -> Result<Vec<LongEntry>, AppError> {
    let scanner = DirectoryScanner::new(resolver);
    let device_dir = is_device_dir(dir);
    let mut entries = Vec::new();

    for entry in open_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Unable to read entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Unable to get info for {}: {}", name, err);
                continue;
            }
        };
        let card = match scanner.card(&path, &name, device_dir) {
            Ok(card) => card,
            Err(err) => {
                warn!("Unable to get info for {}: {}", name, err);
                continue;
            }
        };

        let is_dir = metadata.is_dir();
        entries.push(LongEntry {
            subdirs: if is_dir { count_subdirs(&path) } else { 0 },
            name,
            emoji: card.emoji,
            size: metadata.len(),
            mode: mode_of(&metadata),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            is_dir,
        });
    }

    Ok(entries)
}

/// Immediate subdirectories of `dir`, following symlinks. Unreadable
/// directories count as having none.
fn count_subdirs(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn collects_sizes_and_subdir_counts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/a")).unwrap();
        fs::create_dir_all(dir.path().join("src/b")).unwrap();
        fs::write(dir.path().join("src/file.txt"), "x").unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();

        let resolver = EmojiResolver::default();
        let mut entries = long_entries(dir.path(), &resolver).unwrap();
        entries.sort_by(|a, b| a.listing_cmp(b));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "src");
        assert!(entries[0].is_dir);
        assert_eq!(entries[0].subdirs, 2);
        assert_eq!(entries[1].name, "Cargo.toml");
        assert_eq!(entries[1].size, 10);
        assert_eq!(entries[1].subdirs, 0);
    }

    #[test]
    fn unreadable_directory_has_no_subdirs() {
        let dir = TempDir::new().unwrap();
        assert_eq!(count_subdirs(&dir.path().join("missing")), 0);
    }

    #[cfg(unix)]
    #[test]
    fn records_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script = dir.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o750)).unwrap();

        let entries = long_entries(dir.path(), &EmojiResolver::default()).unwrap();
        assert_eq!(entries[0].mode & 0o777, 0o750);
    }
}
