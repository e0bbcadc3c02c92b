use std::fs::{self, File, Metadata};
use std::io::{self, Read};
use std::path::Path;

use tracing::warn;

use super::{mode_of, open_dir};
use crate::domain::emoji::SNIFF_LEN;
use crate::domain::{AppError, EmojiResolver, EntryKind, FileCard, Subject};

const DEVICE_DIR: &str = "/dev";

/// Builds [`FileCard`]s for directory entries.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryScanner<'a> {
    resolver: &'a EmojiResolver,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new(resolver: &'a EmojiResolver) -> Self {
        Self { resolver }
    }

    /// Cards for every entry of `dir`, unsorted. `dir` should be canonical so
    /// that `/dev` is recognized. Entries whose metadata cannot be read are
    /// logged and skipped.
    pub fn scan(&self, dir: &Path) -> Result<Vec<FileCard>, AppError> {
        let device_dir = is_device_dir(dir);
        let mut cards = Vec::new();

        for entry in open_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Unable to read entry in {}: {}", dir.display(), err);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            match self.card(&entry.path(), &name, device_dir) {
                Ok(card) => cards.push(card),
                Err(err) => warn!("Unable to get info for {}: {}", name, err),
            }
        }

        Ok(cards)
    }

    /// Card for a single path, shown under `name`.
    pub fn card(&self, path: &Path, name: &str, device_dir: bool) -> io::Result<FileCard> {
        let metadata = fs::symlink_metadata(path)?;
        let kind = entry_kind(path, &metadata);
        let subject = Subject { name, kind, executable: mode_of(&metadata) & 0o100 != 0, device_dir };
        let emoji = self.resolver.resolve(&subject, || read_head(path));
        Ok(FileCard::new(name, emoji, kind))
    }
}

/// Kind from `lstat` metadata; symlinks are resolved only to learn whether
/// they point at a directory.
pub fn entry_kind(path: &Path, metadata: &Metadata) -> EntryKind {
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        let to_dir = fs::metadata(path).map(|target| target.is_dir()).unwrap_or(false);
        EntryKind::Symlink { to_dir }
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Up to `SNIFF_LEN` leading bytes, or `None` when the file cannot be read.
pub fn read_head(path: &Path) -> Option<Vec<u8>> {
    let file = File::open(path).ok()?;
    let mut head = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut head).ok()?;
    Some(head)
}

pub fn is_device_dir(dir: &Path) -> bool {
    dir == Path::new(DEVICE_DIR)
}
