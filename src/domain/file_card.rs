//! Directory entry model and the grid ordering.

use std::cmp::Ordering;

/// File-system kind of an entry as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symbolic link; `to_dir` records whether the target is a directory.
    Symlink { to_dir: bool },
    /// Devices, sockets, FIFOs.
    Other,
}

/// One entry of a grid listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCard {
    pub name: String,
    pub emoji: String,
    pub kind: EntryKind,
    /// Single-character git status, if the entry is tracked as changed.
    pub git_status: Option<char>,
    /// Set for directories whose status comes from a changed descendant.
    pub contains_changes: bool,
}

impl FileCard {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            kind,
            git_status: None,
            contains_changes: false,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Extension used for ordering; see [`extension_of`].
    pub fn extension(&self) -> &str {
        extension_of(&self.name)
    }

    /// Grid ordering: directories first, dot-entries first within each group,
    /// directories by name, files by extension then name. Comparisons ignore case.
    pub fn grid_cmp(&self, other: &Self) -> Ordering {
        other
            .is_directory()
            .cmp(&self.is_directory())
            .then_with(|| other.is_hidden().cmp(&self.is_hidden()))
            .then_with(|| {
                if self.is_directory() {
                    Ordering::Equal
                } else {
                    cmp_ignore_case(self.extension(), other.extension())
                }
            })
            .then_with(|| cmp_ignore_case(&self.name, &other.name))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Text after the last `.`; empty when there is none or the only dot leads the name.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        None | Some(0) => "",
        Some(idx) => &name[idx + 1..],
    }
}

pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}
