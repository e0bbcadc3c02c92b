//! Emoji classification of directory entries.
//!
//! Resolution order: symlink, directory, `/dev` device tables, exact file name,
//! extension, hidden, shebang, executable bit, text sniffing, unknown. Content is
//! only read when every name-based rule has missed.

mod tables;

use std::collections::HashMap;

use crate::domain::config::EmojiOverrides;
use crate::domain::file_card::{EntryKind, extension_of};

/// Bytes of file content inspected for shebangs and text detection.
pub const SNIFF_LEN: usize = 1024;

/// Facts about an entry that the resolver needs besides its content.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub name: &'a str,
    pub kind: EntryKind,
    pub executable: bool,
    /// The entry lives directly under `/dev`.
    pub device_dir: bool,
}

/// Maps entries to emojis using the built-in tables plus user overrides.
#[derive(Debug, Clone, Default)]
pub struct EmojiResolver {
    extensions: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl EmojiResolver {
    pub fn new(overrides: &EmojiOverrides) -> Self {
        Self {
            extensions: overrides
                .extensions
                .iter()
                .map(|(ext, emoji)| (ext.to_lowercase(), emoji.clone()))
                .collect(),
            files: overrides.files.clone().into_iter().collect(),
        }
    }

    /// Pick the emoji for `subject`. `head` is called at most once, and only when
    /// the content has to be inspected; it returns up to [`SNIFF_LEN`] bytes.
    pub fn resolve<'s, F>(&'s self, subject: &Subject<'_>, head: F) -> &'s str
    where
        F: FnOnce() -> Option<Vec<u8>>,
    {
        match subject.kind {
            EntryKind::Symlink { to_dir: true } => return tables::SYMLINK_DIR,
            EntryKind::Symlink { to_dir: false } => return tables::SYMLINK,
            EntryKind::Directory => return tables::DIRECTORY,
            EntryKind::File | EntryKind::Other => {}
        }

        if subject.device_dir {
            return device_emoji(subject.name);
        }

        if let Some(emoji) = self.files.get(subject.name) {
            return emoji;
        }
        if let Some(emoji) = lookup(tables::FILE_NAMES, subject.name) {
            return emoji;
        }

        let extension = extension_of(subject.name);
        if !extension.is_empty() {
            if let Some(emoji) = self.extensions.get(&extension.to_lowercase()) {
                return emoji;
            }
            if let Some(emoji) = tables::EXTENSIONS
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(extension))
                .map(|(_, emoji)| *emoji)
            {
                return emoji;
            }
        }

        if subject.name.starts_with('.') {
            return tables::HIDDEN;
        }

        let content = if subject.kind == EntryKind::File { head() } else { None };

        if let Some(emoji) = content.as_deref().and_then(shebang_emoji) {
            return emoji;
        }
        if subject.executable {
            return tables::EXECUTABLE;
        }
        match content {
            Some(bytes) if is_text(&bytes) => tables::TEXT,
            _ => tables::UNKNOWN,
        }
    }
}

/// Emoji for a device node under `/dev`: exact name, then prefix, then a wrench.
pub fn device_emoji(name: &str) -> &'static str {
    lookup(tables::DEVICE_NAMES, name)
        .or_else(|| {
            tables::DEVICE_PREFIXES
                .iter()
                .find(|(prefix, _)| name.starts_with(prefix))
                .map(|(_, emoji)| *emoji)
        })
        .unwrap_or(tables::DEVICE)
}

/// Emoji for the interpreter named on the first line, longest known prefix wins.
pub fn shebang_emoji(head: &[u8]) -> Option<&'static str> {
    if !head.starts_with(b"#!") {
        return None;
    }
    let line_end = head.iter().position(|b| *b == b'\n').unwrap_or(head.len());
    let line = String::from_utf8_lossy(&head[..line_end]);
    let line = line.trim_end();

    tables::SHEBANGS
        .iter()
        .filter(|(key, _)| {
            line.strip_prefix(key)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
        .max_by_key(|(key, _)| key.len())
        .map(|(_, emoji)| *emoji)
}

/// UTF-8 text without control characters other than whitespace. A multi-byte
/// character cut off at the end of the sample does not count against it.
pub fn is_text(head: &[u8]) -> bool {
    let text = match std::str::from_utf8(head) {
        Ok(text) => text,
        Err(err) if err.error_len().is_none() => {
            std::str::from_utf8(&head[..err.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return false,
    };
    text.chars().all(|c| !c.is_control() || c.is_whitespace())
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(name, _)| *name == key).map(|(_, emoji)| *emoji)
}
