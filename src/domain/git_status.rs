//! Git working-tree status attached to listing entries.

use std::collections::BTreeMap;

use crate::domain::file_card::FileCard;

/// Status characters keyed by `/`-separated paths relative to the listed directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitStatusMap {
    entries: BTreeMap<String, char>,
}

impl GitStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status; a trailing `/` (untracked directory) is dropped.
    pub fn insert(&mut self, path: &str, status: char) {
        let path = path.trim_end_matches('/');
        if !path.is_empty() {
            self.entries.insert(path.to_string(), status);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, path: &str) -> Option<char> {
        self.entries.get(path).copied()
    }

    /// Status of the first changed path below `dir`, in path order.
    pub fn first_descendant(&self, dir: &str) -> Option<char> {
        let prefix = format!("{}/", dir);
        self.entries
            .range(prefix.clone()..)
            .next()
            .filter(|(path, _)| path.starts_with(&prefix))
            .map(|(_, status)| *status)
    }
}

/// Attach statuses to `cards`. Directories without a status of their own take the
/// status of their first changed descendant and are flagged `contains_changes`.
pub fn annotate(cards: &mut [FileCard], statuses: &GitStatusMap) {
    for card in cards.iter_mut() {
        card.git_status = statuses.get(&card.name);
        card.contains_changes = false;

        if card.git_status.is_none() && card.is_directory() {
            if let Some(status) = statuses.first_descendant(&card.name) {
                card.git_status = Some(status);
                card.contains_changes = true;
            }
        }
    }
}
