//! Directory analytics report (`-a`).

use std::path::Path;
use std::time::SystemTime;

use crate::domain::format::{bold, human_size, local_time};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A named file with the value it was selected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick<T> {
    pub name: String,
    pub value: T,
}

/// Aggregated statistics for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirAnalytics {
    /// Allocated bytes of all regular files below the directory.
    pub total_size: u64,
    /// Immediate subdirectories.
    pub directories: usize,
    /// Immediate regular files.
    pub files: usize,
    pub max_depth: usize,
    pub deepest_dir: Option<String>,
    /// Largest regular file anywhere below the directory, by apparent size.
    pub largest: Option<Pick<u64>>,
    pub oldest: Option<Pick<SystemTime>>,
    pub newest: Option<Pick<SystemTime>>,
    /// Names of empty immediate regular files, in scan order.
    pub empty_files: Vec<String>,
}

impl DirAnalytics {
    /// Track an immediate regular file.
    pub fn record_top_level_file(&mut self, name: &str, size: u64, modified: SystemTime) {
        self.files += 1;

        if self.oldest.as_ref().is_none_or(|pick| modified < pick.value) {
            self.oldest = Some(Pick { name: name.to_string(), value: modified });
        }
        if self.newest.as_ref().is_none_or(|pick| modified > pick.value) {
            self.newest = Some(Pick { name: name.to_string(), value: modified });
        }
        if size == 0 {
            self.empty_files.push(name.to_string());
        }
    }

    /// Track a regular file at any depth.
    pub fn record_file(&mut self, display_path: &str, apparent: u64, allocated: u64) {
        self.total_size += allocated;
        if self.largest.as_ref().is_none_or(|pick| apparent > pick.value) {
            self.largest = Some(Pick { name: display_path.to_string(), value: apparent });
        }
    }

    /// Track a directory found `depth` levels below the root.
    pub fn record_dir(&mut self, display_path: &str, depth: usize) {
        if depth == 1 {
            self.directories += 1;
        }
        if depth > self.max_depth {
            self.max_depth = depth;
            self.deepest_dir = Some(display_path.to_string());
        }
    }

    /// Report lines, starting with the bold directory path.
    pub fn render(&self, root: &Path) -> Vec<String> {
        let missing = || "-".to_string();
        let timed = |pick: &Option<Pick<SystemTime>>| {
            pick.as_ref()
                .map(|p| format!("{} [{}]", p.name, local_time(p.value, TIME_FORMAT)))
                .unwrap_or_else(missing)
        };

        vec![
            bold(&root.display().to_string()),
            format!("🧮 Total Size    : {}", human_size(self.total_size)),
            format!("🗂️  Directories   : {}", self.directories),
            format!("🌳 Max Depth     : {} levels", self.max_depth),
            format!("📁 Deepest Dir   : {}", self.deepest_dir.clone().unwrap_or_else(missing)),
            format!("🗃️  Files         : {}", self.files),
            format!(
                "🐘 Largest File  : {}",
                self.largest
                    .as_ref()
                    .map(|p| format!("{} [{}]", p.name, human_size(p.value)))
                    .unwrap_or_else(missing)
            ),
            format!("🏺 Oldest File   : {}", timed(&self.oldest)),
            format!("🆕 Newest File   : {}", timed(&self.newest)),
            format!("📭 Empty Files   : {} [{}]", self.empty_files.len(), self.empty_files.join(" ")),
        ]
    }
}
