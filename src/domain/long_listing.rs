//! Long listing (`-l`) rows: size, time, emoji permissions, name.

use std::cmp::Ordering;
use std::time::SystemTime;

use crate::domain::file_card::cmp_ignore_case;
use crate::domain::format::{human_size, local_time, pad};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const PERMS_WIDTH: usize = 40;
const EMOJI_WIDTH: usize = 2;
const NAME_WIDTH: usize = 20;

/// One row of the long listing.
#[derive(Debug, Clone)]
pub struct LongEntry {
    pub name: String,
    pub emoji: String,
    pub size: u64,
    /// Unix mode bits; zero where unavailable.
    pub mode: u32,
    pub modified: SystemTime,
    pub is_dir: bool,
    /// Immediate subdirectories, for directories.
    pub subdirs: usize,
}

impl LongEntry {
    /// Dot-inclusive suffix from the last `.`, or `None`.
    fn dotted_extension(&self) -> Option<&str> {
        self.name.rfind('.').map(|idx| &self.name[idx..])
    }

    /// Ordering: directories first with the most subdirectories leading, then
    /// files without an extension, files by extension, larger files first, name.
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        match (self.is_dir, other.is_dir) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (true, true) => {
                return other
                    .subdirs
                    .cmp(&self.subdirs)
                    .then_with(|| cmp_ignore_case(&self.name, &other.name));
            }
            (false, false) => {}
        }

        let by_extension = match (self.dotted_extension(), other.dotted_extension()) {
            (Some(a), Some(b)) => cmp_ignore_case(a, b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };

        by_extension
            .then_with(|| other.size.cmp(&self.size))
            .then_with(|| cmp_ignore_case(&self.name, &other.name))
    }

    /// Render the row.
    pub fn render(&self) -> String {
        let mut line = format!(
            "{:>8}  {}  {} {} {}",
            human_size(self.size),
            local_time(self.modified, TIME_FORMAT),
            pad(&permissions(self.mode), PERMS_WIDTH),
            pad(&self.emoji, EMOJI_WIDTH),
            pad(&self.name, NAME_WIDTH),
        );
        if self.is_dir {
            line.push_str(&format!(" 📁 ({} subdirs)", self.subdirs));
        }
        line
    }
}

/// `👤 👀✏️🚀 👥 👀❌❌ 🌍 👀❌❌` for mode 0o744, plus special-bit markers.
pub fn permissions(mode: u32) -> String {
    let triad = |shift: u32| {
        let bits = (mode >> shift) & 0o7;
        format!(
            "{}{}{}",
            if bits & 0o4 != 0 { "👀" } else { "❌" },
            if bits & 0o2 != 0 { "✏️" } else { "❌" },
            if bits & 0o1 != 0 { "🚀" } else { "❌" },
        )
    };

    let mut perms = format!("👤 {} 👥 {} 🌍 {}", triad(6), triad(3), triad(0));
    if mode & 0o4000 != 0 {
        perms.push('🔑');
    }
    if mode & 0o2000 != 0 {
        perms.push('🔐');
    }
    if mode & 0o1000 != 0 {
        perms.push('🔒');
    }
    perms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: u64, is_dir: bool, subdirs: usize) -> LongEntry {
        LongEntry {
            name: name.to_string(),
            emoji: "📝".to_string(),
            size,
            mode: 0o644,
            modified: SystemTime::UNIX_EPOCH,
            is_dir,
            subdirs,
        }
    }

    fn order(mut entries: Vec<LongEntry>) -> Vec<String> {
        entries.sort_by(LongEntry::listing_cmp);
        entries.into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn permission_string_for_common_modes() {
        assert_eq!(permissions(0o755), "👤 👀✏️🚀 👥 👀❌🚀 🌍 👀❌🚀");
        assert_eq!(permissions(0o600), "👤 👀✏️❌ 👥 ❌❌❌ 🌍 ❌❌❌");
        assert!(permissions(0o4755).ends_with("🔑"));
        assert!(permissions(0o1777).ends_with("🔒"));
        assert!(permissions(0o6755).ends_with("🔑🔐"));
    }

    #[test]
    fn directories_lead_by_subdirectory_count() {
        let names = order(vec![
            entry("file.txt", 10, false, 0),
            entry("few", 0, true, 1),
            entry("many", 0, true, 5),
        ]);
        assert_eq!(names, ["many", "few", "file.txt"]);
    }

    #[test]
    fn files_without_extension_come_first_then_by_extension_and_size() {
        let names = order(vec![
            entry("small.txt", 1, false, 0),
            entry("big.txt", 100, false, 0),
            entry("a.md", 5, false, 0),
            entry("Makefile", 50, false, 0),
        ]);
        assert_eq!(names, ["Makefile", "a.md", "big.txt", "small.txt"]);
    }

    #[test]
    fn dotfiles_sort_by_their_whole_name_as_extension() {
        let names = order(vec![entry("z.rs", 1, false, 0), entry(".bashrc", 1, false, 0)]);
        assert_eq!(names, [".bashrc", "z.rs"]);
    }

    #[test]
    fn render_directory_row() {
        let row = entry("src", 4096, true, 3).render();
        assert!(row.starts_with("    4.0K  "));
        assert!(row.contains("src"));
        assert!(row.ends_with(" 📁 (3 subdirs)"));
    }

    #[test]
    fn render_file_row_has_no_subdir_suffix() {
        let row = entry("notes.txt", 12, false, 0).render();
        assert!(row.starts_with("   12.0B  "));
        assert!(!row.contains("subdirs"));
    }
}
