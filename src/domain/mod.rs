pub mod analytics;
pub mod config;
pub mod dir_config;
pub mod emoji;
pub mod error;
pub mod file_card;
pub mod format;
pub mod git_status;
pub mod layout;
pub mod long_listing;

pub use analytics::DirAnalytics;
pub use config::{EmojiOverrides, FacadConfig};
pub use dir_config::ColumnPolicy;
pub use emoji::{EmojiResolver, Subject};
pub use error::AppError;
pub use file_card::{EntryKind, FileCard};
pub use git_status::GitStatusMap;
pub use long_listing::LongEntry;
