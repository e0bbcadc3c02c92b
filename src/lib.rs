//! facad: a modern, visually enhanced `ls` with emoji icons, git status and
//! directory analytics.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::commands::{Mode, Target};
pub use domain::AppError;

/// Release version printed by `facad --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
