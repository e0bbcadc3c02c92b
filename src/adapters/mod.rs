pub mod config_file;
pub mod filesystem;
pub mod git;
pub mod logging;
pub mod terminal;
