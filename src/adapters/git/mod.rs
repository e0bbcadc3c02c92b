mod git2_repository;

pub use git2_repository::{Git2RepositoryAdapter, status_char};
