use std::io;

use thiserror::Error;

/// Library-wide error type for facad operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A listing target does not exist.
    #[error("cannot access '{0}': No such file or directory")]
    TargetNotFound(String),

    /// A listing target exists but cannot be opened.
    #[error("error changing to directory '{target}': {source}")]
    TargetAccess {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Configuration file or value issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file is not valid TOML or has the wrong shape.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Git repository inspection failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn git<C: Into<String>>(command: C, err: impl std::fmt::Display) -> Self {
        AppError::GitError { command: command.into(), details: err.to_string() }
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TargetAccess { source, .. } => source.kind(),
            AppError::TargetNotFound(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_) | AppError::ConfigParse(_) => io::ErrorKind::InvalidInput,
            AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_not_found_matches_ls_wording() {
        let err = AppError::TargetNotFound("missing".into());
        assert_eq!(err.to_string(), "cannot access 'missing': No such file or directory");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn target_access_reports_source_kind() {
        let err = AppError::TargetAccess {
            target: "locked".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().starts_with("error changing to directory 'locked'"));
    }

    #[test]
    fn git_helper_formats_command() {
        let err = AppError::git("git2::Repository::statuses", "boom");
        assert_eq!(err.to_string(), "Git error running 'git2::Repository::statuses': boom");
    }
}
