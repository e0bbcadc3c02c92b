//! Shared testing utilities for facad CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use git2::{Commit, IndexAddOption, Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const RESET: &str = "\x1b[0m";

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let work_dir = work_dir.canonicalize().expect("Failed to canonicalize work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Canonical path of the directory listed by default.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `facad` binary in the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `facad` binary within a custom directory.
    /// Configuration and git discovery are confined to the temp root.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("facad").expect("Failed to locate facad binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("COLUMNS", "80")
            .env("GIT_CEILING_DIRECTORIES", self.home())
            .env_remove("FACAD_CONFIG")
            .env_remove("FACAD_LOG")
            .env_remove("GIT_DIR");
        cmd
    }

    /// Write `content` to `relative` below the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a configuration file outside the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home().join("facad.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Initialize a repository in the work directory on branch `main`.
    pub fn init_git(&self) -> Repository {
        let mut options = RepositoryInitOptions::new();
        options.initial_head("main");
        Repository::init_opts(&self.work_dir, &options).expect("Failed to init repository")
    }

    /// Stage everything and commit it.
    pub fn commit_all(&self, repo: &Repository, message: &str) {
        let mut index = repo.index().expect("Failed to open index");
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None).expect("git add failed");
        index.write().expect("Failed to write index");
        let tree = repo.find_tree(index.write_tree().expect("write_tree failed")).unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("git commit failed");
    }

    /// Header line the grid view prints for `dir`.
    pub fn header(dir: &Path, branch: Option<&str>) -> String {
        let path = format!("{}{}{}", BOLD, dir.display(), RESET);
        match branch {
            Some(branch) => format!("{} ({}{}{})", path, GREEN, branch, RESET),
            None => path,
        }
    }
}

/// Captured stdout of a successful run.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}
