//! Test directory and git repository setup utilities
//!
//! Provides functions for creating plain directories and git repositories
//! and for running the starpost binary against them in isolation.

#![allow(dead_code)]

use starpost::core::error::{Result, StarpostError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary working directory plus an isolated home for config files.
/// Both TempDirs must be kept alive for the duration of the test.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub home: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Config directory starpost reads inside the isolated home
    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".config").join("starpost")
    }

    /// A starpost command that cannot see the real user's config
    pub fn starpost(&self) -> Result<Command> {
        use assert_cmd::prelude::*;

        let mut cmd = Command::cargo_bin("starpost").map_err(|e| {
            StarpostError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, e))
        })?;
        cmd.current_dir(&self.path)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

/// Creates a temporary directory that is not a git repository
pub fn setup_plain_dir() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let home = TempDir::new()?;
    let path = temp_dir.path().canonicalize()?;

    Ok(TestRepo {
        temp_dir,
        home,
        path,
    })
}

/// Sets up a fresh git repository on branch `main`
///
/// Creates a temporary directory, initializes it as a git repository,
/// and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let repo = setup_plain_dir()?;
    init_repo(&repo.path)?;
    Ok(repo)
}

/// Initializes `repo_path` as a git repository on branch `main`
pub fn init_repo(repo_path: &Path) -> Result<()> {
    git(repo_path, &["init"])?;
    git(repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(repo_path, &["config", "user.name", "Test User"])?;
    git(repo_path, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

/// Runs git with `args` inside `repo_path`
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(StarpostError::Io)?;
    Ok(())
}

/// Runs git with `args` and returns its trimmed stdout
pub fn git_output(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(StarpostError::Io)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Creates a file with specified content, creating parent directories
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}
