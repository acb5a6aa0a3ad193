//! Scan root setup utilities
//!
//! Provides functions for building a temporary scan root populated with real
//! git repositories, grouping folders and broken candidates.

#![allow(dead_code)]

use git_repos::core::error::{GitReposError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary scan root. The TempDir must be kept alive for the duration of
/// the test to prevent cleanup.
pub struct TestRoot {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRoot {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the preferences file used by CLI tests, kept inside the root's TempDir
    pub fn preferences_file(&self) -> PathBuf {
        self.temp_dir.path().join("config").join("favorites.json")
    }
}

/// Creates an empty scan root
pub fn setup_test_root() -> Result<TestRoot> {
    let temp_dir = TempDir::new().map_err(GitReposError::Io)?;
    let path = temp_dir.path().join("repos");
    fs::create_dir(&path)?;
    Ok(TestRoot { temp_dir, path })
}

/// Runs git with the given arguments in `dir`
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(GitReposError::Io)?;
    Ok(())
}

/// Initializes a repository at `root/relative` on branch `main` with one commit
pub fn create_repo(root: &Path, relative: &str) -> Result<PathBuf> {
    let repo_path = root.join(relative);
    fs::create_dir_all(&repo_path)?;

    git(&repo_path, &["init", "-b", "main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    commit_file(&repo_path, "README.md")?;

    Ok(repo_path)
}

/// Writes and commits a file
pub fn commit_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::write(repo_path.join(filename), format!("{filename}\n"))?;
    git(repo_path, &["add", filename])?;
    git(repo_path, &["commit", "-m", filename])?;
    Ok(())
}

/// Switches `repo_path` to a new branch
pub fn checkout_new_branch(repo_path: &Path, branch: &str) -> Result<()> {
    git(repo_path, &["checkout", "-b", branch])
}

/// Creates a directory whose `.git` marker cannot be opened as a repository
pub fn create_broken_repo(root: &Path, relative: &str) -> Result<PathBuf> {
    let repo_path = root.join(relative);
    fs::create_dir_all(&repo_path)?;
    fs::write(repo_path.join(".git"), "gitdir: /nowhere/at/all\n")?;
    Ok(repo_path)
}
