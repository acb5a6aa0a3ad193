//! Read-only git metadata extraction for a single directory.
//!
//! This module provides a thin wrapper over `git2` through the [`GitRepo`] struct,
//! and the [`probe`] entry point the scanner calls for every candidate directory.
//!
//! # Public API
//! - [`is_git_repository`]: Cheap check for a `.git` marker
//! - [`GitRepo`]: Opens a repository and reads branch and upstream state
//! - [`probe`]: Turns a directory into a [`ProbeOutcome`]
//! - [`ProbeOutcome`]: Explicit success/failure result of a probe
//!
//! # Failure model
//! Failing to open a candidate is an expected outcome, not an error: it is
//! reported as [`ProbeOutcome::Failed`] and the scanner turns it into a sentinel
//! record so the directory stays visible and selectable.

use crate::core::{
    activity,
    error::Result,
    state::{RepositoryRecord, TrackingState},
};
use git2::{Branch, ErrorCode, Repository};
use std::path::{Path, PathBuf};

/// Name of the git metadata entry; a directory, or a file for worktrees and submodules
pub const GIT_MARKER: &str = ".git";

/// Whether `path` carries a git metadata marker at its top level
pub fn is_git_repository(path: &Path) -> bool {
    let marker = path.join(GIT_MARKER);
    marker.is_dir() || marker.is_file()
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open exactly `path` as a repository, without searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path)?;
        Ok(GitRepo { repo })
    }

    /// Path of the git directory (`.git`, or the target of a `.git` file)
    pub fn get_git_dir(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    /// Git directory shared by all worktrees; equals [`Self::get_git_dir`] for
    /// a regular checkout
    pub fn get_common_dir(&self) -> PathBuf {
        self.repo.commondir().to_path_buf()
    }

    pub fn get_current_branch(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // Fresh repository: HEAD names a branch with no commits yet
                let head_ref = self.repo.find_reference("HEAD")?;
                let target = head_ref.symbolic_target().unwrap_or_default();
                return Ok(target.trim_start_matches("refs/heads/").to_string());
            }
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            return Ok(head.shorthand().unwrap_or_default().to_string());
        }

        match head.target() {
            Some(oid) => Ok(format!("detached at {}", &oid.to_string()[..7])),
            None => Ok(String::new()),
        }
    }

    /// Get ahead/behind counts for the current branch relative to its upstream.
    /// Returns [`TrackingState::UNTRACKED`] if no upstream is configured.
    pub fn get_tracking_state(&self) -> Result<TrackingState> {
        let head = match self.repo.head() {
            Ok(head) if head.is_branch() => head,
            _ => return Ok(TrackingState::UNTRACKED),
        };

        let Some(local_oid) = head.target() else {
            return Ok(TrackingState::UNTRACKED);
        };

        let local_branch = Branch::wrap(head);
        let upstream_branch = match local_branch.upstream() {
            Ok(upstream) => upstream,
            Err(_) => return Ok(TrackingState::UNTRACKED),
        };

        // An upstream is configured even if its ref has no target yet
        let Some(upstream_oid) = upstream_branch.get().target() else {
            return Ok(TrackingState::tracked(0, 0));
        };

        let (ahead, behind) = self.repo.graph_ahead_behind(local_oid, upstream_oid)?;
        Ok(TrackingState::tracked(ahead, behind))
    }
}

/// Why a candidate directory could not be probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// libgit2 does not recognize the directory as a repository
    NotARepository,
    /// The repository exists but its metadata could not be read
    Unreadable(String),
}

/// Metadata read from a successfully opened repository
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryMetadata {
    pub branch: String,
    pub tracking: TrackingState,
    pub last_activity: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Repository(RepositoryMetadata),
    Failed(ProbeFailure),
}

impl ProbeOutcome {
    /// Build the record for `path`; failures become sentinel records
    pub fn into_record(self, path: PathBuf, parent_folder: Option<String>) -> RepositoryRecord {
        match self {
            ProbeOutcome::Repository(metadata) => RepositoryRecord {
                path,
                last_activity: metadata.last_activity,
                branch: metadata.branch,
                tracking: metadata.tracking,
                parent_folder,
            },
            ProbeOutcome::Failed(_) => RepositoryRecord::unprobed(path, parent_folder),
        }
    }
}

/// Read branch, upstream and activity state for `path`
pub fn probe(path: &Path) -> ProbeOutcome {
    let git_repo = match Repository::open(path) {
        Ok(repo) => GitRepo { repo },
        Err(e) if e.code() == ErrorCode::NotFound => {
            return ProbeOutcome::Failed(ProbeFailure::NotARepository)
        }
        Err(e) => return ProbeOutcome::Failed(ProbeFailure::Unreadable(e.to_string())),
    };

    let metadata = git_repo.get_current_branch().and_then(|branch| {
        let tracking = git_repo.get_tracking_state()?;
        Ok((branch, tracking))
    });

    match metadata {
        Ok((branch, tracking)) => ProbeOutcome::Repository(RepositoryMetadata {
            branch,
            tracking,
            last_activity: activity::last_activity(
                path,
                &git_repo.get_git_dir(),
                &git_repo.get_common_dir(),
            ),
        }),
        Err(e) => ProbeOutcome::Failed(ProbeFailure::Unreadable(e.to_string())),
    }
}
