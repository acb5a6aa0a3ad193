//! Last-activity estimation for a repository.
//!
//! Reading commit history for every repository on each scan would be far too
//! slow, so activity is approximated from file modification times inside the
//! git directory: the fixed metadata files touched by fetches, checkouts and
//! staging, plus every branch ref under `refs/heads`. Linked worktrees keep
//! their branch refs in the common git directory of the main checkout, so both
//! directories are consulted.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::core::state::NEVER;

/// Metadata files at the root of the git directory that change on activity
pub const ACTIVITY_FILES: [&str; 4] = ["FETCH_HEAD", "HEAD", "index", "ORIG_HEAD"];

/// Compute the most recent activity timestamp for a repository.
///
/// Takes the maximum modification time over [`ACTIVITY_FILES`] in `git_dir`
/// and `common_dir`, and all files under `refs/heads` of `common_dir`. For a
/// regular checkout both directories are the same. Falls back to the working
/// directory's own modification time when none of those exist, and to
/// [`NEVER`] when that is unreadable too.
pub fn last_activity(repo_dir: &Path, git_dir: &Path, common_dir: &Path) -> DateTime<Utc> {
    let mut metadata_dirs = vec![git_dir];
    if common_dir != git_dir {
        metadata_dirs.push(common_dir);
    }
    let metadata_times = metadata_dirs.iter().flat_map(|dir| {
        ACTIVITY_FILES
            .iter()
            .filter_map(move |name| modified_time(&dir.join(name)))
    });

    let ref_times = WalkDir::new(common_dir.join("refs").join("heads"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok()?.modified().ok());

    metadata_times
        .chain(ref_times)
        .max()
        .or_else(|| modified_time(repo_dir))
        .map(DateTime::<Utc>::from)
        .unwrap_or(NEVER)
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok()?.modified().ok()
}
