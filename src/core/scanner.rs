//! Repository discovery under the scan root.
//!
//! The scanner looks at most two levels deep: `root/<repo>` and
//! `root/<group>/<repo>`. Candidates are enumerated up front, then every
//! candidate is probed on its own scoped thread. Results flow back through a
//! channel; the scan returns only once every probe has finished.
//!
//! # Public API
//! - [`Candidate`]: A directory with a git marker and its optional grouping folder
//! - [`find_candidates`]: Enumerate candidates in discovery order
//! - [`scan`]: Enumerate and probe, returning one record per candidate
//! - [`scan_with`]: Same as [`scan`] with a caller-supplied probe

use crate::core::{
    error::{GitReposError, Result},
    git::{self, ProbeFailure, ProbeOutcome},
    state::RepositoryRecord,
};
use crossbeam_channel::unbounded;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

/// A directory to probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub parent_folder: Option<String>,
}

/// Enumerate repository candidates under `root`, sorted by name at each level.
///
/// Failing to list `root` itself is fatal. Failing to list a grouping folder
/// only drops that folder's children.
pub fn find_candidates(root: &Path) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for dir in list_subdirectories(root).map_err(|e| GitReposError::scan_failed(root, e))? {
        if git::is_git_repository(&dir) {
            candidates.push(Candidate {
                path: dir,
                parent_folder: None,
            });
            continue;
        }

        let group_name = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        match list_subdirectories(&dir) {
            Ok(children) => candidates.extend(
                children
                    .into_iter()
                    .filter(|child| git::is_git_repository(child))
                    .map(|child| Candidate {
                        path: child,
                        parent_folder: group_name.clone(),
                    }),
            ),
            Err(e) => log::warn!("Skipping unreadable folder '{}': {e}", dir.display()),
        }
    }

    Ok(candidates)
}

fn list_subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Follow symlinks so linked checkouts are discovered too
        if entry.path().is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}

/// Scan `root` and return one record per discovered repository, in discovery order.
pub fn scan(root: &Path) -> Result<Vec<RepositoryRecord>> {
    scan_with(root, probe_candidate)
}

/// Scan `root`, probing every candidate with `probe` on its own thread.
///
/// A probe that panics does not affect its siblings; its candidate gets an
/// unprobed record.
pub fn scan_with<F>(root: &Path, probe: F) -> Result<Vec<RepositoryRecord>>
where
    F: Fn(&Candidate) -> RepositoryRecord + Sync,
{
    let candidates = find_candidates(root)?;
    log::debug!(
        "Probing {} candidate directories under {}",
        candidates.len(),
        root.display()
    );

    let (tx, rx) = unbounded::<(usize, RepositoryRecord)>();

    thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .iter()
            .enumerate()
            .map(|(position, candidate)| {
                let tx = tx.clone();
                let probe = &probe;
                scope.spawn(move || {
                    let record = probe(candidate);
                    // The receiver outlives the scope, so the send cannot fail
                    let _ = tx.send((position, record));
                })
            })
            .collect();

        // Joining explicitly keeps a panicking probe from tearing down the scan
        for handle in handles {
            let _ = handle.join();
        }
    });
    drop(tx);

    let mut slots: Vec<Option<RepositoryRecord>> = vec![None; candidates.len()];
    for (position, record) in rx.iter() {
        slots[position] = Some(record);
    }

    // A probe thread that panicked never reported back; keep its directory visible
    let records = slots
        .into_iter()
        .zip(candidates)
        .map(|(slot, candidate)| {
            slot.unwrap_or_else(|| {
                log::warn!("Probe of '{}' did not complete", candidate.path.display());
                RepositoryRecord::unprobed(candidate.path, candidate.parent_folder)
            })
        })
        .collect::<Vec<_>>();

    log::debug!("Scan found {} repositories", records.len());
    Ok(records)
}

fn probe_candidate(candidate: &Candidate) -> RepositoryRecord {
    let outcome = git::probe(&candidate.path);
    match &outcome {
        ProbeOutcome::Failed(ProbeFailure::NotARepository) => {
            log::debug!("'{}' is not a repository", candidate.path.display())
        }
        ProbeOutcome::Failed(ProbeFailure::Unreadable(reason)) => {
            log::warn!("Could not read '{}': {reason}", candidate.path.display())
        }
        ProbeOutcome::Repository(_) => {}
    }
    outcome.into_record(candidate.path.clone(), candidate.parent_folder.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_repo(path: &Path) {
        fs::create_dir_all(path.join(".git")).unwrap();
    }

    #[test]
    fn test_find_candidates_two_levels() {
        let root = TempDir::new().unwrap();
        fake_repo(&root.path().join("alpha"));
        fake_repo(&root.path().join("work").join("api"));
        fake_repo(&root.path().join("work").join("web"));
        fs::create_dir_all(root.path().join("work").join("notes")).unwrap();

        let candidates = find_candidates(root.path()).unwrap();
        let summary: Vec<_> = candidates
            .iter()
            .map(|c| {
                (
                    c.path.file_name().unwrap().to_string_lossy().into_owned(),
                    c.parent_folder.clone(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                ("alpha".to_string(), None),
                ("api".to_string(), Some("work".to_string())),
                ("web".to_string(), Some("work".to_string())),
            ]
        );
    }

    #[test]
    fn test_find_candidates_ignores_third_level() {
        let root = TempDir::new().unwrap();
        fake_repo(&root.path().join("a").join("b").join("deep"));

        assert!(find_candidates(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_repository_children_are_not_scanned() {
        let root = TempDir::new().unwrap();
        fake_repo(&root.path().join("outer"));
        fake_repo(&root.path().join("outer").join("vendored"));

        let candidates = find_candidates(root.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].path.ends_with("outer"));
    }

    #[test]
    fn test_files_at_root_are_ignored() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("README.md"), "hi").unwrap();
        assert!(find_candidates(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let result = scan(Path::new("/definitely/not/a/scan/root"));
        assert!(matches!(result, Err(GitReposError::ScanFailed { .. })));
    }

    #[test]
    fn test_broken_repositories_keep_their_records() {
        let root = TempDir::new().unwrap();
        fake_repo(&root.path().join("one"));
        fake_repo(&root.path().join("group").join("two"));

        let records = scan(root.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_unprobed()));
        // "group" sorts before "one", so its child is discovered first
        assert!(records[0].path.ends_with("two"));
        assert_eq!(records[0].parent_folder.as_deref(), Some("group"));
        assert_eq!(records[1].parent_folder, None);
    }

    #[test]
    fn test_panicking_worker_leaves_siblings_intact() {
        let root = TempDir::new().unwrap();
        fake_repo(&root.path().join("alpha"));
        fake_repo(&root.path().join("bravo"));
        fake_repo(&root.path().join("group").join("charlie"));

        let records = scan_with(root.path(), |candidate| {
            if candidate.path.ends_with("bravo") {
                panic!("metadata read blew up");
            }
            RepositoryRecord {
                branch: "main".to_string(),
                last_activity: chrono::Utc::now(),
                ..RepositoryRecord::unprobed(
                    candidate.path.clone(),
                    candidate.parent_folder.clone(),
                )
            }
        })
        .unwrap();

        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.name(), r.branch.as_str(), r.is_unprobed()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("alpha".to_string(), "main", false),
                ("bravo".to_string(), "", true),
                ("charlie".to_string(), "main", false),
            ]
        );
        assert_eq!(records[2].parent_folder.as_deref(), Some("group"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_group_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        fake_repo(&root.path().join("alpha"));
        fake_repo(&root.path().join("locked").join("hidden"));
        fake_repo(&root.path().join("open").join("visible"));

        let locked = root.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can list the folder anyway, so there is nothing to check
        let readable = fs::read_dir(&locked).is_ok();

        let candidates = find_candidates(root.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        let names: Vec<_> = candidates
            .unwrap()
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha", "visible"]);
    }
}
