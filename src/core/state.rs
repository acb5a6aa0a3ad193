//! Repository records produced by a scan.
//!
//! This module defines the data structures that flow from the scanner through
//! ranking and formatting. A fresh set of records is built on every scan and
//! never mutated afterwards.
//!
//! # Public API
//! - [`RepositoryRecord`]: One discovered repository with its branch and tracking state
//! - [`TrackingState`]: Ahead/behind counts relative to the upstream branch
//! - [`NEVER`]: Sentinel timestamp for repositories that could not be probed

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Timestamp assigned to repositories whose metadata could not be read.
/// Sorts after every real timestamp.
pub const NEVER: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Upstream synchronization state of the checked out branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackingState {
    pub ahead_by: usize,
    pub behind_by: usize,
    pub has_tracking: bool,
}

impl TrackingState {
    pub const UNTRACKED: TrackingState = TrackingState {
        ahead_by: 0,
        behind_by: 0,
        has_tracking: false,
    };

    pub fn tracked(ahead_by: usize, behind_by: usize) -> Self {
        Self {
            ahead_by,
            behind_by,
            has_tracking: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    pub path: PathBuf,
    pub last_activity: DateTime<Utc>,
    pub branch: String,
    pub tracking: TrackingState,
    pub parent_folder: Option<String>,
}

impl RepositoryRecord {
    /// Record for a directory that could not be probed
    pub fn unprobed(path: impl Into<PathBuf>, parent_folder: Option<String>) -> Self {
        Self {
            path: path.into(),
            last_activity: NEVER,
            branch: String::new(),
            tracking: TrackingState::UNTRACKED,
            parent_folder,
        }
    }

    pub fn is_unprobed(&self) -> bool {
        self.last_activity == NEVER
    }

    /// Final path component, used as the display name
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub fn ahead_by(&self) -> usize {
        self.tracking.ahead_by
    }

    pub fn behind_by(&self) -> usize {
        self.tracking.behind_by
    }

    pub fn has_tracking(&self) -> bool {
        self.tracking.has_tracking
    }
}
