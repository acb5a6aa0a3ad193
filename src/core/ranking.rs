//! Ordering of scanned repositories for presentation.
//!
//! Favorites come first, then the most recently active repositories. The sort
//! is stable so repositories with equal keys keep their discovery order.

use crate::core::state::RepositoryRecord;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::PathBuf;

/// Sort `records` in place: favorites first, then by last activity descending
pub fn rank(records: &mut [RepositoryRecord], favorites: &HashSet<PathBuf>) {
    // slice::sort_by_key is stable
    records.sort_by_key(|record| {
        (
            !favorites.contains(&record.path),
            Reverse(record.last_activity),
        )
    });
}

/// Consume `records` and return them ranked
pub fn ranked(
    mut records: Vec<RepositoryRecord>,
    favorites: &HashSet<PathBuf>,
) -> Vec<RepositoryRecord> {
    rank(&mut records, favorites);
    records
}
