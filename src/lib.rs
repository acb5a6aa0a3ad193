//! git-repos - find, rank and open local git repositories.
//!
//! This library scans a root directory two levels deep for git repositories,
//! reads each one's branch and upstream state concurrently, ranks them by
//! favorite status and recent activity, and renders them for an interactive
//! picker that launches an external tool on the chosen repository.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository discovery ([`scan`], [`probe`])
//! - Ranking ([`rank`]) and line formatting ([`format_line`])
//! - Favorites persistence ([`PreferencesStore`])
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use core::{
    // Discovery
    find_candidates,
    // Display
    format_line,
    format_time_ago,
    probe,
    // Ranking
    rank,
    ranked,
    scan,

    AppConfig,
    AppContext,
    BranchCategory,
    Candidate,
    // Preferences
    FavoriteRepo,
    // Error handling
    GitReposError,
    PreferencesStore,
    ProbeOutcome,
    RemoteStatus,
    RepositoryRecord,
    Result,
    TrackingState,
    UserPreferences,
};
