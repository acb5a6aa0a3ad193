//! Core functionality for the git-repos tool.
//!
//! This module provides the discovery and ranking engine, the preference store,
//! and the terminal building blocks the commands are assembled from.

pub mod activity;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod display;
pub mod error;
pub mod git;
pub mod launcher;
pub mod output;
pub mod picker;
pub mod preferences;
pub mod ranking;
pub mod scanner;
pub mod state;

// === Error handling ===
pub use error::{GitReposError, Result};

// === Discovery ===
// Probe a single directory, and scan the root two levels deep
pub use git::{probe, GitRepo, ProbeFailure, ProbeOutcome};
pub use scanner::{find_candidates, scan, scan_with, Candidate};
pub use state::{RepositoryRecord, TrackingState, NEVER};

// === Ranking and display ===
pub use colors::{escape_markup, strip_ansi_codes, BranchCategory, RemoteStatus};
pub use display::{format_line, format_time_ago};
pub use ranking::{rank, ranked};

// === Preferences ===
pub use preferences::{FavoriteRepo, PreferencesStore, UserPreferences};

// === Session ===
pub use command_init::AppContext;
pub use config::AppConfig;
pub use picker::{
    select, with_back, Choice, Entry, KeySource, LineKeys, Picker, SearchPicker, TerminalKeys,
};

// === Output formatting ===
pub use output::{
    print_error, print_hint, print_screen_header, print_section_header,
    print_success, wait_for_acknowledgment,
};
