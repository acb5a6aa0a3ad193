//! Color categories for branches and upstream status.
//!
//! This module is the single source of truth for how repository lines are
//! colored. It also owns escaping of untrusted text: branch and folder names
//! come straight from disk and must never be able to inject terminal control
//! sequences into the rendered list.
//!
//! # Public API
//! - [`BranchCategory`]: Branch naming convention a branch belongs to
//! - [`RemoteStatus`]: Ahead/behind classification against the upstream
//! - [`escape_markup`]: Neutralize control characters in untrusted text
//! - [`strip_ansi_codes`]: Remove color codes, mainly for tests and plain output
//!
//! # Color Scheme
//! - **main/master**: Steel blue
//! - **develop**: Light sea green
//! - **feature/**: Yellow, **bugfix/**: Red, **hotfix/**: Magenta, **release/**: Cyan
//! - **Remote status**: Orange when diverged, yellow ahead, red behind, green synced

use crate::core::state::TrackingState;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCategory {
    Mainline,
    Develop,
    Feature,
    Bugfix,
    Hotfix,
    Release,
    Other,
}

impl BranchCategory {
    /// Classify a branch name; matching is case-insensitive and the first rule wins
    pub fn of(branch: &str) -> Self {
        let branch = branch.to_lowercase();
        let has_prefix = |prefixes: &[&str]| prefixes.iter().any(|p| branch.starts_with(p));

        match branch.as_str() {
            "main" | "master" => Self::Mainline,
            "develop" => Self::Develop,
            _ if has_prefix(&["feature/", "feat/"]) => Self::Feature,
            _ if has_prefix(&["bugfix/", "fix/"]) => Self::Bugfix,
            _ if has_prefix(&["hotfix/"]) => Self::Hotfix,
            _ if has_prefix(&["release/"]) => Self::Release,
            _ => Self::Other,
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Mainline => text.truecolor(70, 130, 180),
            Self::Develop => text.truecolor(32, 178, 170),
            Self::Feature => text.yellow(),
            Self::Bugfix => text.red(),
            Self::Hotfix => text.magenta(),
            Self::Release => text.cyan(),
            Self::Other => text.white(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    /// Local and upstream have both moved
    Diverged { ahead: usize, behind: usize },
    Ahead(usize),
    Behind(usize),
    Synced,
    NoUpstream,
}

impl RemoteStatus {
    pub fn of(tracking: TrackingState) -> Self {
        match (tracking.ahead_by, tracking.behind_by, tracking.has_tracking) {
            (_, _, false) => Self::NoUpstream,
            (0, 0, true) => Self::Synced,
            (ahead, 0, true) => Self::Ahead(ahead),
            (0, behind, true) => Self::Behind(behind),
            (ahead, behind, true) => Self::Diverged { ahead, behind },
        }
    }

    pub fn symbol(self) -> String {
        match self {
            Self::Diverged { ahead, behind } => format!("↑{ahead}↓{behind}"),
            Self::Ahead(ahead) => format!("↑{ahead}"),
            Self::Behind(behind) => format!("↓{behind}"),
            Self::Synced => "✓".to_string(),
            Self::NoUpstream => String::new(),
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Diverged { .. } => text.truecolor(255, 135, 0),
            Self::Ahead(_) => text.yellow(),
            Self::Behind(_) => text.red(),
            Self::Synced => text.green(),
            Self::NoUpstream => text.dimmed(),
        }
    }
}

/// Replace control characters (ESC, newlines, ...) with their escaped form so
/// the text renders literally instead of being interpreted by the terminal
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

pub fn strip_ansi_codes(text: &str) -> String {
    // Simple state machine to remove ANSI escape sequences
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
