//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-repos command output and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for the missing scan root variable message
pub fn root_not_configured() -> impl Predicate<str> {
    predicates::str::contains("The environment variable GIT_REPOS_PATH is not defined")
}

/// Checks for the non-existent scan root message
pub fn root_does_not_exist() -> impl Predicate<str> {
    predicates::str::contains("does not exist")
}

pub fn no_repositories() -> impl Predicate<str> {
    predicates::str::contains("No Git repository found")
}

/// Checks for a numbered list entry
pub fn has_list_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}
