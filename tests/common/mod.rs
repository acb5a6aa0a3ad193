//! Consolidated test utilities for git-repos
//!
//! This module provides unified testing utilities for integration tests,
//! built on real git repositories inside temporary scan roots.

pub mod assertions;
pub mod repository;
