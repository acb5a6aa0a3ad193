//! Persistent user preferences: favorites and settings.
//!
//! Preferences live in a single pretty-printed JSON file. A missing file means
//! defaults; an unreadable or corrupt file is an error, because silently
//! starting from defaults would drop the user's favorites on the next save.
//!
//! # Public API
//! - [`UserPreferences`]: The stored document
//! - [`FavoriteRepo`]: One favorite with its creation time and optional metadata
//! - [`PreferencesStore`]: Load/save against a file path

use crate::core::error::{GitReposError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const PREFERENCES_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FavoriteRepo {
    pub path: PathBuf,
    pub added_at: DateTime<Local>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}

impl FavoriteRepo {
    pub fn new(path: impl Into<PathBuf>, added_at: DateTime<Local>) -> Self {
        Self {
            path: path.into(),
            added_at,
            alias: None,
            category: None,
            priority: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserPreferences {
    pub version: u32,
    pub favorites: Vec<FavoriteRepo>,
    pub skip_main_menu: bool,
    pub last_modified: DateTime<Local>,
    pub settings: BTreeMap<String, String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            favorites: Vec::new(),
            skip_main_menu: false,
            last_modified: Local::now(),
            settings: BTreeMap::new(),
        }
    }
}

impl UserPreferences {
    /// Add `path` as a favorite, or remove it if already present.
    /// Returns whether the path is a favorite afterwards.
    pub fn toggle_favorite(&mut self, path: &Path, now: DateTime<Local>) -> bool {
        if let Some(position) = self.favorites.iter().position(|f| f.path == path) {
            self.favorites.remove(position);
            false
        } else {
            self.favorites.push(FavoriteRepo::new(path, now));
            true
        }
    }

    pub fn is_favorite(&self, path: &Path) -> bool {
        self.favorites.iter().any(|f| f.path == path)
    }

    pub fn favorite_paths(&self) -> HashSet<PathBuf> {
        self.favorites.iter().map(|f| f.path.clone()).collect()
    }

    pub fn toggle_skip_main_menu(&mut self) -> bool {
        self.skip_main_menu = !self.skip_main_menu;
        self.skip_main_menu
    }
}

/// File-backed preference storage
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<UserPreferences> {
        if !self.path.exists() {
            log::debug!(
                "No preferences file at {}, using defaults",
                self.path.display()
            );
            return Ok(UserPreferences::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            log::error!("Failed to read preferences '{}': {e}", self.path.display());
            GitReposError::preferences_read_failed(&self.path, e)
        })?;

        let preferences: UserPreferences = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse preferences '{}': {e}", self.path.display());
            GitReposError::preferences_parse_failed(&self.path, e)
        })?;

        log::debug!(
            "Loaded {} favorites from {}",
            preferences.favorites.len(),
            self.path.display()
        );
        Ok(preferences)
    }

    /// Write `preferences`, stamping `last_modified`
    pub fn save(&self, preferences: &mut UserPreferences) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| GitReposError::preferences_write_failed(dir, e))?;
        }

        preferences.last_modified = Local::now();
        let json = serde_json::to_string_pretty(preferences)?;

        fs::write(&self.path, json).map_err(|e| {
            log::error!("Failed to write preferences '{}': {e}", self.path.display());
            GitReposError::preferences_write_failed(&self.path, e)
        })?;

        log::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}
