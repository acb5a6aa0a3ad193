//! Shared session state for the interactive commands.
//!
//! [`AppContext`] bundles the resolved configuration with the loaded
//! preferences and owns the scan → rank → render pipeline that every
//! repository picker goes through.
//!
//! # Initialization Steps
//! 1. **Configuration**: Already validated by [`AppConfig::resolve`]
//! 2. **Preferences**: Loaded from disk; a corrupt file aborts startup
//!
//! Every picker invocation rescans the root so the list reflects the current
//! state of the filesystem.

use crate::core::{
    config::AppConfig,
    display::format_line,
    error::Result,
    picker::{with_back, Choice},
    preferences::{PreferencesStore, UserPreferences},
    ranking, scanner,
    state::RepositoryRecord,
};
use chrono::Local;
use std::path::{Path, PathBuf};

pub struct AppContext {
    pub config: AppConfig,
    pub store: PreferencesStore,
    pub preferences: UserPreferences,
}

impl AppContext {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let store = PreferencesStore::new(&config.preferences_file);
        let preferences = store.load()?;

        log::debug!(
            "Initialized with {} favorites",
            preferences.favorites.len()
        );

        Ok(Self {
            config,
            store,
            preferences,
        })
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Fresh scan of the configured root, in discovery order
    pub fn scan(&self) -> Result<Vec<RepositoryRecord>> {
        scanner::scan(&self.config.root)
    }

    /// Rank `records` and render one line each, with the back entry first
    pub fn ranked_choices(&self, records: Vec<RepositoryRecord>) -> Vec<Choice<PathBuf>> {
        let now = Local::now();
        let favorites = self.preferences.favorite_paths();

        let items = ranking::ranked(records, &favorites)
            .into_iter()
            .map(|record| {
                let label = format_line(&record, &now, favorites.contains(&record.path));
                (record.path, label)
            });

        with_back(items)
    }

    /// Ranked lines without the back entry, for non-interactive output
    pub fn ranked_lines(&self, records: Vec<RepositoryRecord>) -> Vec<String> {
        self.ranked_choices(records)
            .into_iter()
            .skip(1)
            .map(|choice| choice.label)
            .collect()
    }

    /// Toggle and persist; returns whether `path` is now a favorite
    pub fn toggle_favorite(&mut self, path: &Path) -> Result<bool> {
        let is_favorite = self.preferences.toggle_favorite(path, Local::now());
        self.store.save(&mut self.preferences)?;
        log::debug!("{} favorite: {is_favorite}", path.display());
        Ok(is_favorite)
    }

    pub fn toggle_skip_main_menu(&mut self) -> Result<bool> {
        let skip = self.preferences.toggle_skip_main_menu();
        self.store.save(&mut self.preferences)?;
        Ok(skip)
    }
}
