use crate::core::error::{GitReposError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "git-repos";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| dirs::home_dir().map(|home| home.join(".config")).ok_or(()))
            .ok(),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(GitReposError::ConfigDirectoryNotFound)
}

pub fn get_preferences_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("favorites.json"))
}
