use crate::core::dirs::get_preferences_file;
use crate::core::error::{GitReposError, Result};
use std::path::{Component, Path, PathBuf};

/// Environment variable naming the directory to scan
pub const ROOT_ENV: &str = "GIT_REPOS_PATH";
pub const TOOL_ENV: &str = "GIT_REPOS_TOOL";
pub const PREFERENCES_ENV: &str = "GIT_REPOS_PREFERENCES";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub root: PathBuf,
    pub preferences_file: PathBuf,
    pub tool: String,
}

impl AppConfig {
    /// Validate raw settings; a missing or non-existent root is fatal
    pub fn resolve(
        root: Option<PathBuf>,
        preferences_file: Option<PathBuf>,
        tool: String,
    ) -> Result<Self> {
        let root = root
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty())
            .ok_or_else(|| GitReposError::config_missing(ROOT_ENV))?;

        if !root.is_dir() {
            return Err(GitReposError::root_not_found(root));
        }
        let root = normalize_path(&std::path::absolute(&root)?);

        let preferences_file = match preferences_file {
            Some(path) => path,
            None => get_preferences_file()?,
        };

        log::debug!(
            "Scan root: {}, preferences: {}, tool: {tool}",
            root.display(),
            preferences_file.display()
        );

        Ok(Self {
            root,
            preferences_file,
            tool,
        })
    }
}

/// Absolute form of `path` with `.` and `..` components resolved lexically
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root() {
        let result = AppConfig::resolve(None, None, "lazygit".into());
        assert!(matches!(result, Err(GitReposError::ConfigMissing { .. })));
    }

    #[test]
    fn test_blank_root_counts_as_missing() {
        let result = AppConfig::resolve(Some(PathBuf::from("  ")), None, "lazygit".into());
        assert!(matches!(result, Err(GitReposError::ConfigMissing { .. })));
    }

    #[test]
    fn test_nonexistent_root() {
        let result = AppConfig::resolve(
            Some(PathBuf::from("/definitely/not/a/root")),
            None,
            "lazygit".into(),
        );
        assert!(matches!(result, Err(GitReposError::RootNotFound { .. })));
    }

    #[test]
    fn test_valid_root() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let prefs = temp_dir.path().join("prefs.json");
        let config = AppConfig::resolve(
            Some(temp_dir.path().to_path_buf()),
            Some(prefs.clone()),
            "tig".into(),
        )?;
        assert_eq!(config.root, normalize_path(&std::path::absolute(temp_dir.path())?));
        assert_eq!(config.preferences_file, prefs);
        assert_eq!(config.tool, "tig");
        Ok(())
    }

    #[test]
    fn test_root_parent_components_are_resolved() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::create_dir(temp_dir.path().join("elsewhere"))?;
        let root = temp_dir.path().join("elsewhere").join("..").join(".");

        let prefs = temp_dir.path().join("prefs.json");
        let config = AppConfig::resolve(Some(root), Some(prefs), "lazygit".into())?;
        assert_eq!(config.root, normalize_path(temp_dir.path()));
        assert!(!config.root.components().any(|c| c == Component::ParentDir));
        Ok(())
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/tmp/a/elsewhere/../repos/./app")),
            PathBuf::from("/tmp/a/repos/app")
        );
        assert_eq!(normalize_path(Path::new("/../x")), PathBuf::from("/x"));
    }
}
