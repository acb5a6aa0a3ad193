use crate::core::error::{GitReposError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

pub const DEFAULT_TOOL: &str = "lazygit";

/// Run `program` with `repo_path` as its working directory and wait for it to exit
pub fn launch(program: &str, repo_path: &Path) -> Result<ExitStatus> {
    log::debug!("Launching {program} in {}", repo_path.display());

    let status = Command::new(program)
        .current_dir(repo_path)
        .status()
        .map_err(|e| GitReposError::launch_failed(program, repo_path, e))?;

    if !status.success() {
        log::warn!("{program} exited with {status}");
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let result = launch("definitely-not-an-installed-tool", temp_dir.path());
        assert!(matches!(result, Err(GitReposError::LaunchFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_waits_for_exit_status() -> Result<()> {
        let temp_dir = TempDir::new()?;
        assert!(launch("true", temp_dir.path())?.success());
        assert!(!launch("false", temp_dir.path())?.success());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_directory_is_reported() {
        let missing = Path::new("/definitely/not/a/repository");
        assert!(matches!(
            launch("true", missing),
            Err(GitReposError::LaunchFailed { .. })
        ));
    }
}
