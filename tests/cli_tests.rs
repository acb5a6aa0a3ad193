use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, repository::*};

fn git_repos(root: &TestRoot) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("git-repos")?;
    cmd.env("GIT_REPOS_PATH", root.path())
        .env("GIT_REPOS_PREFERENCES", root.preferences_file())
        .env("NO_COLOR", "1");
    Ok(cmd)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_missing_root_variable() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-repos")?;
        cmd.env_remove("GIT_REPOS_PATH")
            .arg("list")
            .assert()
            .failure()
            .stdout(assertions::root_not_configured());
        Ok(())
    }

    #[test]
    fn test_nonexistent_root() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-repos")?;
        cmd.env("GIT_REPOS_PATH", "/definitely/not/a/root")
            .arg("list")
            .assert()
            .failure()
            .stdout(assertions::root_does_not_exist());
        Ok(())
    }

    #[test]
    fn test_list_empty_root() -> anyhow::Result<()> {
        let root = setup_test_root()?;
        git_repos(&root)?
            .arg("list")
            .assert()
            .failure()
            .stdout(assertions::no_repositories());
        Ok(())
    }

    #[test]
    fn test_list_shows_ranked_repositories() -> anyhow::Result<()> {
        let root = setup_test_root()?;
        create_repo(root.path(), "solo")?;
        let grouped = create_repo(root.path(), "work/api")?;
        checkout_new_branch(&grouped, "feature/login")?;

        git_repos(&root)?
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::has_list_index(1))
            .stdout(assertions::has_list_index(2))
            .stdout(predicate::str::contains("solo"))
            .stdout(predicate::str::contains("work > api"))
            .stdout(predicate::str::contains("feature/login"));
        Ok(())
    }

    #[test]
    fn test_toggle_moves_favorite_to_top() -> anyhow::Result<()> {
        let root = setup_test_root()?;
        create_repo(root.path(), "older")?;
        std::thread::sleep(std::time::Duration::from_millis(1100));
        create_repo(root.path(), "newer")?;

        git_repos(&root)?
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"\[1\]\s+newer")?);

        git_repos(&root)?
            .args(["toggle", root.path().join("older").to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));

        git_repos(&root)?
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"\[1\] ⭐ older")?);

        git_repos(&root)?
            .args(["toggle", root.path().join("older").to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed"));

        let prefs = std::fs::read_to_string(root.preferences_file())?;
        let prefs: serde_json::Value = serde_json::from_str(&prefs)?;
        assert_eq!(prefs["Favorites"].as_array().map(Vec::len), Some(0));
        Ok(())
    }

    #[test]
    fn test_corrupt_preferences_are_fatal() -> anyhow::Result<()> {
        let root = setup_test_root()?;
        create_repo(root.path(), "app")?;
        std::fs::create_dir_all(root.preferences_file().parent().unwrap())?;
        std::fs::write(root.preferences_file(), "{ nope")?;

        git_repos(&root)?
            .arg("list")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failed to parse preferences file"));
        Ok(())
    }

    #[test]
    fn test_open_back_exits_cleanly() -> anyhow::Result<()> {
        let root = setup_test_root()?;
        create_repo(root.path(), "app")?;

        assert_cmd::Command::from_std(git_repos(&root)?)
            .args(["open", "--tool", "definitely-not-an-installed-tool"])
            .write_stdin("0\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("app"));
        Ok(())
    }
}
