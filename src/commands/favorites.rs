use crate::core::{
    command_init::AppContext,
    config::normalize_path,
    error::{GitReposError, Result},
    output::{print_screen_header, print_success},
    picker::{select, Picker},
};
use colored::*;
use std::path::{Path, PathBuf};

/// Toggle favorites until the user goes back.
///
/// The root is scanned once; the list is re-ranked after every toggle so the
/// new favorite moves to the top immediately.
pub fn execute_favorites(ctx: &mut AppContext, picker: &mut dyn Picker) -> Result<()> {
    let records = ctx.scan()?;
    if records.is_empty() {
        return Err(GitReposError::NoRepositories);
    }

    let title = format!(
        "Select a {} to favorite ⭐ ({}) :",
        "repository".green(),
        ctx.root().display().to_string().dimmed()
    );

    loop {
        let choices = ctx.ranked_choices(records.clone());
        let Some(path) = select(picker, &title, &choices)? else {
            return Ok(());
        };

        ctx.toggle_favorite(&path)?;
        print_screen_header();
    }
}

/// Toggle a single path without prompting
pub fn execute_toggle(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let path = resolve_repository_path(ctx, path)?;
    if ctx.toggle_favorite(&path)? {
        print_success(&format!("Added {} to favorites\n", path.display()));
    } else {
        print_success(&format!("Removed {} from favorites\n", path.display()));
    }
    Ok(())
}

/// Map a user-supplied path onto the path the scanner reports for the same
/// repository, so the stored favorite matches scanned records.
fn resolve_repository_path(ctx: &AppContext, path: &Path) -> Result<PathBuf> {
    let path = normalize_path(&std::path::absolute(path)?);
    let Ok(target) = path.canonicalize() else {
        return Ok(path);
    };

    let scanned = ctx
        .scan()?
        .into_iter()
        .map(|record| record.path)
        .find(|scanned| scanned.canonicalize().is_ok_and(|c| c == target));

    Ok(scanned.unwrap_or(path))
}
