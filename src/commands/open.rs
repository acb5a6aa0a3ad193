use crate::core::{
    command_init::AppContext,
    error::{GitReposError, Result},
    launcher,
    picker::{select, Picker},
};
use colored::*;
use std::path::PathBuf;

/// Let the user pick a repository and run the configured tool in it.
/// Returns the chosen path, or `None` if the user went back.
pub fn execute_open(ctx: &AppContext, picker: &mut dyn Picker) -> Result<Option<PathBuf>> {
    let records = ctx.scan()?;
    if records.is_empty() {
        return Err(GitReposError::NoRepositories);
    }

    let title = format!(
        "Select a {} ({}) :",
        "repository".green(),
        ctx.root().display().to_string().dimmed()
    );
    let choices = ctx.ranked_choices(records);

    let Some(path) = select(picker, &title, &choices)? else {
        log::debug!("Selection cancelled");
        return Ok(None);
    };

    launcher::launch(&ctx.config.tool, &path)?;
    Ok(Some(path))
}
