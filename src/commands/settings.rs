use crate::core::{
    command_init::AppContext,
    error::Result,
    output::print_screen_header,
    picker::{select, with_back, Picker},
};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    SkipMainMenu,
}

/// Show the settings list until the user goes back; choosing an entry flips it
pub fn execute_settings(ctx: &mut AppContext, picker: &mut dyn Picker) -> Result<()> {
    loop {
        let status = if ctx.preferences.skip_main_menu {
            "YES".green()
        } else {
            "NO".red()
        };
        let choices = with_back([(
            Setting::SkipMainMenu,
            format!("Skip main menu on startup: {status}"),
        )]);

        match select(picker, "Settings", &choices)? {
            Some(Setting::SkipMainMenu) => {
                let skip = ctx.toggle_skip_main_menu()?;
                log::debug!("Skip main menu set to {skip}");
            }
            None => return Ok(()),
        }
        print_screen_header();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{config::AppConfig, picker::scripted_picker};
    use tempfile::TempDir;

    #[test]
    fn test_flip_skip_main_menu() -> Result<()> {
        let root = TempDir::new()?;
        let config = AppConfig::resolve(
            Some(root.path().to_path_buf()),
            Some(root.path().join("favorites.json")),
            "true".into(),
        )?;
        let mut ctx = AppContext::initialize(config)?;

        let mut picker = scripted_picker("1\n");
        execute_settings(&mut ctx, &mut picker)?;
        assert!(ctx.preferences.skip_main_menu);

        let mut picker = scripted_picker("1\n1\n\n");
        execute_settings(&mut ctx, &mut picker)?;
        assert!(ctx.preferences.skip_main_menu);
        Ok(())
    }
}
