use crate::commands::{execute_favorites, execute_open, execute_settings};
use crate::core::{
    command_init::AppContext,
    error::{GitReposError, Result},
    output::{print_error, print_screen_header},
    picker::{select, with_back, Picker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ChooseRepository,
    ManageFavorites,
    Settings,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [
        MenuAction::ChooseRepository,
        MenuAction::ManageFavorites,
        MenuAction::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ChooseRepository => "Choose a repository",
            MenuAction::ManageFavorites => "Manage favorites",
            MenuAction::Settings => "Settings",
        }
    }
}

/// Main menu loop. Going back from the main menu exits.
pub fn execute_menu(ctx: &mut AppContext, picker: &mut dyn Picker) -> Result<()> {
    if ctx.scan()?.is_empty() {
        return Err(GitReposError::NoRepositories);
    }

    if ctx.preferences.skip_main_menu {
        print_screen_header();
        report(execute_open(ctx, picker).map(|_| ()))?;
    }

    loop {
        print_screen_header();
        let choices = with_back(
            MenuAction::ALL
                .iter()
                .map(|action| (*action, action.label().to_string())),
        );

        let Some(action) = select(picker, "What do you want to do?", &choices)? else {
            return Ok(());
        };

        print_screen_header();
        let outcome = match action {
            MenuAction::ChooseRepository => execute_open(ctx, picker).map(|_| ()),
            MenuAction::ManageFavorites => execute_favorites(ctx, picker),
            MenuAction::Settings => execute_settings(ctx, picker),
        };
        report(outcome)?;
    }
}

/// Launch failures are shown and the menu continues; anything else ends the session
fn report(outcome: Result<()>) -> Result<()> {
    match outcome {
        Err(e @ GitReposError::LaunchFailed { .. }) => {
            print_error(&e.to_string());
            Ok(())
        }
        other => other,
    }
}
