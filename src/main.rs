use clap::{Parser, Subcommand};
use git_repos::commands::*;
use git_repos::core::{
    config::{AppConfig, PREFERENCES_ENV, ROOT_ENV, TOOL_ENV},
    error::{GitReposError, Result},
    launcher::DEFAULT_TOOL,
    picker::SearchPicker,
    print_error, print_hint, wait_for_acknowledgment, AppContext,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-repos")]
#[command(about = "Find, rank and open your local git repositories")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory containing your repositories
    #[arg(long, global = true, env = ROOT_ENV)]
    root: Option<PathBuf>,

    /// Program to launch in the selected repository
    #[arg(long, global = true, env = TOOL_ENV, default_value = DEFAULT_TOOL)]
    tool: String,

    /// Preferences file (defaults to the user config directory)
    #[arg(long, global = true, env = PREFERENCES_ENV)]
    preferences: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a repository and open it
    Open,
    /// Mark or unmark favorite repositories
    Favorites,
    /// Change settings
    Settings,
    /// Print the ranked repository list
    List,
    /// Toggle the favorite status of one repository
    Toggle {
        /// Repository path
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        if let GitReposError::Interrupted = e {
            std::process::exit(130);
        }
        print_error(&e.to_string());
        if let GitReposError::ConfigMissing { .. } = e {
            print_hint("Please define this variable with the path to your Git repositories.");
        }
        wait_for_acknowledgment();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::resolve(cli.root, cli.preferences, cli.tool)?;
    let mut ctx = AppContext::initialize(config)?;
    let mut picker = SearchPicker::stdio();

    match cli.command {
        None => execute_menu(&mut ctx, &mut picker),
        Some(Commands::Open) => execute_open(&ctx, &mut picker).map(|_| ()),
        Some(Commands::Favorites) => execute_favorites(&mut ctx, &mut picker),
        Some(Commands::Settings) => execute_settings(&mut ctx, &mut picker),
        Some(Commands::List) => execute_list(&ctx),
        Some(Commands::Toggle { path }) => execute_toggle(&mut ctx, &path),
    }
}
