//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for prompts, bright_black for hints
//! - **Standardized spacing**: Newline before and after messages
//! - **Acknowledged exits**: Fatal errors wait for the user before the terminal is handed back

use colored::*;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, IsTerminal, Write};

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a hint line below an error, in yellow
pub fn print_hint(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Clear the terminal and print the quit hint shown above every menu
pub fn print_screen_header() {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0));
    }
    println!("{}\n", "Press Ctrl+C to quit".dimmed());
}

/// Wait for Enter before exiting, when attached to a terminal
pub fn wait_for_acknowledgment() {
    if !io::stdin().is_terminal() {
        return;
    }
    print!("\n{} ", "Press Enter to quit...".dimmed());
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
