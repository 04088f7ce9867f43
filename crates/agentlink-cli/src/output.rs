//! Status line helpers
//!
//! `[info]`, `[ok]`, `[create]` and `[skip]` go to stdout;
//! `[error]` and `[warning]` go to stderr.

use std::fmt::Display;

use colored::Colorize;

/// Disable colors when asked to or when `NO_COLOR` is set
pub fn configure_color(no_color: bool) {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

pub fn info(message: impl Display) {
    println!("{} {message}", "[info]".blue());
}

pub fn ok(message: impl Display) {
    println!("{} {message}", "[ok]".green());
}

pub fn create(message: impl Display) {
    println!("{} {message}", "[create]".green().bold());
}

pub fn skip(message: impl Display) {
    println!("{} {message}", "[skip]".dimmed());
}

pub fn error(message: impl Display) {
    eprintln!("{} {message}", "[error]".red().bold());
}

pub fn warning(message: impl Display) {
    eprintln!("{} {message}", "[warning]".yellow());
}
