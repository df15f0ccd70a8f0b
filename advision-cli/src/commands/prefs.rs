//! `advision theme …` and `advision accent …`

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use advision_core::notify::messages;
use advision_core::preferences::{self, AccentColor, Preferences, Theme};
use advision_core::{NotificationSink, Severity};

use crate::sink::TerminalSink;

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the current theme.
    Show,

    /// Persist a theme: light | dark.
    Set { theme: Theme },

    /// Switch between light and dark.
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum AccentCommand {
    /// Print the current accent color.
    Show,

    /// Persist an accent color.
    Set { accent: AccentColor },

    /// List available accent colors.
    List,
}

pub fn run_theme(cmd: ThemeCommand) -> Result<()> {
    let prefs = match cmd {
        ThemeCommand::Show => {
            let prefs = load()?;
            print_theme(&prefs);
            return Ok(());
        }
        ThemeCommand::Set { theme } => {
            preferences::set_theme(theme).context("failed to save theme")?
        }
        ThemeCommand::Toggle => preferences::toggle_theme().context("failed to toggle theme")?,
    };
    saved();
    print_theme(&prefs);
    Ok(())
}

pub fn run_accent(cmd: AccentCommand) -> Result<()> {
    match cmd {
        AccentCommand::Show => print_accent(load()?.accent),
        AccentCommand::Set { accent } => {
            let prefs = preferences::set_accent(accent).context("failed to save accent color")?;
            saved();
            print_accent(prefs.accent);
        }
        AccentCommand::List => {
            let current = load()?.accent;
            for accent in AccentColor::all() {
                let marker = if *accent == current { "*" } else { " " };
                println!("{marker} {:<7} {}", accent.to_string(), accent.hex().bright_black());
            }
        }
    }
    Ok(())
}

fn load() -> Result<Preferences> {
    preferences::load().context("failed to read preferences")
}

fn saved() {
    TerminalSink.notify(messages::SETTINGS_SAVED, Severity::Success);
}

fn print_theme(prefs: &Preferences) {
    println!("theme: {} (toggle icon: {})", prefs.theme, prefs.theme.toggle_icon());
}

fn print_accent(accent: AccentColor) {
    println!("accent: {} {}", accent, accent.hex());
}
