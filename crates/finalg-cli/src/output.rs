//! Colored output formatting for the finalg CLI

use colored::*;
use finalg_core::{Algebra, Kind};

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(title.chars().count()).cyan());
}

pub fn format_kind(kind: Kind) -> ColoredString {
    match kind {
        Kind::Magma | Kind::Semigroup => kind.name().yellow(),
        Kind::Monoid | Kind::Group => kind.name().green(),
        Kind::Ring | Kind::Field => kind.name().magenta(),
    }
}

pub fn format_summary(algebra: &Algebra) -> String {
    format!(
        "{} is a {} of order {}",
        algebra.name().bold(),
        format_kind(algebra.kind()),
        algebra.order().to_string().cyan()
    )
}

pub fn enable_colors(enabled: bool) {
    colored::control::set_override(enabled);
}
