//! Terminal output helpers.
//!
//! Messages are prefixed with the host that produced them, e.g.
//! `[Magnet] Generating project files...` or `[Project Wizard] ...`.

use crate::error::MagnetError;
use colored::*;

pub const HOST: &str = "Magnet";
pub const WIZARD: &str = "Project Wizard";

pub fn log(message: impl AsRef<str>) {
    host(HOST, message);
}

pub fn host(host: &str, message: impl AsRef<str>) {
    println!("{} {}", format!("[{}]", host).cyan().bold(), message.as_ref());
}

/// Prints without the host prefix.
pub fn plain(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    println!(
        "{} {} {}",
        format!("[{}]", HOST).cyan().bold(),
        "✓".green(),
        message.as_ref()
    );
}

pub fn warn(message: impl AsRef<str>) {
    println!(
        "{} {} {}",
        format!("[{}]", HOST).cyan().bold(),
        "!".yellow(),
        message.as_ref()
    );
}

/// Prints an error as the final line(s) of a failed command.
pub fn report(err: &MagnetError) {
    if let MagnetError::MissingDependencies(paths) = err {
        for path in paths {
            eprintln!(
                "{} Missing dependency: {}",
                format!("[{}]", HOST).cyan().bold(),
                path.display()
            );
        }
    }

    eprintln!("{} {} {}", format!("[{}]", HOST).cyan().bold(), "x".red(), err);

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("   {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }

    if let Some(hint) = err.hint() {
        eprintln!("   {}", hint.yellow());
    }
}
