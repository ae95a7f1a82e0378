//! `magnet help` and `magnet version`

use crate::ui;
use colored::*;

const COMMANDS: [(&str, &str); 15] = [
    ("help", "Shows this message."),
    ("version", "Shows the current version of Magnet."),
    ("config <configuration>", "Changes the default configuration."),
    ("new [name] [type]", "Creates a new C++ project."),
    ("generate", "Generates project files."),
    ("build", "Builds the project."),
    ("go", "Launches the project."),
    ("clean", "Cleans the project."),
    ("pull", "Installs all dependencies."),
    ("pull <url>", "Installs a new dependency."),
    ("pull --list", "Lists all installed dependencies."),
    ("pull --help", "Shows more information."),
    ("remove <dependency>", "Removes a dependency."),
    ("switch <dependency> <branch>", "Switches a dependency branch."),
    ("-v / --quiet / --no-color", "Adjusts diagnostics and colors (before the command)."),
];

pub fn help() {
    ui::log("Usage: magnet <command> [options]\n");
    ui::plain("Commands:".bold().to_string());

    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    for (usage, description) in COMMANDS {
        let padded = format!("{:<width$}", usage);
        ui::plain(format!("  {} {}", padded.cyan(), description));
    }
}

pub fn version() {
    ui::log(version_string());
}

pub fn version_string() -> String {
    format!("Magnet v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_uses_package_version() {
        assert_eq!(
            version_string(),
            format!("Magnet v{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_help_lists_every_verb() {
        for verb in crate::commands::Verb::ALL {
            assert!(
                COMMANDS
                    .iter()
                    .any(|(usage, _)| usage.split_whitespace().next() == Some(verb.as_str())),
                "help is missing '{}'",
                verb
            );
        }
    }
}
