//! `magnet new [name] [type]`
//!
//! Without arguments an interactive wizard asks for the name and project
//! type. The project is laid down in `./<name>` and initialized as a git
//! repository so dependencies can be added as submodules straight away.

use super::Invocation;
use crate::config::{ProjectConfig, ProjectType};
use crate::context::Context;
use crate::error::{MagnetError, Result};
use crate::layout::ProjectLayout;
use crate::manifest::Manifest;
use crate::templates;
use crate::ui;
use inquire::{Select, Text};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PROJECT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("project name pattern is valid")
});

pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME.is_match(name)
}

pub fn new_project(ctx: &Context, invocation: &Invocation) -> Result<()> {
    let mut project = ProjectConfig::default();

    if invocation.arg(0).is_empty() {
        run_wizard(&mut project)?;
    } else {
        project.name = invocation.arg(0).to_string();
        let kind = invocation.arg(1);
        if !kind.is_empty() {
            project.project_type = kind.parse().map_err(|_| {
                MagnetError::Usage(
                    "Usage: magnet new [name] [Executable/StaticLibrary/DynamicLibrary]"
                        .to_string(),
                )
            })?;
        }
    }

    let path = create_project(ctx.root(), &project)?;

    ui::host(
        ui::WIZARD,
        format!(
            "{} has been created.\nNext steps: `cd {} && magnet generate` to generate project files.",
            project.name,
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| project.name.clone())
        ),
    );
    Ok(())
}

fn run_wizard(project: &mut ProjectConfig) -> Result<()> {
    project.name = Text::new("What would you like to name your new C++ project?")
        .with_validator(|input: &str| {
            if is_valid_project_name(input) {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid(
                    "Use letters, digits, '-' or '_', starting with a letter or '_'.".into(),
                ))
            }
        })
        .prompt()?;

    project.project_type = Select::new("Choose a project type:", ProjectType::ALL.to_vec())
        .with_starting_cursor(0)
        .prompt()?;
    Ok(())
}

/// Writes a new project under `parent/<name>` and returns its directory.
pub fn create_project(parent: &Path, project: &ProjectConfig) -> Result<PathBuf> {
    if !is_valid_project_name(&project.name) {
        return Err(MagnetError::InvalidProjectName(project.name.clone()));
    }

    let root = parent.join(&project.name);
    if root.exists() {
        return Err(MagnetError::ProjectExists(root));
    }

    ui::host(ui::WIZARD, "Creating new C++ project...");

    let layout = ProjectLayout::new(&root, &project.name);
    for dir in [layout.source_dir(), layout.dependencies_dir()] {
        fs::create_dir_all(&dir).map_err(|e| MagnetError::io(&dir, e))?;
    }

    for file in templates::get_template(&project.name, project.project_type) {
        let path = root.join(&file.path);
        fs::write(&path, file.content).map_err(|e| MagnetError::io(&path, e))?;
        tracing::debug!("created {}", path.display());
    }

    project.save(&root)?;
    Manifest::default().save(&layout.manifest_path())?;

    git2::Repository::init(&root)?;
    tracing::info!("initialized git repository in {}", root.display());

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_name_validation() {
        assert!(is_valid_project_name("Sandbox"));
        assert!(is_valid_project_name("my_app-2"));
        assert!(!is_valid_project_name(""));
        assert!(!is_valid_project_name("2fast"));
        assert!(!is_valid_project_name("../escape"));
        assert!(!is_valid_project_name("has space"));
    }

    #[test]
    fn test_leading_underscore_matches_error_message() {
        assert!(is_valid_project_name("_core"));
        assert!(!is_valid_project_name("-core"));

        let message = MagnetError::InvalidProjectName("-core".to_string()).to_string();
        assert!(message.contains("starting with a letter or '_'"));
    }

    #[test]
    fn test_create_project_layout() {
        let dir = tempdir().unwrap();
        let project = ProjectConfig {
            name: "Sandbox".to_string(),
            ..Default::default()
        };

        let root = create_project(dir.path(), &project).unwrap();

        assert!(root.join(".magnet").join("config.toml").exists());
        assert!(root.join("Sandbox").join("Source").join("Main.cpp").exists());
        assert!(root.join("Sandbox").join("Dependencies").is_dir());
        assert!(root.join(".git").exists());

        let loaded = ProjectConfig::load(&root).unwrap();
        assert_eq!(loaded, project);
        let manifest = Manifest::load(&root.join(".magnet").join("dependencies.toml")).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_create_project_refuses_existing_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Taken")).unwrap();
        let project = ProjectConfig {
            name: "Taken".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            create_project(dir.path(), &project),
            Err(MagnetError::ProjectExists(_))
        ));
    }
}
