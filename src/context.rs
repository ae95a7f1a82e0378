//! Per-invocation state handed to every command handler.

use crate::config::ProjectConfig;
use crate::error::{MagnetError, Result};
use crate::layout::ProjectLayout;
use crate::manifest::Manifest;
use crate::process::{CommandRunner, ExternalCommand};
use std::path::{Path, PathBuf};

/// Everything one command execution works against: the directory it runs in,
/// the project descriptor found there, and the runner for external processes.
pub struct Context<'r> {
    root: PathBuf,
    project: ProjectConfig,
    runner: &'r dyn CommandRunner,
}

impl<'r> Context<'r> {
    pub fn new(root: impl Into<PathBuf>, project: ProjectConfig, runner: &'r dyn CommandRunner) -> Self {
        Self {
            root: root.into(),
            project,
            runner,
        }
    }

    /// Builds a context with the descriptor read from `root`.
    pub fn load(root: impl Into<PathBuf>, runner: &'r dyn CommandRunner) -> Result<Self> {
        let root = root.into();
        let project = ProjectConfig::load(&root)?;
        Ok(Self::new(root, project, runner))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut ProjectConfig {
        &mut self.project
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.root, &self.project.name)
    }

    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::load(&crate::layout::manifest_path(&self.root))
    }

    pub fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        manifest.save(&crate::layout::manifest_path(&self.root))
    }

    pub fn require_project_name(&self) -> Result<()> {
        if self.project.has_name() {
            Ok(())
        } else {
            Err(MagnetError::UnknownProjectName)
        }
    }

    /// Runs `command` from the project root; a non-zero exit becomes an error
    /// carrying `hint`.
    pub fn execute(&self, command: ExternalCommand, hint: &str) -> Result<()> {
        let command = command.current_dir(&self.root);
        tracing::debug!(argv = ?command.args, "{}", command.program);

        if self.runner.run(&command) {
            Ok(())
        } else {
            Err(MagnetError::ExternalCommand {
                command: command.to_string(),
                hint: hint.to_string(),
            })
        }
    }
}
