//! Dependency manifest (`.magnet/dependencies.toml`).
//!
//! ```toml
//! dependencies = ["glfw", "glm"]
//! ```
//!
//! The list keeps insertion order and is rewritten wholesale on every change.

use crate::error::{MagnetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default)]
    dependencies: Vec<String>,
}

impl Manifest {
    pub fn new(dependencies: Vec<String>) -> Self {
        Self { dependencies }
    }

    /// Reads the manifest at `path`. A missing file is an empty manifest.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| MagnetError::io(path, e))?;
        toml::from_str(&content).map_err(|source| MagnetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        fs::write(path, content).map_err(|e| MagnetError::io(path, e))
    }

    /// Appends `name`. Duplicates are kept.
    pub fn push(&mut self, name: impl Into<String>) {
        self.dependencies.push(name.into());
    }

    /// Drops every entry equal to `name`; returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|dep| dep != name);
        self.dependencies.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
