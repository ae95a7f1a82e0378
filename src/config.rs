//! Project descriptor (`.magnet/config.toml`).
//!
//! The descriptor is read once per invocation. Only `magnet config` writes it
//! back, and only to change the default build configuration.

use crate::error::{MagnetError, Result};
use crate::layout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    pub name: String,
    pub project_type: ProjectType,
    pub cpp_version: String,
    pub cmake_version: String,
    pub default_configuration: Configuration,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            project_type: ProjectType::Executable,
            cpp_version: "20".to_string(),
            cmake_version: "3.20".to_string(),
            default_configuration: Configuration::Debug,
        }
    }
}

impl ProjectConfig {
    /// Loads the descriptor for the project rooted at `root`.
    ///
    /// A missing config file yields the default descriptor, whose name is empty;
    /// project-scoped commands reject that later with a recoverable error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = layout::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| MagnetError::io(&path, e))?;
        toml::from_str(&content).map_err(|source| MagnetError::Parse { path, source })
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let dir = layout::marker_dir(root);
        fs::create_dir_all(&dir).map_err(|e| MagnetError::io(&dir, e))?;

        let path = layout::config_path(root);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| MagnetError::io(&path, e))
    }

    pub fn configuration(&self) -> Configuration {
        self.default_configuration
    }

    /// Changes the default configuration and persists it immediately.
    pub fn set_configuration(&mut self, configuration: Configuration, root: &Path) -> Result<()> {
        self.default_configuration = configuration;
        self.save(root)
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectType {
    #[default]
    Executable,
    StaticLibrary,
    DynamicLibrary,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Executable,
        ProjectType::StaticLibrary,
        ProjectType::DynamicLibrary,
    ];

    /// The `add_library` kind keyword, or `None` for executables.
    pub fn library_kind(self) -> Option<&'static str> {
        match self {
            ProjectType::Executable => None,
            ProjectType::StaticLibrary => Some("STATIC"),
            ProjectType::DynamicLibrary => Some("SHARED"),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectType::Executable => "Executable",
            ProjectType::StaticLibrary => "StaticLibrary",
            ProjectType::DynamicLibrary => "DynamicLibrary",
        };
        f.write_str(s)
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "executable" | "exe" => Ok(ProjectType::Executable),
            "2" | "staticlibrary" | "static" => Ok(ProjectType::StaticLibrary),
            "3" | "dynamiclibrary" | "dynamic" | "shared" => Ok(ProjectType::DynamicLibrary),
            _ => Err(format!("unknown project type '{}'", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Configuration {
    #[default]
    Debug,
    Release,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Debug => f.write_str("Debug"),
            Configuration::Release => f.write_str("Release"),
        }
    }
}

impl FromStr for Configuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Configuration::Debug),
            "release" => Ok(Configuration::Release),
            _ => Err(format!("unknown configuration '{}'", s)),
        }
    }
}
