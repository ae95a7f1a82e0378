//! On-disk layout of a magnet project.
//!
//! ```text
//! <root>/
//! ├── .magnet/config.toml
//! ├── .magnet/dependencies.toml
//! ├── CMakeLists.txt                       (generated)
//! └── <name>/
//!     ├── Source/CMakeLists.txt            (generated)
//!     ├── Dependencies/CMakeLists.txt      (generated)
//!     ├── Dependencies/<dep>/              (git submodule)
//!     ├── Build/                           (cmake build tree)
//!     └── Binaries/<Configuration>/<name>
//! ```
//!
//! Paths passed to external commands are kept relative to the root, since
//! git records submodule paths exactly as given.

use crate::config::Configuration;
use std::path::{Path, PathBuf};

pub const MARKER_DIR: &str = ".magnet";
pub const CONFIG_FILE: &str = "config.toml";
pub const MANIFEST_FILE: &str = "dependencies.toml";
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

pub fn marker_dir(root: &Path) -> PathBuf {
    root.join(MARKER_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    marker_dir(root).join(CONFIG_FILE)
}

pub fn manifest_path(root: &Path) -> PathBuf {
    marker_dir(root).join(MANIFEST_FILE)
}

/// Resolved paths for one named project under a root directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    name: String,
}

impl ProjectLayout {
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            name: name.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_root_level(&self) -> bool {
        marker_dir(&self.root).is_dir()
    }

    pub fn manifest_path(&self) -> PathBuf {
        manifest_path(&self.root)
    }

    pub fn root_cmake_lists(&self) -> PathBuf {
        self.root.join(CMAKE_LISTS)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.name).join("Source")
    }

    pub fn dependencies_dir(&self) -> PathBuf {
        self.root.join(&self.name).join("Dependencies")
    }

    pub fn dependency_dir(&self, dependency: &str) -> PathBuf {
        self.dependencies_dir().join(dependency)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.name).join("Build")
    }

    /// `<name>/Dependencies/<dep>`, relative to the root.
    pub fn relative_dependency_dir(&self, dependency: &str) -> String {
        format!("{}/Dependencies/{}", self.name, dependency)
    }

    /// `<name>/Build`, relative to the root.
    pub fn relative_build_dir(&self) -> String {
        format!("{}/Build", self.name)
    }

    /// `.git/modules/<name>/Dependencies/<dep>`, where git keeps a submodule's repository.
    pub fn submodule_metadata_dir(&self, dependency: &str) -> PathBuf {
        self.root
            .join(".git")
            .join("modules")
            .join(self.relative_dependency_dir(dependency))
    }

    pub fn binary_path(&self, configuration: Configuration) -> PathBuf {
        let file_name = format!("{}{}", self.name, std::env::consts::EXE_SUFFIX);
        self.root
            .join(&self.name)
            .join("Binaries")
            .join(configuration.to_string())
            .join(file_name)
    }
}
