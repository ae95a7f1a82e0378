//! Filesystem scans feeding document synthesis.

use crate::layout::ProjectLayout;
use crate::manifest::Manifest;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

const SOURCE_EXTENSIONS: [&str; 3] = ["cpp", "h", "hpp"];

/// What the synthesis step needs to know about the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectScan {
    /// Source and header file names in enumeration order.
    pub sources: Vec<String>,
    pub dependencies: Vec<DependencyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyState {
    pub name: String,
    pub present: bool,
    pub has_include_dir: bool,
}

impl ProjectScan {
    pub fn collect(layout: &ProjectLayout, manifest: &Manifest) -> Self {
        Self {
            sources: scan_sources(&layout.source_dir()),
            dependencies: scan_dependencies(&layout.dependencies_dir(), manifest),
        }
    }
}

/// Collects the *file names* of sources under `dir`, recursively.
///
/// Only the name is kept, so two files with the same name in different
/// subdirectories produce the same entry twice. The generated target lists
/// them that way; a warning is logged so the collision is not silent.
pub fn scan_sources(dir: &Path) -> Vec<String> {
    let mut sources = Vec::new();
    let mut seen = HashSet::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_source = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
        if !is_source {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !seen.insert(file_name.clone()) {
            tracing::warn!(
                "source file name '{}' appears more than once under {}; only the name is listed",
                file_name,
                dir.display()
            );
        }
        sources.push(file_name);
    }

    sources
}

pub fn scan_dependencies(dir: &Path, manifest: &Manifest) -> Vec<DependencyState> {
    manifest
        .iter()
        .map(|name| {
            let path = dir.join(name);
            DependencyState {
                name: name.to_string(),
                present: path.exists(),
                has_include_dir: path.join("include").is_dir(),
            }
        })
        .collect()
}
