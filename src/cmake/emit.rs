//! Builds the three generated CMake documents.
//!
//! - `CMakeLists.txt` at the root wires the project together.
//! - `<name>/Source/CMakeLists.txt` declares the target from the scanned sources.
//! - `<name>/Dependencies/CMakeLists.txt` pulls in every submodule.
//!
//! [`synthesize`] is pure: everything it needs from disk arrives in a
//! [`ProjectScan`]. Target and dependency documents both read the dependency
//! names from the same manifest, so they always agree.

use super::ast::{Document, Node};
use super::scan::ProjectScan;
use crate::config::ProjectConfig;
use crate::error::{MagnetError, Result};
use crate::layout::ProjectLayout;
use crate::manifest::Manifest;
use std::fs;
use std::path::Path;

const BINARIES_DIR: &str = "${PROJECT_SOURCE_DIR}/${PROJECT_NAME}/Binaries";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub root: Document,
    pub target: Document,
    pub dependencies: Document,
}

impl GeneratedFiles {
    /// Overwrites all three files, creating parent directories as needed.
    pub fn write(&self, layout: &ProjectLayout) -> Result<()> {
        write_document(&layout.root_cmake_lists(), &self.root)?;
        write_document(
            &layout.source_dir().join(crate::layout::CMAKE_LISTS),
            &self.target,
        )?;
        write_document(
            &layout.dependencies_dir().join(crate::layout::CMAKE_LISTS),
            &self.dependencies,
        )
    }
}

fn write_document(path: &Path, document: &Document) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MagnetError::io(parent, e))?;
    }
    fs::write(path, document.render()).map_err(|e| MagnetError::io(path, e))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

pub fn synthesize(project: &ProjectConfig, manifest: &Manifest, scan: &ProjectScan) -> GeneratedFiles {
    GeneratedFiles {
        root: root_document(project),
        target: target_document(project, manifest, &scan.sources),
        dependencies: dependency_document(project, manifest, scan),
    }
}

fn preamble(project: &ProjectConfig) -> Document {
    let mut doc = Document::generated();
    doc.directive(
        "cmake_minimum_required",
        ["VERSION", project.cmake_version.as_str()],
    );
    doc.directive("project", [project.name.as_str()]);
    doc
}

pub fn root_document(project: &ProjectConfig) -> Document {
    let name = project.name.as_str();
    let mut doc = preamble(project);
    doc.blank();

    doc.directive("set", ["CMAKE_CXX_STANDARD", project.cpp_version.as_str()]);
    doc.directive("set", ["CMAKE_ARCHIVE_OUTPUT_DIRECTORY", BINARIES_DIR]);
    doc.directive("set", ["CMAKE_LIBRARY_OUTPUT_DIRECTORY", BINARIES_DIR]);
    doc.directive("set", ["CMAKE_RUNTIME_OUTPUT_DIRECTORY", BINARIES_DIR]);
    doc.blank();

    doc.directive("add_subdirectory", ["${PROJECT_NAME}/Source"]);
    doc.directive("add_subdirectory", ["${PROJECT_NAME}/Dependencies"]);
    doc.blank();

    doc.directive(
        "target_include_directories",
        [name, "PUBLIC", "${PROJECT_SOURCE_DIR}/${PROJECT_NAME}/Source"],
    );
    doc.blank();

    doc.push(Node::Conditional {
        condition: "MSVC".to_string(),
        then: vec![Node::directive(
            "set_property",
            [
                "DIRECTORY",
                "${CMAKE_CURRENT_SOURCE_DIR}",
                "PROPERTY",
                "VS_STARTUP_PROJECT",
                name,
            ],
        )],
        otherwise: Vec::new(),
    });
    doc
}

pub fn target_document(project: &ProjectConfig, manifest: &Manifest, sources: &[String]) -> Document {
    let name = project.name.as_str();
    let mut doc = preamble(project);
    doc.directive("set", ["CMAKE_CXX_STANDARD", project.cpp_version.as_str()]);

    let mut artifact = vec![name.to_string()];
    let directive = match project.project_type.library_kind() {
        None => "add_executable",
        Some(kind) => {
            artifact.push(kind.to_string());
            "add_library"
        }
    };
    artifact.extend(sources.iter().cloned());
    doc.directive(directive, artifact);
    doc.blank();

    doc.comment("Set rpath relative to app");
    doc.push(Node::Conditional {
        condition: "NOT MSVC".to_string(),
        then: vec![Node::directive(
            "set_target_properties",
            [name, "PROPERTIES", "LINK_FLAGS", "\"-Wl,-rpath,./\""],
        )],
        otherwise: vec![Node::directive(
            "set_target_properties",
            [
                name,
                "PROPERTIES",
                "VS_DEBUGGER_WORKING_DIRECTORY",
                "${CMAKE_SOURCE_DIR}/${PROJECT_NAME}/Binaries/Debug",
            ],
        )],
    });
    doc.blank();

    doc.comment("Precompiled headers");
    doc.comment("target_precompile_headers(${PROJECT_NAME} PUBLIC PCH.h)");
    doc.blank();

    if !manifest.is_empty() {
        let mut link = vec![name.to_string()];
        link.extend(manifest.names().iter().cloned());
        doc.directive("target_link_libraries", link);
    }
    doc
}

pub fn dependency_document(project: &ProjectConfig, manifest: &Manifest, scan: &ProjectScan) -> Document {
    let mut doc = preamble(project);
    doc.blank();

    if manifest.is_empty() {
        return doc;
    }

    for dependency in manifest.iter() {
        doc.directive("add_subdirectory", [dependency]);
    }
    doc.blank();

    let includes: Vec<String> = scan
        .dependencies
        .iter()
        .filter(|dep| dep.present)
        .map(|dep| {
            if dep.has_include_dir {
                format!("\"{}/include\"", dep.name)
            } else {
                format!("\"{}\"", dep.name)
            }
        })
        .collect();

    if !includes.is_empty() {
        doc.push(Node::MultiLineDirective {
            name: "target_include_directories".to_string(),
            head: vec![project.name.clone(), "PUBLIC".to_string()],
            items: includes,
        });
    }
    doc
}
