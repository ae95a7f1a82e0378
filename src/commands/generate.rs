//! `magnet generate`

use crate::cmake::{self, ProjectScan};
use crate::context::Context;
use crate::error::{MagnetError, Result};
use crate::layout::ProjectLayout;
use crate::manifest::Manifest;
use crate::process::ExternalCommand;
use crate::ui;

const CONFIGURE_HINT: &str =
    "CMake failed to generate project files. See messages above for more information.";

/// The CMake generator used for the host platform.
pub fn platform_generator() -> &'static str {
    if cfg!(target_os = "windows") {
        "Visual Studio 16 2019"
    } else if cfg!(target_os = "macos") {
        "Xcode"
    } else {
        "Unix Makefiles"
    }
}

/// Checks preconditions, rewrites the three CMake files and runs the CMake
/// configure step.
///
/// Nothing is written unless the project root, name and every dependency
/// checkout are in place.
pub fn generate(ctx: &Context) -> Result<()> {
    ui::log("Generating project files...");

    let layout = ctx.layout();
    if !layout.is_root_level() {
        return Err(MagnetError::NotProjectRoot);
    }
    ctx.require_project_name()?;

    let manifest = ctx.load_manifest()?;
    check_dependencies(&layout, &manifest)?;

    write_build_files(ctx, &layout, &manifest)?;

    ctx.execute(
        ExternalCommand::cmake().args([
            "-S",
            ".",
            "-B",
            layout.relative_build_dir().as_str(),
            "-G",
            platform_generator(),
        ]),
        CONFIGURE_HINT,
    )?;

    ui::success("Successfully generated project files. Run `magnet build` next.");
    Ok(())
}

/// Collects every manifest entry without a checkout before failing.
fn check_dependencies(layout: &ProjectLayout, manifest: &Manifest) -> Result<()> {
    let missing: Vec<_> = manifest
        .iter()
        .map(|name| layout.dependency_dir(name))
        .filter(|path| !path.exists())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MagnetError::MissingDependencies(missing))
    }
}

/// Scans the tree and rewrites the root, target and dependency documents.
pub fn write_build_files(ctx: &Context, layout: &ProjectLayout, manifest: &Manifest) -> Result<()> {
    let scan = ProjectScan::collect(layout, manifest);
    tracing::debug!(
        sources = scan.sources.len(),
        dependencies = scan.dependencies.len(),
        "scanned project"
    );

    cmake::synthesize(ctx.project(), manifest, &scan).write(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_missing_dependencies_are_collected_together() {
        let dir = tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path(), "App");
        fs::create_dir_all(layout.dependency_dir("present")).unwrap();
        let manifest = Manifest::new(vec!["a".into(), "present".into(), "b".into()]);

        match check_dependencies(&layout, &manifest) {
            Err(MagnetError::MissingDependencies(paths)) => {
                assert_eq!(paths.len(), 2);
                assert!(paths[0].ends_with(Path::new("App/Dependencies/a")));
                assert!(paths[1].ends_with(Path::new("App/Dependencies/b")));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_generator_is_known() {
        assert!(
            ["Visual Studio 16 2019", "Xcode", "Unix Makefiles"].contains(&platform_generator())
        );
    }
}
