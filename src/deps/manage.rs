//! Submodule-backed dependency operations.
//!
//! Every operation runs its stages in order (git, manifest, regenerate) and
//! stops at the first failure. Stages that already ran are not undone: a
//! submodule added right before a failed manifest write stays in place.

use super::source::resolve_source;
use crate::commands::generate;
use crate::context::Context;
use crate::error::{MagnetError, Result};
use crate::process::ExternalCommand;
use crate::ui;
use std::fs;

const INSTALL_HINT: &str = "Failed to install dependency. See messages above for more information.";
const INSTALL_ALL_HINT: &str =
    "Failed to install dependencies. See messages above for more information.";
const REMOVE_HINT: &str = "Failed to remove dependency. See messages above for more information.";
const SWITCH_HINT: &str =
    "Failed to switch dependency branch. See messages above for more information.";

/// `magnet pull <url>`: adds a submodule, records it, regenerates.
///
/// Returns the derived dependency name.
pub fn install(ctx: &Context, input: &str) -> Result<String> {
    ctx.require_project_name()?;

    let source = resolve_source(input)?;
    let layout = ctx.layout();
    tracing::info!(name = %source.name, url = %source.url, "installing dependency");

    ctx.execute(
        ExternalCommand::git().args([
            "submodule".to_string(),
            "add".to_string(),
            source.url.clone(),
            layout.relative_dependency_dir(&source.name),
        ]),
        INSTALL_HINT,
    )?;

    let mut manifest = ctx.load_manifest()?;
    manifest.push(source.name.clone());
    ctx.save_manifest(&manifest)?;

    ui::success(format!("Installed new dependency: {}", source.name));

    generate::generate(ctx)?;
    Ok(source.name)
}

/// `magnet remove <dependency>`: deinit, untrack, drop git metadata, forget, regenerate.
pub fn remove(ctx: &Context, name: &str) -> Result<()> {
    ctx.require_project_name()?;

    let layout = ctx.layout();
    let path = layout.relative_dependency_dir(name);
    tracing::info!(%name, "removing dependency");

    ctx.execute(
        ExternalCommand::git().args(["submodule", "deinit", "-f", path.as_str()]),
        REMOVE_HINT,
    )?;
    ctx.execute(
        ExternalCommand::git().args(["rm", "-f", path.as_str()]),
        REMOVE_HINT,
    )?;

    let metadata = layout.submodule_metadata_dir(name);
    match fs::remove_dir_all(&metadata) {
        Ok(()) => tracing::debug!("removed {}", metadata.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(MagnetError::io(metadata, e)),
    }

    let mut manifest = ctx.load_manifest()?;
    if !manifest.remove(name) {
        tracing::debug!(%name, "dependency was not listed in the manifest");
    }
    ctx.save_manifest(&manifest)?;

    ui::success(format!("Removed dependency: {}", name));

    generate::generate(ctx)
}

/// `magnet switch <dependency> <branch>`: checks out `branch` in the submodule
/// and stages the new revision. The manifest is untouched.
pub fn switch_branch(ctx: &Context, name: &str, branch: &str) -> Result<()> {
    ctx.require_project_name()?;

    let path = ctx.layout().relative_dependency_dir(name);

    ctx.execute(
        ExternalCommand::git().args(["-C", path.as_str(), "checkout", branch]),
        SWITCH_HINT,
    )?;
    ctx.execute(
        ExternalCommand::git().args(["add", path.as_str()]),
        SWITCH_HINT,
    )?;

    ui::success(format!("Switched {} branch to: {}", name, branch));

    generate::generate(ctx)
}

/// `magnet pull`: initializes and updates every registered submodule.
pub fn install_all(ctx: &Context) -> Result<()> {
    ctx.execute(
        ExternalCommand::git().args(["submodule", "update", "--init", "--recursive"]),
        INSTALL_ALL_HINT,
    )?;

    ui::success("Successfully installed all dependencies.");

    generate::generate(ctx)
}

/// `magnet pull --list`
pub fn list(ctx: &Context) -> Result<()> {
    ctx.require_project_name()?;

    let manifest = ctx.load_manifest()?;
    if manifest.is_empty() {
        ui::log("No dependencies installed.");
        return Ok(());
    }

    ui::log("Here are all the installed dependencies:");
    let layout = ctx.layout();
    for name in manifest.iter() {
        if layout.dependency_dir(name).exists() {
            ui::plain(format!("  {}", name));
        } else {
            ui::warn(format!("{} is not checked out. Run `magnet pull` to fetch it.", name));
        }
    }
    Ok(())
}
