//! `magnet pull`, `magnet remove` and `magnet switch`

use super::Invocation;
use crate::context::Context;
use crate::deps;
use crate::error::{MagnetError, Result};
use crate::ui;

pub fn pull(ctx: &Context, invocation: &Invocation) -> Result<()> {
    let argument = invocation.arg(0);
    if argument.is_empty() {
        return deps::install_all(ctx);
    }

    ctx.require_project_name()?;

    match argument {
        "--list" => deps::list(ctx),
        "--help" => {
            ui::plain("Usage: magnet pull <url>");
            ui::plain("       magnet pull --list");
            ui::plain(format!(
                "\n  <url> may be a full git URL or `owner/repo`, which is fetched from {}",
                deps::DEFAULT_HOST
            ));
            Ok(())
        }
        url => deps::install(ctx, url).map(|_| ()),
    }
}

pub fn remove(ctx: &Context, invocation: &Invocation) -> Result<()> {
    let dependency = invocation.arg(0);
    if dependency.is_empty() {
        return Err(MagnetError::Usage(
            "Usage: magnet remove <dependency>".to_string(),
        ));
    }

    deps::remove(ctx, dependency)
}

pub fn switch(ctx: &Context, invocation: &Invocation) -> Result<()> {
    let dependency = invocation.arg(0);
    let branch = invocation.arg(1);
    if dependency.is_empty() || branch.is_empty() {
        return Err(MagnetError::Usage(
            "Usage: magnet switch <dependency> <branch>".to_string(),
        ));
    }

    deps::switch_branch(ctx, dependency, branch)
}
