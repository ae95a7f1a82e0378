//! `magnet config <configuration>`

use super::Invocation;
use crate::config::Configuration;
use crate::context::Context;
use crate::error::{MagnetError, Result};
use crate::ui;

pub fn config(ctx: &mut Context, invocation: &Invocation) -> Result<()> {
    let argument = invocation.arg(0);
    if argument.is_empty() {
        return Err(MagnetError::Usage(
            "Usage: magnet config <configuration>".to_string(),
        ));
    }

    let configuration: Configuration = argument
        .parse()
        .map_err(|_| MagnetError::Usage("Usage: magnet config [Debug/Release]".to_string()))?;

    ctx.require_project_name()?;

    let root = ctx.root().to_path_buf();
    ctx.project_mut().set_configuration(configuration, &root)?;

    ui::success(format!(
        "Successfully changed default configuration to {}.",
        configuration
    ));
    Ok(())
}
