//! `magnet build` and `magnet go`

use crate::context::Context;
use crate::error::Result;
use crate::process::ExternalCommand;
use crate::ui;

const BUILD_HINT: &str = "CMake couldn't build the project. See messages above for more information. Have you tried generating your project files first? If not, run `magnet generate`.";
const GO_HINT: &str = "Failed to launch project. See messages above for more information.";

pub fn build(ctx: &Context) -> Result<()> {
    let configuration = ctx.project().configuration();
    ui::log(format!("Building in {} configuration...", configuration));

    ctx.require_project_name()?;

    let layout = ctx.layout();
    ctx.execute(
        ExternalCommand::cmake().args([
            "--build".to_string(),
            layout.relative_build_dir(),
            "--config".to_string(),
            configuration.to_string(),
        ]),
        BUILD_HINT,
    )?;

    ui::success("Build successful. Run `magnet go` to launch your app.");
    Ok(())
}

pub fn go(ctx: &Context) -> Result<()> {
    ui::log("Launching project...");

    ctx.require_project_name()?;

    let binary = ctx.layout().binary_path(ctx.project().configuration());
    ctx.execute(
        ExternalCommand::new(binary.to_string_lossy()),
        GO_HINT,
    )
}
