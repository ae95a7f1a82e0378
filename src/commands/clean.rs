//! `magnet clean`
//!
//! Removes the CMake cache artifacts from `<name>/Build` so the next
//! `magnet generate` configures from scratch. Build outputs in `Binaries/`
//! are left alone.

use crate::context::Context;
use crate::error::{MagnetError, Result};
use crate::ui;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const CLEAN_TARGETS: [&str; 4] = [
    "cmake_install.cmake",
    "CMakeCache.txt",
    "CMakeFiles",
    "Makefile",
];

/// Returns the number of filesystem entries removed.
pub fn clean(ctx: &Context) -> Result<usize> {
    ui::log("Clean started...");

    ctx.require_project_name()?;

    let build_dir = ctx.layout().build_dir();
    let mut removed = 0;
    for target in CLEAN_TARGETS {
        removed += remove_counted(&build_dir.join(target))?;
    }

    if removed == 0 {
        ui::log("Looks like your project is already clean. Nice!");
    } else {
        ui::success(format!(
            "Removed {} item{}.",
            removed,
            if removed == 1 { "" } else { "s" }
        ));
    }
    Ok(removed)
}

/// Removes `path` recursively, counting it and everything beneath it.
fn remove_counted(path: &Path) -> Result<usize> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(MagnetError::io(path, e)),
    };

    if metadata.is_dir() {
        let count = WalkDir::new(path).into_iter().filter_map(|e| e.ok()).count();
        fs::remove_dir_all(path).map_err(|e| MagnetError::io(path, e))?;
        Ok(count)
    } else {
        fs::remove_file(path).map_err(|e| MagnetError::io(path, e))?;
        Ok(1)
    }
}
