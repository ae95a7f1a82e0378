//! Dependency lifecycle.
//!
//! Dependencies are git submodules checked out under `<name>/Dependencies/`.
//! The manifest in `.magnet/dependencies.toml` lists them, and every change to
//! that list is followed by a full regeneration of the CMake files.
//!
//! ## Commands
//!
//! - `magnet pull` - Initialize and update all submodules
//! - `magnet pull <url>` - Add a submodule
//! - `magnet pull --list` - Print the manifest
//! - `magnet remove <dependency>` - Remove a submodule
//! - `magnet switch <dependency> <branch>` - Check out another branch

mod manage;
mod source;

pub use manage::{install, install_all, list, remove, switch_branch};
pub use source::{DEFAULT_HOST, DependencySource, resolve_source};
