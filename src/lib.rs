//! # magnet - C++ Project Scaffolding and CMake Generation
//!
//! magnet keeps a small declarative description of a C++ project, tracks its
//! dependencies as git submodules and writes the CMake files that tie the
//! project and its dependencies together.
//!
//! ## Quick Start
//!
//! ```bash
//! magnet new Sandbox
//! cd Sandbox
//! magnet pull glfw/glfw
//! magnet generate && magnet build && magnet go
//! ```
//!
//! ## Module Organization
//!
//! - [`commands`] - Verb dispatch and command handlers
//! - [`deps`] - Submodule-backed dependency lifecycle
//! - [`cmake`] - CMake document model and synthesis
//! - [`config`] - Project descriptor (`.magnet/config.toml`)
//! - [`manifest`] - Dependency manifest (`.magnet/dependencies.toml`)

/// Generated CMake documents.
pub mod cmake;

/// Verb parsing, dispatch and handlers.
pub mod commands;

/// Project descriptor.
pub mod config;

/// Per-invocation context.
pub mod context;

/// Dependency install/remove/switch.
pub mod deps;

/// Error types.
pub mod error;

/// On-disk project layout.
pub mod layout;

/// Diagnostics logging setup.
pub mod logging;

/// Dependency manifest.
pub mod manifest;

/// External process invocation.
pub mod process;

/// Starter files for new projects.
pub mod templates;

/// Terminal output helpers.
pub mod ui;

pub use error::{MagnetError, Result};
