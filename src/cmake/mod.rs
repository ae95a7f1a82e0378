//! CMake file synthesis.
//!
//! - [`ast`] - document model and renderer
//! - [`scan`] - source tree and dependency checkout scans
//! - [`emit`] - root, target and dependency documents

pub mod ast;
pub mod emit;
pub mod scan;

pub use ast::{Document, Node};
pub use emit::{GeneratedFiles, synthesize};
pub use scan::{DependencyState, ProjectScan};
