//! Error types shared by every magnet operation.
//!
//! Each variant maps to one failure class a command can end in: a missing
//! precondition, a missing dependency checkout, a failed external process,
//! or a file that could not be read, parsed or written. Handlers return these
//! to the dispatcher, which never continues past the first one.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = MagnetError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MagnetError {
    /// A required argument was blank or malformed. The message is the usage line.
    #[error("{0}")]
    Usage(String),

    #[error("Command failed due to unknown project name.")]
    UnknownProjectName,

    #[error(
        "In order to generate, run this command at the root of your project, where .magnet can be found."
    )]
    NotProjectRoot,

    #[error("Generate failed due to missing dependencies. Run `magnet pull` to install them.")]
    MissingDependencies(Vec<PathBuf>),

    #[error("`{command}` failed")]
    ExternalCommand { command: String, hint: String },

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize project file")]
    Serialize(#[from] toml::ser::Error),

    #[error("Directory '{}' already exists", .0.display())]
    ProjectExists(PathBuf),

    #[error("Invalid project name '{0}'. Use letters, digits, '-' or '_', starting with a letter or '_'.")]
    InvalidProjectName(String),

    #[error("Git operation failed")]
    Git(#[from] git2::Error),

    #[error("Prompt aborted")]
    Prompt(#[from] inquire::InquireError),
}

impl MagnetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Follow-up advice printed under the error line, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::ExternalCommand { hint, .. } => Some(hint.as_str()),
            _ => None,
        }
    }
}
