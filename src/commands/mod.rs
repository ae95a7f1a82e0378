//! Command dispatch.
//!
//! A command line is a verb followed by raw positional arguments. The verb
//! picks exactly one handler; each handler validates the positions it needs
//! and reports a usage line when one is blank.
//!
//! Verbs other than `new`, `help` and `version` are project-scoped: they run
//! against the descriptor in `.magnet/config.toml` and refuse to touch the
//! filesystem while its name is unset.

pub mod build;
pub mod clean;
pub mod config;
pub mod generate;
pub mod info;
pub mod new;
pub mod pull;

use crate::context::Context;
use crate::error::{MagnetError, Result};
use crate::process::CommandRunner;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Help,
    Version,
    Config,
    New,
    Generate,
    Build,
    Go,
    Clean,
    Pull,
    Remove,
    Switch,
}

impl Verb {
    pub const ALL: [Verb; 11] = [
        Verb::Help,
        Verb::Version,
        Verb::Config,
        Verb::New,
        Verb::Generate,
        Verb::Build,
        Verb::Go,
        Verb::Clean,
        Verb::Pull,
        Verb::Remove,
        Verb::Switch,
    ];

    /// Global verbs run without a project descriptor.
    pub fn is_global(self) -> bool {
        matches!(self, Verb::New | Verb::Help | Verb::Version)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Version => "version",
            Verb::Config => "config",
            Verb::New => "new",
            Verb::Generate => "generate",
            Verb::Build => "build",
            Verb::Go => "go",
            Verb::Clean => "clean",
            Verb::Pull => "pull",
            Verb::Remove => "remove",
            Verb::Switch => "switch",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = MagnetError;

    fn from_str(s: &str) -> Result<Self> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| {
                MagnetError::Usage(format!(
                    "Unknown command '{}'. Run `magnet help` to see all commands.",
                    s
                ))
            })
    }
}

/// A verb and the arguments that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: Verb,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(verb: Verb, args: Vec<String>) -> Self {
        Self { verb, args }
    }

    /// The argument at `index`, or `""` when there is none.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Parses `verb` and runs it from `root`.
///
/// A missing verb prints help. The project descriptor is only read for
/// project-scoped verbs.
pub fn run(root: &Path, verb: Option<&str>, args: Vec<String>, runner: &dyn CommandRunner) -> Result<()> {
    let verb = match verb.map(str::parse::<Verb>) {
        Some(Ok(verb)) => verb,
        Some(Err(e)) => {
            info::help();
            return Err(e);
        }
        None => Verb::Help,
    };
    let invocation = Invocation::new(verb, args);

    let mut ctx = if verb.is_global() {
        Context::new(root, Default::default(), runner)
    } else {
        Context::load(root, runner)?
    };
    tracing::debug!(verb = %verb, project = %ctx.project().name, "dispatching");

    dispatch(&mut ctx, &invocation)
}

pub fn dispatch(ctx: &mut Context, invocation: &Invocation) -> Result<()> {
    match invocation.verb {
        Verb::Help => {
            info::help();
            Ok(())
        }
        Verb::Version => {
            info::version();
            Ok(())
        }
        Verb::Config => config::config(ctx, invocation),
        Verb::New => new::new_project(ctx, invocation),
        Verb::Generate => generate::generate(ctx),
        Verb::Build => build::build(ctx),
        Verb::Go => build::go(ctx),
        Verb::Clean => clean::clean(ctx).map(|_| ()),
        Verb::Pull => pull::pull(ctx, invocation),
        Verb::Remove => pull::remove(ctx, invocation),
        Verb::Switch => pull::switch(ctx, invocation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_out_of_range_is_empty() {
        let invocation = Invocation::new(Verb::Switch, vec!["glfw".to_string()]);
        assert_eq!(invocation.arg(0), "glfw");
        assert_eq!(invocation.arg(1), "");
        assert_eq!(invocation.arg(99), "");
    }

    #[test]
    fn test_verb_round_trip() {
        for verb in Verb::ALL {
            assert_eq!(verb.as_str().parse::<Verb>().unwrap(), verb);
        }
    }

    #[test]
    fn test_unknown_verb_is_usage_error() {
        assert!(matches!("launch".parse::<Verb>(), Err(MagnetError::Usage(_))));
    }

    #[test]
    fn test_global_verbs() {
        let global: Vec<_> = Verb::ALL.into_iter().filter(|v| v.is_global()).collect();
        assert_eq!(global, [Verb::Help, Verb::Version, Verb::New]);
    }

    struct NoProcesses;

    impl CommandRunner for NoProcesses {
        fn run(&self, _: &crate::process::ExternalCommand) -> bool {
            panic!("no external command expected")
        }
    }

    #[test]
    fn test_info_verbs_run_without_project() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), Some("help"), Vec::new(), &NoProcesses).is_ok());
        assert!(run(dir.path(), Some("version"), Vec::new(), &NoProcesses).is_ok());
        assert!(run(dir.path(), None, Vec::new(), &NoProcesses).is_ok());
    }
}
