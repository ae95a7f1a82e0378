//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use magnet::config::ProjectConfig;
use magnet::context::Context;
use magnet::manifest::Manifest;
use magnet::process::{CommandRunner, ExternalCommand};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

type Hook = Box<dyn Fn(&ExternalCommand) -> bool>;

/// Records every command it is asked to run instead of spawning it.
///
/// The hook decides the exit status and can touch the filesystem to stand in
/// for what git would have done.
pub struct FakeRunner {
    calls: RefCell<Vec<ExternalCommand>>,
    hook: Hook,
}

impl FakeRunner {
    pub fn succeeding() -> Self {
        Self::with(|_| true)
    }

    pub fn with(hook: impl Fn(&ExternalCommand) -> bool + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            hook: Box::new(hook),
        }
    }

    /// Creates the submodule checkout when `git submodule add` runs.
    pub fn cloning() -> Self {
        Self::with(|cmd| {
            let is_add = cmd.args.first().is_some_and(|a| a == "submodule")
                && cmd.args.get(1).is_some_and(|a| a == "add");
            if cmd.program == "git" && is_add {
                if let (Some(cwd), Some(path)) = (&cmd.cwd, cmd.args.get(3)) {
                    fs::create_dir_all(cwd.join(path)).unwrap();
                }
            }
            true
        })
    }

    pub fn calls(&self) -> Vec<ExternalCommand> {
        self.calls.borrow().clone()
    }

    pub fn programs_run(&self, program: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.program == program).count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &ExternalCommand) -> bool {
        self.calls.borrow_mut().push(command.clone());
        (self.hook)(command)
    }
}

/// A project named `name` with a marker directory, empty manifest and two
/// source files.
pub struct Fixture {
    pub dir: TempDir,
    pub name: String,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = ProjectConfig {
            name: name.to_string(),
            ..Default::default()
        };
        project.save(dir.path()).unwrap();
        Manifest::default()
            .save(&dir.path().join(".magnet").join("dependencies.toml"))
            .unwrap();

        let source = dir.path().join(name).join("Source");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("main.cpp"), "int main() { return 0; }\n").unwrap();
        fs::write(source.join("util.h"), "#pragma once\n").unwrap();
        fs::create_dir_all(dir.path().join(name).join("Dependencies")).unwrap();

        Self {
            dir,
            name: name.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn context<'r>(&self, runner: &'r dyn CommandRunner) -> Context<'r> {
        Context::load(self.root(), runner).unwrap()
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::load(&self.root().join(".magnet").join("dependencies.toml")).unwrap()
    }

    pub fn set_manifest(&self, names: &[&str]) {
        Manifest::new(names.iter().map(|n| n.to_string()).collect())
            .save(&self.root().join(".magnet").join("dependencies.toml"))
            .unwrap();
    }

    pub fn dependency_dir(&self, dependency: &str) -> PathBuf {
        self.root().join(&self.name).join("Dependencies").join(dependency)
    }

    pub fn root_cmake(&self) -> PathBuf {
        self.root().join("CMakeLists.txt")
    }

    pub fn target_cmake(&self) -> PathBuf {
        self.root().join(&self.name).join("Source").join("CMakeLists.txt")
    }

    pub fn dependency_cmake(&self) -> PathBuf {
        self.root().join(&self.name).join("Dependencies").join("CMakeLists.txt")
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}
