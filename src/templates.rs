//! Starter files for `magnet new`.
//!
//! Templates are written with the placeholder below and the project name is
//! substituted in when the files are laid down.

use crate::config::ProjectType;

pub const PLACEHOLDER: &str = "MAGNET_NEW_PROJECT";

/// A file relative to the new project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

const GITIGNORE: &str = r#"# Magnet build output
MAGNET_NEW_PROJECT/Build/
MAGNET_NEW_PROJECT/Binaries/

# Generated by `magnet generate`
/CMakeLists.txt
MAGNET_NEW_PROJECT/Source/CMakeLists.txt
MAGNET_NEW_PROJECT/Dependencies/CMakeLists.txt

# IDE
.vs/
.vscode/
.idea/
*.xcodeproj/
"#;

const README: &str = r#"# MAGNET_NEW_PROJECT

Generated with Magnet.

## Getting started

```sh
magnet generate   # write CMake files and configure
magnet build      # compile
magnet go         # run
```

Dependencies are git submodules under `MAGNET_NEW_PROJECT/Dependencies`:

```sh
magnet pull owner/repo
```
"#;

const MAIN_CPP: &str = r#"#include <iostream>

int main()
{
	std::cout << "Hello from MAGNET_NEW_PROJECT!" << std::endl;
	return 0;
}
"#;

const LIBRARY_H: &str = r#"#pragma once

namespace MAGNET_NEW_PROJECT
{
	int Answer();
}
"#;

const LIBRARY_CPP: &str = r#"#include "Library.h"

namespace MAGNET_NEW_PROJECT
{
	int Answer()
	{
		return 42;
	}
}
"#;

/// Replaces the placeholder with the project name.
pub fn render(template: &str, name: &str) -> String {
    template.replace(PLACEHOLDER, name)
}

pub fn get_template(name: &str, project_type: ProjectType) -> Vec<TemplateFile> {
    let source_dir = format!("{}/Source", name);

    let mut files = vec![
        TemplateFile {
            path: ".gitignore".to_string(),
            content: render(GITIGNORE, name),
        },
        TemplateFile {
            path: "README.md".to_string(),
            content: render(README, name),
        },
    ];

    match project_type {
        ProjectType::Executable => files.push(TemplateFile {
            path: format!("{}/Main.cpp", source_dir),
            content: render(MAIN_CPP, name),
        }),
        ProjectType::StaticLibrary | ProjectType::DynamicLibrary => {
            files.push(TemplateFile {
                path: format!("{}/Library.h", source_dir),
                content: render(LIBRARY_H, name),
            });
            files.push(TemplateFile {
                path: format!("{}/Library.cpp", source_dir),
                content: render(LIBRARY_CPP, name),
            });
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fully_replaced() {
        for project_type in ProjectType::ALL {
            for file in get_template("Rocket", project_type) {
                assert!(
                    !file.content.contains(PLACEHOLDER),
                    "{} still has the placeholder",
                    file.path
                );
            }
        }
    }

    #[test]
    fn test_executable_gets_main() {
        let files = get_template("Rocket", ProjectType::Executable);
        assert!(files.iter().any(|f| f.path == "Rocket/Source/Main.cpp"));
        let gitignore = files.iter().find(|f| f.path == ".gitignore").unwrap();
        assert!(gitignore.content.contains("Rocket/Build/"));
    }

    #[test]
    fn test_library_gets_header_and_source() {
        let files = get_template("Rocket", ProjectType::StaticLibrary);
        assert!(files.iter().any(|f| f.path == "Rocket/Source/Library.h"));
        assert!(files.iter().any(|f| f.path == "Rocket/Source/Library.cpp"));
        assert!(!files.iter().any(|f| f.path.ends_with("Main.cpp")));
    }
}
