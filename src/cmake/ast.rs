//! A small document model for generated CMake files.
//!
//! Documents are assembled front to back from [`Node`]s and serialized once by
//! [`Document::render`]. Nothing is parsed back.

use std::fmt;

const INDENT: &str = "\t";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Emitted as-is.
    Line(String),
    Blank,
    /// `# text`
    Comment(String),
    /// `name(arg arg ...)`
    Directive { name: String, args: Vec<String> },
    /// `name(head...` then one indented item per line, then `)`.
    MultiLineDirective {
        name: String,
        head: Vec<String>,
        items: Vec<String>,
    },
    /// `if(condition)` ... `else()` ... `endif()`; `else()` is dropped when
    /// `otherwise` is empty.
    Conditional {
        condition: String,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
}

impl Node {
    pub fn directive<I, S>(name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::Directive {
            name: name.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = INDENT.repeat(depth);
        match self {
            Node::Line(text) => {
                out.push_str(&indent);
                out.push_str(text);
                out.push('\n');
            }
            Node::Blank => out.push('\n'),
            Node::Comment(text) => {
                out.push_str(&indent);
                out.push_str("# ");
                out.push_str(text);
                out.push('\n');
            }
            Node::Directive { name, args } => {
                out.push_str(&indent);
                out.push_str(name);
                out.push('(');
                out.push_str(&args.join(" "));
                out.push_str(")\n");
            }
            Node::MultiLineDirective { name, head, items } => {
                out.push_str(&indent);
                out.push_str(name);
                out.push('(');
                out.push_str(&head.join(" "));
                out.push('\n');
                for item in items {
                    out.push_str(&indent);
                    out.push_str(INDENT);
                    out.push_str(item);
                    out.push('\n');
                }
                out.push_str(&indent);
                out.push_str(")\n");
            }
            Node::Conditional {
                condition,
                then,
                otherwise,
            } => {
                out.push_str(&format!("{indent}if({condition})\n"));
                for node in then {
                    node.write(out, depth + 1);
                }
                if !otherwise.is_empty() {
                    out.push_str(&format!("{indent}else()\n"));
                    for node in otherwise {
                        node.write(out, depth + 1);
                    }
                }
                out.push_str(&format!("{indent}endif()\n"));
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a document with the "generated, do not edit" banner.
    pub fn generated() -> Self {
        let mut doc = Self::new();
        doc.push(Node::Line(format!(
            "# Generated by Magnet v{}",
            env!("CARGO_PKG_VERSION")
        )));
        doc.push(Node::Line(
            "# Do not edit this file since any changes will be overwritten next time the project files are regenerated."
                .to_string(),
        ));
        doc.push(Node::Blank);
        doc
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Node::Blank)
    }

    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Node::Comment(text.into()))
    }

    pub fn directive<I, S>(&mut self, name: &str, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Node::directive(name, args))
    }

    /// Every top-level directive with the given name, in order.
    pub fn directives<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.nodes.iter().filter_map(move |node| match node {
            Node::Directive { name: n, args } if n == name => Some(args.as_slice()),
            _ => None,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write(&mut out, 0);
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_renders_space_separated() {
        let mut doc = Document::new();
        doc.directive("add_executable", ["App", "main.cpp", "util.h"]);
        assert_eq!(doc.render(), "add_executable(App main.cpp util.h)\n");
    }

    #[test]
    fn test_conditional_with_else_indents_branches() {
        let mut doc = Document::new();
        doc.push(Node::Conditional {
            condition: "NOT MSVC".to_string(),
            then: vec![Node::directive("a", ["1"])],
            otherwise: vec![Node::directive("b", ["2"])],
        });
        assert_eq!(doc.render(), "if(NOT MSVC)\n\ta(1)\nelse()\n\tb(2)\nendif()\n");
    }

    #[test]
    fn test_conditional_without_else() {
        let mut doc = Document::new();
        doc.push(Node::Conditional {
            condition: "MSVC".to_string(),
            then: vec![Node::Line("message(hi)".to_string())],
            otherwise: Vec::new(),
        });
        assert_eq!(doc.render(), "if(MSVC)\n\tmessage(hi)\nendif()\n");
    }

    #[test]
    fn test_multi_line_directive() {
        let mut doc = Document::new();
        doc.push(Node::MultiLineDirective {
            name: "target_include_directories".to_string(),
            head: vec!["App".to_string(), "PUBLIC".to_string()],
            items: vec!["\"zlib/include\"".to_string(), "\"glm\"".to_string()],
        });
        assert_eq!(
            doc.render(),
            "target_include_directories(App PUBLIC\n\t\"zlib/include\"\n\t\"glm\"\n)\n"
        );
    }

    #[test]
    fn test_generated_banner_and_comment() {
        let mut doc = Document::generated();
        doc.comment("Precompiled headers");
        let text = doc.render();
        assert!(text.starts_with("# Generated by Magnet v"));
        assert!(text.contains("# Do not edit this file"));
        assert!(text.ends_with("\n\n# Precompiled headers\n"));
    }

    #[test]
    fn test_directives_lookup() {
        let mut doc = Document::new();
        doc.directive("add_subdirectory", ["a"]);
        doc.blank();
        doc.directive("add_subdirectory", ["b"]);
        let found: Vec<_> = doc.directives("add_subdirectory").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1], ["b".to_string()]);
    }
}
