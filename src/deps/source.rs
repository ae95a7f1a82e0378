//! Turns a `pull` argument into a clone URL and a dependency name.

use crate::error::{MagnetError, Result};

pub const DEFAULT_HOST: &str = "https://github.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySource {
    pub name: String,
    pub url: String,
}

/// Resolves `owner/repo` shorthand or a full URL.
///
/// Anything that is not already a URL (`scheme://` or `git@host:`) is taken
/// to live on the default host. The name is the last path segment with its
/// extension dropped: `https://example.com/foo/bar.git` becomes `bar`.
pub fn resolve_source(input: &str) -> Result<DependencySource> {
    let input = input.trim();
    let url = if is_qualified_url(input) {
        input.to_string()
    } else {
        format!("{}{}", DEFAULT_HOST, input.trim_start_matches('/'))
    };

    let name = repository_name(&url);
    if name.is_empty() {
        return Err(MagnetError::Usage(format!(
            "Could not derive a dependency name from '{}'. Usage: magnet pull <url>",
            input
        )));
    }

    Ok(DependencySource { name, url })
}

fn is_qualified_url(input: &str) -> bool {
    input.contains("://") || input.starts_with("git@")
}

fn repository_name(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    match segment.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => segment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_expands_to_default_host() {
        let source = resolve_source("acme/widget").unwrap();
        assert_eq!(source.name, "widget");
        assert_eq!(source.url, "https://github.com/acme/widget");
    }

    #[test]
    fn test_full_url_strips_extension() {
        let source = resolve_source("https://example.com/foo/bar.git").unwrap();
        assert_eq!(source.name, "bar");
        assert_eq!(source.url, "https://example.com/foo/bar.git");
    }

    #[test]
    fn test_ssh_url_is_kept() {
        let source = resolve_source("git@github.com:gabime/spdlog.git").unwrap();
        assert_eq!(source.name, "spdlog");
        assert_eq!(source.url, "git@github.com:gabime/spdlog.git");
    }

    #[test]
    fn test_only_last_extension_is_dropped() {
        let source = resolve_source("https://example.com/org/sfml.ext.git").unwrap();
        assert_eq!(source.name, "sfml.ext");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let source = resolve_source("https://example.com/org/glm/").unwrap();
        assert_eq!(source.name, "glm");
    }

    #[test]
    fn test_empty_name_is_usage_error() {
        assert!(matches!(
            resolve_source("https://example.com/.git"),
            Err(MagnetError::Usage(_))
        ));
    }
}
