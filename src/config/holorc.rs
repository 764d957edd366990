//! Directive-file parsing.
//!
//! The directive file at `<root>/etc/holorc` is plain line-oriented text:
//! one directive per line, `#` comments, blank lines ignored. The only
//! recognized directive is `plugin <payload>`.

use std::path::Path;

use crate::error::ConfigError;
use crate::paths::CleanPath;

use super::plugin::Plugin;

/// The recognized directive keyword.
pub const PLUGIN_DIRECTIVE: &str = "plugin";

/// Result of one pass over the directive file.
///
/// Unrecognized lines are collected rather than aborting the pass, so every
/// broken line can be reported in a single run.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Resolved plugins, in file order.
    pub plugins: Vec<Plugin>,
    /// Trimmed content of each line that matched no known directive.
    pub unrecognized: Vec<String>,
}

impl ParseOutcome {
    /// Whether every non-empty, non-comment line was recognized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unrecognized.is_empty()
    }
}

/// Read and parse the directive file at `path`, resolving plugins against
/// `root`.
///
/// # Errors
///
/// Returns [`ConfigError::HolorcOpen`] if the file cannot be read; parse
/// problems are never errors here, they land in
/// [`ParseOutcome::unrecognized`].
pub fn parse(path: &Path, root: &CleanPath) -> Result<ParseOutcome, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::HolorcOpen {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_str(&content, root))
}

/// Parse directive-file content from a string.
///
/// Leading/trailing whitespace is trimmed per line; empty lines and lines
/// starting with `#` are skipped. A `plugin` keyword must be followed by
/// whitespace; the remainder of the line is the resolver payload. Every
/// other line is recorded as unrecognized and parsing continues.
#[must_use]
pub fn parse_str(content: &str, root: &CleanPath) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in content.lines() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(PLUGIN_DIRECTIVE)
            && rest.starts_with(char::is_whitespace)
        {
            let payload = rest.trim_start();
            outcome.plugins.push(Plugin::resolve(payload, root));
        } else {
            outcome.unrecognized.push(trimmed.to_string());
        }
    }

    outcome
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::plugin::Resolution;

    fn root() -> CleanPath {
        CleanPath::new("/")
    }

    #[test]
    fn parses_plugins_in_file_order() {
        let outcome = parse_str("plugin files\nplugin users=./custombin\n", &root());
        assert!(outcome.is_complete());
        assert_eq!(outcome.plugins.len(), 2);
        assert_eq!(outcome.plugins[0].identifier, "files");
        assert_eq!(
            outcome.plugins[0].executable_path.as_str(),
            "/usr/lib/holo/holo-files"
        );
        assert_eq!(outcome.plugins[1].identifier, "users");
        assert_eq!(outcome.plugins[1].executable_path.as_str(), "./custombin");
    }

    #[test]
    fn rendered_plugin_list_snapshot() {
        let outcome = parse_str(
            "plugin files\nplugin users=./custombin\nplugin ssh-keys\n",
            &root(),
        );
        let rendered = outcome
            .plugins
            .iter()
            .map(|p| format!("{} => {}", p.identifier, p.executable_path))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r"
        files => /usr/lib/holo/holo-files
        users => ./custombin
        ssh-keys => /usr/lib/holo/holo-ssh-keys
        ");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let outcome = parse_str("# header\n\n   \nplugin files\n  # trailing comment\n", &root());
        assert!(outcome.is_complete());
        assert_eq!(outcome.plugins.len(), 1);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let outcome = parse_str("   plugin   files   \n", &root());
        assert_eq!(outcome.plugins.len(), 1);
        assert_eq!(outcome.plugins[0].identifier, "files");
    }

    #[test]
    fn unrecognized_line_is_collected_and_parsing_continues() {
        let outcome = parse_str("plugin files\nnot a directive\nplugin users\n", &root());
        assert!(!outcome.is_complete());
        assert_eq!(outcome.unrecognized, vec!["not a directive"]);
        assert_eq!(outcome.plugins.len(), 2, "valid lines after a bad one still count");
    }

    #[test]
    fn keyword_requires_whitespace_separator() {
        let outcome = parse_str("pluginfiles\n", &root());
        assert_eq!(outcome.plugins.len(), 0);
        assert_eq!(outcome.unrecognized, vec!["pluginfiles"]);
    }

    #[test]
    fn bare_keyword_is_unrecognized() {
        let outcome = parse_str("plugin\n", &root());
        assert!(outcome.plugins.is_empty());
        assert_eq!(outcome.unrecognized, vec!["plugin"]);
    }

    #[test]
    fn explicit_resolution_kind_is_recorded() {
        let outcome = parse_str("plugin files\nplugin users=./bin\n", &root());
        assert_eq!(outcome.plugins[0].resolution, Resolution::Implicit);
        assert_eq!(outcome.plugins[1].resolution, Resolution::Explicit);
    }

    #[test]
    fn empty_content_yields_empty_outcome() {
        let outcome = parse_str("", &root());
        assert!(outcome.plugins.is_empty());
        assert!(outcome.is_complete());
    }

    #[test]
    fn missing_file_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holorc");
        let err = parse(&path, &root()).unwrap_err();
        assert!(err.to_string().starts_with(&format!("open {}", path.display())));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holorc");
        std::fs::write(&path, "plugin files\n").unwrap();
        let outcome = parse(&path, &root()).unwrap();
        assert_eq!(outcome.plugins.len(), 1);
    }
}
