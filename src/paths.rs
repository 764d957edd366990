//! Canonical path values.
//!
//! The bootstrap composes every path it touches (root directory, cache
//! directory, lock file, plugin executables) from user-supplied fragments, so
//! all of them flow through [`CleanPath`]: a string-backed value type that is
//! canonical by construction — no `//` runs, no trailing separator except
//! when the whole path is the root separator itself.

use std::fmt;
use std::path::Path;

/// An immutable filesystem path held in canonical form.
///
/// Construction always cleans; cleaning is idempotent, so a `CleanPath` can
/// be joined and compared without re-scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CleanPath(String);

impl CleanPath {
    /// Build a `CleanPath` from a raw string.
    ///
    /// Collapses any run of consecutive `/` into one, then strips trailing
    /// separators — except that `"/"` itself is kept. Total: empty input
    /// yields an empty path.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut cleaned = String::with_capacity(raw.len());

        // Copy while dropping duplicate separators, e.g. "//foo/bar///" -> "/foo/bar/"
        let mut saw_separator = false;
        for c in raw.chars() {
            let is_separator = c == '/';
            if saw_separator && is_separator {
                continue;
            }
            cleaned.push(c);
            saw_separator = is_separator;
        }

        // Strip the trailing separator, keeping a lone "/"
        if cleaned.len() > 1 && cleaned.ends_with('/') {
            cleaned.pop();
        }

        Self(cleaned)
    }

    /// Join `rhs` onto this path.
    ///
    /// `rhs` is cleaned first. An empty operand yields the other one; an
    /// absolute `rhs` wins outright regardless of `self` (override semantics,
    /// not concatenation); otherwise the result is `self`, exactly one
    /// separator, `rhs`.
    #[must_use]
    pub fn join(&self, rhs: &str) -> Self {
        let rhs = Self::new(rhs);
        if self.0.is_empty() {
            return rhs;
        }
        if rhs.0.is_empty() {
            return self.clone();
        }
        if rhs.0.starts_with('/') {
            return rhs;
        }

        // Both sides are clean here, so only the boundary needs attention:
        // a left side of "/" already ends in the separator.
        let mut joined = String::with_capacity(self.0.len() + 1 + rhs.0.len());
        joined.push_str(&self.0);
        if !joined.ends_with('/') {
            joined.push('/');
        }
        joined.push_str(&rhs.0);
        Self(joined)
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the path is exactly the root separator `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for CleanPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for CleanPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl From<&str> for CleanPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
