//! Plugin identifiers and executable resolution.

use crate::paths::CleanPath;

/// Install location of implicitly resolved plugin executables, relative to
/// the root directory. The plugin identifier is appended directly.
pub const INSTALL_PREFIX: &str = "usr/lib/holo/holo-";

/// How a plugin's executable path was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Derived from the identifier via the fixed install location.
    Implicit,
    /// Given verbatim in the directive (`identifier=path`).
    Explicit,
}

/// A configuration-applying program named by the directive file.
///
/// Immutable once constructed; the owning [`crate::config::Config`] preserves
/// directive-file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Opaque plugin name, typically alphanumeric.
    pub identifier: String,
    /// Path of the executable that applies this plugin.
    pub executable_path: CleanPath,
    /// Whether the executable path was inferred or given explicitly.
    pub resolution: Resolution,
}

impl Plugin {
    /// Resolve one directive payload into a plugin.
    ///
    /// A payload containing `=` names both the identifier and the executable
    /// path; the path is taken verbatim (it is not joined against the root,
    /// only [`CleanPath`]'s own cleaning applies). Without `=`, the whole
    /// payload is the identifier and the executable lives at
    /// `<root>/usr/lib/holo/holo-<identifier>`.
    ///
    /// Total: malformed identifiers pass through as opaque strings — vetting
    /// them is the concern of the execution step, not the resolver.
    #[must_use]
    pub fn resolve(payload: &str, root: &CleanPath) -> Self {
        match payload.split_once('=') {
            Some((identifier, executable)) => Self {
                identifier: identifier.to_string(),
                executable_path: CleanPath::new(executable),
                resolution: Resolution::Explicit,
            },
            None => Self {
                identifier: payload.to_string(),
                executable_path: root.join(&format!("{INSTALL_PREFIX}{payload}")),
                resolution: Resolution::Implicit,
            },
        }
    }
}
