//! Recursive directory-tree removal.

use anyhow::{Context as _, Result};
use std::path::Path;

/// Recursively remove the directory at `path` and everything under it.
///
/// Entries are statted without following symlinks, so a symlink is unlinked
/// rather than descended into. The first error at any level (open, stat,
/// unlink, or a propagated recursive error) aborts the walk and is returned
/// as-is; siblings not yet visited are left untouched and nothing already
/// removed is restored. Errors render as `"<action> <path>: <cause>"` under
/// the alternate (`{:#}`) format.
///
/// Recursion depth equals tree depth, which is fine for the shallow trees
/// this tool owns (the cache directory it creates itself).
pub fn unlink_tree(path: &Path) -> Result<()> {
    let entries =
        std::fs::read_dir(path).with_context(|| format!("open {}", path.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read {}", path.display()))?;
        let entry_path = entry.path();
        let metadata = std::fs::symlink_metadata(&entry_path)
            .with_context(|| format!("open {}", entry_path.display()))?;
        if metadata.is_dir() {
            unlink_tree(&entry_path)?;
        } else {
            std::fs::remove_file(&entry_path)
                .with_context(|| format!("remove {}", entry_path.display()))?;
        }
    }
    std::fs::remove_dir(path).with_context(|| format!("remove {}", path.display()))?;
    Ok(())
}
