pub mod combine;
pub mod recent;
pub mod structure;

use anyhow::Result;
use codecopy_core::AppError;
use std::path::{Path, PathBuf};

/// Expands `~` and validates that the given root exists. A missing root is a
/// fatal configuration error; no partial output is produced.
pub(crate) fn resolve_root(path: &Path) -> Result<PathBuf> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
    if !expanded.is_dir() {
        anyhow::bail!(AppError::Config(format!(
            "The specified root directory '{}' does not exist.",
            expanded.display()
        )));
    }
    Ok(expanded)
}
