use crate::classify::{Decision, Mode, classify};
use crate::error::{AppError, Result};
use crate::pattern::PatternSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A filesystem node visited during the walk.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    /// Always computed against the walk root, never the working directory.
    /// The root itself is `"."`.
    pub relative_path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    /// Root-relative path as a `/`-separated string, the form patterns are
    /// matched against.
    pub fn relative_str(&self) -> String {
        self.relative_path.to_string_lossy().replace('\\', "/")
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// An entry paired with its classification decision.
#[derive(Debug, Clone)]
pub struct WalkedEntry {
    pub entry: Entry,
    pub decision: Decision,
}

/// Walks the tree rooted at `root` depth-first, classifying every entry.
///
/// Emission order per directory: the directory itself, then its files in name
/// order, then its subdirectories in name order (recursively). Pruning is
/// mode-asymmetric: in blacklist mode an excluded subdirectory is emitted but
/// never descended into, so no child entry of it appears and no I/O touches
/// that subtree; in whitelist mode every subdirectory is descended into
/// unconditionally, since a deeply nested file may still match a pattern.
///
/// A missing or non-directory root is fatal. Errors listing an individual
/// directory are logged and skipped without aborting the walk.
pub fn walk(root: &Path, patterns: &PatternSet, mode: Mode) -> Result<Vec<WalkedEntry>> {
    if !root.is_dir() {
        return Err(AppError::Config(format!(
            "Root directory does not exist: {}",
            root.display()
        )));
    }
    log::debug!("Walking {} in {} mode", root.display(), mode);
    let mut out = Vec::new();
    visit_dir(root, root, patterns, mode, &mut out);
    log::debug!("Walk complete, {} entries", out.len());
    Ok(out)
}

fn make_entry(path: &Path, root: &Path, is_dir: bool) -> Entry {
    let relative_path = pathdiff::diff_paths(path, root)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."));
    Entry {
        path: path.to_path_buf(),
        relative_path,
        is_dir,
    }
}

fn visit_dir(
    dir: &Path,
    root: &Path,
    patterns: &PatternSet,
    mode: Mode,
    out: &mut Vec<WalkedEntry>,
) {
    let entry = make_entry(dir, root, true);
    let decision = classify(&entry, patterns, mode);
    out.push(WalkedEntry { entry, decision });

    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            log::warn!("Error listing directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for item in read_dir {
        match item {
            Ok(dir_entry) => match dir_entry.file_type() {
                Ok(ft) if ft.is_dir() => subdirs.push(dir_entry.path()),
                Ok(_) => files.push(dir_entry.path()),
                Err(e) => log::warn!(
                    "Could not determine type of {}: {}",
                    dir_entry.path().display(),
                    e
                ),
            },
            Err(e) => log::warn!("Error reading entry in {}: {}", dir.display(), e),
        }
    }
    files.sort();
    subdirs.sort();

    for file in files {
        let entry = make_entry(&file, root, false);
        let decision = classify(&entry, patterns, mode);
        out.push(WalkedEntry { entry, decision });
    }

    // Each subdirectory is resolved at its sorted position, so a pruned
    // directory entry lands between its siblings, not after them.
    for sub in subdirs {
        match mode {
            Mode::Whitelist => visit_dir(&sub, root, patterns, mode, out),
            Mode::Blacklist => {
                let entry = make_entry(&sub, root, true);
                let decision = classify(&entry, patterns, mode);
                if decision.included {
                    visit_dir(&sub, root, patterns, mode, out);
                } else {
                    log::debug!("Pruning excluded subtree: {}", entry.relative_str());
                    out.push(WalkedEntry { entry, decision });
                }
            }
        }
    }
}
