use crate::classify::Mode;
use crate::walk::WalkedEntry;
use std::fmt;

/// One line of the textual structure listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureLine {
    /// Directory marker, rendered as `<relativeDir>/`.
    Directory(String),
    /// File name, rendered indented beneath its directory line.
    File(String),
}

impl fmt::Display for StructureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureLine::Directory(rel) => write!(f, "{}/", rel),
            StructureLine::File(name) => write!(f, "    {}", name),
        }
    }
}

/// Renders the scoped tree as an ordered line list.
///
/// With `apply_filter` off, every visited entry is listed and decisions are
/// ignored. With it on:
/// - blacklist: a directory is listed only when its own decision is included,
///   and file lines only for included files;
/// - whitelist: a directory is listed when its own decision is included or at
///   least one of its immediate files is included. Only direct children count;
///   a directory whose included files all sit deeper is not listed even though
///   those files are reachable in the content output. Files of an unlisted
///   directory are never listed.
pub fn build_structure(
    entries: &[WalkedEntry],
    apply_filter: bool,
    mode: Mode,
) -> Vec<StructureLine> {
    let mut lines = Vec::new();
    let mut i = 0;
    while i < entries.len() {
        let dir = &entries[i];
        // Walk order guarantees a directory entry followed by the contiguous
        // run of its immediate files.
        let mut j = i + 1;
        while j < entries.len() && !entries[j].entry.is_dir {
            j += 1;
        }
        let files = &entries[i + 1..j];

        let list_dir = if !apply_filter {
            true
        } else {
            match mode {
                Mode::Blacklist => dir.decision.included,
                Mode::Whitelist => {
                    dir.decision.included || files.iter().any(|f| f.decision.included)
                }
            }
        };

        if list_dir {
            lines.push(StructureLine::Directory(dir.entry.relative_str()));
            for file in files {
                if !apply_filter || file.decision.included {
                    lines.push(StructureLine::File(file.entry.file_name()));
                }
            }
        }
        i = j;
    }
    log::debug!("Structure listing built, {} line(s)", lines.len());
    lines
}
