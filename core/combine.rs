use crate::classify::Mode;
use crate::pattern::PatternSet;
use crate::structure::build_structure;
use crate::walk::WalkedEntry;
use std::fs;
use std::path::PathBuf;

/// Default name of the combined output file, written into the walk root.
pub const OUTPUT_FILE: &str = "code.copy";

/// Settings echoed into the document header.
#[derive(Debug, Clone)]
pub struct RunParameters {
    pub root: PathBuf,
    pub mode: Mode,
    pub apply_filter_to_structure: bool,
}

/// Assembles the combined output document: run-parameter header, verbatim
/// pattern file contents, one delimited section per included file, and the
/// structure listing at the end.
///
/// File reads are recoverable per file: unreadable or non-UTF-8 content is
/// logged and its section skipped, and the rest of the document is still
/// produced.
pub fn build_document(
    params: &RunParameters,
    patterns: &PatternSet,
    entries: &[WalkedEntry],
) -> String {
    let mut out = String::new();

    out.push_str("==== Run Parameters ====\n");
    out.push_str(
        "This file was generated by combining the contents of multiple files. \
         Below are the settings used during this process:\n",
    );
    out.push_str(&format!("Root Directory: {}\n", params.root.display()));
    out.push_str(&format!("Mode: {}\n", params.mode));
    out.push_str(&format!(
        "Apply Filter to Directory Structure: {}\n",
        params.apply_filter_to_structure
    ));

    out.push_str(&format!(
        "\n==== {} Contents ====\n",
        params.mode.pattern_file_name()
    ));
    out.push_str(patterns.raw_text());
    out.push_str("\n\n");

    let mut included = 0usize;
    for walked in entries.iter().filter(|w| !w.entry.is_dir && w.decision.included) {
        let path = &walked.entry.path;
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };
        match String::from_utf8(bytes) {
            Ok(content) => {
                out.push_str(&format!("\n\n==== File: {} ====\n\n", path.display()));
                out.push_str(&content);
                included += 1;
            }
            Err(e) => {
                log::warn!("Skipping non-UTF-8 file {}: {}", path.display(), e);
            }
        }
    }
    log::info!("Combined {} file(s)", included);

    out.push_str("\n\n==== Directory Structure ====\n\n");
    for line in build_structure(entries, params.apply_filter_to_structure, params.mode) {
        out.push_str(&line.to_string());
        out.push('\n');
    }

    out
}
