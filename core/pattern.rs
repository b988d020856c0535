use crate::error::{AppError, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::Path;

/// A single filter rule parsed from a pattern file line.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
pub enum PatternKind {
    /// Trailing-separator rule: matches the directory entry itself, stored
    /// without the trailing separator. Suppression of everything beneath an
    /// excluded directory comes from walker pruning, not from this match.
    Directory { prefix: String },
    /// Shell-style glob matched against the whole relative path. `matcher` is
    /// `None` when the glob failed to compile; such a pattern never matches.
    Glob { matcher: Option<GlobMatcher> },
}

impl Pattern {
    fn parse(line: &str) -> Self {
        let raw = line.to_string();
        let normalized = line.replace('\\', "/");

        if normalized.ends_with('/') {
            let prefix = normalized.trim_end_matches('/').to_string();
            log::trace!("Parsed directory pattern: {} (prefix: {})", raw, prefix);
            Pattern {
                raw,
                kind: PatternKind::Directory { prefix },
            }
        } else {
            let matcher = match Glob::new(&normalized) {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(e) => {
                    log::warn!("Invalid glob pattern \"{}\", it will never match: {}", raw, e);
                    None
                }
            };
            Pattern {
                raw,
                kind: PatternKind::Glob { matcher },
            }
        }
    }

    /// Whether this pattern matches the given root-relative path (always
    /// `/`-separated). Pure; identical inputs yield identical results.
    pub fn matches(&self, relative_path: &str) -> bool {
        match &self.kind {
            PatternKind::Directory { prefix } => relative_path == prefix,
            PatternKind::Glob { matcher } => matcher
                .as_ref()
                .is_some_and(|m| m.is_match(relative_path)),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }
}

/// Ordered pattern list plus the original file text. Order is significant:
/// classification evaluates patterns first to last and stops at the first
/// match. The raw text is echoed verbatim into the combined output.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    raw: String,
}

impl PatternSet {
    /// Reads a pattern file. A missing file is not an error and yields an
    /// empty set; any other read failure is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let set = Self::parse(&content);
                log::debug!(
                    "Loaded {} pattern(s) from {}",
                    set.patterns.len(),
                    path.display()
                );
                Ok(set)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "Pattern file not found at {}, using empty pattern set",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(AppError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Parses raw pattern text. Lines are trimmed; blank lines and lines
    /// starting with `#` are dropped. No deduplication, no reordering.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Pattern::parse)
            .collect();
        PatternSet {
            patterns,
            raw: text.to_string(),
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// The original file content, for verbatim echo into collaborator output.
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let set = PatternSet::parse("# header\n\nignore_me/\n   \n*.txt\n# tail\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.patterns()[0].raw(), "ignore_me/");
        assert_eq!(set.patterns()[1].raw(), "*.txt");
    }

    #[test]
    fn parse_preserves_order_and_raw_text() {
        let text = "b/\na/\n*.md\n";
        let set = PatternSet::parse(text);
        let raws: Vec<&str> = set.patterns().iter().map(Pattern::raw).collect();
        assert_eq!(raws, vec!["b/", "a/", "*.md"]);
        assert_eq!(set.raw_text(), text);
    }

    #[test]
    fn trailing_separator_makes_directory_pattern() {
        let set = PatternSet::parse("src/\nsrc\n");
        assert!(matches!(
            set.patterns()[0].kind(),
            PatternKind::Directory { prefix } if prefix == "src"
        ));
        assert!(matches!(set.patterns()[1].kind(), PatternKind::Glob { .. }));
    }

    #[test]
    fn directory_pattern_matches_the_directory_entry_only() {
        let set = PatternSet::parse("src/\n");
        let pattern = &set.patterns()[0];
        assert!(pattern.matches("src"));
        assert!(!pattern.matches("src/main.rs"));
        assert!(!pattern.matches("src/deep/nested/mod.rs"));
        assert!(!pattern.matches("src2"));
        assert!(!pattern.matches("other/src"));
    }

    #[test]
    fn nested_directory_pattern_matches_its_own_path() {
        let set = PatternSet::parse("a/b/\n");
        let pattern = &set.patterns()[0];
        assert!(pattern.matches("a/b"));
        assert!(!pattern.matches("a"));
        assert!(!pattern.matches("a/b/c.txt"));
    }

    #[test]
    fn glob_pattern_matches_whole_relative_path() {
        let set = PatternSet::parse("*.txt\n");
        let pattern = &set.patterns()[0];
        assert!(pattern.matches("notes.txt"));
        // `*` crosses separators, matching the original fnmatch behavior.
        assert!(pattern.matches("src/file2.txt"));
        assert!(!pattern.matches("notes.txt.bak"));
    }

    #[test]
    fn malformed_glob_never_matches() {
        let set = PatternSet::parse("a[bad\n");
        assert_eq!(set.len(), 1);
        assert!(!set.patterns()[0].matches("a[bad"));
        assert!(!set.patterns()[0].matches("abad"));
    }

    #[test]
    fn load_missing_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = PatternSet::load(&dir.path().join(".copyignore")).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.raw_text(), "");
    }

    #[test]
    fn load_reads_patterns_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".copyignore");
        std::fs::write(&path, "ignore_me/\n*.txt\n").unwrap();
        let set = PatternSet::load(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.raw_text(), "ignore_me/\n*.txt\n");
    }
}
