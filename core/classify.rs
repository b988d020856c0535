use crate::error::AppError;
use crate::pattern::PatternSet;
use crate::walk::Entry;
use std::fmt;
use std::str::FromStr;

/// Default pattern file consulted in blacklist mode.
pub const IGNORE_FILE: &str = ".copyignore";
/// Default pattern file consulted in whitelist mode.
pub const INCLUDE_FILE: &str = ".copyinclude";

/// Filtering mode for a whole run. Never mixed mid-walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Patterns name what to exclude; unmatched entries are included.
    Blacklist,
    /// Patterns name what to include; unmatched entries are excluded.
    Whitelist,
}

impl Mode {
    pub fn pattern_file_name(self) -> &'static str {
        match self {
            Mode::Blacklist => IGNORE_FILE,
            Mode::Whitelist => INCLUDE_FILE,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Blacklist => write!(f, "blacklist"),
            Mode::Whitelist => write!(f, "whitelist"),
        }
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blacklist" => Ok(Mode::Blacklist),
            "whitelist" => Ok(Mode::Whitelist),
            other => Err(AppError::Config(format!(
                "Invalid mode '{}', expected 'blacklist' or 'whitelist'",
                other
            ))),
        }
    }
}

/// Outcome of classifying one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub included: bool,
}

/// Decides whether an entry is in scope. Pure: no caching, no side effects,
/// identical inputs always yield the same decision.
///
/// Patterns are evaluated in list order and the first match wins; the scan
/// short-circuits, so later patterns are never consulted once one matches.
/// A match means excluded in blacklist mode and included in whitelist mode;
/// no match falls back to the mode default (included for blacklist, excluded
/// for whitelist).
pub fn classify(entry: &Entry, patterns: &PatternSet, mode: Mode) -> Decision {
    let relative = entry.relative_str();
    let matched = patterns.patterns().iter().any(|p| p.matches(&relative));

    let included = match mode {
        Mode::Blacklist => !matched,
        Mode::Whitelist => matched,
    };
    log::trace!(
        "Classified {} as {} ({} mode)",
        relative,
        if included { "included" } else { "excluded" },
        mode
    );
    Decision { included }
}
