pub mod classify;
pub mod combine;
pub mod error;
pub mod pattern;
pub mod structure;
pub mod walk;

pub use classify::{Decision, IGNORE_FILE, INCLUDE_FILE, Mode, classify};
pub use combine::{OUTPUT_FILE, RunParameters, build_document};
pub use error::{AppError, Result};
pub use pattern::{Pattern, PatternKind, PatternSet};
pub use structure::{StructureLine, build_structure};
pub use walk::{Entry, WalkedEntry, walk};
