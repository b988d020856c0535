use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Recent-paths store, kept next to wherever the tool is run from.
pub const CONFIG_FILE: &str = "codecopy_config.json";
pub const MAX_RECENT_PATHS: usize = 10;

/// Recently used root directories, most recent first.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecentPaths {
    recent_paths: Vec<String>,
}

impl RecentPaths {
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads the store. A missing or corrupt file degrades to an empty list;
    /// persistence problems never abort a run.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(store) => store,
                Err(e) => {
                    log::warn!(
                        "Ignoring corrupt recent-paths file {}: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Could not read recent-paths file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write recent-paths file {}", path.display()))
    }

    /// Moves `path` to the front, deduplicating and capping the list.
    pub fn remember(&mut self, path: &Path) {
        let entry = path.display().to_string();
        self.recent_paths.retain(|p| p != &entry);
        self.recent_paths.insert(0, entry);
        self.recent_paths.truncate(MAX_RECENT_PATHS);
    }

    pub fn get(&self, index: usize) -> Option<PathBuf> {
        self.recent_paths.get(index).map(PathBuf::from)
    }

    pub fn paths(&self) -> &[String] {
        &self.recent_paths
    }

    pub fn len(&self) -> usize {
        self.recent_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent_paths.is_empty()
    }

    pub fn clear(&mut self) {
        self.recent_paths.clear();
    }
}
