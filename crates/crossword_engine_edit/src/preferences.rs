use std::{
    fs,
    path::{Path, PathBuf},
};

use crossword_engine::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Editor preferences.
///
/// Persisted values are stored in `preferences.toml` inside the user's config
/// directory. Keys missing from the file take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Bound the undo and redo history to `undo_buffer_size` entries
    pub undo_use_finite_buffer: bool,

    pub undo_buffer_size: usize,

    /// Grid size of newly created puzzles
    pub new_initial_width: i32,
    pub new_initial_height: i32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            undo_use_finite_buffer: true,
            undo_buffer_size: 50,
            new_initial_width: 15,
            new_initial_height: 15,
        }
    }
}

impl Preferences {
    pub const FILE_NAME: &'static str = "preferences.toml";

    /// Maximum number of entries per history stack, `None` for unbounded
    pub fn buffer_limit(&self) -> Option<usize> {
        self.undo_use_finite_buffer.then_some(self.undo_buffer_size)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)?;
        toml::from_str(&txt).map_err(EngineError::preferences)
    }

    pub fn store_to(&self, path: &Path) -> Result<()> {
        let txt = toml::to_string_pretty(self).map_err(EngineError::preferences)?;
        fs::write(path, txt)?;
        Ok(())
    }

    /// Load the preferences of the current user, falling back to defaults
    pub fn load() -> Self {
        match Self::config_file() {
            Some(file) => Self::load_or_default(&file),
            None => Self::default(),
        }
    }

    /// Read `path`; a missing or unreadable file yields the defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(prefs) => prefs,
            Err(err) => {
                log::warn!("Error reading preferences file {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Store the preferences of the current user
    pub fn store(&self) -> Result<()> {
        let Some(dir) = Self::config_dir() else {
            return Err(EngineError::generic("no configuration directory available"));
        };
        self.store_in(&dir)
    }

    /// Write `preferences.toml` into `dir`, creating the directory if needed
    pub fn store_in(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            if let Err(err) = fs::create_dir_all(dir) {
                log::error!("Can't create configuration directory {:?}", dir);
                return Err(err.into());
            }
        }
        self.store_to(&dir.join(Self::FILE_NAME))
    }

    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "crossword", "crossword_engine").map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }
}
