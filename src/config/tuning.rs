use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::movement_state::MovementSpeedTable;

#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to access tuning file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize tuning: {0}")]
    Serialize(#[from] ron::Error),
}

/// All tunable game parameters, loaded from tuning.ron.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Max walk speed per movement state (world units per second).
    pub speeds: MovementSpeedTable,
    /// Character body radius in world units.
    pub character_radius: f32,
    /// Length of the facing marker drawn in front of the character.
    pub facing_marker_len: f32,
    pub facing_marker_thickness: f32,
    /// Orthographic zoom; 1.0 = one world unit per pixel.
    pub camera_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speeds: MovementSpeedTable::default(),
            character_radius: 42.0,
            facing_marker_len: 40.0,
            facing_marker_thickness: 8.0,
            camera_scale: 1.5,
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("tds_character")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, TuningError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn to_ron_string(&self) -> Result<String, TuningError> {
        let pretty = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<(), TuningError> {
        let io_err = |source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_ron_string()?).map_err(io_err)
    }

    /// Load from the default tuning file.
    pub fn load_or_default() -> Self {
        Self::load_or_default_at(&Self::file_path())
    }

    /// Load from `path`. A missing file is created with defaults; an unreadable
    /// or malformed one is left untouched and defaults are used.
    pub fn load_or_default_at(path: &Path) -> Self {
        if path.exists() {
            return Self::load(path).unwrap_or_else(|e| {
                warn!("{e}, using defaults");
                Self::default()
            });
        }
        let tuning = Self::default();
        if let Err(e) = tuning.save(path) {
            warn!("{e}");
        }
        tuning
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Tuning reloaded");
    }
}
