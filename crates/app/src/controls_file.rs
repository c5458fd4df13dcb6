//! Persisted sidebar values from the last session.

use cavegen::GenerationConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;
use crate::controls::clamp_config;

pub const CONTROLS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ControlsFile {
    pub format_version: u32,
    pub config: GenerationConfig,
}

impl ControlsFile {
    pub fn new(config: GenerationConfig) -> Self {
        Self { format_version: CONTROLS_FORMAT_VERSION, config }
    }

    /// Saved values, pulled into the ranges the sidebar allows.
    pub fn into_config(self) -> GenerationConfig {
        clamp_config(self.config)
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("controls.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if state.format_version != CONTROLS_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported controls format version {}", state.format_version),
            ));
        }
        Ok(state)
    }
}
