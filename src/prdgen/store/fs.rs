use super::StateStore;
use crate::error::{PrdError, Result};
use crate::state::PrdState;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole Document State as one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PrdError::Io)?;
            }
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<PrdState> {
        if !self.path.exists() {
            return Ok(PrdState::default());
        }
        let content = fs::read_to_string(&self.path).map_err(PrdError::Io)?;
        // Malformed payloads degrade to defaults instead of failing the run
        let state: PrdState = match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(_) => PrdState::default(),
        };
        Ok(state.hydrate())
    }

    fn save(&mut self, state: &PrdState) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(state).map_err(PrdError::Serialization)?;
        fs::write(&self.path, content).map_err(PrdError::Io)?;
        Ok(())
    }
}
