//! Saving and restoring the input fields.

use super::{HelperInputs, StateError, StateResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// JSON file holding the operator's inputs
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved inputs; `Ok(None)` if nothing has been saved yet
    pub fn load(&self) -> StateResult<Option<HelperInputs>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let inputs = HelperInputs::from_json(&json)?;
        tracing::info!("Loaded inputs from {}", self.path.display());
        Ok(Some(inputs))
    }

    /// Read the saved inputs, falling back to the example when there are
    /// none or they cannot be used
    pub fn load_or_default(&self) -> HelperInputs {
        match self.load() {
            Ok(Some(inputs)) => inputs,
            Ok(None) => HelperInputs::example(),
            Err(e) => {
                tracing::warn!(
                    "Could not use {}: {}. Starting from the example.",
                    self.path.display(),
                    e
                );
                HelperInputs::example()
            }
        }
    }

    /// Atomically replace the saved inputs
    pub fn save(&self, inputs: &HelperInputs) -> StateResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let json = inputs.stamped().to_json()?;
        let mut file = NamedTempFile::new_in(parent)?;
        file.write_all(json.as_bytes())?;
        file.persist(&self.path).map_err(|e| StateError::Io(e.error))?;

        tracing::info!("Saved inputs to {}", self.path.display());
        Ok(())
    }

    /// Save empty fields (keeping the tag line) and return them
    pub fn clear(&self) -> StateResult<HelperInputs> {
        let cleared = HelperInputs::cleared();
        self.save(&cleared)?;
        tracing::info!("Cleared inputs");
        Ok(cleared)
    }

    /// Forget the saved inputs so the example applies again
    pub fn reset(&self) -> StateResult<HelperInputs> {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::info!("Removed {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(HelperInputs::example())
    }
}
