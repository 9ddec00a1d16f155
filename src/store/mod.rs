use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::PlannerState;

/// JSON-file persistence collaborator. Loads never fail: a missing or
/// corrupt file falls back to the seed state. Saves write the complete
/// structure verbatim, last-write-wins.
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

    pub fn load(&self) -> PlannerState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    log::warn!(
                        "Could not read state file {}: {}; starting from seed",
                        self.path.display(),
                        err
                    );
                }
                return PlannerState::seed();
            }
        };

        match serde_json::from_str(&text) {
            Ok(state) => state,
            Err(err) => {
                log::warn!(
                    "Corrupt state file {}: {}; starting from seed",
                    self.path.display(),
                    err
                );
                PlannerState::seed()
            }
        }
    }

    pub fn save(&self, state: &PlannerState) -> Result<(), AppError> {
        let text = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Render the full structure as a portable JSON document.
pub fn export_document(state: &PlannerState) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parse a previously exported document. A document without a `leaves`
/// list is rejected outright; nothing is applied in that case.
pub fn import_document(text: &str) -> Result<PlannerState, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|err| AppError::InvalidDocument(err.to_string()))?;

    if !value.get("leaves").is_some_and(|leaves| leaves.is_array()) {
        return Err(AppError::InvalidDocument("no leaves list".to_string()));
    }

    serde_json::from_value(value).map_err(|err| AppError::InvalidDocument(err.to_string()))
}
