//! Data mode selection: live database vs in-memory mock fixtures.
//!
//! The mode is process-wide and session-lifetime. Availability of the
//! database backend is probed once at startup; when it is unavailable the
//! mode is pinned to mock and requests to switch are rejected rather than
//! crashing.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which backend serves persistence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    Database,
    Mock,
}

impl DataMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Mock => "mock",
        }
    }
}

impl std::fmt::Display for DataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide data mode flag plus the startup-derived availability flag.
#[derive(Debug)]
pub struct DataModeState {
    mode: RwLock<DataMode>,
    database_available: bool,
}

impl DataModeState {
    /// Create the state from the startup probe. Starts in database mode
    /// when the backend is available, mock mode otherwise.
    pub fn new(database_available: bool) -> Self {
        let mode = if database_available {
            DataMode::Database
        } else {
            DataMode::Mock
        };
        Self {
            mode: RwLock::new(mode),
            database_available,
        }
    }

    /// Whether the database backend was configured and reachable at startup.
    pub fn database_available(&self) -> bool {
        self.database_available
    }

    /// The currently selected mode.
    pub fn current(&self) -> DataMode {
        *self.mode.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Switch the active mode.
    ///
    /// Requesting `database` while the backend is unavailable fails with
    /// [`CoreError::ModeUnavailable`] and leaves the mode unchanged.
    pub fn set(&self, mode: DataMode) -> Result<(), CoreError> {
        if mode == DataMode::Database && !self.database_available {
            return Err(CoreError::ModeUnavailable(
                "Cannot switch to database mode: no database is configured".to_string(),
            ));
        }
        *self.mode.write().unwrap_or_else(|e| e.into_inner()) = mode;
        Ok(())
    }
}
