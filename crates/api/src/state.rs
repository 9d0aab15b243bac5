use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use oro_core::data_mode::{DataMode, DataModeState};
use oro_core::history::HistoryLog;
use oro_core::types::EntityId;
use oro_db::store::{DatabaseStore, DesignStore, MemoryStore};

use crate::config::ServerConfig;

/// In-memory canvas editing sessions, keyed by design system id.
///
/// Session-lifetime only: a restart drops all histories.
pub type BuilderSessions = RwLock<HashMap<EntityId, HistoryLog>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed store; `None` when no database is configured.
    pub database: Option<Arc<DatabaseStore>>,
    /// In-memory fixture store, always present.
    pub mock: Arc<MemoryStore>,
    /// Active data mode plus the startup availability flag.
    pub data_mode: Arc<DataModeState>,
    /// Canvas undo/redo sessions for the component builder.
    pub builder_sessions: Arc<BuilderSessions>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from startup components. Database availability (and
    /// the initial mode) follows from whether a connected store is passed.
    pub fn new(
        database: Option<DatabaseStore>,
        mock: MemoryStore,
        config: ServerConfig,
    ) -> Self {
        let database = database.map(Arc::new);
        let data_mode = Arc::new(DataModeState::new(database.is_some()));
        Self {
            database,
            mock: Arc::new(mock),
            data_mode,
            builder_sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// Resolve the active store for the current data mode.
    ///
    /// `DataModeState` guarantees database mode is only selectable when the
    /// backend is available, so the fallback arm also covers the impossible
    /// database-selected-but-absent combination.
    pub fn store(&self) -> Arc<dyn DesignStore> {
        match (self.data_mode.current(), &self.database) {
            (DataMode::Database, Some(database)) => Arc::clone(database) as Arc<dyn DesignStore>,
            _ => Arc::clone(&self.mock) as Arc<dyn DesignStore>,
        }
    }
}
