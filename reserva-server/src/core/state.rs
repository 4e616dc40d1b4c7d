use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state
///
/// Holds the configuration and the embedded database handle. Cloning is
/// cheap (the handle is reference-counted internally), so every request
/// handler gets its own copy through the axum state extractor. The state
/// is built once at startup and passed down; nothing here is a global.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state:
    ///
    /// 1. make sure the work directory layout exists
    /// 2. open the embedded database under `work_dir/database`
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// Clone of the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
