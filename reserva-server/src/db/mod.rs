//! Database Module
//!
//! Owns the embedded SurrealDB instance and its startup.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "libro";
const DATABASE: &str = "reservas";

/// Database service: owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the store under `dir` and select the working
    /// namespace and database.
    pub async fn new(dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            "Database opened at {} (ns={NAMESPACE}, db={DATABASE})",
            dir.display()
        );

        define_indexes(&db).await?;

        Ok(Self { db })
    }
}

/// Indexes backing the hot lookups. Tables stay schemaless; these only
/// speed up the number lookup and the window and date scans.
async fn define_indexes(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "DEFINE INDEX IF NOT EXISTS mesas_table_number ON mesas FIELDS table_number;
         DEFINE INDEX IF NOT EXISTS reservas_table_time ON reservas FIELDS table_id, reserved_at;
         DEFINE INDEX IF NOT EXISTS reservas_time ON reservas FIELDS reserved_at;",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;
    Ok(())
}
