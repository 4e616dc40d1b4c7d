//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

// People
pub mod client;

// Floor
pub mod dining_table;

// Bookings
pub mod reservation;

// Re-exports
pub use client::ClientRepository;
pub use dining_table::DiningTableRepository;
pub use reservation::ReservationRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::ValidationError;

// Table names predate this server and are kept verbatim so documents
// written by earlier tooling stay readable.
pub const CLIENT_TABLE: &str = "usuarios";
pub const DINING_TABLE_TABLE: &str = "mesas";
pub const RESERVATION_TABLE: &str = "reservas";

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<ValidationError> for RepoError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::DuplicateTableNumber(_) => RepoError::Duplicate(err.to_string()),
            other => RepoError::Validation(other.to_string()),
        }
    }
}

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        use crate::utils::AppError;
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) | RepoError::Conflict(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, id: &str, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, id: &str) -> RepoResult<bool>;
    async fn count(&self) -> RepoResult<i64>;
}

// All IDs cross the API as "table:key" strings and live in the code as
// surrealdb::RecordId:
//   - parse: let id: RecordId = "usuarios:abc".parse()?;
//   - build: let id = RecordId::from_table_key("usuarios", "abc");
//   - table name: id.table(), bare key: id.key().to_string()
//   - CRUD: db.select(id) / db.delete(id) take a RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Count all records in a table.
    pub async fn count_table(&self, table: &str) -> RepoResult<i64> {
        let mut result = self
            .db
            .query(format!("SELECT count() FROM {table} GROUP ALL"))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
