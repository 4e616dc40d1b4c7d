//! Dining Table Repository

use super::{BaseRepository, DINING_TABLE_TABLE, RepoError, RepoResult, Repository};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = DINING_TABLE_TABLE;

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<DiningTable, DiningTableCreate, DiningTableUpdate> for DiningTableRepository {
    /// Find all tables ordered by number
    async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM mesas ORDER BY table_number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let table: Option<DiningTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Create a new dining table. The table number must not already be in use.
    async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        data.validate()?;

        let existing = self.find_all().await?;
        validation::validate_table_number(data.table_number, &existing)?;

        let table = DiningTable {
            id: None,
            table_number: data.table_number,
            capacity: data.capacity,
            location: data.location,
        };

        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    /// Replace every field of an existing table. Number uniqueness is a
    /// create-time rule and is not re-checked here.
    async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        data.validate()?;
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        self.base
            .db()
            .query(
                "UPDATE $thing SET table_number = $table_number, capacity = $capacity, \
                 location = $location",
            )
            .bind(("thing", thing))
            .bind(("table_number", data.table_number))
            .bind(("capacity", data.capacity))
            .bind(("location", data.location))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    /// Delete a dining table
    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<DiningTable> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!(
                "Dining table {} not found",
                id
            )));
        }
        Ok(true)
    }

    /// Count all tables
    async fn count(&self) -> RepoResult<i64> {
        self.base.count_table(TABLE).await
    }
}
