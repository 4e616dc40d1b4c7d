//! Client Repository

use super::{BaseRepository, CLIENT_TABLE, RepoError, RepoResult, Repository};
use crate::db::models::{Client, ClientCreate, ClientUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = CLIENT_TABLE;

#[derive(Clone)]
pub struct ClientRepository {
    base: BaseRepository,
}

impl ClientRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<Client, ClientCreate, ClientUpdate> for ClientRepository {
    /// Find all clients ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Client>> {
        let clients: Vec<Client> = self
            .base
            .db()
            .query("SELECT * FROM usuarios ORDER BY name")
            .await?
            .take(0)?;
        Ok(clients)
    }

    /// Find client by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Client>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let client: Option<Client> = self.base.db().select(thing).await?;
        Ok(client)
    }

    /// Create a new client
    async fn create(&self, data: ClientCreate) -> RepoResult<Client> {
        data.validate()?;

        let client = Client {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
        };

        let created: Option<Client> = self.base.db().create(TABLE).content(client).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create client".to_string()))
    }

    /// Replace every field of an existing client
    async fn update(&self, id: &str, data: ClientUpdate) -> RepoResult<Client> {
        data.validate()?;
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Client {} not found", id)))?;

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, email = $email, phone = $phone, \
                 address = $address",
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("email", data.email))
            .bind(("phone", data.phone))
            .bind(("address", data.address))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Client {} not found", id)))
    }

    /// Delete a client
    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<Client> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Client {} not found", id)));
        }
        Ok(true)
    }

    /// Count all clients
    async fn count(&self) -> RepoResult<i64> {
        self.base.count_table(TABLE).await
    }
}
