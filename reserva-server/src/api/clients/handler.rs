//! Client API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Client, ClientCreate, ClientUpdate};
use crate::db::repository::{ClientRepository, Repository};
use crate::utils::{AppError, AppResult};

/// GET /api/clients - list all clients
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Client>>> {
    let repo = ClientRepository::new(state.db.clone());
    let clients = repo.find_all().await?;
    Ok(Json(clients))
}

/// GET /api/clients/:id - fetch one client
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let repo = ClientRepository::new(state.db.clone());
    let client = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Client {} not found", id)))?;
    Ok(Json(client))
}

/// POST /api/clients - create a client
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<Json<Client>> {
    let repo = ClientRepository::new(state.db.clone());
    let client = repo.create(payload).await?;
    Ok(Json(client))
}

/// PUT /api/clients/:id - replace a client
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ClientUpdate>,
) -> AppResult<Json<Client>> {
    let repo = ClientRepository::new(state.db.clone());
    let client = repo.update(&id, payload).await?;
    Ok(Json(client))
}

/// DELETE /api/clients/:id - delete a client
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ClientRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
