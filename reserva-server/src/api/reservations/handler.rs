//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationUpdate};
use crate::db::repository::{Repository, ReservationRepository};
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one UTC calendar date (YYYY-MM-DD)
    pub date: Option<String>,
}

/// GET /api/reservations[?date=YYYY-MM-DD] - list reservations
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservations = match query.date.as_deref() {
        Some(raw) => repo.find_by_date(parse_date(raw)?).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - fetch one reservation
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - create a reservation (overlap-checked)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.create(payload).await?;
    Ok(Json(reservation))
}

/// PUT /api/reservations/:id - replace a reservation (overlap-checked)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.update(&id, payload).await?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/:id - delete a reservation
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ReservationRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
