//! Dashboard Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{
    ClientRepository, DiningTableRepository, Repository, ReservationRepository,
};
use crate::utils::AppResult;

/// Totals shown on the landing screen
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub clients: i64,
    pub tables: i64,
    pub reservations: i64,
}

/// GET /api/dashboard - record counts per collection
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<DashboardSummary>> {
    let clients = ClientRepository::new(state.db.clone()).count().await?;
    let tables = DiningTableRepository::new(state.db.clone()).count().await?;
    let reservations = ReservationRepository::new(state.db.clone()).count().await?;

    Ok(Json(DashboardSummary {
        clients,
        tables,
        reservations,
    }))
}
