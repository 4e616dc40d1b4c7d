//! Authentication Handlers
//!
//! A single login gate over the configured credential pair. There are no
//! accounts, tokens or sessions behind it; passing the gate is the whole
//! of authentication here.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to keep failure timing uniform
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Login handler
///
/// Compares the submitted pair against the configured one. Wrong username
/// and wrong password produce the same error after the same delay.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let ok = req.username == state.config.admin_username
        && req.password == state.config.admin_password;

    if !ok {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    tracing::info!(username = %req.username, "User logged in");

    Ok(Json(LoginResponse {
        username: req.username,
    }))
}
