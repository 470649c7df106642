//! HTTP transport for the ledger.
//!
//! Thin JSON glue over [`Ledger`]: bodies are deserialized into typed request
//! structs and validated before the core is called. Credit and spend go
//! through the write lock so the total check, log walk, and balance updates
//! of one spend form a single critical section; balance reads share the read
//! lock.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::ledger::{CreditError, Ledger, SpendError};
use crate::model::{Deduction, Payer, Points};

/// Ledger shared across request handlers.
pub type SharedLedger = Arc<RwLock<Ledger>>;

pub fn router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/add", post(add_points))
        .route("/spend", post(spend_points))
        .route("/balance", get(get_balance))
        .with_state(ledger)
}

#[derive(Debug, Deserialize)]
struct CreditRequest {
    payer: Payer,
    points: Points,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct SpendRequest {
    points: Points,
}

#[derive(Debug)]
enum ApiError {
    Validation(String),
    InsufficientPoints,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Validation(message) => message,
            ApiError::InsufficientPoints => "User does not have enough points.".to_string(),
        };
        (StatusCode::BAD_REQUEST, message).into_response()
    }
}

impl From<CreditError> for ApiError {
    fn from(err: CreditError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<SpendError> for ApiError {
    fn from(err: SpendError) -> Self {
        match err {
            SpendError::NegativePoints(_) => ApiError::Validation(err.to_string()),
            SpendError::InsufficientPoints { .. } => ApiError::InsufficientPoints,
        }
    }
}

async fn add_points(
    State(ledger): State<SharedLedger>,
    Json(request): Json<CreditRequest>,
) -> Result<StatusCode, ApiError> {
    let timestamp = parse_timestamp(&request.timestamp)?;
    ledger
        .write()
        .await
        .credit(request.payer, request.points, timestamp)?;
    Ok(StatusCode::OK)
}

async fn spend_points(
    State(ledger): State<SharedLedger>,
    Json(request): Json<SpendRequest>,
) -> Result<Json<Vec<Deduction>>, ApiError> {
    let deductions = ledger.write().await.spend(request.points)?;
    Ok(Json(deductions))
}

async fn get_balance(State(ledger): State<SharedLedger>) -> Json<HashMap<Payer, Points>> {
    Json(ledger.read().await.balances().clone())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| ApiError::Validation(format!("invalid timestamp '{raw}': {e}")))
}
