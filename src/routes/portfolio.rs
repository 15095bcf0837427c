use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::portfolio_dto::{CreateCertificatePayload, CreatePortfolioPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn add_certificate(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<CreateCertificatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let certificate = state.portfolio_service.add_certificate(user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Certificate added successfully",
            "certificate": certificate,
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_certificates(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let certificates = state.portfolio_service.list_certificates(user_id).await?;
    Ok(Json(json!({
        "status": "success",
        "data": { "certificates": certificates },
    })))
}

#[axum::debug_handler]
pub async fn delete_certificate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.portfolio_service.delete_certificate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn add_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<CreatePortfolioPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let portfolio = state.portfolio_service.add_portfolio(user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Portfolio added successfully",
            "portfolio": portfolio,
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_portfolios(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let portfolios = state.portfolio_service.list_portfolios(user_id).await?;
    Ok(Json(json!({
        "status": "success",
        "data": { "portfolios": portfolios },
    })))
}

#[axum::debug_handler]
pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.portfolio_service.delete_portfolio(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
