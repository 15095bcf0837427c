use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::get_config,
    dto::user_dto::{
        AuthResponse, LoginPayload, SignupPayload, UpdateMePayload, UserResponse, VerifyPayload,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    utils::token::sign_token,
    AppState,
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.create_user(payload).await?;

    let config = get_config();
    let token = sign_token(&user, &config.jwt_secret, config.jwt_ttl_hours)?;
    Ok((StatusCode::CREATED, Json(AuthResponse::new(token, user))))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let config = get_config();
    let token = sign_token(&user, &config.jwt_secret, config.jwt_ttl_hours)?;
    Ok(Json(AuthResponse::new(token, user)))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(json!({
        "status": "success",
        "data": { "user": UserResponse::from(user) },
    })))
}

#[axum::debug_handler]
pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateMePayload>,
) -> Result<impl IntoResponse> {
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| Error::Unauthorized("invalid_token".to_string()))?;
    let user = state.user_service.update(user_id, payload).await?;
    Ok(Json(json!({
        "status": "success",
        "data": { "user": UserResponse::from(user) },
    })))
}

#[axum::debug_handler]
pub async fn pending_verification(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_pending_verification().await?;
    let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(json!({
        "status": "success",
        "results": users.len(),
        "data": { "users": users },
    })))
}

#[axum::debug_handler]
pub async fn verify_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VerifyPayload>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .set_verify_status(id, payload.verify_status)
        .await?;
    Ok(Json(json!({
        "status": "success",
        "data": { "user": UserResponse::from(user) },
    })))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
