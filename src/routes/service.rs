use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::service_dto::{
        CreateServicePayload, ServiceListResponse, ServiceResponse, UpdateServicePayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "All posted services")
    )
)]
#[axum::debug_handler]
pub async fn list_services(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let services = state.service_service.list().await?;
    Ok(Json(ServiceListResponse::from(services)))
}

#[utoipa::path(
    post,
    path = "/services",
    request_body = CreateServicePayload,
    responses(
        (status = 200, description = "Service created"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let service = state.service_service.create(payload).await?;
    Ok(Json(ServiceResponse::from(service)))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service found"),
        (status = 404, description = "Service not found")
    )
)]
#[axum::debug_handler]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let service = state.service_service.get_by_id(id).await?;
    Ok(Json(ServiceResponse::from(service)))
}

#[utoipa::path(
    patch,
    path = "/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = UpdateServicePayload,
    responses(
        (status = 200, description = "Service updated"),
        (status = 404, description = "Service not found")
    )
)]
#[axum::debug_handler]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let service = state.service_service.update(id, payload).await?;
    Ok(Json(ServiceResponse::from(service)))
}

#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.service_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
