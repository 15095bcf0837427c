use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;

use crate::{
    dto::proposal_dto::{
        EngineerProposalsResponse, ProposalAccepted, ProposalCreated, ServiceProposalsData,
        ServiceProposalsResponse, SubmitProposalPayload, UpdateProposalPayload,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/proposals",
    request_body = SubmitProposalPayload,
    responses(
        (status = 201, description = "Proposal submitted"),
        (status = 400, description = "Missing fields or duplicate proposal"),
        (status = 404, description = "Engineer or service not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_proposal(
    State(state): State<AppState>,
    Json(payload): Json<SubmitProposalPayload>,
) -> Result<impl IntoResponse> {
    let proposal = state.proposal_service.submit(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProposalCreated {
            message: "Proposal added successfully".to_string(),
            proposal,
        }),
    ))
}

#[axum::debug_handler]
pub async fn update_proposal(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProposalPayload>,
) -> Result<impl IntoResponse> {
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| Error::Unauthorized("invalid_token".to_string()))?;
    let proposal = state.proposal_service.update(user_id, id, payload).await?;
    Ok(Json(serde_json::json!({
        "message": "Proposal updated successfully",
        "proposal": proposal,
    })))
}

#[utoipa::path(
    patch,
    path = "/proposals/{proposal_id}/accept",
    params(
        ("proposal_id" = Uuid, Path, description = "Proposal ID")
    ),
    responses(
        (status = 200, description = "Proposal accepted"),
        (status = 404, description = "Proposal not found")
    )
)]
#[axum::debug_handler]
pub async fn accept_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let proposal = state.proposal_service.accept(proposal_id).await?;
    Ok(Json(ProposalAccepted {
        status: "success".to_string(),
        message: "Proposal accepted successfully".to_string(),
        data: proposal,
    }))
}

#[axum::debug_handler]
pub async fn get_proposals_by_engineer(
    State(state): State<AppState>,
    Path(engineer_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let proposals = state.proposal_service.list_by_engineer(engineer_id).await?;
    Ok(Json(EngineerProposalsResponse { proposals }))
}

#[utoipa::path(
    get,
    path = "/proposals/service/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Proposals with engineer and user expanded"),
        (status = 404, description = "Service missing or has no proposals")
    )
)]
#[axum::debug_handler]
pub async fn get_proposals_by_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let proposals = state.proposal_service.list_for_service(id).await?;
    Ok(Json(ServiceProposalsResponse {
        status: "success".to_string(),
        data: ServiceProposalsData { proposals },
    }))
}
