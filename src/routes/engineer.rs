use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dto::engineer_dto::{
        AddEducationPayload, AddOverviewPayload, AddSkillPayload, AddTitlePayload,
        EngineerListData, EngineerListResponse, EngineerProfileData, EngineerProfileResponse,
        SaveJobPayload, SavedJobsData, SavedJobsMutation, SavedJobsResponse,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    models::engineer::Education,
    AppState,
};

fn claims_user_id(claims: &Claims) -> Result<Uuid> {
    Uuid::parse_str(&claims.sub)
        .map_err(|_| Error::Unauthorized("invalid_token".to_string()))
}

#[utoipa::path(
    get,
    path = "/engineers/all",
    responses(
        (status = 200, description = "All engineers whose owning user has the engineer role")
    )
)]
#[axum::debug_handler]
pub async fn list_engineers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let engineers = state.engineer_service.list().await?;
    Ok(Json(EngineerListResponse {
        status: "success".to_string(),
        results: engineers.len(),
        data: EngineerListData { engineers },
    }))
}

#[utoipa::path(
    get,
    path = "/engineers/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Engineer profile with portfolios and certificates"),
        (status = 404, description = "No engineer for this user")
    )
)]
#[axum::debug_handler]
pub async fn get_engineer_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let profile = state.engineer_service.profile_by_user(user_id).await?;
    Ok(Json(EngineerProfileResponse {
        status: "success".to_string(),
        data: EngineerProfileData {
            engineer: profile.engineer,
            portfolios: profile.portfolios,
            certificates: profile.certificates,
        },
    }))
}

#[utoipa::path(
    get,
    path = "/engineers/engineerId/{engineer_id}",
    params(
        ("engineer_id" = Uuid, Path, description = "Engineer ID")
    ),
    responses(
        (status = 200, description = "Engineer profile keyed by its own ID"),
        (status = 404, description = "Engineer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_engineer_by_engineer_id(
    State(state): State<AppState>,
    Path(engineer_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let profile = state.engineer_service.profile_by_engineer(engineer_id).await?;
    Ok(Json(EngineerProfileResponse {
        status: "success".to_string(),
        data: EngineerProfileData {
            engineer: profile.engineer,
            portfolios: profile.portfolios,
            certificates: profile.certificates,
        },
    }))
}

#[axum::debug_handler]
pub async fn get_education(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let education = state.engineer_service.education(user_id).await?;
    Ok(Json(json!({ "education": education })))
}

#[axum::debug_handler]
pub async fn add_education(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddEducationPayload>,
) -> Result<impl IntoResponse> {
    let (Some(title), Some(start_date), Some(end_date)) =
        (payload.title, payload.start_date, payload.end_date)
    else {
        return Err(Error::BadRequest(
            "Title, Start Date, and End Date are required.".to_string(),
        ));
    };

    let engineer = state
        .engineer_service
        .set_education(
            user_id,
            Education {
                title,
                start_date,
                end_date,
            },
        )
        .await?;

    Ok(Json(json!({
        "message": "Education added successfully",
        "engineer": engineer,
    })))
}

#[axum::debug_handler]
pub async fn add_skill(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddSkillPayload>,
) -> Result<impl IntoResponse> {
    let skills = state
        .engineer_service
        .add_skills(user_id, payload.skills_to_add)
        .await?;

    Ok(Json(json!({
        "message": "Skills updated successfully",
        "data": { "skills": skills },
    })))
}

#[axum::debug_handler]
pub async fn add_overview(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddOverviewPayload>,
) -> Result<impl IntoResponse> {
    let Some(overview) = payload.profile_overview else {
        return Err(Error::BadRequest("Profile Overview is required.".to_string()));
    };

    state.engineer_service.set_overview(user_id, overview).await?;
    Ok(Json(json!({ "message": "Overview added successfully" })))
}

#[axum::debug_handler]
pub async fn add_title(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddTitlePayload>,
) -> Result<impl IntoResponse> {
    let Some(title) = payload.title else {
        return Err(Error::BadRequest("Title is required.".to_string()));
    };

    state.engineer_service.set_title(user_id, title).await?;
    Ok(Json(json!({ "message": "Title added successfully" })))
}

#[utoipa::path(
    post,
    path = "/engineers/savejob",
    request_body = SaveJobPayload,
    responses(
        (status = 200, description = "Job bookmarked"),
        (status = 400, description = "Missing IDs or job already saved"),
        (status = 404, description = "Engineer not found")
    )
)]
#[axum::debug_handler]
pub async fn save_job(
    State(state): State<AppState>,
    Json(payload): Json<SaveJobPayload>,
) -> Result<impl IntoResponse> {
    let (Some(engineer_id), Some(service_id)) = (payload.engineer_id, payload.service_id) else {
        return Err(Error::BadRequest(
            "Service ID and Engineer ID are required.".to_string(),
        ));
    };

    let saved_jobs = state.engineer_service.save_job(engineer_id, service_id).await?;
    Ok(Json(SavedJobsMutation {
        message: "Job saved successfully".to_string(),
        saved_jobs,
    }))
}

#[axum::debug_handler]
pub async fn remove_job(
    State(state): State<AppState>,
    Json(payload): Json<SaveJobPayload>,
) -> Result<impl IntoResponse> {
    let (Some(engineer_id), Some(service_id)) = (payload.engineer_id, payload.service_id) else {
        return Err(Error::BadRequest(
            "Service ID and Engineer ID are required.".to_string(),
        ));
    };

    let saved_jobs = state
        .engineer_service
        .remove_saved_job(engineer_id, service_id)
        .await?;
    Ok(Json(SavedJobsMutation {
        message: "Job removed successfully".to_string(),
        saved_jobs,
    }))
}

#[axum::debug_handler]
pub async fn saved_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user_id = claims_user_id(&claims)?;
    let saved = state.engineer_service.saved_services(user_id).await?;
    Ok((
        StatusCode::OK,
        Json(SavedJobsResponse {
            status: "success".to_string(),
            data: SavedJobsData { saved_jobs: saved },
        }),
    ))
}
