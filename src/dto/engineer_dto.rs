use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::certificate::Certificate;
use crate::models::engineer::{Education, Engineer};
use crate::models::portfolio::Portfolio;
use crate::models::service::Service;
use crate::models::user::{Role, User};

/// The owner fields the profile pages render next to an engineer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerResponse {
    pub id: Uuid,
    pub user: UserSummary,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerListResponse {
    pub status: String,
    pub results: usize,
    pub data: EngineerListData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerListData {
    pub engineers: Vec<EngineerResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerProfileResponse {
    pub status: String,
    pub data: EngineerProfileData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerProfileData {
    pub engineer: EngineerResponse,
    pub portfolios: Vec<Portfolio>,
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AddEducationPayload {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AddSkillPayload {
    pub skills_to_add: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AddOverviewPayload {
    pub profile_overview: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AddTitlePayload {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SaveJobPayload {
    pub engineer_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJobsMutation {
    pub message: String,
    pub saved_jobs: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJobsResponse {
    pub status: String,
    pub data: SavedJobsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedJobsData {
    pub saved_jobs: Vec<Service>,
}

impl From<User> for UserSummary {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
            email: value.email,
            role: value.role,
            profile_pic: value.profile_pic,
            created_at: value.created_at,
        }
    }
}

impl EngineerResponse {
    pub fn new(engineer: Engineer, user: UserSummary) -> Self {
        Self {
            id: engineer.id,
            user,
            title: engineer.title,
            overview: engineer.overview,
            skills: engineer.skills,
            education: engineer.education.map(|json| json.0),
            created_at: engineer.created_at,
            updated_at: engineer.updated_at,
        }
    }
}
