use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::config::MediaConfig;
use crate::dto::engineer_dto::{EngineerResponse, UserSummary};
use crate::error::{Error, Result};
use crate::models::certificate::Certificate;
use crate::models::engineer::{Education, Engineer};
use crate::models::portfolio::Portfolio;
use crate::models::service::Service;
use crate::models::user::Role;
use crate::utils::media::absolute_avatar_url;

const ENGINEER_COLUMNS: &str =
    "id, user_id, title, overview, skills, education, created_at, updated_at";

const ENGINEER_USER_COLUMNS: &str = "e.id, e.user_id, e.title, e.overview, e.skills, e.education, \
     e.created_at, e.updated_at, \
     u.full_name AS user_full_name, u.email AS user_email, u.role AS user_role, \
     u.profile_pic AS user_profile_pic, u.created_at AS user_created_at";

#[derive(Debug, FromRow)]
struct EngineerUserRow {
    id: Uuid,
    user_id: Uuid,
    title: Option<String>,
    overview: Option<String>,
    skills: Vec<String>,
    education: Option<Json<Education>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_full_name: String,
    user_email: String,
    user_role: Role,
    user_profile_pic: Option<String>,
    user_created_at: DateTime<Utc>,
}

impl EngineerUserRow {
    fn into_response(self) -> EngineerResponse {
        EngineerResponse {
            id: self.id,
            user: UserSummary {
                id: self.user_id,
                full_name: self.user_full_name,
                email: self.user_email,
                role: self.user_role,
                profile_pic: self.user_profile_pic,
                created_at: self.user_created_at,
            },
            title: self.title,
            overview: self.overview,
            skills: self.skills,
            education: self.education.map(|json| json.0),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct EngineerService {
    pool: PgPool,
    media: MediaConfig,
}

pub struct EngineerProfile {
    pub engineer: EngineerResponse,
    pub portfolios: Vec<Portfolio>,
    pub certificates: Vec<Certificate>,
}

impl EngineerService {
    pub fn new(pool: PgPool, media: MediaConfig) -> Self {
        Self { pool, media }
    }

    /// Engineers whose owning user still has the engineer role. The inner
    /// join drops records whose user's role changed after the engineer row
    /// was created.
    pub async fn list(&self) -> Result<Vec<EngineerResponse>> {
        let rows = sqlx::query_as::<_, EngineerUserRow>(&format!(
            "SELECT {ENGINEER_USER_COLUMNS}
             FROM engineers e
             JOIN users u ON u.id = e.user_id AND u.role = 'engineer'
             ORDER BY e.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EngineerUserRow::into_response).collect())
    }

    pub async fn profile_by_user(&self, user_id: Uuid) -> Result<EngineerProfile> {
        let row = sqlx::query_as::<_, EngineerUserRow>(&format!(
            "SELECT {ENGINEER_USER_COLUMNS}
             FROM engineers e
             JOIN users u ON u.id = e.user_id
             WHERE e.user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Engineer not found with this user ID".to_string()))?;

        let mut engineer = row.into_response();
        if let Some(pic) = engineer.user.profile_pic.take() {
            engineer.user.profile_pic = Some(absolute_avatar_url(&pic, &self.media));
        }

        let (portfolios, certificates) = self.attachments(user_id).await?;
        Ok(EngineerProfile {
            engineer,
            portfolios,
            certificates,
        })
    }

    pub async fn profile_by_engineer(&self, engineer_id: Uuid) -> Result<EngineerProfile> {
        let row = sqlx::query_as::<_, EngineerUserRow>(&format!(
            "SELECT {ENGINEER_USER_COLUMNS}
             FROM engineers e
             JOIN users u ON u.id = e.user_id
             WHERE e.id = $1"
        ))
        .bind(engineer_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Engineer not found with this ID".to_string()))?;

        let engineer = row.into_response();
        let (portfolios, certificates) = self.attachments(engineer.user.id).await?;
        Ok(EngineerProfile {
            engineer,
            portfolios,
            certificates,
        })
    }

    async fn attachments(&self, user_id: Uuid) -> Result<(Vec<Portfolio>, Vec<Certificate>)> {
        let portfolios = sqlx::query_as::<_, Portfolio>(
            "SELECT id, user_id, title, description, link, created_at
             FROM portfolios WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let certificates = sqlx::query_as::<_, Certificate>(
            "SELECT id, user_id, title, authority, file_url, created_at
             FROM certificates WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok((portfolios, certificates))
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Engineer> {
        sqlx::query_as::<_, Engineer>(&format!(
            "SELECT {ENGINEER_COLUMNS} FROM engineers WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Engineer not found".to_string()))
    }

    pub async fn education(&self, user_id: Uuid) -> Result<Option<Education>> {
        let engineer = self.get_by_user(user_id).await?;
        Ok(engineer.education.map(|json| json.0))
    }

    /// Overwrites the whole education record; there is no history.
    pub async fn set_education(&self, user_id: Uuid, education: Education) -> Result<Engineer> {
        sqlx::query_as::<_, Engineer>(&format!(
            "UPDATE engineers SET education = $2, updated_at = NOW()
             WHERE user_id = $1
             RETURNING {ENGINEER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(Json(education))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Engineer not found".to_string()))
    }

    pub async fn add_skills(&self, user_id: Uuid, skills_to_add: Vec<String>) -> Result<Vec<String>> {
        let engineer = self.get_by_user(user_id).await?;
        let merged = merge_skills(engineer.skills, skills_to_add);

        let updated = sqlx::query_as::<_, Engineer>(&format!(
            "UPDATE engineers SET skills = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {ENGINEER_COLUMNS}"
        ))
        .bind(engineer.id)
        .bind(&merged)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated.skills)
    }

    pub async fn set_overview(&self, user_id: Uuid, overview: String) -> Result<()> {
        let res = sqlx::query("UPDATE engineers SET overview = $2, updated_at = NOW() WHERE user_id = $1")
            .bind(user_id)
            .bind(overview)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Engineer not found".to_string()));
        }
        Ok(())
    }

    pub async fn set_title(&self, user_id: Uuid, title: String) -> Result<()> {
        let res = sqlx::query("UPDATE engineers SET title = $2, updated_at = NOW() WHERE user_id = $1")
            .bind(user_id)
            .bind(title)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Engineer not found".to_string()));
        }
        Ok(())
    }

    pub async fn save_job(&self, engineer_id: Uuid, service_id: Uuid) -> Result<Vec<Uuid>> {
        self.require_engineer(engineer_id).await?;

        let already_saved = sqlx::query_scalar::<_, Uuid>(
            "SELECT service_id FROM saved_jobs WHERE engineer_id = $1 AND service_id = $2",
        )
        .bind(engineer_id)
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await?;
        if already_saved.is_some() {
            return Err(Error::Conflict("Job already saved.".to_string()));
        }

        sqlx::query("INSERT INTO saved_jobs (engineer_id, service_id) VALUES ($1, $2)")
            .bind(engineer_id)
            .bind(service_id)
            .execute(&self.pool)
            .await?;

        self.saved_job_ids(engineer_id).await
    }

    /// Removing a bookmark that was never saved is a no-op, not an error.
    pub async fn remove_saved_job(&self, engineer_id: Uuid, service_id: Uuid) -> Result<Vec<Uuid>> {
        self.require_engineer(engineer_id).await?;

        sqlx::query("DELETE FROM saved_jobs WHERE engineer_id = $1 AND service_id = $2")
            .bind(engineer_id)
            .bind(service_id)
            .execute(&self.pool)
            .await?;

        self.saved_job_ids(engineer_id).await
    }

    pub async fn saved_services(&self, user_id: Uuid) -> Result<Vec<Service>> {
        let engineer = self.get_by_user(user_id).await?;
        let services = sqlx::query_as::<_, Service>(
            "SELECT s.id, s.title, s.description, s.budget, s.skills, s.level, s.status,
                    s.deleted_at, s.created_at, s.updated_at
             FROM saved_jobs sj
             JOIN services s ON s.id = sj.service_id
             WHERE sj.engineer_id = $1 AND s.deleted_at IS NULL
             ORDER BY sj.created_at DESC",
        )
        .bind(engineer.id)
        .fetch_all(&self.pool)
        .await?;
        Ok(services)
    }

    async fn saved_job_ids(&self, engineer_id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT service_id FROM saved_jobs WHERE engineer_id = $1 ORDER BY created_at",
        )
        .bind(engineer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn require_engineer(&self, engineer_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM engineers WHERE id = $1")
            .bind(engineer_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(Error::NotFound("Engineer not found.".to_string()));
        }
        Ok(())
    }
}

/// Set union keeping first-seen order: existing skills first, new ones
/// appended, duplicates dropped.
fn merge_skills(existing: Vec<String>, incoming: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    for skill in existing.into_iter().chain(incoming) {
        if !merged.contains(&skill) {
            merged.push(skill);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::merge_skills;

    #[test]
    fn merge_appends_new_skills() {
        let merged = merge_skills(
            vec!["Rust".into(), "SQL".into()],
            vec!["Docker".into()],
        );
        assert_eq!(merged, vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn merge_is_idempotent() {
        let existing = vec!["Rust".to_string(), "SQL".to_string()];
        let merged = merge_skills(existing.clone(), existing.clone());
        assert_eq!(merged, existing);
    }

    #[test]
    fn merge_drops_duplicates_within_incoming() {
        let merged = merge_skills(vec![], vec!["Go".into(), "Go".into(), "C".into()]);
        assert_eq!(merged, vec!["Go", "C"]);
    }

    #[test]
    fn merge_of_empty_sets_is_empty() {
        assert!(merge_skills(vec![], vec![]).is_empty());
    }
}
