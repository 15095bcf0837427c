use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::engineer_dto::{EngineerResponse, UserSummary};
use crate::dto::proposal_dto::{ExpandedProposal, SubmitProposalPayload, UpdateProposalPayload};
use crate::error::{Error, Result};
use crate::models::engineer::Education;
use crate::models::proposal::Proposal;
use crate::models::user::Role;

const PROPOSAL_COLUMNS: &str =
    "id, engineer_id, service_id, content, budget, accepted, created_at";

#[derive(Debug, FromRow)]
struct ExpandedProposalRow {
    id: Uuid,
    service_id: Uuid,
    content: String,
    budget: Decimal,
    accepted: bool,
    created_at: DateTime<Utc>,
    engineer_id: Uuid,
    engineer_title: Option<String>,
    engineer_overview: Option<String>,
    engineer_skills: Vec<String>,
    engineer_education: Option<Json<Education>>,
    engineer_created_at: DateTime<Utc>,
    engineer_updated_at: DateTime<Utc>,
    user_id: Uuid,
    user_full_name: String,
    user_email: String,
    user_role: Role,
    user_profile_pic: Option<String>,
    user_created_at: DateTime<Utc>,
}

impl ExpandedProposalRow {
    fn into_response(self) -> ExpandedProposal {
        ExpandedProposal {
            id: self.id,
            service_id: self.service_id,
            content: self.content,
            budget: self.budget,
            accepted: self.accepted,
            created_at: self.created_at,
            engineer: EngineerResponse {
                id: self.engineer_id,
                user: UserSummary {
                    id: self.user_id,
                    full_name: self.user_full_name,
                    email: self.user_email,
                    role: self.user_role,
                    profile_pic: self.user_profile_pic,
                    created_at: self.user_created_at,
                },
                title: self.engineer_title,
                overview: self.engineer_overview,
                skills: self.engineer_skills,
                education: self.engineer_education.map(|json| json.0),
                created_at: self.engineer_created_at,
                updated_at: self.engineer_updated_at,
            },
        }
    }
}

#[derive(Clone)]
pub struct ProposalService {
    pool: PgPool,
}

impl ProposalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submission is check-then-insert: the duplicate scan and the insert are
    /// separate statements, so the one-proposal-per-service invariant is
    /// best-effort under concurrent submits.
    pub async fn submit(&self, payload: SubmitProposalPayload) -> Result<Proposal> {
        let (Some(content), Some(budget), Some(service_id), Some(engineer_id)) = (
            payload.content,
            payload.budget,
            payload.service,
            payload.engineer_id,
        ) else {
            return Err(Error::BadRequest("Complete all required fields".to_string()));
        };

        let engineer = sqlx::query_scalar::<_, Uuid>("SELECT id FROM engineers WHERE id = $1")
            .bind(engineer_id)
            .fetch_optional(&self.pool)
            .await?;
        if engineer.is_none() {
            return Err(Error::NotFound("Engineer not found.".to_string()));
        }

        let service = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM services WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await?;
        if service.is_none() {
            return Err(Error::NotFound("Service not found.".to_string()));
        }

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM proposals WHERE engineer_id = $1 AND service_id = $2",
        )
        .bind(engineer_id)
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await?;
        if existing.is_some() {
            return Err(Error::Conflict(
                "You have already submitted a proposal for this service.".to_string(),
            ));
        }

        let proposal = sqlx::query_as::<_, Proposal>(&format!(
            "INSERT INTO proposals (engineer_id, service_id, content, budget)
             VALUES ($1, $2, $3, $4)
             RETURNING {PROPOSAL_COLUMNS}"
        ))
        .bind(engineer_id)
        .bind(service_id)
        .bind(content)
        .bind(budget)
        .fetch_one(&self.pool)
        .await?;

        Ok(proposal)
    }

    /// Update scoped to the authenticated user's own engineer record. A
    /// proposal owned by someone else never matches, so the caller sees a
    /// 404 rather than a 403.
    pub async fn update(
        &self,
        user_id: Uuid,
        proposal_id: Uuid,
        payload: UpdateProposalPayload,
    ) -> Result<Proposal> {
        let engineer_id =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM engineers WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| Error::NotFound("Proposal not found".to_string()))?;

        sqlx::query_as::<_, Proposal>(&format!(
            "UPDATE proposals
             SET content = COALESCE($3, content),
                 budget = COALESCE($4, budget),
                 service_id = COALESCE($5, service_id)
             WHERE id = $1 AND engineer_id = $2
             RETURNING {PROPOSAL_COLUMNS}"
        ))
        .bind(proposal_id)
        .bind(engineer_id)
        .bind(payload.content)
        .bind(payload.budget)
        .bind(payload.service)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Proposal not found".to_string()))
    }

    /// Accept is unconditional: no open-service check and no guard against
    /// other accepted proposals on the same service. Repeating it leaves the
    /// flag true.
    pub async fn accept(&self, proposal_id: Uuid) -> Result<Proposal> {
        sqlx::query_as::<_, Proposal>(&format!(
            "UPDATE proposals SET accepted = TRUE WHERE id = $1
             RETURNING {PROPOSAL_COLUMNS}"
        ))
        .bind(proposal_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Proposal not found".to_string()))
    }

    /// An empty result is reported as not-found, matching the consumer's
    /// expectation that an engineer with no proposals is a 404.
    pub async fn list_by_engineer(&self, engineer_id: Uuid) -> Result<Vec<Proposal>> {
        let proposals = sqlx::query_as::<_, Proposal>(&format!(
            "SELECT {PROPOSAL_COLUMNS} FROM proposals
             WHERE engineer_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(engineer_id)
        .fetch_all(&self.pool)
        .await?;

        if proposals.is_empty() {
            return Err(Error::NotFound("No proposals found".to_string()));
        }
        Ok(proposals)
    }

    pub async fn list_for_service(&self, service_id: Uuid) -> Result<Vec<ExpandedProposal>> {
        let service = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM services WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await?;
        if service.is_none() {
            return Err(Error::NotFound("Service not found".to_string()));
        }

        let rows = sqlx::query_as::<_, ExpandedProposalRow>(
            "SELECT p.id, p.service_id, p.content, p.budget, p.accepted, p.created_at,
                    e.id AS engineer_id, e.title AS engineer_title,
                    e.overview AS engineer_overview, e.skills AS engineer_skills,
                    e.education AS engineer_education,
                    e.created_at AS engineer_created_at, e.updated_at AS engineer_updated_at,
                    u.id AS user_id, u.full_name AS user_full_name, u.email AS user_email,
                    u.role AS user_role, u.profile_pic AS user_profile_pic,
                    u.created_at AS user_created_at
             FROM proposals p
             JOIN engineers e ON e.id = p.engineer_id
             JOIN users u ON u.id = e.user_id
             WHERE p.service_id = $1
             ORDER BY p.created_at DESC",
        )
        .bind(service_id)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(Error::NotFound(
                "No proposals found for this service".to_string(),
            ));
        }
        Ok(rows.into_iter().map(ExpandedProposalRow::into_response).collect())
    }
}
